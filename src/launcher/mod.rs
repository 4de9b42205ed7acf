//! Application launcher
//!
//! Exposes the shortcuts directory as a sorted catalog of candidates and
//! opens them through the [`Opener`] port.

mod catalog;

pub use catalog::Catalog;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::ports::Opener;
use crate::error::BillboardResult;
use crate::infrastructure::SystemOpener;

#[derive(Debug)]
pub struct Launcher<O = SystemOpener> {
    base: PathBuf,
    extension: String,
    catalog: Catalog,
    opener: O,
}

impl<O: Opener> Launcher<O> {
    /// Scan `base` once; call [`rescan`](Self::rescan) to pick up changes.
    pub fn new(base: impl Into<PathBuf>, extension: impl Into<String>, opener: O) -> Self {
        let base = base.into();
        let extension = extension.into();
        let catalog = Catalog::scan(&base, &extension);
        Self {
            base,
            extension,
            catalog,
            opener,
        }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn candidates(&self) -> &BTreeMap<String, PathBuf> {
        self.catalog.entries()
    }

    pub fn rescan(&mut self) -> usize {
        self.catalog = Catalog::scan(&self.base, &self.extension);
        tracing::info!(count = self.catalog.len(), "shortcuts rescanned");
        self.catalog.len()
    }

    /// Open the candidate under `key`. Unknown keys do nothing and return `Ok(None)`.
    pub fn open_candidate(&self, key: &str) -> BillboardResult<Option<PathBuf>> {
        let Some(target) = self.catalog.get(key) else {
            tracing::debug!(key, "no such candidate");
            return Ok(None);
        };
        self.opener.open(&target.to_string_lossy())?;
        tracing::info!(key, dest = %target.display(), "candidate opened");
        Ok(Some(target.clone()))
    }

    /// Hand a URL or path straight to the opener
    pub fn open(&self, url: &str) -> BillboardResult<()> {
        self.opener.open(url)
    }
}
