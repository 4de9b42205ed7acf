//! Billboard facade
//!
//! One object owning every controller, built from a [`Config`].

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::Config;
use crate::content::{Carousel, CarouselDocument, MarqueeMessage, PageCollection};
use crate::domain::ports::{FileSystem, Opener};
use crate::domain::value_objects::{CarouselMode, Refresh};
use crate::error::BillboardResult;
use crate::focus::FocusController;
use crate::infrastructure::{LocalFs, SystemOpener};
use crate::launcher::Launcher;

#[derive(Debug)]
pub struct Billboard<F = LocalFs, O = SystemOpener> {
    marquee: MarqueeMessage<F>,
    carousel: Carousel<F>,
    launcher: Launcher<O>,
    focus: FocusController,
}

impl Billboard {
    /// Local disk and the platform opener
    pub fn from_config(config: &Config, focus: FocusController) -> Self {
        Self::new(config, LocalFs, SystemOpener, focus)
    }
}

impl<F: FileSystem + Clone, O: Opener> Billboard<F, O> {
    pub fn new(config: &Config, fs: F, opener: O, focus: FocusController) -> Self {
        let data_dir = config.data_dir();
        let carousel = match config.carousel.mode {
            CarouselMode::Document => {
                Carousel::Document(CarouselDocument::new(fs.clone(), config.document_path()))
            }
            CarouselMode::Pages => Carousel::Pages(PageCollection::new(
                fs.clone(),
                &data_dir,
                config.carousel.extension.as_str(),
            )),
        };
        tracing::info!(
            data_dir = %data_dir.display(),
            mode = ?config.carousel.mode,
            "billboard ready"
        );

        Self {
            marquee: MarqueeMessage::new(fs, config.marquee_path()),
            carousel,
            launcher: Launcher::new(
                config.shortcuts_dir(),
                config.launcher.extension.as_str(),
                opener,
            ),
            focus,
        }
    }

    /// Current marquee text
    pub fn marquee_message(&mut self) -> BillboardResult<String> {
        self.marquee.get().map(str::to_string)
    }

    /// Rendered carousel pages, or `Unchanged` if nothing moved and not forced
    pub fn carousel_pages(&mut self, force: bool) -> BillboardResult<Refresh<Vec<String>>> {
        self.carousel.refresh(force)
    }

    pub fn candidates(&self) -> &BTreeMap<String, PathBuf> {
        self.launcher.candidates()
    }

    pub fn rescan(&mut self) -> usize {
        self.launcher.rescan()
    }

    pub fn open_candidate(&self, key: &str) -> BillboardResult<Option<PathBuf>> {
        self.launcher.open_candidate(key)
    }

    pub fn open(&self, url: &str) -> BillboardResult<()> {
        self.launcher.open(url)
    }

    /// Returns the new focus state
    pub fn toggle_focus(&self) -> bool {
        self.focus.toggle()
    }

    pub fn blur(&self) {
        self.focus.blur();
    }

    pub fn focus(&self) -> &FocusController {
        &self.focus
    }
}
