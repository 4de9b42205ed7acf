//! Opener port - hands a path or URL to the desktop environment

use crate::error::BillboardResult;

/// Launches a target (file, symlink destination or URL) outside this process
pub trait Opener {
    fn open(&self, target: &str) -> BillboardResult<()>;
}

impl<T: Opener + ?Sized> Opener for Box<T> {
    fn open(&self, target: &str) -> BillboardResult<()> {
        (**self).open(target)
    }
}
