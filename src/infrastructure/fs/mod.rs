//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod home;
mod local;
#[cfg(test)]
mod memory;

pub use home::{
    billboard_config_dir, billboard_data_dir, billboard_home_dir, BILLBOARD_TEST_HOME_VAR,
};
pub use local::{expand_home, LocalFs};
#[cfg(test)]
pub use memory::MemoryFs;
