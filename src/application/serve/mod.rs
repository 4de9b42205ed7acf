//! Serve Use Case
//!
//! The long-running mode: a poll loop over the content controllers that
//! reports changes as [`ServeEvent`]s and takes [`ServeCommand`]s from
//! the host between polls.
//!
//! ## Usage
//!
//! ```ignore
//! let (tx, rx) = std::sync::mpsc::channel();
//! let mut use_case = ServeUseCase::new(billboard, options, data_dir, mode);
//! use_case.start(&running, &rx, |event| println!("{}", event.to_json()));
//! ```

mod command;
mod event;
mod use_case;

#[cfg(test)]
mod tests;

pub use command::ServeCommand;
pub use event::{ServeEvent, ServeOptions};
pub use use_case::{LoopInput, ServeUseCase};
