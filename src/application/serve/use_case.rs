//! Serve Use Case implementation

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Instant;

use crate::application::Billboard;
use crate::domain::ports::{FileSystem, Opener};
use crate::domain::value_objects::{CarouselMode, Refresh};

use super::command::ServeCommand;
use super::event::{ServeEvent, ServeOptions};

/// Everything the loop reacts to besides its own timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopInput {
    Command(ServeCommand),
    /// A line that did not parse
    Invalid(String),
    /// Focus flipped, from the HTTP endpoint or a command
    Focus(bool),
    /// Input stream closed
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Source {
    Marquee,
    Carousel,
}

/// Serve Use Case
///
/// Polls the content controllers on a fixed interval and reacts to
/// [`LoopInput`]s between polls. Content events are emitted only when
/// something changed; a repeated failure is reported once.
pub struct ServeUseCase<F, O> {
    billboard: Billboard<F, O>,
    options: ServeOptions,
    data_dir: String,
    mode: CarouselMode,
    last_marquee: Option<String>,
    last_errors: HashMap<Source, String>,
}

impl<F: FileSystem + Clone, O: Opener> ServeUseCase<F, O> {
    pub fn new(
        billboard: Billboard<F, O>,
        options: ServeOptions,
        data_dir: impl Into<String>,
        mode: CarouselMode,
    ) -> Self {
        Self {
            billboard,
            options,
            data_dir: data_dir.into(),
            mode,
            last_marquee: None,
            last_errors: HashMap::new(),
        }
    }

    /// Run until `running` goes false, `quit` arrives or input closes
    pub fn start<E>(&mut self, running: &AtomicBool, inputs: &Receiver<LoopInput>, mut on_event: E)
    where
        E: FnMut(ServeEvent),
    {
        on_event(ServeEvent::Started {
            data_dir: self.data_dir.clone(),
            mode: self.mode,
            hotkey: self.options.hotkey.clone(),
            http: self.options.http.clone(),
            interval_ms: u64::try_from(self.options.interval.as_millis()).unwrap_or(u64::MAX),
        });
        self.poll(true, &mut on_event);
        on_event(self.candidates_event());

        let mut next_poll = Instant::now() + self.options.interval;
        let mut input_open = true;

        while running.load(Ordering::SeqCst) {
            let wait = next_poll.saturating_duration_since(Instant::now());
            if input_open {
                match inputs.recv_timeout(wait) {
                    Ok(LoopInput::Command(ServeCommand::Quit)) | Ok(LoopInput::Closed) => break,
                    Ok(input) => self.handle(input, &mut on_event),
                    Err(RecvTimeoutError::Timeout) => {}
                    Err(RecvTimeoutError::Disconnected) => input_open = false,
                }
            } else {
                std::thread::sleep(wait);
            }

            if Instant::now() >= next_poll {
                self.poll(false, &mut on_event);
                next_poll = Instant::now() + self.options.interval;
            }
        }

        tracing::info!("serve loop stopped");
        on_event(ServeEvent::Shutdown);
    }

    pub fn billboard(&self) -> &Billboard<F, O> {
        &self.billboard
    }

    fn handle(&mut self, input: LoopInput, on_event: &mut impl FnMut(ServeEvent)) {
        match input {
            LoopInput::Command(command) => {
                tracing::debug!(?command, "serve command");
                self.run_command(command, on_event);
            }
            LoopInput::Invalid(message) => on_event(ServeEvent::Error { message }),
            LoopInput::Focus(focused) => on_event(ServeEvent::Focus { focused }),
            LoopInput::Closed => {}
        }
    }

    fn run_command(&mut self, command: ServeCommand, on_event: &mut impl FnMut(ServeEvent)) {
        match command {
            ServeCommand::Refresh => self.poll(true, on_event),
            // Focus events arrive through the window's transition callback
            ServeCommand::Toggle => {
                self.billboard.toggle_focus();
            }
            ServeCommand::Blur => self.billboard.blur(),
            ServeCommand::Candidates => on_event(self.candidates_event()),
            ServeCommand::Rescan => {
                self.billboard.rescan();
                on_event(self.candidates_event());
            }
            ServeCommand::Open(key) => match self.billboard.open_candidate(&key) {
                Ok(Some(target)) => on_event(ServeEvent::Opened {
                    key: Some(key),
                    target: target.display().to_string(),
                }),
                Ok(None) => {}
                Err(e) => on_event(ServeEvent::error(e)),
            },
            ServeCommand::OpenUrl(url) => match self.billboard.open(&url) {
                Ok(()) => on_event(ServeEvent::Opened {
                    key: None,
                    target: url,
                }),
                Err(e) => on_event(ServeEvent::error(e)),
            },
            ServeCommand::Quit => {}
        }
    }

    fn poll(&mut self, force: bool, on_event: &mut impl FnMut(ServeEvent)) {
        match self.billboard.marquee_message() {
            Ok(text) => {
                self.last_errors.remove(&Source::Marquee);
                if force || self.last_marquee.as_deref() != Some(text.as_str()) {
                    self.last_marquee = Some(text.clone());
                    on_event(ServeEvent::Marquee { text });
                }
            }
            Err(e) => self.report(Source::Marquee, e.to_string(), on_event),
        }

        match self.billboard.carousel_pages(force) {
            Ok(Refresh::Rendered(pages)) => {
                self.last_errors.remove(&Source::Carousel);
                on_event(ServeEvent::Carousel { pages });
            }
            Ok(Refresh::Unchanged) => {
                self.last_errors.remove(&Source::Carousel);
            }
            Err(e) => self.report(Source::Carousel, e.to_string(), on_event),
        }
    }

    fn report(&mut self, source: Source, message: String, on_event: &mut impl FnMut(ServeEvent)) {
        if self.last_errors.get(&source) == Some(&message) {
            return;
        }
        tracing::warn!(?source, %message, "poll failed");
        self.last_errors.insert(source, message.clone());
        on_event(ServeEvent::Error { message });
    }

    fn candidates_event(&self) -> ServeEvent {
        ServeEvent::Candidates {
            candidates: self
                .billboard
                .candidates()
                .iter()
                .map(|(key, target)| (key.clone(), target.display().to_string()))
                .collect(),
        }
    }
}
