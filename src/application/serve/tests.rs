//! Tests for the serve loop

use super::*;
use crate::application::Billboard;
use crate::config::Config;
use crate::domain::value_objects::CarouselMode;
use crate::focus::{FocusController, HeadlessWindow};
use crate::infrastructure::fs::MemoryFs;
use crate::infrastructure::RecordingOpener;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tempfile::TempDir;

const WAIT: Duration = Duration::from_secs(5);

struct Harness {
    inputs: Sender<LoopInput>,
    events: Receiver<ServeEvent>,
    running: Arc<AtomicBool>,
    opener: RecordingOpener,
    handle: Option<JoinHandle<()>>,
    _shortcuts: TempDir,
}

impl Harness {
    fn start(mem: &MemoryFs, interval: Duration) -> Self {
        let shortcuts = tempfile::tempdir().unwrap();
        std::fs::write(shortcuts.path().join("Clock.desktop"), "").unwrap();

        let mut config = Config::default();
        config.content.data_dir = Some("/data".into());
        config.carousel.extension = "doc".to_string();
        config.launcher.shortcuts_dir = Some(shortcuts.path().to_path_buf());
        config.launcher.extension = "desktop".to_string();

        let (inputs, rx) = mpsc::channel();
        let focus_tx = inputs.clone();
        let focus = FocusController::new(HeadlessWindow::new().on_change(move |focused| {
            let _ = focus_tx.send(LoopInput::Focus(focused));
        }));
        let opener = RecordingOpener::new();
        let billboard = Billboard::new(&config, mem.clone(), opener.clone(), focus);
        let options = ServeOptions::new(interval).with_hotkey("Alt+Space");
        let mut use_case = ServeUseCase::new(billboard, options, "/data", CarouselMode::Pages);

        let (events_tx, events) = mpsc::channel();
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        let handle = thread::spawn(move || {
            use_case.start(&flag, &rx, |event| {
                let _ = events_tx.send(event);
            });
        });

        Self {
            inputs,
            events,
            running,
            opener,
            handle: Some(handle),
            _shortcuts: shortcuts,
        }
    }

    fn send(&self, line: &str) {
        let input = match line.parse() {
            Ok(command) => LoopInput::Command(command),
            Err(message) => LoopInput::Invalid(message),
        };
        self.inputs.send(input).unwrap();
    }

    fn next(&self) -> ServeEvent {
        self.events.recv_timeout(WAIT).expect("no event in time")
    }

    /// Skip events until one matches
    fn wait_for(&self, pred: impl Fn(&ServeEvent) -> bool) -> ServeEvent {
        loop {
            let event = self.next();
            if pred(&event) {
                return event;
            }
        }
    }

    /// Stop the loop and return every event emitted after the last read
    fn quit(mut self) -> Vec<ServeEvent> {
        // The loop may already be gone
        let _ = self.inputs.send(LoopInput::Command(ServeCommand::Quit));
        if let Some(handle) = self.handle.take() {
            handle.join().unwrap();
        }
        self.events.try_iter().collect()
    }
}

fn content() -> MemoryFs {
    let mem = MemoryFs::new();
    mem.write("/data/marquee.txt", "Hello lobby", MemoryFs::at(1));
    mem.write("/data/carousel.1.doc", "= Hello", MemoryFs::at(1));
    mem.write("/data/carousel.2.doc", "= World", MemoryFs::at(1));
    mem
}

fn pages(words: &[&str]) -> ServeEvent {
    ServeEvent::Carousel {
        pages: words.iter().map(|w| format!("<h1>{w}</h1>")).collect(),
    }
}

#[test]
fn test_startup_emits_content_then_candidates() {
    let harness = Harness::start(&content(), Duration::from_secs(3600));

    match harness.next() {
        ServeEvent::Started {
            data_dir,
            hotkey,
            interval_ms,
            ..
        } => {
            assert_eq!(data_dir, "/data");
            assert_eq!(hotkey, "Alt+Space");
            assert_eq!(interval_ms, 3_600_000);
        }
        other => panic!("expected started, got {other:?}"),
    }
    assert_eq!(
        harness.next(),
        ServeEvent::Marquee {
            text: "Hello lobby".to_string()
        }
    );
    assert_eq!(harness.next(), pages(&["Hello", "World"]));
    match harness.next() {
        ServeEvent::Candidates { candidates } => {
            assert_eq!(candidates.keys().collect::<Vec<_>>(), vec!["Clock"]);
        }
        other => panic!("expected candidates, got {other:?}"),
    }

    assert_eq!(harness.quit(), vec![ServeEvent::Shutdown]);
}

#[test]
fn test_refresh_reemits_unchanged_content() {
    let harness = Harness::start(&content(), Duration::from_secs(3600));
    harness.wait_for(|e| matches!(e, ServeEvent::Candidates { .. }));

    harness.send("refresh");
    assert!(matches!(harness.next(), ServeEvent::Marquee { .. }));
    assert_eq!(harness.next(), pages(&["Hello", "World"]));
    harness.quit();
}

#[test]
fn test_poll_emits_only_changes() {
    let mem = content();
    let harness = Harness::start(&mem, Duration::from_millis(10));
    harness.wait_for(|e| matches!(e, ServeEvent::Candidates { .. }));

    mem.write("/data/marquee.txt", "Closing soon", MemoryFs::at(2));
    assert_eq!(
        harness.next(),
        ServeEvent::Marquee {
            text: "Closing soon".to_string()
        }
    );

    mem.write("/data/carousel.3.doc", "= Again", MemoryFs::at(2));
    assert_eq!(harness.next(), pages(&["Hello", "World", "Again"]));

    // Nothing changes for a few polls
    thread::sleep(Duration::from_millis(60));
    let rest = harness.quit();
    assert_eq!(rest, vec![ServeEvent::Shutdown]);
}

#[test]
fn test_repeated_failure_is_reported_once() {
    let mem = content();
    mem.remove("/data/marquee.txt");
    let harness = Harness::start(&mem, Duration::from_millis(10));

    let err = harness.wait_for(|e| matches!(e, ServeEvent::Error { .. }));
    assert!(matches!(err, ServeEvent::Error { ref message } if message.contains("marquee.txt")));
    harness.wait_for(|e| matches!(e, ServeEvent::Candidates { .. }));

    thread::sleep(Duration::from_millis(60));
    mem.write("/data/marquee.txt", "Back", MemoryFs::at(3));
    assert_eq!(
        harness.next(),
        ServeEvent::Marquee {
            text: "Back".to_string()
        }
    );
    harness.quit();
}

#[test]
fn test_toggle_and_blur_emit_focus_events() {
    let harness = Harness::start(&content(), Duration::from_secs(3600));
    harness.wait_for(|e| matches!(e, ServeEvent::Candidates { .. }));

    harness.send("toggle");
    assert_eq!(harness.next(), ServeEvent::Focus { focused: true });
    harness.send("blur");
    assert_eq!(harness.next(), ServeEvent::Focus { focused: false });
    harness.send("blur");
    harness.send("toggle");
    assert_eq!(harness.next(), ServeEvent::Focus { focused: true });
    harness.quit();
}

#[test]
fn test_open_commands() {
    let harness = Harness::start(&content(), Duration::from_secs(3600));
    harness.wait_for(|e| matches!(e, ServeEvent::Candidates { .. }));

    harness.send("open Missing");
    harness.send("open Clock");
    match harness.next() {
        ServeEvent::Opened { key, target } => {
            assert_eq!(key.as_deref(), Some("Clock"));
            assert!(Path::new(&target).ends_with("Clock.desktop"));
        }
        other => panic!("expected opened, got {other:?}"),
    }

    harness.send("open-url https://example.com/events");
    assert_eq!(
        harness.next(),
        ServeEvent::Opened {
            key: None,
            target: "https://example.com/events".to_string()
        }
    );

    let opener = harness.opener.clone();
    harness.quit();
    assert_eq!(opener.opened().len(), 2);
}

#[test]
fn test_invalid_line_is_error_event() {
    let harness = Harness::start(&content(), Duration::from_secs(3600));
    harness.wait_for(|e| matches!(e, ServeEvent::Candidates { .. }));

    harness.send("dance");
    assert_eq!(
        harness.next(),
        ServeEvent::Error {
            message: "unknown command 'dance'".to_string()
        }
    );
    harness.quit();
}

#[test]
fn test_closed_input_stops_loop() {
    let harness = Harness::start(&content(), Duration::from_secs(3600));
    harness.inputs.send(LoopInput::Closed).unwrap();
    harness.wait_for(|e| *e == ServeEvent::Shutdown);
    harness.quit();
}

#[test]
fn test_running_flag_stops_loop() {
    let harness = Harness::start(&content(), Duration::from_millis(10));
    harness.wait_for(|e| matches!(e, ServeEvent::Candidates { .. }));

    harness.running.store(false, Ordering::SeqCst);
    harness.wait_for(|e| *e == ServeEvent::Shutdown);
    harness.quit();
}

#[test]
fn test_event_json_shape() {
    let json = ServeEvent::Focus { focused: true }.to_json();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["event"], "focus");
    assert_eq!(value["focused"], true);
    assert!(value["ts"].is_string());

    let json = ServeEvent::Opened {
        key: None,
        target: "https://example.com".to_string(),
    }
    .to_json();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value.get("key").is_none());

    let value: serde_json::Value = serde_json::from_str(&ServeEvent::Shutdown.to_json()).unwrap();
    assert_eq!(value["event"], "shutdown");
}
