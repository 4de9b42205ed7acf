//! Serve command handler

use std::io::BufRead;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use billboard::application::{Billboard, LoopInput, ServeEvent, ServeOptions, ServeUseCase};
use billboard::focus::{FocusController, HeadlessWindow};
use billboard::server::{ToggleServer, TOGGLE_PATH};

use super::load_config;

pub fn cmd_serve(
    config_path: Option<&Path>,
    interval_ms: Option<u64>,
    no_http: bool,
    json: bool,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(ms) = interval_ms {
        config.serve.interval_ms = ms;
    }

    let (inputs, rx) = mpsc::channel();
    let focus_tx = inputs.clone();
    let focus = FocusController::new(HeadlessWindow::new().on_change(move |focused| {
        let _ = focus_tx.send(LoopInput::Focus(focused));
    }));

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("setting Ctrl+C handler")?;

    let mut startup_errors = Vec::new();
    let mut http_addr = None;
    let mut http_thread = None;
    if config.http.enabled && !no_http {
        match ToggleServer::bind(config.http.port, focus.clone()) {
            Ok(server) => {
                http_addr = server
                    .local_addr()
                    .map(|addr| format!("http://{addr}{TOGGLE_PATH}"));
                http_thread = Some(server.spawn(Arc::clone(&running)));
            }
            Err(e) => {
                tracing::warn!(error = %e, "continuing without toggle endpoint");
                startup_errors.push(ServeEvent::error(e));
            }
        }
    }

    spawn_stdin_reader(inputs);

    let options = ServeOptions::new(config.poll_interval())
        .with_hotkey(config.launcher.hotkey.clone())
        .with_http(http_addr);
    let billboard = Billboard::from_config(&config, focus);
    let mut use_case = ServeUseCase::new(
        billboard,
        options,
        config.data_dir().display().to_string(),
        config.carousel.mode,
    );

    let mut print = |event: ServeEvent| {
        if json {
            println!("{}", event.to_json());
        } else {
            match &event {
                ServeEvent::Error { .. } => eprintln!("{}", describe(&event)),
                _ => println!("{}", describe(&event)),
            }
        }
    };
    for event in startup_errors {
        print(event);
    }
    use_case.start(&running, &rx, &mut print);

    running.store(false, Ordering::SeqCst);
    if let Some(handle) = http_thread {
        let _ = handle.join();
    }
    Ok(())
}

/// Forward stdin lines to the loop; EOF closes it.
fn spawn_stdin_reader(inputs: Sender<LoopInput>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().is_empty() {
                continue;
            }
            let input = match line.parse() {
                Ok(command) => LoopInput::Command(command),
                Err(message) => LoopInput::Invalid(message),
            };
            if inputs.send(input).is_err() {
                return;
            }
        }
        let _ = inputs.send(LoopInput::Closed);
    });
}

fn describe(event: &ServeEvent) -> String {
    match event {
        ServeEvent::Started {
            data_dir,
            mode,
            hotkey,
            http,
            interval_ms,
        } => {
            let mut line = format!(
                "serving {data_dir} ({mode:?} mode, every {}ms, hotkey {hotkey})",
                interval_ms
            );
            if let Some(http) = http {
                line.push_str(&format!(", toggle at {http}"));
            }
            line
        }
        ServeEvent::Marquee { text } => format!("marquee: {}", text.trim_end()),
        ServeEvent::Carousel { pages } => format!("carousel: {} page(s)", pages.len()),
        ServeEvent::Candidates { candidates } => {
            let keys: Vec<&str> = candidates.keys().map(String::as_str).collect();
            format!("candidates: {}", keys.join(", "))
        }
        ServeEvent::Focus { focused } => {
            format!("focus: {}", if *focused { "focused" } else { "blurred" })
        }
        ServeEvent::Opened { key, target } => match key {
            Some(key) => format!("opened {key} -> {target}"),
            None => format!("opened {target}"),
        },
        ServeEvent::Error { message } => format!("error: {message}"),
        ServeEvent::Shutdown => "shutdown".to_string(),
    }
}
