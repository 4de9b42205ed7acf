//! Serve event types and options

use std::collections::BTreeMap;
use std::time::Duration;

use crate::domain::value_objects::CarouselMode;

/// Serve loop options
#[derive(Debug, Clone)]
pub struct ServeOptions {
    /// Time between polls
    pub interval: Duration,
    /// Reported in `started` so the host can bind it
    pub hotkey: String,
    /// Loopback toggle address, if listening
    pub http: Option<String>,
}

impl ServeOptions {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            hotkey: String::new(),
            http: None,
        }
    }

    pub fn with_hotkey(mut self, hotkey: impl Into<String>) -> Self {
        self.hotkey = hotkey.into();
        self
    }

    pub fn with_http(mut self, addr: Option<String>) -> Self {
        self.http = addr;
        self
    }
}

/// Serve event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ServeEvent {
    /// Loop started
    Started {
        data_dir: String,
        mode: CarouselMode,
        hotkey: String,
        http: Option<String>,
        interval_ms: u64,
    },
    /// Marquee text changed
    Marquee { text: String },
    /// Carousel pages changed
    Carousel { pages: Vec<String> },
    /// Launcher candidates, key to target
    Candidates { candidates: BTreeMap<String, String> },
    /// Focus state changed, from any source
    Focus { focused: bool },
    /// A candidate or URL was handed to the opener
    Opened {
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<String>,
        target: String,
    },
    /// Error occurred
    Error { message: String },
    /// Loop stopped
    Shutdown,
}

impl ServeEvent {
    /// Convert to JSON string with a `ts` timestamp field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert(
                "ts".to_string(),
                serde_json::json!(chrono::Utc::now().to_rfc3339()),
            );
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn error(err: impl std::fmt::Display) -> Self {
        ServeEvent::Error {
            message: err.to_string(),
        }
    }
}
