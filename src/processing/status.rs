//! Coarse progress reporting.

use std::sync::Mutex;

/// Receives short status lines such as `BUSY: Exporting Virtual Network : vnet01`.
pub trait StatusProvider {
    fn update_status(&self, status: &str);
}

/// Writes status lines to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogStatus;

impl StatusProvider for LogStatus {
    fn update_status(&self, status: &str) {
        log::info!("status: {status}");
    }
}

/// Keeps every status line, for callers that display or inspect them later.
#[derive(Debug, Default)]
pub struct RecordingStatus {
    messages: Mutex<Vec<String>>,
}

impl RecordingStatus {
    pub fn new() -> RecordingStatus {
        RecordingStatus::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }
}

impl StatusProvider for RecordingStatus {
    fn update_status(&self, status: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(status.to_string());
        }
    }
}
