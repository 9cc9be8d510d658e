//! # UI State Module
//!
//! Cross-page UI chrome: the loading flag and the transient message
//! banners. Success messages auto-dismiss after a fixed duration, mirroring
//! the product's toast behavior; errors stay until replaced or cleared.

use std::time::{Duration, Instant};

/// How long a success banner stays visible
pub const SUCCESS_MESSAGE_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug)]
pub struct UiState {
    /// True while the initial simulated load is in flight
    pub loading: bool,
    pub error_message: Option<String>,
    success: Option<(String, Instant)>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            loading: true,
            error_message: None,
            success: None,
        }
    }

    /// Show a success banner until `SUCCESS_MESSAGE_DURATION` elapses
    pub fn set_success(&mut self, message: impl Into<String>, now: Instant) {
        self.success = Some((message.into(), now + SUCCESS_MESSAGE_DURATION));
        self.error_message = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
        self.success = None;
    }

    /// Currently visible success message, if not yet expired
    pub fn success_message(&self) -> Option<&str> {
        self.success.as_ref().map(|(message, _)| message.as_str())
    }

    /// Drop the success banner once its deadline passes. Returns true if a
    /// banner is still live (the caller schedules a repaint for it).
    pub fn tick_messages(&mut self, now: Instant) -> bool {
        if let Some((_, expires_at)) = &self.success {
            if now >= *expires_at {
                self.success = None;
            }
        }
        self.success.is_some()
    }

    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_message_expires() {
        let mut ui = UiState::new();
        let start = Instant::now();
        ui.set_success("Transação criada com sucesso!", start);
        assert_eq!(ui.success_message(), Some("Transação criada com sucesso!"));

        assert!(ui.tick_messages(start + Duration::from_secs(1)));
        assert!(ui.success_message().is_some());

        assert!(!ui.tick_messages(start + SUCCESS_MESSAGE_DURATION));
        assert!(ui.success_message().is_none());
    }

    #[test]
    fn test_error_and_success_are_exclusive() {
        let mut ui = UiState::new();
        let now = Instant::now();

        ui.set_error("falhou");
        ui.set_success("ok", now);
        assert!(ui.error_message.is_none());
        assert!(ui.success_message().is_some());

        ui.set_error("falhou de novo");
        assert!(ui.success_message().is_none());
        assert_eq!(ui.error_message.as_deref(), Some("falhou de novo"));
    }
}
