//! Desktop notification sink.
//!
//! The handler only sees the [`Notifier`] trait, so the OS facility can be
//! swapped for a recording double in tests.

use notify_rust::Notification;
use tracing::debug;
use crate::core::config::NotificationText;
use crate::core::error::CompanionError;

pub trait Notifier: Send {
    fn notify(&self, text: &NotificationText) -> Result<(), CompanionError>;
}

/// Sends notifications through the platform notification service.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, text: &NotificationText) -> Result<(), CompanionError> {
        Notification::new()
            .summary(&text.title)
            .body(&text.message)
            .show()
            .map_err(|e| CompanionError::Notification(e.to_string()))?;
        debug!(title = %text.title, "Desktop notification sent");
        Ok(())
    }
}

#[cfg(test)]
pub mod test_support {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Keeps every notification it is asked to send; clones share the log.
    #[derive(Default, Clone)]
    pub struct RecordingNotifier {
        sent: Arc<Mutex<Vec<NotificationText>>>,
    }

    impl RecordingNotifier {
        pub fn sent(&self) -> Vec<NotificationText> {
            self.sent.lock().unwrap().clone()
        }

        pub fn count(&self) -> usize {
            self.sent.lock().unwrap().len()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, text: &NotificationText) -> Result<(), CompanionError> {
            self.sent.lock().unwrap().push(text.clone());
            Ok(())
        }
    }
}
