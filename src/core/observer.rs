use notify::event::CreateKind;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::fs;
use std::path::Path;
use std::sync::mpsc;
use tracing::{debug, error, info, warn};
use crate::core::config::{Config, NotificationText};
use crate::core::error::CompanionError;
use crate::core::file_handler;
use crate::core::notifier::Notifier;

/// Messages consumed by the watch loop.
#[derive(Debug)]
pub enum ObserverMessage {
    Fs(notify::Result<Event>),
    /// Stop after the current event has been handled.
    Shutdown,
}

/// What happened to a single created path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Ignored,
    Removed,
    RemoveFailed,
}

/// Notify-then-delete policy for newly created screenshots.
pub struct ScreenshotHandler<N: Notifier> {
    extension: String,
    notification: NotificationText,
    notifier: N,
}

impl<N: Notifier> ScreenshotHandler<N> {
    pub fn new(config: &Config, notifier: N) -> Self {
        Self {
            extension: config.extension.clone(),
            notification: config.notification.clone(),
            notifier,
        }
    }

    /// Handle a raw watcher event and return how many screenshots it carried.
    ///
    /// Anything other than a file creation is ignored.
    pub fn on_event(&self, event: &Event) -> usize {
        match event.kind {
            EventKind::Create(CreateKind::Folder) => 0,
            EventKind::Create(_) => event
                .paths
                .iter()
                .filter(|path| self.on_created(path) != Handled::Ignored)
                .count(),
            // Access, Modify, Remove, Any and Other are noise here
            _ => 0,
        }
    }

    pub fn on_created(&self, path: &Path) -> Handled {
        if path.is_dir() || !file_handler::is_matching_file(path, &self.extension) {
            debug!(path = %path.display(), "ignoring created entry");
            return Handled::Ignored;
        }

        info!(path = %path.display(), "Screenshot detected");

        // A failed notification must not keep the screenshot around
        if let Err(e) = self.notifier.notify(&self.notification) {
            warn!(path = %path.display(), error = %e, "Notification failed");
        }

        match fs::remove_file(path) {
            Ok(()) => {
                info!(path = %path.display(), "Deleted screenshot");
                Handled::Removed
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Error deleting screenshot");
                Handled::RemoveFailed
            }
        }
    }
}

/// Watch `config.watch_dir` until a [`ObserverMessage::Shutdown`] arrives.
///
/// `tx` feeds the watcher's events into the same channel `rx` drains, so file
/// events and shutdown are handled strictly in arrival order. The watcher lives
/// in this frame and is released on every return path.
pub fn run<N: Notifier>(
    config: &Config,
    handler: &ScreenshotHandler<N>,
    tx: mpsc::Sender<ObserverMessage>,
    rx: mpsc::Receiver<ObserverMessage>,
) -> Result<(), CompanionError> {
    let watch_dir = config.watch_dir.as_path();
    let watch_error = |source| CompanionError::Watch { path: watch_dir.to_path_buf(), source };

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
        // The receiver is gone only while shutting down
        let _ = tx.send(ObserverMessage::Fs(res));
    })
    .map_err(watch_error)?;
    watcher.watch(watch_dir, RecursiveMode::NonRecursive).map_err(watch_error)?;

    info!(path = %watch_dir.display(), "Observer started");

    for message in rx {
        match message {
            ObserverMessage::Fs(Ok(event)) => {
                let screenshots = handler.on_event(&event);
                if screenshots > 0 {
                    debug!(screenshots, kind = ?event.kind, "event handled");
                }
            }
            ObserverMessage::Fs(Err(e)) => {
                error!(path = %watch_dir.display(), error = ?e, "watch error");
            }
            ObserverMessage::Shutdown => {
                info!("Observer stopping");
                break;
            }
        }
    }

    if let Err(e) = watcher.unwatch(watch_dir) {
        warn!(path = %watch_dir.display(), error = %e, "Failed to unwatch directory");
    }
    info!(path = %watch_dir.display(), "Observer stopped");

    Ok(())
}
