use std::future::Future;
use std::sync::mpsc;

use tokio::task::JoinError;
use tracing::{info, warn};

use crate::core::config::Config;
use crate::core::error::CompanionError;
use crate::core::file_handler;
use crate::core::notifier::Notifier;
use crate::core::observer::{self, ObserverMessage, ScreenshotHandler};

/// Validate, sweep, then watch until `shutdown` resolves.
///
/// A missing watch directory returns before the sweep. When `shutdown`
/// resolves the observer finishes the event in hand before it stops.
pub async fn run_app<N, F>(config: Config, notifier: N, shutdown: F) -> Result<(), CompanionError>
where
    N: Notifier + 'static,
    F: Future<Output = ()>,
{
    info!(?config, "Configuration loaded");
    config.validate()?;

    match file_handler::sweep(&config.watch_dir, &config.extension) {
        Ok(report) => info!(removed = report.removed, failed = report.failed, "Startup sweep finished"),
        Err(e) => warn!(path = %config.watch_dir.display(), error = %e, "Startup sweep could not list directory"),
    }

    let (tx, rx) = mpsc::channel::<ObserverMessage>();
    let shutdown_tx = tx.clone();
    let handler = ScreenshotHandler::new(&config, notifier);
    let mut observer_task =
        tokio::task::spawn_blocking(move || observer::run(&config, &handler, tx, rx));

    tokio::select! {
        // The observer only returns on its own when setup failed
        res = &mut observer_task => flatten(res),
        () = shutdown => {
            info!("Shutting down");
            let _ = shutdown_tx.send(ObserverMessage::Shutdown);
            flatten(observer_task.await)
        }
    }
}

fn flatten(res: Result<Result<(), CompanionError>, JoinError>) -> Result<(), CompanionError> {
    res.map_err(|e| CompanionError::Observer(e.to_string()))?
}
