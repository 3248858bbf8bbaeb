mod core;

use crate::core::app;
use crate::core::config::Config;
use crate::core::notifier::DesktopNotifier;

use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let interrupted = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Interrupt received"),
            Err(e) => error!(%e, "Failed to listen for interrupt"),
        }
    };

    match app::run_app(Config::default(), DesktopNotifier::new(), interrupted).await {
        Ok(()) => info!("Shutdown complete"),
        Err(e) => error!(%e, "Companion stopped"),
    }
}
