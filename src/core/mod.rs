pub mod app;
pub mod config;
pub mod error;
pub mod file_handler;
pub mod notifier;
pub mod observer;
