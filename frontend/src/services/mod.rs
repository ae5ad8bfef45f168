pub mod api;
pub mod config;
pub mod dialogs;
pub mod logging;
