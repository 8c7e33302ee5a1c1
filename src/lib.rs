pub mod config;
pub mod error;
pub mod i18n;
pub mod palette;
pub mod preferences;
pub mod server;
