pub mod checker;
pub mod cli;
pub mod error;
pub mod models;
pub mod settings;
pub mod utils;

pub use error::{ConfigError, Result};
pub use settings::PluginSettings;
