pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::SettingsDoc;
pub use domain::imports::{Hook, HookRegistry, ImportFn, ImportMap};
pub use domain::model::{Port, ServerSettings, DEFAULT_PORT};
pub use domain::ports::SettingsProvider;
pub use utils::error::{Result, SettingsError};
