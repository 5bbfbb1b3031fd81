pub mod doc;

pub use doc::SettingsDoc;

#[cfg(feature = "cli")]
use clap::Parser;

/// Command-line surface of the settings inspector.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "server-settings")]
#[command(about = "Load and validate server settings documents")]
pub struct CliConfig {
    /// Settings document to inspect (TOML or JSON)
    #[arg(long, default_value = "settings.toml")]
    pub settings_file: String,

    /// Override the document's port (numeric or textual form)
    #[arg(long)]
    pub port: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
