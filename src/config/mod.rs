#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use chrono::Datelike;

pub fn default_event_name() -> String {
    format!("Secret Santa {}", chrono::Local::now().year())
}

pub fn roster_is_url(roster: &str) -> bool {
    roster.starts_with("http://") || roster.starts_with("https://")
}
