pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{ConsoleNotifier, CsvRoster, HttpRoster, WebhookNotifier};
#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;
pub use core::engine::{RunReport, SantaEngine};
pub use core::graph::ConstraintGraph;
pub use core::matcher::Matcher;
pub use domain::model::{Assignment, Participant, Roster};
pub use domain::ports::{ConfigProvider, Notifier, RosterSource};
pub use utils::error::{Result, SantaError};
