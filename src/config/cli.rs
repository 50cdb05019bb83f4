use crate::config::default_event_name;
use crate::core::matcher::DEFAULT_MAX_ATTEMPTS;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SantaError};
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "secret-santa")]
#[command(about = "Match a gift-exchange roster and notify every participant")]
pub struct CliConfig {
    /// Roster location: a CSV file path or an http(s) URL returning a JSON array
    #[arg(long, default_value = "roster.csv")]
    pub roster: String,

    /// Delivery endpoint receiving one POSTed message per participant
    #[arg(long)]
    pub notify_endpoint: Option<String>,

    /// Subject line for notifications; defaults to "Secret Santa <year>"
    #[arg(long)]
    pub event_name: Option<String>,

    /// Matching attempt budget before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Seed the matcher for a reproducible assignment
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fail unless the roster has exactly this many participants
    #[arg(long)]
    pub expected_count: Option<usize>,

    /// Log pairings instead of sending notifications (spoils the secret!)
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Load run settings from a TOML file instead of the flags above
    #[arg(long)]
    pub config: Option<String>,
}

impl ConfigProvider for CliConfig {
    fn roster(&self) -> &str {
        &self.roster
    }

    fn notify_endpoint(&self) -> Option<&str> {
        self.notify_endpoint.as_deref()
    }

    fn event_name(&self) -> String {
        self.event_name.clone().unwrap_or_else(default_event_name)
    }

    fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn expected_count(&self) -> Option<usize> {
        self.expected_count
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        // anything scheme-like must be a proper http(s) URL; the rest is a path
        if self.roster.contains("://") {
            validation::validate_url("roster", &self.roster)?;
        } else {
            validation::validate_path("roster", &self.roster)?;
        }

        validation::validate_positive_number("max_attempts", self.max_attempts, 1)?;

        if let Some(name) = &self.event_name {
            validation::validate_non_empty_string("event_name", name)?;
        }

        if let Some(count) = self.expected_count {
            validation::validate_positive_number("expected_count", count, 2)?;
        }

        match (&self.notify_endpoint, self.dry_run) {
            (Some(endpoint), _) => validation::validate_url("notify_endpoint", endpoint),
            (None, true) => Ok(()),
            (None, false) => Err(SantaError::config(
                "notify_endpoint is required unless --dry-run is set",
            )),
        }
    }
}
