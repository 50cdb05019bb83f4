use crate::config::default_event_name;
use crate::core::matcher::DEFAULT_MAX_ATTEMPTS;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SantaError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based run settings, mirroring the CLI flags:
///
/// ```toml
/// [exchange]
/// name = "Office Secret Santa"
/// max_attempts = 1000
///
/// [roster]
/// source = "people.csv"
/// expected_count = 6
///
/// [notify]
/// endpoint = "https://relay.example.com/send?key=${RELAY_KEY}"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub exchange: Option<ExchangeConfig>,
    pub roster: RosterConfig,
    pub notify: Option<NotifyConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExchangeConfig {
    pub name: Option<String>,
    pub max_attempts: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    pub source: String,
    pub expected_count: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotifyConfig {
    pub endpoint: Option<String>,
    pub dry_run: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed)?)
    }

    /// Replace `${VAR}` references with the environment value. Unset
    /// variables are left as-is so validation can point at them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| SantaError::config(format!("env var pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn exchange(&self) -> ExchangeConfig {
        self.exchange.clone().unwrap_or_default()
    }

    fn notify(&self) -> NotifyConfig {
        self.notify.clone().unwrap_or_default()
    }
}

impl ConfigProvider for TomlConfig {
    fn roster(&self) -> &str {
        &self.roster.source
    }

    fn notify_endpoint(&self) -> Option<&str> {
        self.notify.as_ref().and_then(|n| n.endpoint.as_deref())
    }

    fn event_name(&self) -> String {
        self.exchange()
            .name
            .unwrap_or_else(default_event_name)
    }

    fn max_attempts(&self) -> usize {
        self.exchange().max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS)
    }

    fn seed(&self) -> Option<u64> {
        self.exchange().seed
    }

    fn expected_count(&self) -> Option<usize> {
        self.roster.expected_count
    }

    fn dry_run(&self) -> bool {
        self.notify().dry_run.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if self.roster.source.contains("://") {
            validation::validate_url("roster.source", &self.roster.source)?;
        } else {
            validation::validate_path("roster.source", &self.roster.source)?;
        }

        validation::validate_positive_number("exchange.max_attempts", self.max_attempts(), 1)?;

        if let Some(count) = self.roster.expected_count {
            validation::validate_positive_number("roster.expected_count", count, 2)?;
        }

        match (self.notify_endpoint(), self.dry_run()) {
            (Some(endpoint), _) => validation::validate_url("notify.endpoint", endpoint),
            (None, true) => Ok(()),
            (None, false) => Err(SantaError::config(
                "notify.endpoint is required unless notify.dry_run = true",
            )),
        }
    }
}
