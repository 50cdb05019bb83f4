use crate::domain::model::Participant;
use crate::domain::ports::RosterSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Roster endpoint returning a JSON array of participant objects, the same
/// shape the CSV adapter produces.
pub struct HttpRoster {
    endpoint: String,
    client: Client,
}

impl HttpRoster {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl RosterSource for HttpRoster {
    async fn fetch(&self) -> Result<Vec<Participant>> {
        tracing::debug!("Fetching roster from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;

        let participants: Vec<Participant> = response.json().await?;
        tracing::debug!("Fetched {} roster rows", participants.len());
        Ok(participants)
    }
}
