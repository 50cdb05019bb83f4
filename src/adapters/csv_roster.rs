use crate::domain::model::Participant;
use crate::domain::ports::RosterSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Roster file with headers `name,excluded_receiver,contact_address,preference_hint`.
/// Trailing optional columns may be omitted entirely.
pub struct CsvRoster {
    path: PathBuf,
}

impl CsvRoster {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RosterSource for CsvRoster {
    async fn fetch(&self) -> Result<Vec<Participant>> {
        tracing::debug!("Reading roster from {}", self.path.display());

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)?;

        let mut participants = Vec::new();
        for row in reader.deserialize() {
            let participant: Participant = row?;
            participants.push(participant);
        }

        tracing::debug!("Read {} roster rows", participants.len());
        Ok(participants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_reads_full_rows() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "name,excluded_receiver,contact_address,preference_hint").unwrap();
        writeln!(file, "Alice,Bob,alice@example.com,board games").unwrap();
        writeln!(file, "Bob,Alice,bob@example.com,").unwrap();

        let roster = CsvRoster::new(file.path()).fetch().await.unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name, "Alice");
        assert_eq!(roster[0].excluded_receiver, "Bob");
        assert_eq!(roster[0].contact_address.as_deref(), Some("alice@example.com"));
        assert_eq!(roster[0].preference_hint.as_deref(), Some("board games"));
    }

    #[tokio::test]
    async fn test_reads_minimal_rows() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "name,excluded_receiver").unwrap();
        writeln!(file, "Carol,").unwrap();
        writeln!(file, "Dave,Carol").unwrap();

        let roster = CsvRoster::new(file.path()).fetch().await.unwrap();
        assert_eq!(roster.len(), 2);
        assert!(roster[0].excluded_receiver.is_empty());
        assert!(roster[0].contact_address.is_none());
        assert_eq!(roster[1].excluded_receiver, "Carol");
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let result = CsvRoster::new("/nonexistent/roster.csv").fetch().await;
        assert!(result.is_err());
    }
}
