use crate::domain::model::Participant;
use crate::domain::ports::Notifier;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Dry-run notifier: logs each pairing instead of delivering anything.
/// Spoils the secret by design, so only wired up behind `--dry-run`.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(&self, gifter: &Participant, receiver: &Participant) -> Result<()> {
        match &receiver.preference_hint {
            Some(hint) => {
                tracing::info!("{} is gifting to {} (hint: {})", gifter.name, receiver.name, hint)
            }
            None => tracing::info!("{} is gifting to {}", gifter.name, receiver.name),
        }
        Ok(())
    }
}
