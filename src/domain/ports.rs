use crate::domain::model::Participant;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Supplies the ordered participant records (spreadsheet, CSV file, HTTP
/// endpoint). Precondition checks happen later, in `Roster::new`.
#[async_trait]
pub trait RosterSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Participant>>;
}

/// Delivers one message per (gifter, receiver) pair after matching. A
/// failure for one participant must not block the others.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, gifter: &Participant, receiver: &Participant) -> Result<()>;
}

#[async_trait]
impl RosterSource for Box<dyn RosterSource> {
    async fn fetch(&self) -> Result<Vec<Participant>> {
        (**self).fetch().await
    }
}

#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn notify(&self, gifter: &Participant, receiver: &Participant) -> Result<()> {
        (**self).notify(gifter, receiver).await
    }
}

/// Run settings, implemented by both the CLI flags and the TOML file.
pub trait ConfigProvider: Send + Sync {
    fn roster(&self) -> &str;
    fn notify_endpoint(&self) -> Option<&str>;
    fn event_name(&self) -> String;
    fn max_attempts(&self) -> usize;
    fn seed(&self) -> Option<u64>;
    fn expected_count(&self) -> Option<usize>;
    fn dry_run(&self) -> bool;
}
