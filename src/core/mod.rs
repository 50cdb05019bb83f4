pub mod engine;
pub mod graph;
pub mod matcher;

pub use crate::domain::model::{Assignment, Participant, Roster};
pub use crate::domain::ports::{ConfigProvider, Notifier, RosterSource};
pub use crate::utils::error::Result;
