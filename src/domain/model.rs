use crate::utils::error::{Result, SantaError};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One roster row. `excluded_receiver` names the one other participant this
/// person must never be assigned to (empty = no exclusion beyond self).
/// `contact_address` and `preference_hint` pass through untouched to the
/// notification step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub excluded_receiver: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference_hint: Option<String>,
}

impl Participant {
    pub fn new(name: impl Into<String>, excluded_receiver: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            excluded_receiver: excluded_receiver.into(),
            contact_address: None,
            preference_hint: None,
        }
    }

    pub fn with_contact(mut self, address: impl Into<String>) -> Self {
        self.contact_address = Some(address.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.preference_hint = Some(hint.into());
        self
    }
}

/// Validated, ordered participant list. Construction enforces every roster
/// precondition; once a `Roster` exists the matcher can assume names are
/// unique, non-empty, and exclusions resolve.
#[derive(Debug, Clone)]
pub struct Roster {
    participants: Vec<Participant>,
    index: HashMap<String, usize>,
}

impl Roster {
    pub fn new(participants: Vec<Participant>) -> Result<Self> {
        if participants.len() < 2 {
            return Err(SantaError::invalid_roster(format!(
                "need at least 2 participants, got {}",
                participants.len()
            )));
        }

        let mut index = HashMap::new();
        for (i, p) in participants.iter().enumerate() {
            if p.name.trim().is_empty() {
                return Err(SantaError::invalid_roster(format!(
                    "participant at row {} has an empty name",
                    i + 1
                )));
            }
            if index.insert(p.name.clone(), i).is_some() {
                return Err(SantaError::invalid_roster(format!(
                    "duplicate participant name: {}",
                    p.name
                )));
            }
        }

        for p in &participants {
            if !p.excluded_receiver.is_empty() && !index.contains_key(&p.excluded_receiver) {
                return Err(SantaError::invalid_roster(format!(
                    "{} excludes unknown participant: {}",
                    p.name, p.excluded_receiver
                )));
            }
        }

        Ok(Self {
            participants,
            index,
        })
    }

    /// Participant names in roster order. The matcher walks gifters in this
    /// order, one fixed pass per attempt.
    pub fn names(&self) -> Vec<String> {
        self.participants.iter().map(|p| p.name.clone()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Participant> {
        self.index.get(name).map(|&i| &self.participants[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

/// Gifter name → receiver name mapping produced by one successful matching
/// run. Immutable once validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pairs: HashMap<String, String>,
}

impl Assignment {
    pub fn set(&mut self, gifter: impl Into<String>, receiver: impl Into<String>) {
        self.pairs.insert(gifter.into(), receiver.into());
    }

    pub fn receiver_of(&self, gifter: &str) -> Option<&str> {
        self.pairs.get(gifter).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(g, r)| (g.as_str(), r.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// True iff every roster name is someone's receiver exactly once.
    pub fn is_bijection(&self, roster: &Roster) -> bool {
        if self.pairs.len() != roster.len() {
            return false;
        }
        let receivers: HashSet<&str> = self.pairs.values().map(String::as_str).collect();
        receivers.len() == roster.len() && roster.iter().all(|p| receivers.contains(p.name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_rows() -> Vec<Participant> {
        vec![
            Participant::new("Alice", "Bob"),
            Participant::new("Bob", "Alice"),
            Participant::new("Carol", ""),
        ]
    }

    #[test]
    fn test_roster_accepts_valid_rows() {
        let roster = Roster::new(roster_rows()).unwrap();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.names(), vec!["Alice", "Bob", "Carol"]);
        assert_eq!(roster.get("Bob").unwrap().excluded_receiver, "Alice");
    }

    #[test]
    fn test_roster_rejects_single_participant() {
        let err = Roster::new(vec![Participant::new("Alice", "")]).unwrap_err();
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn test_roster_rejects_duplicate_names() {
        let rows = vec![
            Participant::new("Alice", ""),
            Participant::new("Alice", ""),
        ];
        let err = Roster::new(rows).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_roster_rejects_empty_name() {
        let rows = vec![Participant::new("  ", ""), Participant::new("Bob", "")];
        assert!(Roster::new(rows).is_err());
    }

    #[test]
    fn test_roster_rejects_dangling_exclusion() {
        let rows = vec![
            Participant::new("Alice", "Mallory"),
            Participant::new("Bob", ""),
        ];
        let err = Roster::new(rows).unwrap_err();
        assert!(err.to_string().contains("unknown participant"));
    }

    #[test]
    fn test_bijection_check() {
        let roster = Roster::new(roster_rows()).unwrap();

        let mut good = Assignment::default();
        good.set("Alice", "Carol");
        good.set("Bob", "Alice");
        good.set("Carol", "Bob");
        assert!(good.is_bijection(&roster));

        // Carol received twice, Bob never
        let mut bad = Assignment::default();
        bad.set("Alice", "Carol");
        bad.set("Bob", "Carol");
        bad.set("Carol", "Alice");
        assert!(!bad.is_bijection(&roster));

        let mut partial = Assignment::default();
        partial.set("Alice", "Carol");
        assert!(!partial.is_bijection(&roster));
    }
}
