use crate::domain::model::Roster;
use std::collections::HashMap;

/// Per-attempt constraint graph: each gifter name maps to the receivers
/// still eligible for them. Built fresh for every matching attempt, pruned
/// in place, and discarded when the attempt ends.
#[derive(Debug, Clone)]
pub struct ConstraintGraph {
    order: Vec<String>,
    eligible: HashMap<String, Vec<String>>,
}

impl ConstraintGraph {
    /// Start with edges from everyone to everyone, self included. Self and
    /// exclusion edges are removed by `apply_constraints`.
    pub fn build(names: &[String]) -> Self {
        let eligible = names
            .iter()
            .map(|name| (name.clone(), names.to_vec()))
            .collect();
        Self {
            order: names.to_vec(),
            eligible,
        }
    }

    /// Remove each gifter's self edge and their declared exclusion edge.
    /// Idempotent: already-removed edges are simply not found again.
    pub fn apply_constraints(&mut self, roster: &Roster) {
        for (gifter, receivers) in &mut self.eligible {
            receivers.retain(|r| r != gifter);
            if let Some(p) = roster.get(gifter) {
                if !p.excluded_receiver.is_empty() {
                    receivers.retain(|r| *r != p.excluded_receiver);
                }
            }
        }
    }

    /// Gifter names in the fixed pass order (roster order).
    pub fn gifters(&self) -> &[String] {
        &self.order
    }

    pub fn eligible_for(&self, gifter: &str) -> &[String] {
        self.eligible.get(gifter).map_or(&[], Vec::as_slice)
    }

    /// A receiver was handed out: remove it from every other gifter's
    /// eligible set so it cannot be assigned twice.
    pub fn claim_receiver(&mut self, gifter: &str, receiver: &str) {
        for (name, receivers) in &mut self.eligible {
            if name != gifter {
                receivers.retain(|r| r != receiver);
            }
        }
    }
}
