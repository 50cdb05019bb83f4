use crate::core::graph::ConstraintGraph;
use crate::domain::model::{Assignment, Roster};
use crate::utils::error::{Result, SantaError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Randomized-retry matcher.
///
/// One attempt is a single greedy pass: walk gifters in roster order, pick
/// a receiver uniformly at random from the gifter's remaining eligible set,
/// and claim it so no later gifter can take it. An early gifter can consume
/// the only receiver a later gifter had left; the pass then dead-ends and
/// the whole attempt is thrown away rather than backtracked. Group sizes
/// are small, so restarting from a fresh graph is cheap and the expected
/// retry count is low for realistic exclusion density.
///
/// This is a probabilistic algorithm: no attempt budget guarantees success,
/// even for feasible rosters. The budget only bounds how long we try before
/// reporting `MatchingExhausted`.
pub struct Matcher<R: Rng = StdRng> {
    rng: R,
    max_attempts: usize,
}

impl Matcher<StdRng> {
    pub fn new(max_attempts: usize) -> Self {
        Self::with_rng(max_attempts, StdRng::from_entropy())
    }

    /// Seeded construction, for reproducible draws and deterministic tests.
    pub fn seeded(max_attempts: usize, seed: u64) -> Self {
        Self::with_rng(max_attempts, StdRng::seed_from_u64(seed))
    }

    pub fn from_seed(max_attempts: usize, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(max_attempts, seed),
            None => Self::new(max_attempts),
        }
    }
}

impl<R: Rng> Matcher<R> {
    pub fn with_rng(max_attempts: usize, rng: R) -> Self {
        Self { rng, max_attempts }
    }

    /// Repeat attempts until one validates or the budget runs out. Each
    /// attempt starts from a clean full graph; nothing carries over.
    pub fn run(&mut self, roster: &Roster) -> Result<Assignment> {
        let names = roster.names();
        for attempt in 1..=self.max_attempts {
            let mut graph = ConstraintGraph::build(&names);
            graph.apply_constraints(roster);

            match self.assign(&mut graph) {
                Some(assignment) if validate(roster, &assignment) => {
                    tracing::debug!(attempt, "found valid assignment");
                    return Ok(assignment);
                }
                Some(_) => tracing::debug!(attempt, "assignment failed validation, retrying"),
                None => tracing::debug!(attempt, "attempt dead-ended, retrying"),
            }
        }

        Err(SantaError::MatchingExhausted {
            attempts: self.max_attempts,
        })
    }

    /// One greedy pass. `None` means the pass dead-ended on a gifter with
    /// no eligible receivers left; the partial assignment is discarded.
    fn assign(&mut self, graph: &mut ConstraintGraph) -> Option<Assignment> {
        let mut assignment = Assignment::default();
        let gifters = graph.gifters().to_vec();

        for gifter in gifters {
            let receiver = graph.eligible_for(&gifter).choose(&mut self.rng)?.clone();
            assignment.set(gifter.clone(), receiver.clone());
            graph.claim_receiver(&gifter, &receiver);
        }

        Some(assignment)
    }
}

/// True iff every participant has a receiver that is neither themselves nor
/// their declared exclusion, and the receivers form a bijection on the
/// roster names. The per-gifter checks mirror the constraints; the
/// bijection check is independent of how `assign` claims receivers, so a
/// bug there cannot slip through.
pub fn validate(roster: &Roster, assignment: &Assignment) -> bool {
    for p in roster.iter() {
        match assignment.receiver_of(&p.name) {
            Some(receiver) if receiver != p.name && receiver != p.excluded_receiver => {}
            _ => return false,
        }
    }
    assignment.is_bijection(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Participant;

    fn pairs_roster() -> Roster {
        Roster::new(vec![
            Participant::new("A", "B"),
            Participant::new("B", "A"),
            Participant::new("C", "D"),
            Participant::new("D", "C"),
        ])
        .unwrap()
    }

    #[test]
    fn test_mutually_excluded_pairs_always_match() {
        let roster = pairs_roster();
        let mut matcher = Matcher::seeded(DEFAULT_MAX_ATTEMPTS, 7);
        let assignment = matcher.run(&roster).unwrap();

        assert!(validate(&roster, &assignment));
        let a = assignment.receiver_of("A").unwrap();
        assert!(a == "C" || a == "D");
    }

    #[test]
    fn test_same_seed_same_assignment() {
        let roster = pairs_roster();
        let first = Matcher::seeded(100, 42).run(&roster).unwrap();
        let second = Matcher::seeded(100, 42).run(&roster).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_two_person_roster_swaps() {
        let roster = Roster::new(vec![
            Participant::new("Alice", ""),
            Participant::new("Bob", ""),
        ])
        .unwrap();
        let assignment = Matcher::seeded(100, 1).run(&roster).unwrap();
        assert_eq!(assignment.receiver_of("Alice"), Some("Bob"));
        assert_eq!(assignment.receiver_of("Bob"), Some("Alice"));
    }

    #[test]
    fn test_infeasible_roster_exhausts_attempts() {
        // A and C can each only give to B; no bijection exists.
        let roster = Roster::new(vec![
            Participant::new("A", "C"),
            Participant::new("B", "A"),
            Participant::new("C", "A"),
        ])
        .unwrap();

        let err = Matcher::seeded(50, 3).run(&roster).unwrap_err();
        match err {
            SantaError::MatchingExhausted { attempts } => assert_eq!(attempts, 50),
            other => panic!("expected MatchingExhausted, got {other}"),
        }
    }

    #[test]
    fn test_validate_rejects_excluded_receiver() {
        let roster = pairs_roster();
        let mut assignment = Assignment::default();
        assignment.set("A", "B"); // A excludes B
        assignment.set("B", "C");
        assignment.set("C", "D");
        assignment.set("D", "A");
        assert!(!validate(&roster, &assignment));
    }

    #[test]
    fn test_validate_rejects_missing_receiver() {
        let roster = pairs_roster();
        let mut assignment = Assignment::default();
        assignment.set("A", "C");
        assert!(!validate(&roster, &assignment));
    }
}
