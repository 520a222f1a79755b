//! Properties every match must satisfy between moves.
//!
//! Invariants are testable on their own and are checked by the match after
//! each accepted move in debug builds.

pub mod round_robin;
pub mod write_once;

pub use round_robin::RoundRobinInvariant;
pub use write_once::WriteOnceGridInvariant;

/// A property of `S` that every reachable state satisfies.
pub trait Invariant<S> {
    /// Evaluates the property against `state`.
    fn holds(state: &S) -> bool;

    /// One-line statement of the property, used when reporting a failure.
    fn description() -> &'static str;
}

/// A failed invariant, named by its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvariantViolation {
    /// The failed invariant's [`Invariant::description`].
    pub description: &'static str,
}

impl InvariantViolation {
    /// Records a failure of the invariant described by `description`.
    pub fn new(description: &'static str) -> Self {
        Self { description }
    }
}

/// Several invariants evaluated as one check.
pub trait InvariantSet<S> {
    /// Evaluates every member and reports all failures, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B> InvariantSet<S> for (A, B)
where
    A: Invariant<S>,
    B: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (A::holds(state), A::description()),
            (B::holds(state), B::description()),
        ]
        .into_iter()
        .filter(|(held, _)| !held)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// The invariants the match checks after each accepted move.
pub type MatchInvariants = (WriteOnceGridInvariant, RoundRobinInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, Mark, MatchController, Player};

    struct AlwaysFails;

    impl Invariant<MatchController> for AlwaysFails {
        fn holds(_: &MatchController) -> bool {
            false
        }

        fn description() -> &'static str {
            "always fails"
        }
    }

    fn classic() -> MatchController {
        MatchController::new(
            3,
            3,
            vec![Player::new("X", Mark::X), Player::new("O", Mark::O)],
            3,
        )
        .unwrap()
    }

    #[test]
    fn test_invariant_set_holds_for_new_match() {
        assert!(MatchInvariants::check_all(&classic()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_win() {
        let mut game = classic();
        game.replay([
            Coordinate::new(0, 0),
            Coordinate::new(1, 1),
            Coordinate::new(0, 1),
            Coordinate::new(1, 0),
            Coordinate::new(0, 2),
        ]);
        assert!(game.status().is_terminal());
        assert!(MatchInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_collects_violations() {
        type WithFailure = (WriteOnceGridInvariant, AlwaysFails);
        let violations = WithFailure::check_all(&classic()).unwrap_err();
        assert_eq!(violations, vec![InvariantViolation::new("always fails")]);
    }
}
