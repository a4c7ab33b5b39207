//! Status enums that move along a fixed transition graph.

use std::fmt;

use super::{DomainError, ErrorCode};

/// A status whose legal moves are listed by `valid_transitions`.
///
/// The outgoing list is the single source of truth; membership checks and
/// checked moves are derived from it.
pub trait StateMachine: Sized + Copy + PartialEq + fmt::Display {
    /// Every status reachable in one step from `self`.
    fn valid_transitions(&self) -> Vec<Self>;

    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Returns `target` if the move is legal.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` with `from`/`to` details otherwise
    fn transition_to(&self, target: Self) -> Result<Self, DomainError> {
        if self.can_transition_to(&target) {
            return Ok(target);
        }
        Err(DomainError::new(
            ErrorCode::InvalidStateTransition,
            format!("Cannot move from {} to {}", self, target),
        )
        .with_detail("from", self.to_string())
        .with_detail("to", target.to_string()))
    }

    /// No outgoing moves.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
