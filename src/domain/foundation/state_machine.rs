//! State machine trait for ordered status enums.
//!
//! Gives every lifecycle enum (interview phases, session status) the same
//! validated transition surface.

use super::ValidationError;

/// Trait for enums that represent state machines.
///
/// Implementors declare their legal edges; `transition_to` and
/// `is_terminal` are derived from them.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for InterviewPhase {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         self.next() == Some(*target)
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         self.next().into_iter().collect()
///     }
/// }
///
/// let phase = InterviewPhase::Opening.transition_to(InterviewPhase::Exploration)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
