//=========================================================================
// Driver Errors
//=========================================================================
//
// Failure kinds surfaced by the step-bounded driver.
//
// Only one exists: the hooked game ran for the whole step budget without
// signaling completion. Every other runtime operation degrades to a no-op
// or a sentinel value instead of failing.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== DriverError =========================================================

/// Errors returned by [`crate::Driver::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DriverError {
    /// The step ceiling was reached before `end_game` was called.
    ///
    /// The display text is the diagnostic line written to stderr by
    /// [`crate::Driver::run_to_exit`].
    #[error("FAILURE: Exceed max number of steps allowed for test. Did you forget to call end_game()?")]
    StepBudgetExceeded {
        /// The ceiling that was hit.
        max_steps: u32,
    },
}

/// Result alias for driver runs.
pub type DriverResult<T> = Result<T, DriverError>;

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_exceeded_message_is_fixed() {
        let err = DriverError::StepBudgetExceeded { max_steps: 1000 };
        assert_eq!(
            err.to_string(),
            "FAILURE: Exceed max number of steps allowed for test. Did you forget to call end_game()?"
        );
    }

    #[test]
    fn message_does_not_depend_on_ceiling() {
        let a = DriverError::StepBudgetExceeded { max_steps: 1 };
        let b = DriverError::StepBudgetExceeded { max_steps: 5000 };
        assert_eq!(a.to_string(), b.to_string());
        assert_ne!(a, b);
    }
}
