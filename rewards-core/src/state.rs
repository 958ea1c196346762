//! Issuance State Machine
//!
//! The issuance flow starts in `Checking` and ends in `Success` or
//! `Error`. The only way out of `Error` is an explicit retry back to
//! `Checking`; `Success` is terminal. There is no idle state - each
//! open of the flow begins in `Checking`.

use crate::error::{CoreError, CoreResult};
use crate::types::RewardId;

/// Tagged issuance state
#[derive(Clone, Debug, PartialEq)]
pub enum IssuanceState {
    /// Issuance request in flight (or about to be)
    Checking,
    /// Server minted a reward
    Success { reward_id: RewardId },
    /// Issuance failed with a human-readable message
    Error { message: String },
}

impl IssuanceState {
    /// Every flow begins in `Checking`.
    pub fn new() -> Self {
        IssuanceState::Checking
    }

    /// State name for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            IssuanceState::Checking => "checking",
            IssuanceState::Success { .. } => "success",
            IssuanceState::Error { .. } => "error",
        }
    }

    /// `Checking -> Success`
    pub fn succeed(&mut self, reward_id: RewardId) -> CoreResult<()> {
        match self {
            IssuanceState::Checking => {
                *self = IssuanceState::Success { reward_id };
                Ok(())
            }
            _ => Err(CoreError::invalid_transition(self.name(), "success")),
        }
    }

    /// `Checking -> Error`
    pub fn fail(&mut self, message: impl Into<String>) -> CoreResult<()> {
        match self {
            IssuanceState::Checking => {
                *self = IssuanceState::Error {
                    message: message.into(),
                };
                Ok(())
            }
            _ => Err(CoreError::invalid_transition(self.name(), "error")),
        }
    }

    /// `Error -> Checking` (explicit retry)
    pub fn retry(&mut self) -> CoreResult<()> {
        match self {
            IssuanceState::Error { .. } => {
                *self = IssuanceState::Checking;
                Ok(())
            }
            _ => Err(CoreError::invalid_transition(self.name(), "checking")),
        }
    }

    pub fn is_checking(&self) -> bool {
        matches!(self, IssuanceState::Checking)
    }

    pub fn reward_id(&self) -> Option<&RewardId> {
        match self {
            IssuanceState::Success { reward_id } => Some(reward_id),
            _ => None,
        }
    }
}

impl Default for IssuanceState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_starts_checking() {
        assert!(IssuanceState::new().is_checking());
    }

    #[test]
    fn test_checking_to_success() {
        let mut state = IssuanceState::new();
        state.succeed(RewardId::new("CAFE-001")).unwrap();
        assert_eq!(state.reward_id().unwrap().as_str(), "CAFE-001");
    }

    #[test]
    fn test_checking_to_error_and_retry() {
        let mut state = IssuanceState::new();
        state.fail("anti-abuse rejection").unwrap();
        assert_eq!(state.name(), "error");
        state.retry().unwrap();
        assert!(state.is_checking());
    }

    #[test]
    fn test_success_is_terminal() {
        let mut state = IssuanceState::new();
        state.succeed(RewardId::new("CAFE-001")).unwrap();
        assert!(state.retry().is_err());
        assert!(state.fail("late failure").is_err());
        assert!(state.succeed(RewardId::new("CAFE-002")).is_err());
        // The original outcome is untouched by rejected transitions.
        assert_eq!(state.reward_id().unwrap().as_str(), "CAFE-001");
    }

    #[test]
    fn test_retry_from_checking_is_illegal() {
        let mut state = IssuanceState::new();
        assert!(state.retry().is_err());
    }
}
