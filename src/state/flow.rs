//! Registration attempt state machine
//!
//! Tracks one user's registration attempt for one event. Team events walk
//! `Unregistered -> ModeSelection -> CreatingTeam | JoiningTeam ->
//! Registered`; solo events jump straight from `Unregistered` to
//! `Registered`. State only advances after a successful API response, so a
//! failed call leaves the attempt where it was.

use serde::{Deserialize, Serialize};

use crate::utils::errors::{AbhivyaktiError, Result};

/// Steps of a registration attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationStep {
    Unregistered,
    /// Choosing between creating and joining a team
    ModeSelection,
    CreatingTeam,
    JoiningTeam,
    Registered,
}

impl RegistrationStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStep::Unregistered => "unregistered",
            RegistrationStep::ModeSelection => "mode_selection",
            RegistrationStep::CreatingTeam => "creating_team",
            RegistrationStep::JoiningTeam => "joining_team",
            RegistrationStep::Registered => "registered",
        }
    }

    /// Steps reachable from this one
    fn next_steps(&self) -> &'static [RegistrationStep] {
        use RegistrationStep::*;
        match self {
            Unregistered => &[ModeSelection, Registered],
            ModeSelection => &[CreatingTeam, JoiningTeam, Unregistered],
            CreatingTeam => &[Registered, ModeSelection, Unregistered],
            JoiningTeam => &[Registered, ModeSelection, Unregistered],
            Registered => &[],
        }
    }
}

/// One registration attempt for one event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationFlow {
    pub event_id: i64,
    pub step: RegistrationStep,
}

impl RegistrationFlow {
    /// Start a fresh attempt for an event
    pub fn new(event_id: i64) -> Self {
        Self {
            event_id,
            step: RegistrationStep::Unregistered,
        }
    }

    /// Validate and apply a transition
    pub fn advance(&mut self, next: RegistrationStep) -> Result<()> {
        if !self.step.next_steps().contains(&next) {
            return Err(AbhivyaktiError::InvalidStateTransition {
                from: self.step.as_str().to_string(),
                to: next.as_str().to_string(),
            });
        }
        self.step = next;
        Ok(())
    }

    /// Whether the attempt reached its terminal state
    pub fn is_registered(&self) -> bool {
        self.step == RegistrationStep::Registered
    }
}
