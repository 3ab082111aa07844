// SPDX-License-Identifier: MPL-2.0
//! Coarse phases of a quiz session.

/// The phase a session is in. Transitions only move forward, except for an
/// explicit restart which returns to [`Stage::Welcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Stage {
    /// Name entry.
    #[default]
    Welcome,
    /// Pre-start countdown.
    Countdown,
    /// Questions are being answered.
    Active,
    /// Results are shown.
    Finished,
}

impl Stage {
    /// Returns whether moving from `self` to `next` is a legal forward step.
    ///
    /// Restart (`* -> Welcome`) is handled separately and is not a forward step.
    #[must_use]
    pub fn can_advance_to(self, next: Stage) -> bool {
        matches!(
            (self, next),
            (Stage::Welcome, Stage::Countdown)
                | (Stage::Countdown, Stage::Active)
                | (Stage::Active, Stage::Active)
                | (Stage::Active, Stage::Finished)
        )
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Stage::Welcome => "welcome",
            Stage::Countdown => "countdown",
            Stage::Active => "active",
            Stage::Finished => "finished",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stage_is_welcome() {
        assert_eq!(Stage::default(), Stage::Welcome);
    }

    #[test]
    fn forward_steps_are_allowed() {
        assert!(Stage::Welcome.can_advance_to(Stage::Countdown));
        assert!(Stage::Countdown.can_advance_to(Stage::Active));
        assert!(Stage::Active.can_advance_to(Stage::Active));
        assert!(Stage::Active.can_advance_to(Stage::Finished));
    }

    #[test]
    fn backward_and_skipping_steps_are_rejected() {
        assert!(!Stage::Countdown.can_advance_to(Stage::Welcome));
        assert!(!Stage::Welcome.can_advance_to(Stage::Active));
        assert!(!Stage::Finished.can_advance_to(Stage::Active));
        assert!(!Stage::Finished.can_advance_to(Stage::Welcome));
    }
}
