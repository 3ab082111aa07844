// SPDX-License-Identifier: MPL-2.0
//! Timer value objects: bounded durations, countdown values and timer ids.

// =============================================================================
// Bounds
// =============================================================================

/// Pre-start countdown bounds, in seconds.
pub mod countdown_bounds {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 30;
    pub const DEFAULT: u32 = 5;
}

/// Per-question time limit bounds, in seconds.
pub mod question_bounds {
    pub const MIN: u32 = 3;
    pub const MAX: u32 = 120;
    pub const DEFAULT: u32 = 10;
}

// =============================================================================
// CountdownSecs / QuestionSecs
// =============================================================================

/// Length of the pre-start countdown, clamped to [`countdown_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownSecs(u32);

impl CountdownSecs {
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(countdown_bounds::MIN, countdown_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for CountdownSecs {
    fn default() -> Self {
        Self(countdown_bounds::DEFAULT)
    }
}

/// Time allowed per question, clamped to [`question_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionSecs(u32);

impl QuestionSecs {
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(question_bounds::MIN, question_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for QuestionSecs {
    fn default() -> Self {
        Self(question_bounds::DEFAULT)
    }
}

// =============================================================================
// Timer identity
// =============================================================================

/// Which of the two session timers a tick belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Counts down before the first question.
    PreStart,
    /// Counts down the time left on the current question.
    Question,
}

/// Identifies one armed timer.
///
/// Every time a timer is (re)armed it gets a new generation, so a tick that was
/// scheduled for a previous stage or question never matches the armed id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId {
    pub kind: TimerKind,
    pub generation: u64,
}

impl TimerId {
    #[must_use]
    pub fn new(kind: TimerKind, generation: u64) -> Self {
        Self { kind, generation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_is_clamped() {
        assert_eq!(CountdownSecs::new(0).value(), countdown_bounds::MIN);
        assert_eq!(CountdownSecs::new(500).value(), countdown_bounds::MAX);
        assert_eq!(CountdownSecs::new(7).value(), 7);
        assert_eq!(CountdownSecs::default().value(), 5);
    }

    #[test]
    fn question_time_is_clamped() {
        assert_eq!(QuestionSecs::new(1).value(), question_bounds::MIN);
        assert_eq!(QuestionSecs::new(1000).value(), question_bounds::MAX);
        assert_eq!(QuestionSecs::default().value(), 10);
    }

    #[test]
    fn timer_ids_differ_by_generation() {
        let a = TimerId::new(TimerKind::Question, 1);
        let b = TimerId::new(TimerKind::Question, 2);
        assert_ne!(a, b);
        assert_eq!(a, TimerId::new(TimerKind::Question, 1));
    }
}
