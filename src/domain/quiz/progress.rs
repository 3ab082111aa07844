// SPDX-License-Identifier: MPL-2.0
//! Progress through a question set.

/// Percentage of the quiz covered when question `index` is showing.
///
/// The first question is 0% and the last is 100%. A single-question quiz has
/// nothing to progress through, so it reports 100%.
#[must_use]
pub fn progress_percent(index: usize, total: usize) -> f32 {
    if total <= 1 {
        return 100.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio = index as f32 / (total - 1) as f32;
    (ratio * 100.0).clamp(0.0, 100.0)
}

/// Verdict on a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    #[must_use]
    pub fn from_match(is_correct: bool) -> Self {
        if is_correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }
}
