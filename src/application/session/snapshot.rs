// SPDX-License-Identifier: MPL-2.0
//! Read-only view of a session, produced once per render.

use crate::domain::quiz::{Stage, Verdict};
use crate::error::LoadError;

use super::controller::ValidationError;

/// Load state as seen by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadView<'a> {
    Loading,
    Ready,
    Failed(&'a LoadError),
}

/// The question on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionView<'a> {
    /// One-based question number.
    pub number: usize,
    pub total: usize,
    pub text: &'a str,
    pub options: &'a [String],
    /// Index of the right option. Only meant to be shown after an answer.
    pub correct: usize,
}

/// Everything the presentation layer needs to draw a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSnapshot<'a> {
    pub load: LoadView<'a>,
    pub stage: Stage,
    pub player_name: &'a str,
    pub pre_start_countdown: u32,
    pub question_timer: u32,
    /// Present only while a question is being answered.
    pub question: Option<QuestionView<'a>>,
    pub progress: f32,
    pub score: u32,
    pub total: usize,
    pub selected_option: Option<usize>,
    pub verdict: Option<Verdict>,
    pub feedback_visible: bool,
    pub validation_error: Option<&'a ValidationError>,
}

impl SessionSnapshot<'_> {
    /// Whether the "next question" control should be offered.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.stage == Stage::Active && self.selected_option.is_some()
    }

    /// Whether option buttons should still accept clicks.
    #[must_use]
    pub fn accepts_answers(&self) -> bool {
        self.stage == Stage::Active && self.selected_option.is_none()
    }
}
