// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::quiz::{QuestionSet, TimerId};
use crate::error::LoadError;
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The one-time question load finished.
    QuestionsLoaded(Result<QuestionSet, LoadError>),
    NameChanged(String),
    Start,
    /// The player picked option `n` (zero-based).
    AnswerSelected(usize),
    Next,
    Restart,
    /// A scheduled session tick came due.
    TimerFired(TimerId),
    ToggleMusic,
    /// Frame clock for the confetti overlay. Only runs while particles live.
    ConfettiFrame(Instant),
    /// Enter pressed outside a text field.
    EnterPressed,
    /// A digit key `1..=9` was pressed; carries the zero-based option index.
    DigitPressed(usize),
}

/// Runtime flags passed from `main.rs` to the application.
///
/// Every field overrides the matching `settings.toml` value when set.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// File path or `http(s)` URL of a question list.
    pub questions: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `QUIZ_RUSH_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Pre-start countdown in seconds.
    pub countdown: Option<u32>,
    /// Time per question in seconds.
    pub question_time: Option<u32>,
}
