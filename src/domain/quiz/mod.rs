// SPDX-License-Identifier: MPL-2.0
//! Quiz domain types: questions, stages, timers and progress.

mod progress;
mod question;
mod stage;
pub mod timing;

pub use progress::{progress_percent, Verdict};
pub use question::{Question, QuestionError, QuestionSet, MIN_OPTIONS};
pub use stage::Stage;
pub use timing::{CountdownSecs, QuestionSecs, TimerId, TimerKind};
