// SPDX-License-Identifier: MPL-2.0
//! The quiz session state machine.
//!
//! `SessionController` owns every piece of mutable quiz state. It reacts to
//! five user actions, to timer ticks and to the one-time question load, and
//! exposes a read-only [`SessionSnapshot`] for rendering.
//!
//! Timer discipline: at most one timer is armed at a time. Entering a stage or
//! a new question always cancels the armed timer *before* arming the next one,
//! and every arm gets a fresh [`TimerId`]. `tick` drops ids that are not the
//! armed one, so a late tick from a previous stage cannot touch state.

use super::snapshot::{LoadView, QuestionView, SessionSnapshot};
use crate::application::port::{Celebrate, ConfettiParams, TimerScheduler, TICK_INTERVAL};
use crate::domain::quiz::{
    progress_percent, CountdownSecs, QuestionSecs, QuestionSet, Stage, TimerId, TimerKind,
    Verdict,
};
use crate::error::LoadError;
use thiserror::Error;

/// Timing knobs for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    pub countdown: CountdownSecs,
    pub question_time: QuestionSecs,
}

/// Where the one-time question load stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(LoadError),
}

/// Rejections of the `start` action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your name")]
    EmptyName,
    #[error("Questions are not loaded yet")]
    QuestionsNotReady,
}

/// Per-session fields. Rebuilt from scratch on restart.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SessionState {
    player_name: String,
    stage: Stage,
    pre_start_countdown: u32,
    current_question: usize,
    selected_option: Option<usize>,
    feedback_visible: bool,
    question_timer: u32,
    score: u32,
    validation_error: Option<ValidationError>,
}

impl SessionState {
    fn new(config: &SessionConfig) -> Self {
        Self {
            player_name: String::new(),
            stage: Stage::Welcome,
            pre_start_countdown: config.countdown.value(),
            current_question: 0,
            selected_option: None,
            feedback_visible: false,
            question_timer: config.question_time.value(),
            score: 0,
            validation_error: None,
        }
    }
}

/// Owns the quiz state and drives it through its stages.
pub struct SessionController<S, C> {
    config: SessionConfig,
    load: LoadStatus,
    questions: Option<QuestionSet>,
    state: SessionState,
    armed: Option<TimerId>,
    next_generation: u64,
    scheduler: S,
    celebrator: C,
}

impl<S, C> std::fmt::Debug for SessionController<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("load", &self.load)
            .field("stage", &self.state.stage)
            .field("question", &self.state.current_question)
            .field("score", &self.state.score)
            .field("armed", &self.armed)
            .finish_non_exhaustive()
    }
}

impl<S: TimerScheduler, C: Celebrate> SessionController<S, C> {
    /// Creates a controller waiting for its questions.
    pub fn new(config: SessionConfig, scheduler: S, celebrator: C) -> Self {
        Self {
            state: SessionState::new(&config),
            config,
            load: LoadStatus::Loading,
            questions: None,
            armed: None,
            next_generation: 0,
            scheduler,
            celebrator,
        }
    }

    /// Creates a controller that already has its questions.
    pub fn with_questions(
        config: SessionConfig,
        questions: QuestionSet,
        scheduler: S,
        celebrator: C,
    ) -> Self {
        let mut controller = Self::new(config, scheduler, celebrator);
        controller.questions_loaded(Ok(questions));
        controller
    }

    // =========================================================================
    // Inbound events
    // =========================================================================

    /// Records the outcome of the question load. Only the first call counts.
    pub fn questions_loaded(&mut self, result: Result<QuestionSet, LoadError>) {
        if self.load != LoadStatus::Loading {
            tracing::debug!("ignoring repeated question load result");
            return;
        }
        match result {
            Ok(questions) => {
                tracing::info!(count = questions.len(), "questions loaded");
                self.questions = Some(questions);
                self.load = LoadStatus::Ready;
            }
            Err(err) => {
                tracing::error!(error = %err, "question load failed");
                self.load = LoadStatus::Failed(err);
            }
        }
    }

    /// Updates the player name. Only editable on the welcome screen.
    pub fn set_name(&mut self, text: impl Into<String>) {
        if self.state.stage != Stage::Welcome {
            tracing::debug!(stage = self.state.stage.label(), "ignoring name change");
            return;
        }
        self.state.player_name = text.into();
        if !self.state.player_name.is_empty() {
            self.state.validation_error = None;
        }
    }

    /// Leaves the welcome screen and starts the pre-start countdown.
    ///
    /// Calls outside [`Stage::Welcome`] are ignored and return `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] if the trimmed name is empty and
    /// [`ValidationError::QuestionsNotReady`] if no question set is available.
    /// The stage stays on welcome in both cases.
    pub fn start(&mut self) -> Result<(), ValidationError> {
        if self.state.stage != Stage::Welcome {
            tracing::debug!(stage = self.state.stage.label(), "ignoring start");
            return Ok(());
        }
        let verdict = if self.load != LoadStatus::Ready {
            Err(ValidationError::QuestionsNotReady)
        } else if self.state.player_name.trim().is_empty() {
            Err(ValidationError::EmptyName)
        } else {
            Ok(())
        };
        if let Err(err) = &verdict {
            tracing::debug!(error = %err, "start rejected");
            self.state.validation_error = Some(err.clone());
            return verdict;
        }

        self.state.validation_error = None;
        self.state.pre_start_countdown = self.config.countdown.value();
        self.celebrator.celebrate(ConfettiParams::START);
        self.enter_stage(Stage::Countdown);
        Ok(())
    }

    /// Records the answer for the current question. First answer wins.
    ///
    /// Ignored outside [`Stage::Active`], when the question already has an
    /// answer, or when `index` is not one of the options.
    pub fn submit_answer(&mut self, index: usize) {
        if self.state.stage != Stage::Active {
            tracing::debug!(stage = self.state.stage.label(), "ignoring answer");
            return;
        }
        if self.state.selected_option.is_some() {
            tracing::debug!(index, "ignoring second answer");
            return;
        }
        let Some(question) = self.current_question() else {
            return;
        };
        if index >= question.options().len() {
            tracing::debug!(index, "ignoring answer outside option range");
            return;
        }

        let correct = question.is_correct(index);
        self.state.selected_option = Some(index);
        self.state.feedback_visible = true;
        if correct {
            self.state.score += 1;
        }
        tracing::debug!(
            question = self.state.current_question,
            index,
            correct,
            score = self.state.score,
            "answer recorded"
        );
    }

    /// Moves to the next question, or to the results after the last one.
    ///
    /// Ignored outside [`Stage::Active`].
    pub fn advance(&mut self) {
        if self.state.stage != Stage::Active {
            tracing::debug!(stage = self.state.stage.label(), "ignoring advance");
            return;
        }
        let last = self.questions.as_ref().map_or(0, QuestionSet::last_index);
        if self.state.current_question >= last {
            self.enter_stage(Stage::Finished);
            return;
        }

        self.state.current_question += 1;
        self.state.selected_option = None;
        self.state.feedback_visible = false;
        self.state.question_timer = self.config.question_time.value();
        self.arm(TimerKind::Question);
        tracing::debug!(question = self.state.current_question, "next question");
    }

    /// Resets the session to its creation-time defaults, keeping the questions.
    ///
    /// Ignored while loading and after a failed load.
    pub fn restart(&mut self) {
        if self.load != LoadStatus::Ready {
            tracing::debug!("ignoring restart without questions");
            return;
        }
        self.disarm();
        self.state = SessionState::new(&self.config);
        tracing::info!("session restarted");
    }

    /// Applies one timer tick. Ticks for any id but the armed one are dropped.
    pub fn tick(&mut self, id: TimerId) {
        if self.armed != Some(id) {
            tracing::debug!(?id, armed = ?self.armed, "dropping stale tick");
            return;
        }
        match id.kind {
            TimerKind::PreStart => {
                self.state.pre_start_countdown = self.state.pre_start_countdown.saturating_sub(1);
                if self.state.pre_start_countdown == 0 {
                    self.begin_questions();
                } else {
                    self.scheduler.schedule(id, TICK_INTERVAL);
                }
            }
            TimerKind::Question => {
                self.state.question_timer = self.state.question_timer.saturating_sub(1);
                if self.state.question_timer == 0 {
                    tracing::debug!(question = self.state.current_question, "time is up");
                    self.advance();
                } else {
                    self.scheduler.schedule(id, TICK_INTERVAL);
                }
            }
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    fn begin_questions(&mut self) {
        self.state.current_question = 0;
        self.state.selected_option = None;
        self.state.feedback_visible = false;
        self.state.question_timer = self.config.question_time.value();
        self.enter_stage(Stage::Active);
    }

    fn enter_stage(&mut self, next: Stage) {
        debug_assert!(self.state.stage.can_advance_to(next));
        self.disarm();
        tracing::info!(
            from = self.state.stage.label(),
            to = next.label(),
            "stage change"
        );
        self.state.stage = next;
        match next {
            Stage::Countdown => self.arm(TimerKind::PreStart),
            Stage::Active => self.arm(TimerKind::Question),
            Stage::Finished => {
                tracing::info!(
                    player = %self.state.player_name,
                    score = self.state.score,
                    total = self.total_questions(),
                    "quiz finished"
                );
                self.celebrator.celebrate(ConfettiParams::FINISH);
            }
            Stage::Welcome => {}
        }
    }

    fn arm(&mut self, kind: TimerKind) {
        self.disarm();
        self.next_generation += 1;
        let id = TimerId::new(kind, self.next_generation);
        self.armed = Some(id);
        self.scheduler.schedule(id, TICK_INTERVAL);
    }

    fn disarm(&mut self) {
        if let Some(id) = self.armed.take() {
            self.scheduler.cancel(id);
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Read-only view of everything the presentation layer renders.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        let load = match &self.load {
            LoadStatus::Loading => LoadView::Loading,
            LoadStatus::Ready => LoadView::Ready,
            LoadStatus::Failed(err) => LoadView::Failed(err),
        };
        let question = if self.state.stage == Stage::Active {
            self.current_question().map(|q| QuestionView {
                number: self.state.current_question + 1,
                total: self.total_questions(),
                text: q.text(),
                options: q.options(),
                correct: q.correct(),
            })
        } else {
            None
        };

        SessionSnapshot {
            load,
            stage: self.state.stage,
            player_name: &self.state.player_name,
            pre_start_countdown: self.state.pre_start_countdown,
            question_timer: self.state.question_timer,
            question,
            progress: self.progress(),
            score: self.state.score,
            total: self.total_questions(),
            selected_option: self.state.selected_option,
            verdict: self.verdict(),
            feedback_visible: self.state.feedback_visible,
            validation_error: self.state.validation_error.as_ref(),
        }
    }

    /// Progress through the quiz in percent. See [`progress_percent`].
    #[must_use]
    pub fn progress(&self) -> f32 {
        progress_percent(self.state.current_question, self.total_questions())
    }

    /// Verdict on the current selection, if there is one.
    #[must_use]
    pub fn verdict(&self) -> Option<Verdict> {
        let index = self.state.selected_option?;
        let question = self.current_question()?;
        Some(Verdict::from_match(question.is_correct(index)))
    }

    fn current_question(&self) -> Option<&crate::domain::quiz::Question> {
        self.questions
            .as_ref()
            .and_then(|set| set.get(self.state.current_question))
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.as_ref().map_or(0, QuestionSet::len)
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.state.stage
    }

    #[must_use]
    pub fn load_status(&self) -> &LoadStatus {
        &self.load
    }

    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.state.player_name
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score
    }

    #[must_use]
    pub fn current_question_index(&self) -> usize {
        self.state.current_question
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<usize> {
        self.state.selected_option
    }

    #[must_use]
    pub fn feedback_visible(&self) -> bool {
        self.state.feedback_visible
    }

    #[must_use]
    pub fn pre_start_countdown(&self) -> u32 {
        self.state.pre_start_countdown
    }

    #[must_use]
    pub fn question_timer(&self) -> u32 {
        self.state.question_timer
    }

    #[must_use]
    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.state.validation_error.as_ref()
    }

    /// The timer currently allowed to tick, if any.
    #[must_use]
    pub fn armed_timer(&self) -> Option<TimerId> {
        self.armed
    }

    #[must_use]
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn celebrator(&self) -> &C {
        &self.celebrator
    }
}
