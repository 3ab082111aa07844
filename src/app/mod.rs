// SPDX-License-Identifier: MPL-2.0
//! Application root state and the iced update loop.
//!
//! `App` owns the session controller and the presentation-only state around
//! it (music, confetti, theme). Every message is forwarded to the controller;
//! afterwards the timer tasks it scheduled and the bursts it requested are
//! drained and handed to the runtime and the confetti canvas.

pub mod config;
mod message;
pub mod paths;
mod subscription;
pub mod view;

pub use message::{Flags, Message};

use crate::application::port::MusicPlayer;
use crate::application::session::{SessionConfig, SessionController};
use crate::domain::quiz::{CountdownSecs, QuestionSecs, Stage};
use crate::infrastructure::{questions, ConfettiQueue, QuestionSource, SynthMusic, TaskScheduler};
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::ConfettiField;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Controller type driven by the iced runtime.
pub type Session = SessionController<TaskScheduler<Message>, ConfettiQueue>;

/// Root iced application state.
pub struct App {
    session: Session,
    music: SynthMusic,
    confetti: ConfettiField,
    theme_mode: ThemeMode,
    /// Warning from reading `settings.toml`, shown on the welcome screen.
    config_notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("session", &self.session)
            .field("music", &self.music)
            .field("confetti", &self.confetti.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 680;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

const APP_TITLE: &str = "Quiz Rush";

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // iced 0.14 wants a `Fn` boot closure; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Reads the settings, applies CLI overrides and starts the question load.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_notice) = config::load();

        let session_config = SessionConfig {
            countdown: flags
                .countdown
                .map_or_else(|| config.quiz.countdown(), CountdownSecs::new),
            question_time: flags
                .question_time
                .map_or_else(|| config.quiz.question_time(), QuestionSecs::new),
        };
        let source = flags
            .questions
            .as_deref()
            .map_or_else(|| config.quiz.question_source(), QuestionSource::parse);

        let mut app = App {
            session: SessionController::new(
                session_config,
                TaskScheduler::new(Message::TimerFired),
                ConfettiQueue::default(),
            ),
            music: SynthMusic::new(config.audio.volume()),
            confetti: ConfettiField::default(),
            theme_mode: config.general.theme_mode,
            config_notice,
        };

        let music_enabled = config
            .audio
            .music_enabled
            .unwrap_or(config::DEFAULT_MUSIC_ENABLED);
        if music_enabled {
            app.music.play();
        }

        tracing::info!(
            %source,
            countdown = session_config.countdown.value(),
            question_time = session_config.question_time.value(),
            "starting"
        );
        let load = Task::perform(questions::load(source), Message::QuestionsLoaded);
        (app, load)
    }

    fn title(&self) -> String {
        let snapshot = self.session.snapshot();
        match (snapshot.stage, snapshot.question) {
            (Stage::Active, Some(q)) => {
                format!("Question {}/{} - {APP_TITLE}", q.number, q.total)
            }
            (Stage::Finished, _) => format!("Results - {APP_TITLE}"),
            _ => APP_TITLE.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_confetti_subscription(self.confetti.is_alive()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QuestionsLoaded(result) => self.session.questions_loaded(result),
            Message::NameChanged(name) => self.session.set_name(name),
            Message::Start => self.start(),
            Message::AnswerSelected(index) | Message::DigitPressed(index) => {
                self.session.submit_answer(index);
            }
            Message::Next => self.session.advance(),
            Message::Restart => self.session.restart(),
            Message::TimerFired(id) => self.session.tick(id),
            Message::ToggleMusic => self.music.toggle(),
            Message::ConfettiFrame(_) => self.confetti.step(),
            Message::EnterPressed => self.on_enter(),
        }
        self.flush_effects()
    }

    fn view(&self) -> Element<'_, Message> {
        let config = self.session.config();
        view::view(view::ViewContext {
            session: self.session.snapshot(),
            countdown_total: config.countdown.value(),
            question_total: config.question_time.value(),
            music_playing: self.music.is_playing(),
            confetti: &self.confetti,
            notice: self.config_notice.as_deref(),
        })
    }

    fn start(&mut self) {
        if let Err(err) = self.session.start() {
            tracing::debug!(error = %err, "start refused");
        }
    }

    /// Enter is the primary action of whatever screen is showing.
    fn on_enter(&mut self) {
        match self.session.stage() {
            Stage::Welcome => self.start(),
            Stage::Active if self.session.snapshot().can_advance() => self.session.advance(),
            Stage::Finished => self.session.restart(),
            Stage::Countdown | Stage::Active => {}
        }
    }

    /// Launches requested confetti and hands scheduled ticks to the runtime.
    fn flush_effects(&mut self) -> Task<Message> {
        for burst in self.session.celebrator().drain() {
            self.confetti.launch(burst);
        }
        self.session.scheduler_mut().take_tasks()
    }
}
