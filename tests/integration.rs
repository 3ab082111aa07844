// SPDX-License-Identifier: MPL-2.0
use quiz_rush::app::config::{self, Config};
use quiz_rush::application::port::ConfettiParams;
use quiz_rush::application::session::manual::{ManualScheduler, RecordingCelebration};
use quiz_rush::application::session::{LoadStatus, SessionConfig, SessionController};
use quiz_rush::domain::quiz::{CountdownSecs, QuestionSecs, QuestionSet, Stage};
use quiz_rush::error::LoadError;
use quiz_rush::infrastructure::questions::{self, QuestionSource};
use quiz_rush::ui::theming::ThemeMode;
use tempfile::tempdir;

type Session = SessionController<ManualScheduler, RecordingCelebration>;

const THREE_QUESTIONS: &str = r#"[
    { "question": "Capital of France?", "options": ["Paris", "Rome", "Berlin"], "correct": 0 },
    { "question": "2 + 2?", "options": ["3", "4"], "correct": 1 },
    { "question": "Largest ocean?", "options": ["Atlantic", "Pacific", "Indian", "Arctic"], "correct": 1 }
]"#;

fn three_questions() -> QuestionSet {
    questions::parse_questions(THREE_QUESTIONS.as_bytes()).expect("valid question list")
}

fn session(countdown: u32, question_time: u32) -> Session {
    SessionController::with_questions(
        SessionConfig {
            countdown: CountdownSecs::new(countdown),
            question_time: QuestionSecs::new(question_time),
        },
        three_questions(),
        ManualScheduler::default(),
        RecordingCelebration::default(),
    )
}

#[test]
fn full_session_with_answers_and_a_timeout() {
    let mut s = session(3, 4);
    s.set_name("Grace");
    s.start().expect("start accepted");
    assert_eq!(s.stage(), Stage::Countdown);

    s.run_ticks(2);
    assert_eq!(s.pre_start_countdown(), 1);
    s.run_ticks(1);
    assert_eq!(s.stage(), Stage::Active);
    assert_eq!(s.question_timer(), 4);

    // question 1: right answer, then a second click that must not count
    s.submit_answer(0);
    s.submit_answer(1);
    assert_eq!(s.score(), 1);
    assert_eq!(s.selected_option(), Some(0));
    s.advance();

    // question 2: nobody answers
    s.run_ticks(4);
    assert_eq!(s.current_question_index(), 2);
    assert_eq!(s.score(), 1);
    assert_eq!(s.question_timer(), 4);

    // question 3: wrong answer ends the quiz
    s.submit_answer(3);
    s.advance();

    assert_eq!(s.stage(), Stage::Finished);
    assert_eq!(s.score(), 1);
    assert!(s.armed_timer().is_none());
    assert!(s.scheduler().pending().is_empty());
    assert_eq!(
        s.celebrator().bursts(),
        vec![ConfettiParams::START, ConfettiParams::FINISH]
    );
}

#[test]
fn progress_follows_the_question_index() {
    let mut s = session(1, 10);
    s.set_name("Grace");
    s.start().expect("start accepted");
    s.run_ticks(1);

    let mut seen = Vec::new();
    while s.stage() == Stage::Active {
        seen.push(s.progress());
        s.submit_answer(0);
        s.advance();
    }
    assert_eq!(seen, vec![0.0, 50.0, 100.0]);
}

#[test]
fn restart_after_finish_plays_again_from_scratch() {
    let mut s = session(1, 10);
    s.set_name("Grace");
    s.start().expect("start accepted");
    s.run_ticks(1);
    for _ in 0..3 {
        s.submit_answer(1);
        s.advance();
    }
    assert_eq!(s.stage(), Stage::Finished);
    assert_eq!(s.score(), 2);

    s.restart();
    assert_eq!(s.stage(), Stage::Welcome);
    assert_eq!(s.score(), 0);
    assert_eq!(s.player_name(), "");
    assert_eq!(s.total_questions(), 3);

    s.set_name("Linus");
    s.start().expect("second run starts");
    assert_eq!(s.stage(), Stage::Countdown);
}

#[test]
fn restart_mid_countdown_drops_the_pending_tick() {
    let mut s = session(5, 10);
    s.set_name("Grace");
    s.start().expect("start accepted");
    s.run_ticks(2);

    s.restart();
    assert!(s.scheduler().pending().is_empty());
    s.run_ticks(10);
    assert_eq!(s.stage(), Stage::Welcome);
    assert_eq!(s.pre_start_countdown(), 5);
}

#[test]
fn failed_load_keeps_the_player_on_welcome() {
    let mut s: Session = SessionController::new(
        SessionConfig::default(),
        ManualScheduler::default(),
        RecordingCelebration::default(),
    );
    s.questions_loaded(Err(LoadError::Empty));
    s.set_name("Grace");

    assert!(s.start().is_err());
    assert_eq!(s.stage(), Stage::Welcome);
    assert!(matches!(s.load_status(), LoadStatus::Failed(LoadError::Empty)));
    assert!(s.celebrator().bursts().is_empty());
}

#[tokio::test]
async fn questions_load_from_a_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("questions.json");
    tokio::fs::write(&path, THREE_QUESTIONS)
        .await
        .expect("write questions");

    let set = questions::load(QuestionSource::parse(&path.to_string_lossy()))
        .await
        .expect("file loads");
    assert_eq!(set.len(), 3);
}

#[tokio::test]
async fn missing_file_is_an_io_error() {
    let dir = tempdir().expect("temp dir");
    let result = questions::load(QuestionSource::File(dir.path().join("nope.json"))).await;
    assert!(matches!(result, Err(LoadError::Io(_))));
}

#[tokio::test]
async fn embedded_questions_are_playable() {
    let set = questions::load(QuestionSource::Embedded)
        .await
        .expect("embedded set is valid");
    assert!(!set.is_empty());
}

#[test]
fn config_round_trip_feeds_session_timings() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    let mut saved = Config::default();
    saved.general.theme_mode = ThemeMode::Dark;
    saved.quiz.countdown_secs = Some(3);
    saved.quiz.question_secs = Some(15);
    saved.quiz.source = Some("https://example.com/q.json".to_string());
    saved.audio.music_enabled = Some(true);
    config::save_to_path(&saved, &path).expect("save config");

    let loaded = config::load_from_path(&path).expect("load config");
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    assert_eq!(loaded.quiz.countdown().value(), 3);
    assert_eq!(loaded.quiz.question_time().value(), 15);
    assert_eq!(
        loaded.quiz.question_source(),
        QuestionSource::Url("https://example.com/q.json".to_string())
    );
    assert_eq!(loaded.audio.music_enabled, Some(true));
}
