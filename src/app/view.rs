// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! One screen per session stage, drawn on a centered card. The music toggle
//! sits above every screen and the confetti canvas is stacked on top while
//! particles are alive.

use super::Message;
use crate::application::session::{LoadView, QuestionView, SessionSnapshot};
use crate::domain::quiz::{Stage, Verdict};
use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{self, AnswerLook};
use crate::ui::widgets::{ConfettiField, TimerRing};
use iced::widget::{
    button, progress_bar, text, text_input, Column, Container, Row, Space, Stack, Text,
};
use iced::{alignment, Element, Length};

/// Placeholder of the name input.
pub const NAME_PLACEHOLDER: &str = "Enter your name";

/// Everything needed to draw one frame.
pub struct ViewContext<'a> {
    pub session: SessionSnapshot<'a>,
    /// Configured countdown and per-question lengths, for the timer ring.
    pub countdown_total: u32,
    pub question_total: u32,
    pub music_playing: bool,
    pub confetti: &'a ConfettiField,
    /// Settings warning shown on the welcome screen.
    pub notice: Option<&'a str>,
}

/// Renders the screen for the current stage.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen: Element<'_, Message> = match ctx.session.load {
        LoadView::Loading => view_loading(),
        LoadView::Failed(err) => ErrorDisplay::new(ErrorSeverity::Error)
            .title(format!("Error: {err}"))
            .hint("Check the --questions argument or the [quiz] source setting.")
            .view(),
        LoadView::Ready => match ctx.session.stage {
            Stage::Welcome => view_welcome(&ctx),
            Stage::Countdown => view_countdown(&ctx),
            Stage::Active => view_active(&ctx),
            Stage::Finished => view_finished(&ctx.session),
        },
    };

    let card = Container::new(screen)
        .width(Length::Fill)
        .max_width(sizing::CARD_WIDTH)
        .padding(spacing::XL)
        .style(styles::container::card);

    let page = Column::new()
        .push(music_bar(ctx.music_playing))
        .push(
            Container::new(card)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .padding(spacing::LG),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    if ctx.confetti.is_alive() {
        Stack::new()
            .push(page)
            .push(ctx.confetti.view())
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        page.into()
    }
}

/// Label of the music toggle for the given state.
#[must_use]
pub fn music_label(playing: bool) -> &'static str {
    if playing {
        "♪ Music: On"
    } else {
        "♪ Music: Off"
    }
}

fn music_bar<'a>(playing: bool) -> Element<'a, Message> {
    let toggle = button(text(music_label(playing)).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::toggle(playing))
        .on_press(Message::ToggleMusic);

    Row::new()
        .push(Space::new().width(Length::Fill))
        .push(toggle)
        .padding(spacing::SM)
        .width(Length::Fill)
        .into()
}

fn heading<'a>(content: impl text::IntoFragment<'a>) -> Text<'a> {
    text(content)
        .size(typography::TITLE_LG)
        .center()
        .width(Length::Fill)
}

fn primary_button<'a>(label: &'a str, message: Option<Message>) -> Element<'a, Message> {
    button(
        text(label)
            .size(typography::BODY_LG)
            .center()
            .width(Length::Fill),
    )
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::primary)
    .on_press_maybe(message)
    .into()
}

fn view_loading<'a>() -> Element<'a, Message> {
    Column::new()
        .push(heading("Loading questions..."))
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn view_welcome<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let session = &ctx.session;
    let name_input = text_input(NAME_PLACEHOLDER, session.player_name)
        .on_input(Message::NameChanged)
        .on_submit(Message::Start)
        .padding(spacing::SM)
        .size(typography::BODY_LG);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(heading("Welcome to my Amazing Quiz Game💥"))
        .push(name_input);

    if let Some(err) = session.validation_error {
        content = content.push(
            Container::new(text(err.to_string()).size(typography::BODY))
                .style(styles::container::error),
        );
    }

    content = content.push(primary_button("Start Quiz", Some(Message::Start)));

    if let Some(notice) = ctx.notice {
        content = content.push(
            ErrorDisplay::new(ErrorSeverity::Warning)
                .title("Settings ignored")
                .message(notice)
                .hint("Defaults are in use for this session.")
                .view(),
        );
    }

    content.into()
}

fn view_countdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let session = &ctx.session;
    let ring_size = typography::DISPLAY * 1.6;
    let number = Container::new(
        text(session.pre_start_countdown.to_string()).size(typography::DISPLAY),
    )
    .width(Length::Fixed(ring_size))
    .height(Length::Fixed(ring_size))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    let dial = Stack::new()
        .push(TimerRing::new(session.pre_start_countdown, ctx.countdown_total, ring_size).view())
        .push(number);

    Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(heading(format!("Welcome, {}!", session.player_name)))
        .push(text("Get Ready! The quiz starts in...").size(typography::TITLE_SM))
        .push(dial)
        .into()
}

fn view_active<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let session = &ctx.session;
    let Some(question) = session.question else {
        return view_loading();
    };

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            text(format!("Question {}/{}", question.number, question.total))
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(text(format!("Score: {}", session.score)).size(typography::BODY));

    let progress = progress_bar(0.0..=100.0, session.progress)
        .girth(sizing::PROGRESS_HEIGHT)
        .style(styles::progress_bar::quiz);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(progress)
        .push(text(question.text).size(typography::TITLE_MD))
        .push(options(question, session));

    if session.feedback_visible {
        if let Some(verdict) = session.verdict {
            content = content.push(feedback_banner(verdict));
        }
    }
    if session.can_advance() {
        content = content.push(primary_button("Next Question", Some(Message::Next)));
    }

    let timer = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(TimerRing::new(session.question_timer, ctx.question_total, spacing::XL).view())
        .push(
            text(format!("Time remaining: {} seconds", session.question_timer))
                .size(typography::BODY),
        );
    content.push(timer).into()
}

fn options<'a>(question: QuestionView<'a>, session: &SessionSnapshot<'a>) -> Element<'a, Message> {
    let accepts = session.accepts_answers();
    let buttons = question.options.iter().enumerate().map(|(i, label)| {
        let look = AnswerLook::for_option(i, session.selected_option, question.correct);
        let caption = if i < 9 {
            format!("{}. {label}", i + 1)
        } else {
            label.clone()
        };
        button(text(caption).size(typography::BODY_LG).width(Length::Fill))
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(styles::button::answer(look))
            .on_press_maybe(accepts.then_some(Message::AnswerSelected(i)))
            .into()
    });

    Column::with_children(buttons)
        .spacing(spacing::XS)
        .width(Length::Fill)
        .into()
}

/// Text of the answer feedback banner.
#[must_use]
pub fn feedback_text(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Correct => "Correct! 🎉",
        Verdict::Incorrect => "Incorrect! 😞",
    }
}

fn feedback_banner<'a>(verdict: Verdict) -> Element<'a, Message> {
    Container::new(text(feedback_text(verdict)).size(typography::TITLE_SM))
        .width(Length::Fill)
        .padding(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::feedback(verdict))
        .into()
}

/// Closing line of the results screen.
#[must_use]
pub fn results_text(name: &str, score: u32, total: usize) -> String {
    format!("Well done, {name}! Your score is {score}/{total}.")
}

fn view_finished<'a>(session: &SessionSnapshot<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(heading("Quiz Finished!"))
        .push(
            text(results_text(session.player_name, session.score, session.total))
                .size(typography::TITLE_SM),
        )
        .push(primary_button("Restart", Some(Message::Restart)))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_line_matches_the_player() {
        assert_eq!(
            results_text("Ada", 2, 3),
            "Well done, Ada! Your score is 2/3."
        );
    }

    #[test]
    fn feedback_texts_differ_by_verdict() {
        assert_eq!(feedback_text(Verdict::Correct), "Correct! 🎉");
        assert_eq!(feedback_text(Verdict::Incorrect), "Incorrect! 😞");
    }

    #[test]
    fn music_label_reflects_state() {
        assert_ne!(music_label(true), music_label(false));
    }
}
