// SPDX-License-Identifier: MPL-2.0
//! Boxed notice for load failures and settings warnings.
//!
//! ```ignore
//! ErrorDisplay::new(ErrorSeverity::Error)
//!     .title("Error: Failed to load questions: HTTP 404 Not Found")
//!     .hint("Check the --questions argument or the [quiz] source setting.")
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use iced::widget::{container, text, Column, Container, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Severity level determines the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorSeverity {
    /// The quiz cannot run (red).
    #[default]
    Error,
    /// Something was ignored, the quiz still runs (orange).
    Warning,
}

impl ErrorSeverity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            ErrorSeverity::Error => palette::ERROR_500,
            ErrorSeverity::Warning => palette::WARNING_500,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ErrorDisplay {
    severity: ErrorSeverity,
    title: Option<String>,
    message: Option<String>,
    hint: Option<String>,
}

impl ErrorDisplay {
    #[must_use]
    pub fn new(severity: ErrorSeverity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    /// Main line, drawn in the severity color.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Secondary line suggesting what the player can do about it.
    #[must_use]
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let accent = self.severity.color();

        let mut content = Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill);

        if let Some(title) = self.title {
            content = content.push(Text::new(title).size(typography::TITLE_SM).style(
                move |_theme: &Theme| text::Style {
                    color: Some(accent),
                },
            ));
        }
        if let Some(message) = self.message {
            content = content.push(Text::new(message).size(typography::BODY));
        }
        if let Some(hint) = self.hint {
            content = content.push(Text::new(hint).size(typography::CAPTION).style(
                |theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().secondary.base.text),
                },
            ));
        }

        Container::new(content)
            .width(Length::Fill)
            .max_width(sizing::CARD_WIDTH)
            .padding(spacing::MD)
            .style(move |theme: &Theme| container::Style {
                background: Some(iced::Background::Color(
                    theme.extended_palette().background.weak.color,
                )),
                border: iced::Border {
                    color: accent,
                    width: 1.0,
                    radius: radius::MD.into(),
                },
                text_color: Some(theme.palette().text),
                ..Default::default()
            })
            .into()
    }
}
