// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::domain::quiz::Verdict;
use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// The centered card every screen is drawn on.
///
/// Derived from the active theme background so it reads in light and dark
/// modes alike.
pub fn card(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    let base = extended.background.weak.color;

    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            radius: radius::LG.into(),
            width: 1.0,
            color: extended.background.strong.color,
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Banner under the options telling the player how they did.
pub fn feedback(verdict: Verdict) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let accent = match verdict {
            Verdict::Correct => palette::SUCCESS_500,
            Verdict::Incorrect => palette::ERROR_500,
        };
        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..accent
            })),
            text_color: Some(accent),
            border: Border {
                radius: radius::MD.into(),
                width: 1.0,
                color: accent,
            },
            ..Default::default()
        }
    }
}

/// Inline validation or load error.
pub fn error(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(palette::ERROR_500),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_banner_uses_verdict_color() {
        let right = feedback(Verdict::Correct)(&Theme::Dark);
        let wrong = feedback(Verdict::Incorrect)(&Theme::Dark);
        assert_eq!(right.text_color, Some(palette::SUCCESS_500));
        assert_eq!(wrong.text_color, Some(palette::ERROR_500));
    }

    #[test]
    fn card_has_rounded_border() {
        let style = card(&Theme::Light);
        assert!(style.background.is_some());
        assert_eq!(style.border.width, 1.0);
    }
}
