// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// How an answer option is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerLook {
    /// No answer yet: every option is clickable.
    Open,
    /// The option the player picked, and it was right.
    PickedCorrect,
    /// The option the player picked, and it was wrong.
    PickedWrong,
    /// The right option, revealed after a wrong pick.
    Revealed,
    /// Any other option once feedback is shown.
    Dimmed,
}

impl AnswerLook {
    /// Chooses the look of option `index` given the current selection.
    #[must_use]
    pub fn for_option(index: usize, selected: Option<usize>, correct: usize) -> Self {
        match selected {
            None => AnswerLook::Open,
            Some(picked) if picked == index && index == correct => AnswerLook::PickedCorrect,
            Some(picked) if picked == index => AnswerLook::PickedWrong,
            Some(_) if index == correct => AnswerLook::Revealed,
            Some(_) => AnswerLook::Dimmed,
        }
    }
}

/// Main call to action: Start Quiz, Next Question, Restart.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Answer option button, colored by [`AnswerLook`].
pub fn answer(look: AnswerLook) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let is_light = matches!(theme, Theme::Light);
        let neutral_bg = if is_light {
            palette::GRAY_100
        } else {
            palette::GRAY_700
        };
        let neutral_text = if is_light { palette::GRAY_900 } else { WHITE };

        let (background, text_color, border_color) = match look {
            AnswerLook::Open => {
                let bg = if status == button::Status::Hovered {
                    if is_light {
                        palette::GRAY_200
                    } else {
                        Color::from_rgb(0.35, 0.35, 0.35)
                    }
                } else {
                    neutral_bg
                };
                let border = if status == button::Status::Hovered {
                    palette::PRIMARY_500
                } else {
                    palette::GRAY_400
                };
                (bg, neutral_text, border)
            }
            AnswerLook::PickedCorrect | AnswerLook::Revealed => {
                (palette::SUCCESS_500, WHITE, palette::SUCCESS_500)
            }
            AnswerLook::PickedWrong => (palette::ERROR_500, WHITE, palette::ERROR_500),
            AnswerLook::Dimmed => (
                Color {
                    a: opacity::DIMMED,
                    ..neutral_bg
                },
                Color {
                    a: opacity::DIMMED,
                    ..neutral_text
                },
                Color::TRANSPARENT,
            ),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Small pill button for the music toggle.
pub fn toggle(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let is_light = matches!(theme, Theme::Light);
        let background = match (active, status) {
            (true, button::Status::Hovered) => palette::PRIMARY_400,
            (true, _) => palette::PRIMARY_500,
            (false, button::Status::Hovered) if is_light => palette::GRAY_200,
            (false, button::Status::Hovered) => Color::from_rgb(0.35, 0.35, 0.35),
            (false, _) if is_light => palette::GRAY_100,
            (false, _) => palette::GRAY_700,
        };
        let text_color = if active || !is_light {
            WHITE
        } else {
            palette::GRAY_900
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn background(style: &button::Style) -> Color {
        match style.background {
            Some(Background::Color(color)) => color,
            _ => panic!("expected a solid background"),
        }
    }

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(background(&style), palette::PRIMARY_500);
    }

    #[test]
    fn look_before_any_answer_is_open() {
        for i in 0..4 {
            assert_eq!(AnswerLook::for_option(i, None, 2), AnswerLook::Open);
        }
    }

    #[test]
    fn wrong_pick_reveals_the_correct_option() {
        assert_eq!(AnswerLook::for_option(1, Some(1), 2), AnswerLook::PickedWrong);
        assert_eq!(AnswerLook::for_option(2, Some(1), 2), AnswerLook::Revealed);
        assert_eq!(AnswerLook::for_option(0, Some(1), 2), AnswerLook::Dimmed);
    }

    #[test]
    fn right_pick_is_marked_correct() {
        assert_eq!(AnswerLook::for_option(2, Some(2), 2), AnswerLook::PickedCorrect);
        assert_eq!(AnswerLook::for_option(3, Some(2), 2), AnswerLook::Dimmed);
    }

    #[test]
    fn feedback_colors_are_semantic() {
        let theme = Theme::Light;
        let right = answer(AnswerLook::PickedCorrect)(&theme, button::Status::Active);
        let wrong = answer(AnswerLook::PickedWrong)(&theme, button::Status::Active);
        assert_eq!(background(&right), palette::SUCCESS_500);
        assert_eq!(background(&wrong), palette::ERROR_500);
    }

    #[test]
    fn open_option_highlights_on_hover() {
        let style_fn = answer(AnswerLook::Open);
        let normal = style_fn(&Theme::Dark, button::Status::Active);
        let hover = style_fn(&Theme::Dark, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn toggle_reflects_state() {
        let on = toggle(true)(&Theme::Dark, button::Status::Active);
        let off = toggle(false)(&Theme::Dark, button::Status::Active);
        assert_eq!(background(&on), palette::PRIMARY_500);
        assert_ne!(on.background, off.background);
    }
}
