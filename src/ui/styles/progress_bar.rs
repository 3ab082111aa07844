// SPDX-License-Identifier: MPL-2.0
//! Quiz progress bar.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::progress_bar;
use iced::{Background, Border, Theme};

pub fn quiz(theme: &Theme) -> progress_bar::Style {
    let track = if matches!(theme, Theme::Light) {
        palette::GRAY_100
    } else {
        palette::GRAY_700
    };
    progress_bar::Style {
        background: Background::Color(track),
        bar: Background::Color(palette::PRIMARY_500),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
    }
}
