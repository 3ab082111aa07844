// SPDX-License-Identifier: MPL-2.0
//! Ring that empties as a countdown runs out.

use crate::ui::design_tokens::palette;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

const STROKE_WIDTH: f32 = 6.0;
const SEGMENTS: u16 = 60;

/// Seconds left out of a total, drawn as a clockwise arc from the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimerRing {
    remaining: u32,
    total: u32,
    size: f32,
}

impl TimerRing {
    #[must_use]
    pub fn new(remaining: u32, total: u32, size: f32) -> Self {
        Self {
            remaining,
            total,
            size,
        }
    }

    /// Portion of the ring still drawn, in `0.0..=1.0`.
    #[must_use]
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        (self.remaining as f32 / self.total as f32).clamp(0.0, 1.0)
    }

    /// Turns orange, then red, as time runs out.
    #[must_use]
    pub fn color(&self) -> Color {
        match self.fraction() {
            f if f > 0.5 => palette::PRIMARY_500,
            f if f > 0.25 => palette::WARNING_500,
            _ => palette::ERROR_500,
        }
    }

    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for TimerRing {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;
        let color = self.color();

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(Color { a: 0.2, ..color }),
        );

        let fraction = self.fraction();
        if fraction > 0.0 {
            let start = -PI / 2.0;
            let sweep = TAU * fraction;
            let mut arc = canvas::path::Builder::new();
            arc.move_to(Point::new(
                center.x + radius * start.cos(),
                center.y + radius * start.sin(),
            ));
            for i in 1..=SEGMENTS {
                let angle = start + sweep * f32::from(i) / f32::from(SEGMENTS);
                arc.line_to(Point::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                ));
            }
            frame.stroke(
                &arc.build(),
                Stroke::default()
                    .with_width(STROKE_WIDTH)
                    .with_color(color)
                    .with_line_cap(canvas::LineCap::Round),
            );
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn fraction_tracks_remaining_time() {
        assert_abs_diff_eq!(TimerRing::new(10, 10, 48.0).fraction(), 1.0);
        assert_abs_diff_eq!(TimerRing::new(4, 10, 48.0).fraction(), 0.4);
        assert_abs_diff_eq!(TimerRing::new(0, 10, 48.0).fraction(), 0.0);
    }

    #[test]
    fn zero_total_draws_nothing() {
        assert_abs_diff_eq!(TimerRing::new(3, 0, 48.0).fraction(), 0.0);
    }

    #[test]
    fn color_warms_up_as_time_runs_out() {
        assert_eq!(TimerRing::new(9, 10, 48.0).color(), palette::PRIMARY_500);
        assert_eq!(TimerRing::new(4, 10, 48.0).color(), palette::WARNING_500);
        assert_eq!(TimerRing::new(2, 10, 48.0).color(), palette::ERROR_500);
    }
}
