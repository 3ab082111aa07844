// SPDX-License-Identifier: MPL-2.0
//! Confetti overlay drawn on a canvas.
//!
//! Particles live in offsets from their launch point, so a burst keeps its
//! shape if the window is resized mid-flight. The field is advanced one
//! frame at a time by [`ConfettiField::step`]; the app only subscribes to the
//! frame clock while [`ConfettiField::is_alive`] is true.

use crate::application::port::ConfettiParams;
use crate::ui::design_tokens::{palette, sizing};
use iced::widget::canvas::{self, Canvas, Frame, Geometry};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme, Vector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::PI;

/// Velocity kept from one frame to the next.
const DECAY: f32 = 0.9;

/// Downward pull added every frame, in logical pixels.
const GRAVITY: f32 = 3.0;

/// Frames a particle lives. It fades out linearly over this span.
const LIFETIME_FRAMES: u32 = 200;

/// Hard cap so overlapping bursts cannot grow without bound.
const MAX_PARTICLES: usize = 1_000;

#[derive(Debug, Clone, PartialEq)]
struct Particle {
    /// Launch point as a fraction of the viewport.
    origin: (f32, f32),
    /// Offset from the launch point in logical pixels.
    offset: Vector,
    /// Direction of travel in radians, `0` pointing right, `PI / 2` up.
    angle: f32,
    velocity: f32,
    /// Rotation of the piece itself.
    tilt: f32,
    spin: f32,
    color: Color,
    age: u32,
}

impl Particle {
    fn step(&mut self) {
        self.offset.x += self.angle.cos() * self.velocity;
        self.offset.y += -self.angle.sin() * self.velocity + GRAVITY;
        self.velocity *= DECAY;
        self.tilt += self.spin;
        self.age += 1;
    }

    fn opacity(&self) -> f32 {
        1.0 - self.age as f32 / LIFETIME_FRAMES as f32
    }

    fn is_alive(&self) -> bool {
        self.age < LIFETIME_FRAMES
    }
}

/// Every live confetti particle.
#[derive(Debug)]
pub struct ConfettiField {
    particles: Vec<Particle>,
    rng: StdRng,
}

impl Default for ConfettiField {
    fn default() -> Self {
        Self {
            particles: Vec::new(),
            rng: StdRng::from_entropy(),
        }
    }
}

impl ConfettiField {
    /// A field with reproducible bursts.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Spawns a burst. Particles fan out around "straight up" within
    /// `params.spread` degrees.
    pub fn launch(&mut self, params: ConfettiParams) {
        let room = MAX_PARTICLES.saturating_sub(self.particles.len());
        let count = (params.particle_count as usize).min(room);
        let spread = params.spread.to_radians();
        let origin = (params.origin_x.clamp(0.0, 1.0), params.origin_y.clamp(0.0, 1.0));

        for _ in 0..count {
            let angle = PI / 2.0 + (self.rng.gen::<f32>() - 0.5) * spread;
            let velocity = params.start_velocity * (0.5 + self.rng.gen::<f32>() * 0.5);
            let color = palette::CONFETTI[self.rng.gen_range(0..palette::CONFETTI.len())];
            self.particles.push(Particle {
                origin,
                offset: Vector::new(0.0, 0.0),
                angle,
                velocity,
                tilt: self.rng.gen_range(0.0..PI),
                spin: self.rng.gen_range(-0.3..0.3),
                color,
                age: 0,
            });
        }
        tracing::debug!(spawned = count, live = self.particles.len(), "confetti burst");
    }

    /// Advances every particle by one frame and drops the dead ones.
    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.step();
        }
        self.particles.retain(Particle::is_alive);
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        !self.particles.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Drops every particle at once.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// A full-size canvas that draws the field.
    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        Canvas::new(ConfettiLayer { field: self })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

struct ConfettiLayer<'a> {
    field: &'a ConfettiField,
}

impl<Message> canvas::Program<Message> for ConfettiLayer<'_> {
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
        let piece = Size::new(sizing::CONFETTI_PIECE, sizing::CONFETTI_PIECE * 0.6);

        for particle in &self.field.particles {
            let x = particle.origin.0 * bounds.width + particle.offset.x;
            let y = particle.origin.1 * bounds.height + particle.offset.y;
            if y > bounds.height + sizing::CONFETTI_PIECE {
                continue;
            }
            let color = Color {
                a: particle.opacity(),
                ..particle.color
            };
            frame.with_save(|frame| {
                frame.translate(Vector::new(x, y));
                frame.rotate(particle.tilt);
                frame.fill_rectangle(
                    Point::new(-piece.width / 2.0, -piece.height / 2.0),
                    piece,
                    color,
                );
            });
        }

        vec![frame.into_geometry()]
    }
}
