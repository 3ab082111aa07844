// SPDX-License-Identifier: MPL-2.0
//! Side-effect ports: celebration bursts and background music.
//!
//! Both are fire-and-forget. The controller never waits on them and never
//! reads a result back, so a missing audio device or a headless test run
//! cannot change how a session plays out.

/// Parameters for a confetti burst.
///
/// Angles are in degrees, the origin is a fraction of the viewport
/// (`0.0..=1.0` on both axes, `y` growing downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfettiParams {
    /// Total angular spread of the burst, centred on "straight up".
    pub spread: f32,
    /// Number of particles to spawn.
    pub particle_count: u32,
    /// Horizontal launch point as a fraction of the width.
    pub origin_x: f32,
    /// Vertical launch point as a fraction of the height.
    pub origin_y: f32,
    /// Initial particle speed, in logical pixels per frame at 60 fps.
    pub start_velocity: f32,
}

impl ConfettiParams {
    /// The big burst fired when the player starts the quiz.
    pub const START: Self = Self {
        spread: 275.0,
        particle_count: 233,
        origin_x: 0.5,
        origin_y: 0.6,
        start_velocity: 70.0,
    };

    /// The smaller burst fired when the results appear.
    pub const FINISH: Self = Self {
        spread: 120.0,
        particle_count: 150,
        origin_x: 0.5,
        origin_y: 0.7,
        start_velocity: 55.0,
    };
}

/// Launches a celebratory visual effect.
pub trait Celebrate {
    fn celebrate(&self, params: ConfettiParams);
}

/// Background music that the player can toggle at any time.
///
/// Playback state is independent from the quiz: no transition waits on it
/// and no stage change touches it.
pub trait MusicPlayer {
    /// Starts or resumes playback.
    fn play(&mut self);

    /// Pauses playback.
    fn pause(&mut self);

    /// Returns whether music is currently audible.
    fn is_playing(&self) -> bool;

    /// Flips between playing and paused.
    fn toggle(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }
}

/// A celebrator that does nothing, for headless contexts.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCelebration;

impl Celebrate for NoCelebration {
    fn celebrate(&self, _params: ConfettiParams) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakePlayer {
        playing: bool,
        calls: Vec<&'static str>,
    }

    impl MusicPlayer for FakePlayer {
        fn play(&mut self) {
            self.playing = true;
            self.calls.push("play");
        }

        fn pause(&mut self) {
            self.playing = false;
            self.calls.push("pause");
        }

        fn is_playing(&self) -> bool {
            self.playing
        }
    }

    #[test]
    fn toggle_alternates_play_and_pause() {
        let mut player = FakePlayer::default();
        player.toggle();
        player.toggle();
        player.toggle();
        assert!(player.is_playing());
        assert_eq!(player.calls, ["play", "pause", "play"]);
    }

    #[test]
    fn start_burst_matches_launch_values() {
        let params = ConfettiParams::START;
        assert_eq!(params.particle_count, 233);
        assert!((params.spread - 275.0).abs() < f32::EPSILON);
        assert!((params.origin_y - 0.6).abs() < f32::EPSILON);
    }
}
