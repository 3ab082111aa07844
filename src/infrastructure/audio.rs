// SPDX-License-Identifier: MPL-2.0
//! Background music through cpal.
//!
//! There is no audio asset: a short square-wave melody is synthesized in the
//! output callback and looped forever. The stream is opened on the first
//! `play` and then kept alive; pausing only flips an atomic the callback
//! reads, so toggling never blocks the UI thread.

use crate::application::port::MusicPlayer;
use crate::error::{Error, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

/// Melody as MIDI note numbers, one per step. `0` is a rest.
const MELODY: &[u8] = &[
    72, 76, 79, 76, 72, 76, 79, 84, 81, 77, 72, 77, 81, 0, 79, 0, //
    71, 74, 79, 74, 71, 74, 77, 79, 76, 72, 67, 72, 76, 0, 72, 0,
];

/// Length of one melody step in seconds.
const STEP_SECS: f32 = 0.18;

/// Peak amplitude before the volume is applied. Square waves are loud.
const PEAK: f32 = 0.25;

/// Converts a MIDI note number to a frequency in hertz (A4 = 69 = 440 Hz).
#[must_use]
pub fn note_frequency(note: u8) -> f32 {
    440.0 * 2f32.powf((f32::from(note) - 69.0) / 12.0)
}

/// Looping square-wave melody generator.
#[derive(Debug, Clone)]
pub struct Chiptune {
    sample_rate: f32,
    samples_per_step: u32,
    step: usize,
    sample_in_step: u32,
    phase: f32,
}

impl Chiptune {
    #[must_use]
    pub fn new(sample_rate: u32) -> Self {
        let sample_rate = sample_rate.max(1) as f32;
        Self {
            sample_rate,
            samples_per_step: ((sample_rate * STEP_SECS) as u32).max(1),
            step: 0,
            sample_in_step: 0,
            phase: 0.0,
        }
    }

    /// Number of samples in one full pass of the melody.
    #[must_use]
    pub fn loop_len(&self) -> usize {
        self.samples_per_step as usize * MELODY.len()
    }

    /// Produces the next mono sample in `-PEAK..=PEAK`.
    pub fn next_sample(&mut self) -> f32 {
        let note = MELODY[self.step];
        let value = if note == 0 {
            0.0
        } else {
            // Linear decay over the step keeps notes from smearing together.
            let progress = self.sample_in_step as f32 / self.samples_per_step as f32;
            let envelope = 1.0 - progress * 0.8;
            let level = if self.phase < 0.5 { PEAK } else { -PEAK };
            self.phase = (self.phase + note_frequency(note) / self.sample_rate).fract();
            level * envelope
        };

        self.sample_in_step += 1;
        if self.sample_in_step >= self.samples_per_step {
            self.sample_in_step = 0;
            self.step = (self.step + 1) % MELODY.len();
            self.phase = 0.0;
        }
        value
    }
}

/// State shared with the audio callback.
#[derive(Debug)]
struct SharedState {
    playing: AtomicBool,
    volume_bits: AtomicU32,
}

impl SharedState {
    fn new(volume: f32) -> Self {
        Self {
            playing: AtomicBool::new(false),
            volume_bits: AtomicU32::new(volume.to_bits()),
        }
    }

    fn volume(&self) -> f32 {
        f32::from_bits(self.volume_bits.load(Ordering::Relaxed))
    }

    fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Relaxed)
    }

    fn set_playing(&self, playing: bool) {
        self.playing.store(playing, Ordering::Relaxed);
    }
}

/// An open output stream. Dropping it stops the sound.
struct Output {
    _stream: cpal::Stream,
}

impl Output {
    fn open(shared: Arc<SharedState>) -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| Error::Audio("No audio output device found".to_string()))?;
        let supported = device
            .default_output_config()
            .map_err(|e| Error::Audio(format!("Failed to get audio config: {e}")))?;

        let sample_rate = supported.sample_rate().0;
        let channels = supported.channels();
        let format = supported.sample_format();
        let config: cpal::StreamConfig = supported.into();
        tracing::debug!(sample_rate, channels, ?format, "opening audio output");

        let stream = match format {
            cpal::SampleFormat::F32 => build_stream::<f32>(&device, &config, sample_rate, shared)?,
            cpal::SampleFormat::I16 => build_stream::<i16>(&device, &config, sample_rate, shared)?,
            cpal::SampleFormat::U16 => build_stream::<u16>(&device, &config, sample_rate, shared)?,
            other => {
                return Err(Error::Audio(format!(
                    "Unsupported audio sample format: {other:?}"
                )))
            }
        };
        stream
            .play()
            .map_err(|e| Error::Audio(format!("Failed to start audio stream: {e}")))?;

        Ok(Self { _stream: stream })
    }
}

fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    sample_rate: u32,
    shared: Arc<SharedState>,
) -> Result<cpal::Stream> {
    let channels = usize::from(config.channels.max(1));
    let mut tune = Chiptune::new(sample_rate);

    device
        .build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                if !shared.is_playing() {
                    for sample in data.iter_mut() {
                        *sample = T::from_sample(0.0f32);
                    }
                    return;
                }
                let volume = shared.volume();
                for frame in data.chunks_mut(channels) {
                    let value = T::from_sample(tune.next_sample() * volume);
                    for sample in frame.iter_mut() {
                        *sample = value;
                    }
                }
            },
            |err| {
                tracing::warn!(error = %err, "audio output error");
            },
            None,
        )
        .map_err(|e| Error::Audio(format!("Failed to build audio stream: {e}")))
}

/// Synthesized background music. Silent until [`MusicPlayer::play`].
pub struct SynthMusic {
    shared: Arc<SharedState>,
    output: Option<Output>,
    /// Set after the device failed to open; later `play` calls stay silent.
    unavailable: bool,
}

impl std::fmt::Debug for SynthMusic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SynthMusic")
            .field("playing", &self.shared.is_playing())
            .field("volume", &self.shared.volume())
            .field("open", &self.output.is_some())
            .field("unavailable", &self.unavailable)
            .finish()
    }
}

impl SynthMusic {
    /// Creates a paused player. `volume` is clamped to `0.0..=1.0`.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        Self {
            shared: Arc::new(SharedState::new(clamp_volume(volume))),
            output: None,
            unavailable: false,
        }
    }

    #[must_use]
    pub fn volume(&self) -> f32 {
        self.shared.volume()
    }

    fn ensure_output(&mut self) -> bool {
        if self.output.is_some() {
            return true;
        }
        if self.unavailable {
            return false;
        }
        match Output::open(Arc::clone(&self.shared)) {
            Ok(output) => {
                self.output = Some(output);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "music disabled");
                self.unavailable = true;
                false
            }
        }
    }
}

impl MusicPlayer for SynthMusic {
    fn play(&mut self) {
        if self.ensure_output() {
            self.shared.set_playing(true);
            tracing::debug!("music playing");
        }
    }

    fn pause(&mut self) {
        self.shared.set_playing(false);
        tracing::debug!("music paused");
    }

    fn is_playing(&self) -> bool {
        self.shared.is_playing()
    }
}

fn clamp_volume(volume: f32) -> f32 {
    if volume.is_finite() {
        volume.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn a4_is_440_hz() {
        assert_abs_diff_eq!(note_frequency(69), 440.0, epsilon = 1e-3);
        assert_abs_diff_eq!(note_frequency(81), 880.0, epsilon = 1e-2);
    }

    #[test]
    fn samples_stay_within_peak() {
        let mut tune = Chiptune::new(8_000);
        for _ in 0..tune.loop_len() {
            let sample = tune.next_sample();
            assert!(sample.abs() <= PEAK + f32::EPSILON);
        }
    }

    #[test]
    fn melody_loops_back_to_the_start() {
        let mut tune = Chiptune::new(8_000);
        let first: Vec<f32> = (0..64).map(|_| tune.next_sample()).collect();
        for _ in 64..tune.loop_len() {
            tune.next_sample();
        }
        let again: Vec<f32> = (0..64).map(|_| tune.next_sample()).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn rests_are_silent() {
        let mut tune = Chiptune::new(8_000);
        let rest = MELODY.iter().position(|&n| n == 0).expect("melody has a rest");
        let per_step = tune.loop_len() / MELODY.len();
        for _ in 0..rest * per_step {
            tune.next_sample();
        }
        for _ in 0..per_step {
            assert_eq!(tune.next_sample(), 0.0);
        }
    }

    #[test]
    fn new_player_is_paused_with_clamped_volume() {
        let player = SynthMusic::new(3.0);
        assert!(!player.is_playing());
        assert_abs_diff_eq!(player.volume(), 1.0);
        assert_abs_diff_eq!(SynthMusic::new(f32::NAN).volume(), 0.0);
    }

    #[test]
    fn pause_without_output_is_harmless() {
        let mut player = SynthMusic::new(0.5);
        player.pause();
        assert!(!player.is_playing());
    }
}
