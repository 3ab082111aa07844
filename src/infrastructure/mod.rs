// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`, plus the question loader.
//!
//! # Available Adapters
//!
//! - [`questions`]: question sets from the embedded asset, a file, or a URL
//! - [`scheduler`]: iced tasks for session ticks (implements [`TimerScheduler`])
//!   and a confetti queue (implements [`Celebrate`])
//! - [`audio`]: synthesized music via cpal (implements [`MusicPlayer`])
//!
//! [`TimerScheduler`]: crate::application::port::TimerScheduler
//! [`Celebrate`]: crate::application::port::Celebrate
//! [`MusicPlayer`]: crate::application::port::MusicPlayer

pub mod audio;
pub mod questions;
pub mod scheduler;

pub use audio::SynthMusic;
pub use questions::QuestionSource;
pub use scheduler::{ConfettiQueue, TaskScheduler};
