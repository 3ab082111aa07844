// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for every configuration setting.
//!
//! Timer bounds live with the domain types that enforce them and are
//! re-exported here so the config layer has one place to look.

pub use crate::domain::quiz::timing::countdown_bounds::{
    DEFAULT as DEFAULT_COUNTDOWN_SECS, MAX as MAX_COUNTDOWN_SECS, MIN as MIN_COUNTDOWN_SECS,
};
pub use crate::domain::quiz::timing::question_bounds::{
    DEFAULT as DEFAULT_QUESTION_SECS, MAX as MAX_QUESTION_SECS, MIN as MIN_QUESTION_SECS,
};

// ==========================================================================
// Audio Defaults
// ==========================================================================

/// Default music volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = 0.6;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

/// Music is off until the player asks for it.
pub const DEFAULT_MUSIC_ENABLED: bool = false;
