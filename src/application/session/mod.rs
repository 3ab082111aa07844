// SPDX-License-Identifier: MPL-2.0
//! Quiz session use case.
//!
//! - [`SessionController`] - the welcome → countdown → quiz → results state machine
//! - [`SessionSnapshot`] - read-only view handed to the presentation layer
//! - [`manual`] - deterministic scheduler and celebrator for driving sessions by hand

mod controller;
pub mod manual;
mod snapshot;

pub use controller::{LoadStatus, SessionConfig, SessionController, ValidationError};
pub use snapshot::{LoadView, QuestionView, SessionSnapshot};
