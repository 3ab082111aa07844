// SPDX-License-Identifier: MPL-2.0
//! `quiz_rush` is a timed multiple-choice quiz game built with the Iced GUI framework.
//!
//! The crate is split in layers:
//!
//! - [`domain`] - questions, stages, timing bounds and scoring rules
//! - [`application`] - the session state machine and the ports it drives
//! - [`infrastructure`] - question loading, tick scheduling and music output
//! - [`ui`] - design tokens, styles and custom widgets
//! - [`app`] - the iced application wiring everything together

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod icon;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
mod test_utils;
