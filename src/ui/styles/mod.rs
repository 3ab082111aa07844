// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for every quiz widget.

pub mod button;
pub mod container;
pub mod progress_bar;

pub use button::AnswerLook;
