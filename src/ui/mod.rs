// SPDX-License-Identifier: MPL-2.0
//! Presentation building blocks.
//!
//! Screens themselves are assembled in `app::view`; this module holds what
//! they are built from.
//!
//! - [`components`] - Reusable UI components (error display)
//! - [`widgets`] - Canvas widgets (confetti overlay, timer ring)
//! - [`styles`] - Centralized styling (buttons, containers, progress bar)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod styles;
pub mod theming;
pub mod widgets;
