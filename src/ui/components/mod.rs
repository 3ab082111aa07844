// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across screens.
//!
//! - [`error_display`] - Load failures and settings warnings with a severity color

pub mod error_display;
