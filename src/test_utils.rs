// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests.
//!
//! Float comparisons go through the `approx` macros re-exported here.

pub use approx::assert_abs_diff_eq;
