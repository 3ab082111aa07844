// SPDX-License-Identifier: MPL-2.0
//! Canvas widgets.

pub mod confetti;
pub mod timer_ring;

pub use confetti::ConfettiField;
pub use timer_ring::TimerRing;
