// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The session controller talks to the outside world only through these
//! traits. Infrastructure adapters implement them; tests substitute
//! recording doubles.
//!
//! # Available Ports
//!
//! - [`effects`]: Fire-and-forget side effects (confetti, background music)
//! - [`scheduler`]: Deferred, cancellable one-shot timer ticks
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no `cpal` types)
//! - Methods return nothing the controller inspects; effects cannot fail
//!   from the controller's point of view
//! - No `async fn` - the Iced adapter turns calls into `Task`s

pub mod effects;
pub mod scheduler;

pub use effects::{Celebrate, ConfettiParams, MusicPlayer, NoCelebration};
pub use scheduler::{TimerScheduler, TICK_INTERVAL};
