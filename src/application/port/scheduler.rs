// SPDX-License-Identifier: MPL-2.0
//! Timer scheduling port.

use crate::domain::quiz::TimerId;
use std::time::Duration;

/// Interval between two ticks of any session timer.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Schedules deferred one-shot ticks.
///
/// A scheduled tick is eventually delivered back to the controller as
/// `tick(id)` unless it is cancelled first. Implementations must make
/// `cancel` idempotent and must tolerate cancelling an id that already fired.
pub trait TimerScheduler {
    /// Delivers a tick for `id` once `after` has elapsed.
    fn schedule(&mut self, id: TimerId, after: Duration);

    /// Drops a pending tick for `id`, if any.
    fn cancel(&mut self, id: TimerId);
}
