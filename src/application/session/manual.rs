// SPDX-License-Identifier: MPL-2.0
//! Hand-driven port implementations.
//!
//! `ManualScheduler` keeps scheduled ticks in a list instead of waiting on a
//! clock, and `RecordingCelebration` remembers every burst it was asked for.
//! Together they let a whole session be played deterministically, which is
//! what the unit tests, the integration tests and the benchmark do.

use super::controller::SessionController;
use crate::application::port::{Celebrate, ConfettiParams, TimerScheduler};
use crate::domain::quiz::TimerId;
use std::cell::RefCell;
use std::time::Duration;

/// One call made on a [`ManualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerOp {
    Schedule(TimerId),
    Cancel(TimerId),
}

/// Scheduler whose ticks fire only when the caller says so.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pending: Vec<TimerId>,
    log: Vec<SchedulerOp>,
}

impl ManualScheduler {
    /// Ticks scheduled and not yet fired or cancelled.
    #[must_use]
    pub fn pending(&self) -> &[TimerId] {
        &self.pending
    }

    /// Every schedule/cancel call, oldest first.
    #[must_use]
    pub fn log(&self) -> &[SchedulerOp] {
        &self.log
    }

    /// Removes and returns all pending ticks, as if their delay had elapsed.
    pub fn take_due(&mut self) -> Vec<TimerId> {
        std::mem::take(&mut self.pending)
    }
}

impl TimerScheduler for ManualScheduler {
    fn schedule(&mut self, id: TimerId, _after: Duration) {
        self.log.push(SchedulerOp::Schedule(id));
        self.pending.push(id);
    }

    fn cancel(&mut self, id: TimerId) {
        self.log.push(SchedulerOp::Cancel(id));
        self.pending.retain(|pending| *pending != id);
    }
}

/// Celebrator that records bursts instead of drawing them.
#[derive(Debug, Default)]
pub struct RecordingCelebration {
    bursts: RefCell<Vec<ConfettiParams>>,
}

impl RecordingCelebration {
    #[must_use]
    pub fn bursts(&self) -> Vec<ConfettiParams> {
        self.bursts.borrow().clone()
    }
}

impl Celebrate for RecordingCelebration {
    fn celebrate(&self, params: ConfettiParams) {
        self.bursts.borrow_mut().push(params);
    }
}

impl<C: Celebrate> SessionController<ManualScheduler, C> {
    /// Lets `seconds` seconds elapse, delivering every tick that comes due.
    pub fn run_ticks(&mut self, seconds: u32) {
        for _ in 0..seconds {
            for id in self.scheduler_mut().take_due() {
                self.tick(id);
            }
        }
    }
}
