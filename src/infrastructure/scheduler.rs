// SPDX-License-Identifier: MPL-2.0
//! Iced-backed implementations of the session ports.
//!
//! [`TaskScheduler`] turns each scheduled tick into an abortable
//! `tokio::time::sleep` task that resolves to an application message.
//! [`ConfettiQueue`] collects requested bursts until the UI drains them.
//! The controller calls both synchronously; the application drains them after
//! every update and hands the result to the runtime.

use crate::application::port::{Celebrate, ConfettiParams, TimerScheduler};
use crate::domain::quiz::TimerId;
use iced::task::{self, Task};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// Schedules session ticks as iced tasks.
pub struct TaskScheduler<M> {
    on_fire: fn(TimerId) -> M,
    handles: HashMap<TimerId, task::Handle>,
    queued: Vec<Task<M>>,
}

impl<M> fmt::Debug for TaskScheduler<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskScheduler")
            .field("pending", &self.handles.keys().collect::<Vec<_>>())
            .field("queued", &self.queued.len())
            .finish()
    }
}

impl<M: Send + 'static> TaskScheduler<M> {
    /// Creates a scheduler whose ticks resolve to `on_fire(id)`.
    pub fn new(on_fire: fn(TimerId) -> M) -> Self {
        Self {
            on_fire,
            handles: HashMap::new(),
            queued: Vec::new(),
        }
    }

    /// Hands every task scheduled since the last call to the runtime.
    pub fn take_tasks(&mut self) -> Task<M> {
        if self.queued.is_empty() {
            return Task::none();
        }
        Task::batch(std::mem::take(&mut self.queued))
    }

    /// Ids with a live handle. A fired tick keeps its entry until it is
    /// rescheduled or cancelled.
    #[must_use]
    pub fn tracked(&self) -> usize {
        self.handles.len()
    }

    /// Number of tasks waiting for [`Self::take_tasks`].
    #[must_use]
    pub fn queued(&self) -> usize {
        self.queued.len()
    }
}

impl<M: Send + 'static> TimerScheduler for TaskScheduler<M> {
    fn schedule(&mut self, id: TimerId, after: Duration) {
        let on_fire = self.on_fire;
        // Sleep must be created on the runtime that polls it.
        let (task, handle) = Task::perform(
            async move { tokio::time::sleep(after).await },
            move |()| on_fire(id),
        )
        .abortable();
        if let Some(previous) = self.handles.insert(id, handle) {
            previous.abort();
        }
        self.queued.push(task);
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(handle) = self.handles.remove(&id) {
            handle.abort();
            tracing::trace!(?id, "tick cancelled");
        }
    }
}

/// Collects confetti bursts for the canvas to launch.
#[derive(Debug, Default)]
pub struct ConfettiQueue {
    pending: RefCell<Vec<ConfettiParams>>,
}

impl ConfettiQueue {
    /// Removes and returns every burst requested since the last drain.
    pub fn drain(&self) -> Vec<ConfettiParams> {
        self.pending.take()
    }
}

impl Celebrate for ConfettiQueue {
    fn celebrate(&self, params: ConfettiParams) {
        self.pending.borrow_mut().push(params);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quiz::TimerKind;

    #[derive(Debug, PartialEq)]
    enum Msg {
        Fired(TimerId),
    }

    #[test]
    fn schedule_queues_one_task_per_tick() {
        let mut scheduler = TaskScheduler::new(Msg::Fired);
        scheduler.schedule(TimerId::new(TimerKind::PreStart, 1), Duration::from_secs(1));
        scheduler.schedule(TimerId::new(TimerKind::PreStart, 1), Duration::from_secs(1));
        assert_eq!(scheduler.queued(), 2);
        assert_eq!(scheduler.tracked(), 1);

        let _ = scheduler.take_tasks();
        assert_eq!(scheduler.queued(), 0);
    }

    #[test]
    fn cancel_forgets_the_handle() {
        let mut scheduler = TaskScheduler::new(Msg::Fired);
        let id = TimerId::new(TimerKind::Question, 3);
        scheduler.schedule(id, Duration::from_secs(1));
        scheduler.cancel(id);
        scheduler.cancel(id);
        assert_eq!(scheduler.tracked(), 0);
    }

    #[test]
    fn confetti_queue_drains_in_order() {
        let queue = ConfettiQueue::default();
        queue.celebrate(ConfettiParams::START);
        queue.celebrate(ConfettiParams::FINISH);
        assert_eq!(
            queue.drain(),
            vec![ConfettiParams::START, ConfettiParams::FINISH]
        );
        assert!(queue.drain().is_empty());
    }
}
