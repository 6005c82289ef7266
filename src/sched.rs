//! Cancellable scheduled tasks.
//!
//! DESIGN
//! ======
//! Every timer in the crate (alert auto-dismiss, notification removal,
//! debounce) goes through [`Scheduler`] and hands back a [`TaskHandle`].
//! Cancelling a handle guarantees the task never runs, so owners can tear
//! down cleanly instead of leaving fire-and-forget timers behind.
//!
//! `TimeoutScheduler` drives real browser timers; `ManualScheduler` keeps a
//! virtual clock that only moves when `advance` is called.

#[cfg(test)]
#[path = "sched_test.rs"]
mod sched_test;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

/// Lifecycle of a scheduled task.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TaskState {
    #[default]
    Pending,
    Fired,
    Cancelled,
}

/// Shared handle to a scheduled task.
///
/// Clones observe and control the same task.
#[derive(Clone, Debug, Default)]
pub struct TaskHandle {
    state: Rc<Cell<TaskState>>,
}

impl TaskHandle {
    /// Wrap `task` so it only runs while the returned handle is still pending.
    pub fn guard(task: Box<dyn FnOnce()>) -> (Self, Box<dyn FnOnce()>) {
        let handle = Self::default();
        let state = Rc::clone(&handle.state);
        let run = Box::new(move || {
            if state.get() == TaskState::Pending {
                state.set(TaskState::Fired);
                task();
            }
        });
        (handle, run)
    }

    /// Cancel the task. Returns `true` if it was still pending.
    pub fn cancel(&self) -> bool {
        if self.state.get() == TaskState::Pending {
            self.state.set(TaskState::Cancelled);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state.get() == TaskState::Pending
    }

    #[must_use]
    pub fn state(&self) -> TaskState {
        self.state.get()
    }
}

/// Something that can run a closure after a delay on the current thread.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle;
}

// =============================================================================
// MANUAL CLOCK
// =============================================================================

type QueuedTask = (TaskHandle, Box<dyn FnOnce()>);

#[derive(Default)]
struct ManualInner {
    now: Duration,
    seq: u64,
    queue: BTreeMap<(Duration, u64), QueuedTask>,
}

/// Scheduler backed by a virtual clock.
///
/// Tasks run in due-time order (insertion order for equal due times) and only
/// from inside [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualInner>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Number of queued tasks that have not been cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.inner
            .borrow()
            .queue
            .values()
            .filter(|(handle, _)| handle.is_pending())
            .count()
    }

    /// Move the clock forward by `by`, running every task that comes due.
    ///
    /// Tasks scheduled by running tasks are picked up if they fall inside the
    /// window. Returns the number of tasks that actually ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut ran = 0;
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let due = inner.queue.keys().next().copied().filter(|(at, _)| *at <= target);
                match due {
                    Some(key) => {
                        inner.now = key.0;
                        inner.queue.remove(&key)
                    }
                    None => None,
                }
            };
            let Some((handle, run)) = next else {
                break;
            };
            if handle.is_pending() {
                ran += 1;
            }
            run();
        }
        self.inner.borrow_mut().now = target;
        ran
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle {
        let (handle, run) = TaskHandle::guard(task);
        let mut inner = self.inner.borrow_mut();
        let due = inner.now + delay;
        let seq = inner.seq;
        inner.seq += 1;
        inner.queue.insert((due, seq), (handle.clone(), run));
        handle
    }
}

// =============================================================================
// BROWSER TIMERS
// =============================================================================

/// Scheduler backed by `setTimeout` through `gloo-timers`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle {
        let (handle, run) = TaskHandle::guard(task);
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, run).forget();
        handle
    }
}
