//! Trailing-edge debounce.
//!
//! Each call cancels the pending invocation and schedules a new one `wait`
//! later with the latest arguments, so a burst collapses into one call.
//! Dropping the debouncer cancels whatever is still pending.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::sched::{Scheduler, TaskHandle};

pub struct Debouncer<A> {
    scheduler: Rc<dyn Scheduler>,
    wait: Duration,
    callback: Rc<dyn Fn(A)>,
    pending: RefCell<Option<TaskHandle>>,
}

impl<A: 'static> Debouncer<A> {
    pub fn new(scheduler: Rc<dyn Scheduler>, wait: Duration, callback: impl Fn(A) + 'static) -> Self {
        Self {
            scheduler,
            wait,
            callback: Rc::new(callback),
            pending: RefCell::new(None),
        }
    }

    /// Supersede any pending invocation with one carrying `args`.
    pub fn call(&self, args: A) {
        let mut pending = self.pending.borrow_mut();
        if let Some(previous) = pending.take() {
            previous.cancel();
        }
        let callback = Rc::clone(&self.callback);
        *pending = Some(self.scheduler.schedule(self.wait, Box::new(move || callback(args))));
    }

    /// Drop the pending invocation, if any. Returns `true` if one was cancelled.
    pub fn cancel(&self) -> bool {
        self.pending.borrow_mut().take().is_some_and(|handle| handle.cancel())
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.borrow().as_ref().is_some_and(TaskHandle::is_pending)
    }

    #[must_use]
    pub fn wait(&self) -> Duration {
        self.wait
    }
}

impl<A> Drop for Debouncer<A> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            handle.cancel();
        }
    }
}
