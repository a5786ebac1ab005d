//! Cancellable background work
//!
//! A `ScopedTask` runs a closure on its own thread and hands the result back
//! through a channel, the same way the TUI event thread delivers key presses.
//! The owner polls it from its tick handler. Once cancelled, a task never
//! yields a value: a result that arrives late is dropped and logged.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

/// Step used when sleeping so cancellation is noticed promptly
const SLEEP_SLICE: Duration = Duration::from_millis(20);

/// Shared cancellation flag handed to the worker closure
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Sleep for `duration` unless cancelled first. Returns false on cancel.
    pub fn sleep(&self, duration: Duration) -> bool {
        let deadline = Instant::now() + duration;
        loop {
            if self.is_cancelled() {
                return false;
            }
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            thread::sleep(SLEEP_SLICE.min(deadline - now));
        }
    }
}

/// Result of polling a task
#[derive(Debug, PartialEq, Eq)]
pub enum TaskPoll<T> {
    Pending,
    Ready(T),
    Cancelled,
}

pub struct ScopedTask<T> {
    label: &'static str,
    token: CancelToken,
    receiver: mpsc::Receiver<T>,
    finished: bool,
}

impl<T: Send + 'static> ScopedTask<T> {
    /// Run `work` on a worker thread
    pub fn spawn<F>(label: &'static str, work: F) -> Self
    where
        F: FnOnce(&CancelToken) -> T + Send + 'static,
    {
        Self::spawn_with_token(label, CancelToken::new(), work)
    }

    /// Yield `value` after `delay`
    pub fn delayed(label: &'static str, delay: Duration, value: T) -> Self {
        Self::spawn(label, move |token| {
            token.sleep(delay);
            value
        })
    }

    fn spawn_with_token<F>(label: &'static str, token: CancelToken, work: F) -> Self
    where
        F: FnOnce(&CancelToken) -> T + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        let worker_token = token.clone();
        thread::spawn(move || {
            let value = work(&worker_token);
            if worker_token.is_cancelled() {
                warn!(task = label, "Discarding result of cancelled task");
                return;
            }
            // The receiver may be gone if the owner was dropped.
            let _ = sender.send(value);
        });
        debug!(task = label, "Spawned scoped task");

        Self {
            label,
            token,
            receiver,
            finished: false,
        }
    }
}

impl<T> ScopedTask<T> {
    /// Non-blocking check for the result. A task yields `Ready` at most once;
    /// later polls report `Cancelled`.
    pub fn poll(&mut self) -> TaskPoll<T> {
        if self.token.is_cancelled() {
            if let Ok(_stale) = self.receiver.try_recv() {
                warn!(task = self.label, "Discarding stale task result");
            }
            return TaskPoll::Cancelled;
        }
        if self.finished {
            return TaskPoll::Cancelled;
        }
        match self.receiver.try_recv() {
            Ok(value) => {
                self.finished = true;
                TaskPoll::Ready(value)
            }
            Err(mpsc::TryRecvError::Empty) => TaskPoll::Pending,
            Err(mpsc::TryRecvError::Disconnected) => {
                self.finished = true;
                TaskPoll::Cancelled
            }
        }
    }

    /// Block until the task finishes or `timeout` passes
    pub fn wait(&mut self, timeout: Duration) -> TaskPoll<T> {
        let deadline = Instant::now() + timeout;
        loop {
            match self.poll() {
                TaskPoll::Pending if Instant::now() < deadline => thread::sleep(SLEEP_SLICE),
                other => return other,
            }
        }
    }

    pub fn cancel(&self) {
        if !self.token.is_cancelled() {
            debug!(task = self.label, "Cancelling scoped task");
        }
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<T> Drop for ScopedTask<T> {
    fn drop(&mut self) {
        if !self.finished {
            self.token.cancel();
        }
    }
}

impl<T> std::fmt::Debug for ScopedTask<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedTask")
            .field("label", &self.label)
            .field("cancelled", &self.token.is_cancelled())
            .field("finished", &self.finished)
            .finish()
    }
}

/// Owner of the tasks a screen started; dropping it cancels all of them
#[derive(Debug, Default)]
pub struct TaskScope {
    tokens: Vec<CancelToken>,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn<T, F>(&mut self, label: &'static str, work: F) -> ScopedTask<T>
    where
        T: Send + 'static,
        F: FnOnce(&CancelToken) -> T + Send + 'static,
    {
        let token = CancelToken::new();
        self.tokens.push(token.clone());
        ScopedTask::spawn_with_token(label, token, work)
    }

    pub fn delayed<T: Send + 'static>(
        &mut self,
        label: &'static str,
        delay: Duration,
        value: T,
    ) -> ScopedTask<T> {
        self.spawn(label, move |token| {
            token.sleep(delay);
            value
        })
    }

    pub fn cancel_all(&mut self) {
        for token in self.tokens.drain(..) {
            token.cancel();
        }
    }
}

impl Drop for TaskScope {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delayed_task_yields_value() {
        let mut task = ScopedTask::delayed("reply", Duration::from_millis(30), "hello");
        assert_eq!(task.poll(), TaskPoll::Pending);
        assert_eq!(task.wait(Duration::from_secs(2)), TaskPoll::Ready("hello"));
    }

    #[test]
    fn test_cancelled_task_never_yields() {
        let mut task = ScopedTask::delayed("reply", Duration::from_millis(50), 42);
        task.cancel();
        assert_eq!(task.wait(Duration::from_millis(200)), TaskPoll::Cancelled);
    }

    #[test]
    fn test_cancel_after_completion_discards_result() {
        let mut task = ScopedTask::spawn("quick", |_| 7);
        thread::sleep(Duration::from_millis(50));
        task.cancel();
        assert_eq!(task.poll(), TaskPoll::Cancelled);
    }

    #[test]
    fn test_dropping_scope_cancels_tasks() {
        let mut scope = TaskScope::new();
        let mut task = scope.delayed("reply", Duration::from_millis(50), "late");
        drop(scope);
        assert!(task.is_cancelled());
        assert_eq!(task.wait(Duration::from_millis(200)), TaskPoll::Cancelled);
    }

    #[test]
    fn test_cancel_token_sleep_stops_early() {
        let token = CancelToken::new();
        token.cancel();
        assert!(!token.sleep(Duration::from_secs(5)));
    }
}
