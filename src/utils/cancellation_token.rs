use std::{
    sync::{Condvar, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

/// A cancellation token, used to stop the collection thread on shutdown.
pub struct CancellationToken {
    // Setting this to true marks the token as cancelled.
    mutex: Mutex<bool>,
    cvar: Condvar,
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self {
            mutex: Mutex::new(false),
            cvar: Condvar::new(),
        }
    }
}

impl CancellationToken {
    fn guard(&self) -> MutexGuard<'_, bool> {
        self.mutex.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mark the [`CancellationToken`] as cancelled.
    ///
    /// This is idempotent, and once cancelled, will stay cancelled. Sending it
    /// again will not do anything.
    pub fn cancel(&self) {
        let mut guard = self.guard();

        if !*guard {
            *guard = true;
            self.cvar.notify_all();
        }
    }

    /// Whether the token has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        *self.guard()
    }

    /// Sleeps for `duration`, waking early if the token is cancelled.
    ///
    /// Returns whether the token is cancelled. If it was already cancelled,
    /// this returns immediately.
    pub fn sleep_with_cancellation(&self, duration: Duration) -> bool {
        let guard = self.guard();

        let (result, _) = self
            .cvar
            .wait_timeout_while(guard, duration, |cancelled| !*cancelled)
            .unwrap_or_else(PoisonError::into_inner);

        *result
    }
}
