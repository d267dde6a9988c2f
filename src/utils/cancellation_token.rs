use std::{
    sync::{Condvar, Mutex},
    time::Duration,
};

/// A cancellation token.
pub(crate) struct CancellationToken {
    // The "check" for the cancellation token. Setting this to true will mark the cancellation token as "cancelled".
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
    /// Mark the [`CancellationToken`] as cancelled.
    ///
    /// This is idempotent, and once cancelled, will stay cancelled. Sending it
    /// again will not do anything.
    pub fn cancel(&self) {
        let mut guard = self
            .mutex
            .lock()
            .expect("cancellation token lock should not be poisoned");

        if !*guard {
            *guard = true;
            self.cvar.notify_all();
        }
    }

    /// Try and check the [`CancellationToken`]'s status. Note that
    /// this will not block.
    pub fn try_check(&self) -> Option<bool> {
        self.mutex.try_lock().ok().map(|guard| *guard)
    }

    /// Allows a thread to sleep while still being interruptible with by the token.
    ///
    /// Unlike a bare condvar wait, spurious wakeups do not end the sleep early.
    /// Returns the condition state after either sleeping or being woken up.
    pub fn sleep_with_cancellation(&self, duration: Duration) -> bool {
        let guard = self
            .mutex
            .lock()
            .expect("cancellation token lock should not be poisoned");

        let (result, _) = self
            .cvar
            .wait_timeout_while(guard, duration, |cancelled| !*cancelled)
            .expect("cancellation token lock should not be poisoned");

        *result
    }

    /// Runs `f` only if the token has not been cancelled. The token is held
    /// locked while `f` runs, so a concurrent [`CancellationToken::cancel`]
    /// either happens entirely before (and `f` is skipped) or after `f`.
    pub fn run_unless_cancelled<F: FnOnce()>(&self, f: F) -> bool {
        let guard = self
            .mutex
            .lock()
            .expect("cancellation token lock should not be poisoned");

        if *guard {
            false
        } else {
            f();
            true
        }
    }
}

#[cfg(test)]
mod test {
    use std::{
        sync::Arc,
        thread,
        time::{Duration, Instant},
    };

    use super::*;

    #[test]
    fn cancel_is_idempotent() {
        let token = CancellationToken::default();
        assert_eq!(token.try_check(), Some(false));

        token.cancel();
        token.cancel();
        assert_eq!(token.try_check(), Some(true));
    }

    #[test]
    fn sleep_times_out_without_cancel() {
        let token = CancellationToken::default();
        assert!(!token.sleep_with_cancellation(Duration::from_millis(5)));
    }

    #[test]
    fn cancel_wakes_sleeper() {
        let token = Arc::new(CancellationToken::default());
        let sleeper = {
            let token = token.clone();
            thread::spawn(move || {
                let start = Instant::now();
                let cancelled = token.sleep_with_cancellation(Duration::from_secs(30));
                (cancelled, start.elapsed())
            })
        };

        thread::sleep(Duration::from_millis(20));
        token.cancel();

        let (cancelled, elapsed) = sleeper.join().unwrap();
        assert!(cancelled);
        assert!(elapsed < Duration::from_secs(30));
    }

    #[test]
    fn cancelled_token_skips_work() {
        let token = CancellationToken::default();
        let mut ran = 0;

        assert!(token.run_unless_cancelled(|| ran += 1));
        token.cancel();
        assert!(!token.run_unless_cancelled(|| ran += 1));

        assert_eq!(ran, 1);
    }
}
