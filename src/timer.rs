//! The timer that drives frame advances.

use std::{
    sync::{mpsc::Sender, Arc},
    thread,
    time::Duration,
};

use crate::{event::BarraceEvent, utils::cancellation_token::CancellationToken};

/// A one-shot, re-armable timer that sends [`BarraceEvent::Advance`] once its
/// delay is up.
///
/// Only one arm is ever pending. Arming again, calling [`AdvanceTimer::cancel`],
/// or dropping the timer cancels the pending arm, after which it will never
/// send anything. Each arm is tagged with a generation so that an event which
/// was already sent before a cancel can be told apart and ignored.
pub struct AdvanceTimer {
    sender: Sender<BarraceEvent>,
    armed: Option<Arc<CancellationToken>>,
    generation: u64,
}

impl AdvanceTimer {
    pub fn new(sender: Sender<BarraceEvent>) -> Self {
        Self {
            sender,
            armed: None,
            generation: 0,
        }
    }

    /// Arms the timer to fire after `delay`, cancelling any pending arm.
    /// Returns the generation of the new arm.
    pub fn arm(&mut self, delay: Duration) -> u64 {
        self.cancel();

        self.generation += 1;
        let generation = self.generation;

        let token = Arc::new(CancellationToken::default());
        let thread_token = token.clone();
        let sender = self.sender.clone();

        thread::spawn(move || {
            if !thread_token.sleep_with_cancellation(delay) {
                thread_token.run_unless_cancelled(|| {
                    if sender.send(BarraceEvent::Advance(generation)).is_err() {
                        crate::debug!("advance receiver is gone");
                    }
                });
            }
        });

        self.armed = Some(token);
        generation
    }

    /// Cancels the pending arm, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.armed.take() {
            token.cancel();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Accepts a fired event if it belongs to the pending arm, disarming the
    /// timer. Stale or cancelled generations are rejected.
    pub fn fire(&mut self, generation: u64) -> bool {
        if self.armed.is_some() && generation == self.generation {
            self.armed = None;
            true
        } else {
            false
        }
    }
}

impl Drop for AdvanceTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
