//! Refresh scheduler
//!
//! Drives the once-per-second repaint loop in interactive mode via a
//! deferred-callback primitive supplied by the host. At most one callback
//! is outstanding at any instant: every (re)schedule cancels the previous
//! handle first, and a callback that lost the race with `stop()` is
//! recognized by its handle and ignored.

/// Interactive repaint period in milliseconds.
pub const INTERACTIVE_UPDATE_MS: u64 = 1000;

/// Deferred-callback primitive provided by the host.
///
/// `schedule_after` arranges a single callback after `delay_ms`; `cancel`
/// revokes a handle and must tolerate handles that already fired.
pub trait TimerDriver {
    type Handle: Copy + PartialEq;

    fn schedule_after(&mut self, delay_ms: u64) -> Self::Handle;
    fn cancel(&mut self, handle: Self::Handle);
}

/// Delay until the next wall-clock second boundary, in `(0, 1000]`.
pub fn aligned_delay(now_millis: u64) -> u64 {
    INTERACTIVE_UPDATE_MS - now_millis % INTERACTIVE_UPDATE_MS
}

/// Cancellable, self-rescheduling repaint timer.
///
/// States: stopped (no pending handle) and scheduled (exactly one).
pub struct RefreshScheduler<H: Copy + PartialEq> {
    pending: Option<H>,
}

impl<H: Copy + PartialEq> RefreshScheduler<H> {
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Whether a callback is currently pending.
    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    /// Arrange the next second-aligned repaint callback.
    ///
    /// Only runs the timer in interactive mode (visible and not ambient);
    /// otherwise behaves like [`stop`](Self::stop). Idempotent: a stale
    /// pending callback is canceled before the new one is scheduled.
    pub fn start<T: TimerDriver<Handle = H>>(
        &mut self,
        driver: &mut T,
        now_millis: u64,
        visible: bool,
        ambient: bool,
    ) {
        self.stop(driver);
        if visible && !ambient {
            self.pending = Some(driver.schedule_after(aligned_delay(now_millis)));
        }
    }

    /// Cancel any pending callback. Safe to call when already stopped.
    pub fn stop<T: TimerDriver<Handle = H>>(&mut self, driver: &mut T) {
        if let Some(handle) = self.pending.take() {
            driver.cancel(handle);
        }
    }

    /// Handle a fired callback.
    ///
    /// Returns `true` when the frame should be repainted. A handle that no
    /// longer matches the pending one was canceled while in flight and
    /// produces neither a repaint nor a reschedule. While still
    /// interactive the loop sustains itself with a fresh aligned delay.
    pub fn on_fired<T: TimerDriver<Handle = H>>(
        &mut self,
        driver: &mut T,
        fired: H,
        now_millis: u64,
        visible: bool,
        ambient: bool,
    ) -> bool {
        match self.pending {
            Some(pending) if pending == fired => {
                self.pending = None;
            }
            _ => return false,
        }

        if visible && !ambient {
            self.pending = Some(driver.schedule_after(aligned_delay(now_millis)));
        }
        true
    }
}

impl<H: Copy + PartialEq> Default for RefreshScheduler<H> {
    fn default() -> Self {
        Self::new()
    }
}
