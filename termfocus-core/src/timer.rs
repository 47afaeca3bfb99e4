//! One-shot countdown timer for a focus session.
//!
//! [`CountdownTimer`] is a pure state machine: it never schedules anything
//! itself. The host drives it by calling [`CountdownTimer::tick`] once per
//! wall-clock second while the timer is running and reacts to the returned
//! [`TickOutcome`]. Expiry is signalled exactly once per session.

/// Length of one focus session in seconds (25 minutes).
pub const SESSION_SECS: u32 = 25 * 60;

/// Outcome of a single [`CountdownTimer::tick`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer was not running; nothing changed.
    Idle,
    /// One second elapsed; the countdown continues.
    Ticked,
    /// The countdown reached zero on this tick and stopped.
    ///
    /// Produced at most once per session: the tick that hits zero also
    /// clears the running flag, so later ticks report [`TickOutcome::Idle`].
    Expired,
}

/// A single-shot decrementing counter with start/reset controls.
///
/// Two states: idle (`running == false`) and running. An expired timer
/// (`remaining_secs == 0`) is an idle timer that needs a [`reset`] before
/// it can run again.
///
/// [`reset`]: CountdownTimer::reset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownTimer {
    remaining_secs: u32,
    running: bool,
}

impl CountdownTimer {
    /// Creates an idle timer holding a full session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            remaining_secs: SESSION_SECS,
            running: false,
        }
    }

    /// Starts the countdown.
    ///
    /// Returns true if the timer transitioned to running. Calling `start`
    /// while already running is a safe no-op (it never speeds up or resets
    /// the countdown), as is calling it on an expired timer — the host must
    /// [`reset`] first.
    ///
    /// [`reset`]: CountdownTimer::reset
    pub const fn start(&mut self) -> bool {
        if self.running || self.remaining_secs == 0 {
            return false;
        }
        self.running = true;
        true
    }

    /// Stops the countdown and restores the full session length.
    pub const fn reset(&mut self) {
        self.remaining_secs = SESSION_SECS;
        self.running = false;
    }

    /// Advances the countdown by one second.
    ///
    /// Only decrements while running; the remaining time never goes below
    /// zero. Ticks delivered while idle (e.g. queued across a reset) are
    /// reported as [`TickOutcome::Idle`] and change nothing.
    pub const fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }
        self.remaining_secs -= 1;
        if self.remaining_secs == 0 {
            self.running = false;
            return TickOutcome::Expired;
        }
        TickOutcome::Ticked
    }

    /// Seconds left in the current session.
    #[must_use]
    pub const fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Whether the countdown is currently advancing.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the session has run down to zero.
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.remaining_secs == 0
    }

    /// Elapsed fraction of the session, in `[0.0, 1.0]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        f64::from(SESSION_SECS - self.remaining_secs) / f64::from(SESSION_SECS)
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a second count as zero-padded `MM:SS`.
///
/// Minutes are `secs / 60` and may exceed two digits for inputs of an hour
/// or more; seconds are `secs % 60`. Pure and defined for every input.
#[must_use]
pub fn format_mm_ss(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
