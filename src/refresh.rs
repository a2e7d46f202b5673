//! Refresh pacing for multiplexed displays
//!
//! Scanned matrices light one row per `show()` and Charlieplex engines need
//! repeated sweeps, so both only look steady when refreshed at a fixed, high
//! rate. The scheduler does not sleep itself; the caller waits for the
//! returned duration between ticks.

use embassy_time::{Duration, Instant};

use crate::command::CommandReceiver;
use crate::hal::{LedHal, Platform};

/// Default refresh rate (one `show_all` per millisecond).
pub const DEFAULT_REFRESH_HZ: u64 = 1000;

/// Default refresh period based on [`DEFAULT_REFRESH_HZ`].
pub const DEFAULT_REFRESH_PERIOD: Duration = Duration::from_micros(1_000_000 / DEFAULT_REFRESH_HZ);

/// Result of a refresh tick.
#[derive(Debug, Clone, Copy)]
pub struct RefreshResult {
    /// The deadline for the next refresh.
    pub next_deadline: Instant,
    /// How long to wait until the next refresh (zero when behind schedule).
    pub sleep_duration: Duration,
    /// Commands applied during this tick.
    pub commands_applied: usize,
}

/// Fixed-rate driver of [`LedHal::show_all`].
///
/// # Usage
///
/// ```ignore
/// let queue = CommandQueue::<8>::new();
/// let mut scheduler = RefreshScheduler::new(hal, queue.receiver());
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     block_for(result.sleep_duration);
/// }
/// ```
pub struct RefreshScheduler<'a, B: Platform, const MAX_DRIVERS: usize, const QUEUE_SIZE: usize> {
    hal: LedHal<B, MAX_DRIVERS>,
    commands: CommandReceiver<'a, QUEUE_SIZE>,
    next_refresh: Instant,
    period: Duration,
}

impl<'a, B: Platform, const MAX_DRIVERS: usize, const QUEUE_SIZE: usize>
    RefreshScheduler<'a, B, MAX_DRIVERS, QUEUE_SIZE>
{
    /// Create a new scheduler running at [`DEFAULT_REFRESH_HZ`].
    pub fn new(hal: LedHal<B, MAX_DRIVERS>, commands: CommandReceiver<'a, QUEUE_SIZE>) -> Self {
        Self::with_period(hal, commands, DEFAULT_REFRESH_PERIOD)
    }

    /// Create a new scheduler with a custom refresh period.
    pub fn with_period(
        hal: LedHal<B, MAX_DRIVERS>,
        commands: CommandReceiver<'a, QUEUE_SIZE>,
        period: Duration,
    ) -> Self {
        Self {
            hal,
            commands,
            next_refresh: Instant::from_ticks(0),
            period,
        }
    }

    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Apply queued commands, refresh every driver and return timing info.
    ///
    /// When more than two periods behind, the deadline restarts from `now`
    /// instead of bursting to catch up.
    pub fn tick(&mut self, now: Instant) -> RefreshResult {
        let max_drift = self.period + self.period;
        if now > self.next_refresh + max_drift {
            self.next_refresh = now;
        }

        let commands_applied = self.hal.process_pending(&self.commands);
        self.hal.show_all();

        self.next_refresh += self.period;

        let sleep_duration = self
            .next_refresh
            .checked_duration_since(now)
            .unwrap_or(Duration::from_ticks(0));

        RefreshResult {
            next_deadline: self.next_refresh,
            sleep_duration,
            commands_applied,
        }
    }

    pub const fn hal(&self) -> &LedHal<B, MAX_DRIVERS> {
        &self.hal
    }

    pub fn hal_mut(&mut self) -> &mut LedHal<B, MAX_DRIVERS> {
        &mut self.hal
    }
}
