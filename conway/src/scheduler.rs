// scheduler.rs - Fixed-interval trigger for generation steps
//
// Hosts poll it once per frame; a step runs to completion inside the poll
// caller before the next poll, so steps never overlap.

use std::time::{Duration, Instant};

use tracing::info;

#[derive(Debug, Clone)]
pub struct Scheduler {
    interval: Duration,
    // `Some` while running: when the last step fired (or when started)
    last_tick: Option<Instant>,
}

impl Scheduler {
    pub fn new(interval: Duration) -> Self {
        Self { interval, last_tick: None }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn is_running(&self) -> bool {
        self.last_tick.is_some()
    }

    /// Begin periodic stepping. Starting an already running scheduler
    /// does nothing and keeps the pending deadline.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_running() {
            return false;
        }
        self.last_tick = Some(now);
        info!(interval_ms = self.interval.as_millis() as u64, "stepping started");
        true
    }

    /// Halt periodic stepping. Stopping a stopped scheduler does nothing.
    pub fn stop(&mut self) -> bool {
        if self.last_tick.take().is_none() {
            return false;
        }
        info!("stepping stopped");
        true
    }

    /// True when a step is due. Firing re-arms from `now`; ticks missed
    /// while the host was busy are dropped rather than replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.last_tick {
            Some(last) if now.saturating_duration_since(last) >= self.interval => {
                self.last_tick = Some(now);
                true
            }
            _ => false,
        }
    }

    /// Time left before the next step is due, `None` when stopped.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        let last = self.last_tick?;
        Some(self.interval.saturating_sub(now.saturating_duration_since(last)))
    }
}
