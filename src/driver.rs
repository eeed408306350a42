//! Periodic driver that turns sun state into frames.
//!
//! The driver owns the refresh timer. Each tick it reads the clock, asks the
//! celestial source for a snapshot and builds a fresh frame. When the source
//! has nothing to offer the previous frame stays current. The loop runs until
//! the shared `running` flag is cleared (the binary clears it on SIGINT or
//! SIGTERM) and checks that flag at least once per second while sleeping.

use anyhow::Result;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration as StdDuration;

use crate::celestial::CelestialSource;
use crate::constants::CHECK_INTERVAL_SECS;
use crate::day_window::Instant;
use crate::frame::{FrameLayout, RenderFrame};
use crate::logger::Log;

const CHECK_INTERVAL: StdDuration = StdDuration::from_secs(CHECK_INTERVAL_SECS);

/// Source of wall-clock time and sleeping.
pub trait Clock {
    fn now(&self) -> Instant;
    fn sleep(&self, duration: StdDuration);
}

/// Real system time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Utc::now()
    }

    fn sleep(&self, duration: StdDuration) {
        std::thread::sleep(duration);
    }
}

pub struct Driver<C: Clock = SystemClock> {
    source: Box<dyn CelestialSource>,
    layout: FrameLayout,
    clock: C,
    interval: StdDuration,
    last_frame: Option<RenderFrame>,
}

impl<C: Clock> Driver<C> {
    pub fn new(
        source: Box<dyn CelestialSource>,
        layout: FrameLayout,
        clock: C,
        interval: StdDuration,
    ) -> Self {
        Self {
            source,
            layout,
            clock,
            interval,
            last_frame: None,
        }
    }

    pub fn layout(&self) -> &FrameLayout {
        &self.layout
    }

    /// Most recent frame, if any tick has produced one.
    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.last_frame.as_ref()
    }

    /// Run one update.
    ///
    /// # Returns
    /// - `Ok(Some(frame))` when a new frame was built
    /// - `Ok(None)` when the source had no state (last frame is kept)
    /// - `Err` when the source failed (last frame is kept)
    pub fn tick(&mut self) -> Result<Option<&RenderFrame>> {
        let now = self.clock.now();
        match self.source.sun_state(now)? {
            Some(sun) => {
                self.last_frame = Some(RenderFrame::build(now, &sun, &self.layout));
                Ok(self.last_frame.as_ref())
            }
            None => Ok(None),
        }
    }

    /// Tick immediately, then once per interval until `running` is cleared.
    ///
    /// Source errors are logged and do not stop the loop.
    pub fn run<F>(&mut self, running: &AtomicBool, mut on_frame: F)
    where
        F: FnMut(&RenderFrame),
    {
        Log::log_debug(&format!(
            "Driver started: {} every {}s",
            self.source.describe(),
            self.interval.as_secs()
        ));

        while running.load(Ordering::SeqCst) {
            match self.tick() {
                Ok(Some(frame)) => on_frame(frame),
                Ok(None) => Log::log_debug("No sun state available, keeping last frame"),
                Err(e) => Log::log_error(&format!("Failed to read sun state: {:#}", e)),
            }

            let mut slept = StdDuration::ZERO;
            while slept < self.interval && running.load(Ordering::SeqCst) {
                let chunk = CHECK_INTERVAL.min(self.interval - slept);
                self.clock.sleep(chunk);
                slept += chunk;
            }
        }

        Log::log_debug("Driver stopped");
    }
}
