// Fixed-rate tick scheduling
//
// Simulation ticks run at a fixed 60 Hz no matter how often the window
// redraws. Each frame asks `begin_frame` how many ticks are due, runs them,
// then draws once.

use std::time::{Duration, Instant};

/// Simulation ticks per second
pub const TICKS_PER_SECOND: u32 = 60;

/// Length of one tick
pub const TICK_DURATION: Duration =
    Duration::from_nanos(1_000_000_000 / TICKS_PER_SECOND as u64);

/// Ticks allowed in a single frame before the backlog is dropped
const MAX_TICKS_PER_FRAME: u32 = 5;

/// How often the measured tick rate is refreshed
const TPS_WINDOW: Duration = Duration::from_secs(1);

/// Game loop timing state
pub struct GameLoop {
    /// Time owed to the simulation
    accumulator: Duration,

    last_frame_time: Instant,

    /// Start of the current TPS measurement window
    window_start: Instant,

    /// Ticks run in the current measurement window
    window_ticks: u32,

    /// Ticks per second measured over the last full window
    current_tps: f32,

    frame_count: u64,
    tick_count: u64,
}

impl GameLoop {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(now: Instant) -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: now,
            window_start: now,
            window_ticks: 0,
            current_tps: 0.0,
            frame_count: 0,
            tick_count: 0,
        }
    }

    /// Begin a new frame, returns the number of ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        self.begin_frame_at(Instant::now())
    }

    fn begin_frame_at(&mut self, now: Instant) -> u32 {
        let frame_time = now.saturating_duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;
        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= TICK_DURATION && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= TICK_DURATION;
            ticks += 1;
        }

        // Drop the rest of the backlog rather than spiral
        if ticks == MAX_TICKS_PER_FRAME && self.accumulator >= TICK_DURATION {
            log::debug!(
                "Dropping {:?} of simulation backlog",
                self.accumulator - self.accumulator.min(TICK_DURATION)
            );
            self.accumulator = self.accumulator.min(TICK_DURATION);
        }

        self.tick_count += ticks as u64;
        self.window_ticks += ticks;
        self.update_tps(now);

        ticks
    }

    fn update_tps(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < TPS_WINDOW {
            return;
        }

        self.current_tps = self.window_ticks as f32 / elapsed.as_secs_f32();
        self.window_ticks = 0;
        self.window_start = now;
        log::debug!("TPS: {:.2}", self.current_tps);
    }

    /// Ticks per second measured over the last second
    pub fn tps(&self) -> f32 {
        self.current_tps
    }

    /// Get total number of frames
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of ticks executed
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
