use std::thread;
use std::time::{Duration, Instant};

use crate::consts::MAX_FRAME_DT;

/// Frame-rate governor: sleeps out the rest of each frame budget and
/// reports the real time that passed since the previous frame
pub struct FrameClock {
    frame_budget: Duration,
    last_instant: Instant,
    pub max_dt: f32,
    pub frame_count: u64,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame_budget: Duration::from_secs_f64(1.0 / target_fps.max(1) as f64),
            last_instant: Instant::now(),
            max_dt: MAX_FRAME_DT,
            frame_count: 0,
        }
    }

    /// Wait for the next frame boundary. Returns seconds since the last call.
    pub fn tick(&mut self) -> f32 {
        let elapsed = self.last_instant.elapsed();
        if elapsed < self.frame_budget {
            thread::sleep(self.frame_budget - elapsed);
        }

        let now = Instant::now();
        let dt = now.duration_since(self.last_instant).as_secs_f32();
        self.last_instant = now;
        self.frame_count += 1;

        // A stalled terminal must not teleport everything
        if dt > self.max_dt {
            log::warn!(
                "Frame took {:.1}ms - capping to {:.0}ms",
                dt * 1000.0,
                self.max_dt * 1000.0
            );
            return self.max_dt;
        }
        dt
    }
}
