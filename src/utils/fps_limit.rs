use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Caps the frame rate and counts frames rendered during the last full second.
pub struct FpsLimiter {
    target_frametime: Duration,
    frame_timer: Instant,
    second_timer: Instant,
    frames_this_second: u32,
    frames_last_second: Option<u32>,
}

impl FpsLimiter {
    pub fn new(max_fps: f64) -> Self {
        Self {
            target_frametime: Duration::try_from_secs_f64(1. / max_fps).unwrap_or(Duration::MAX),
            frame_timer: Instant::now(),
            second_timer: Instant::now(),
            frames_this_second: 0,
            frames_last_second: None,
        }
    }

    /// Frames counted during the last completed second, `None` before the first one ends.
    pub fn fps(&self) -> Option<u32> {
        self.frames_last_second
    }

    /// Registers a finished frame and sleeps for the rest of its time slot.
    ///
    /// Returns `true` once per second, when [`FpsLimiter::fps`] has just been refreshed.
    pub fn delay(&mut self) -> bool {
        let before_wait = self.frame_timer.elapsed();
        if self.target_frametime > before_wait {
            sleep(self.target_frametime - before_wait);
        }
        self.frame_timer = Instant::now();
        self.tick(self.frame_timer)
    }

    fn tick(&mut self, now: Instant) -> bool {
        self.frames_this_second += 1;
        if now.duration_since(self.second_timer) < Duration::from_secs(1) {
            return false;
        }
        self.frames_last_second = Some(self.frames_this_second);
        self.frames_this_second = 0;
        self.second_timer = now;
        true
    }
}
