/// Frame clock for the fixed-rate simulation loop
///
/// Wall-clock time is accumulated and converted into a whole number of
/// fixed simulation ticks. Each tick is one full input -> update -> resolve
/// pass, so the simulation advances at the configured rate regardless of how
/// often the window delivers events.
use std::time::{Duration, Instant};

/// Maximum number of ticks per frame to prevent spiral of death
const MAX_TICKS_PER_FRAME: u32 = 5;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Fixed-rate frame clock
pub struct FrameClock {
    /// Duration of one simulation tick
    tick_duration: Duration,

    /// Accumulated time not yet consumed by ticks
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Frames observed
    frame_count: u64,

    /// Simulation ticks handed out
    tick_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl FrameClock {
    /// Create a clock ticking `target_fps` times per second
    pub fn new(target_fps: u32) -> Self {
        let tick_duration = Duration::from_secs_f64(1.0 / f64::from(target_fps.max(1)));
        Self {
            tick_duration,
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            tick_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame, returns the number of fixed ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= self.tick_duration && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= self.tick_duration;
            ticks += 1;
        }

        // Drop time we could not catch up on rather than bursting next frame
        if ticks == MAX_TICKS_PER_FRAME {
            self.accumulator = Duration::ZERO;
        }

        self.tick_count += u64::from(ticks);
        ticks
    }

    /// Instant at which the next tick becomes due
    pub fn next_tick_at(&self) -> Instant {
        self.last_frame_time + self.tick_duration.saturating_sub(self.accumulator)
    }

    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clock_creation() {
        let clock = FrameClock::new(60);
        assert_eq!(clock.frame_count(), 0);
        assert_eq!(clock.tick_count(), 0);
    }

    #[test]
    fn test_tick_duration_matches_rate() {
        let clock = FrameClock::new(60);
        let expected = 1.0 / 60.0;
        assert!((clock.tick_duration().as_secs_f64() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_zero_rate_does_not_divide_by_zero() {
        let clock = FrameClock::new(0);
        assert_eq!(clock.tick_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_frame_counting() {
        let mut clock = FrameClock::new(60);
        clock.begin_frame();
        clock.begin_frame();
        assert_eq!(clock.frame_count(), 2);
    }

    #[test]
    fn test_fps_estimate_refreshes_every_ten_frames() {
        let mut clock = FrameClock::new(60);
        for _ in 0..9 {
            thread::sleep(Duration::from_millis(2));
            clock.begin_frame();
        }
        assert_eq!(clock.fps(), 0.0);

        thread::sleep(Duration::from_millis(2));
        clock.begin_frame();
        assert!(clock.fps() > 0.0);
    }

    #[test]
    fn test_ticks_accumulate_over_time() {
        let mut clock = FrameClock::new(60);
        thread::sleep(Duration::from_millis(40));

        let ticks = clock.begin_frame();
        assert!(ticks >= 2);
        assert_eq!(clock.tick_count(), u64::from(ticks));
    }

    #[test]
    fn test_max_ticks_per_frame_limit() {
        let mut clock = FrameClock::new(60);

        // 300ms would allow 18 ticks
        thread::sleep(Duration::from_millis(300));

        let ticks = clock.begin_frame();
        assert_eq!(ticks, MAX_TICKS_PER_FRAME);
    }
}
