use std::time::{Duration, Instant};

/// Tracks per-frame delta time and a windowed fps/mspf measurement.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_frame: Option<Instant>,
    delta: Duration,
    frames: u32,
    window_start: Instant,
    measurement: (u32, Duration),
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_frame: None,
            delta: Duration::ZERO,
            frames: 0,
            window_start: Instant::now(),
            measurement: (0, Duration::ZERO),
        }
    }

    /// Call at the start of each frame. The delta is the time since the
    /// previous `begin_frame`, or zero on the first frame.
    pub fn begin_frame(&mut self) {
        let now = Instant::now();
        self.delta = match self.last_frame {
            Some(prev) => now - prev,
            None => Duration::ZERO,
        };
        self.last_frame = Some(now);
    }

    /// Call after the frame has been submitted.
    pub fn end_frame(&mut self) {
        self.frames += 1;
        let now = Instant::now();
        let elapsed = now - self.window_start;
        if elapsed.as_secs_f32() >= 1.0 {
            self.measurement = (self.frames, elapsed);
            self.window_start = now;
            self.frames = 0;
        }
    }

    /// Seconds elapsed between the previous frame and this one.
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    pub fn fps(&self) -> f32 {
        let (frames, elapsed) = self.measurement;
        if frames == 0 || elapsed.is_zero() {
            0.0
        } else {
            frames as f32 / elapsed.as_secs_f32()
        }
    }

    pub fn mspf(&self) -> f32 {
        let (frames, elapsed) = self.measurement;
        if frames == 0 || elapsed.is_zero() {
            0.0
        } else {
            elapsed.as_secs_f32() / frames as f32 * 1000.0
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn first_frame_has_zero_delta() {
        let mut clock = FrameClock::new();
        clock.begin_frame();
        assert_eq!(clock.delta_seconds(), 0.0);
    }

    #[test]
    fn no_measurement_before_first_window() {
        let clock = FrameClock::new();
        assert_eq!(clock.fps(), 0.0);
        assert_eq!(clock.mspf(), 0.0);
    }

    #[test]
    fn delta_is_nonnegative_and_monotonic_with_sleep() {
        let mut clock = FrameClock::new();
        clock.begin_frame();
        std::thread::sleep(Duration::from_millis(5));
        clock.begin_frame();
        assert!(clock.delta_seconds() >= 0.005);
    }
}
