use std::time::Instant;

/// Seconds between frame rate reports
pub const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Frame counter; measures only, never throttles
#[derive(Debug, Clone)]
pub struct FrameStats {
    total_frames: u64,
    interval_frames: u32,
    interval_elapsed: f32,
    fps: f32,
    last_frame_time: Instant,
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            total_frames: 0,
            interval_frames: 0,
            interval_elapsed: 0.0,
            fps: 0.0,
            last_frame_time: Instant::now(),
        }
    }

    /// Count a frame presented now; returns the new frame rate when an
    /// interval completes
    pub fn tick(&mut self) -> Option<f32> {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;
        self.record(delta)
    }

    /// Count a frame that took `delta` seconds
    pub fn record(&mut self, delta: f32) -> Option<f32> {
        self.total_frames += 1;
        self.interval_frames += 1;
        self.interval_elapsed += delta;

        if self.interval_elapsed < FPS_UPDATE_INTERVAL {
            return None;
        }

        self.fps = self.interval_frames as f32 / self.interval_elapsed;
        self.interval_frames = 0;
        self.interval_elapsed = 0.0;
        Some(self.fps)
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_report_before_interval() {
        let mut stats = FrameStats::new();
        assert_eq!(stats.record(0.1), None);
        assert_eq!(stats.record(0.1), None);
        assert_eq!(stats.total_frames(), 2);
        assert_eq!(stats.fps(), 0.0);
    }

    #[test]
    fn reports_rate_after_interval() {
        let mut stats = FrameStats::new();
        let mut report = None;
        for _ in 0..4 {
            report = stats.record(0.25);
        }

        let fps = report.expect("interval should complete on the fourth frame");
        assert!((fps - 4.0).abs() < 0.001);
        assert_eq!(stats.fps(), fps);
    }

    #[test]
    fn interval_resets_after_report() {
        let mut stats = FrameStats::new();
        assert!(stats.record(1.5).is_some());
        assert_eq!(stats.record(0.5), None);
        assert_eq!(stats.total_frames(), 2);
    }
}
