use std::time::Duration;

/// Render loop statistics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderingStats {
    frame_period: Duration,

    total_frames: u32,
    laggy_frames: u32,
    max_rendering_time: Duration,
    total_rendering_time: Duration,
}

impl RenderingStats {
    pub fn new(frame_period: Duration) -> Self {
        Self {
            frame_period,
            ..Self::default()
        }
    }

    /// Returns the number of rendered frames.
    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    /// Returns the number of frames rendered longer than the frame period.
    pub fn laggy_frames(&self) -> u32 {
        self.laggy_frames
    }

    pub fn max_rendering_time(&self) -> Duration {
        self.max_rendering_time
    }

    pub fn average_rendering_time(&self) -> Option<Duration> {
        (self.total_frames > 0).then(|| self.total_rendering_time / self.total_frames)
    }

    pub fn update(&mut self, rendering_time: Duration) {
        self.total_frames += 1;
        self.max_rendering_time = std::cmp::max(self.max_rendering_time, rendering_time);
        self.total_rendering_time += rendering_time;
        if rendering_time > self.frame_period {
            self.laggy_frames += 1;
        }
    }

    pub fn show(&self) {
        let Some(average_rendering_time) = self.average_rendering_time() else {
            log::info!("No frames have been rendered");
            return;
        };

        log::info!("Print statistics snapshot");
        log::info!(
            "-> Laggy frames {} of {} [{}%]",
            self.laggy_frames,
            self.total_frames,
            f64::from(self.laggy_frames) / f64::from(self.total_frames) * 100_f64
        );
        log::info!(
            "-> Max frame rendering duration is {}ms",
            self.max_rendering_time.as_secs_f32() * 1_000_f32
        );
        log::info!(
            "-> Average frame rendering duration is {}ms",
            average_rendering_time.as_secs_f32() * 1_000_f32
        );
        log::info!(
            "-> Frame period is {}ms",
            self.frame_period.as_secs_f32() * 1_000_f32
        );
    }
}
