//! Test helpers

use std::time::Duration;

use crate::{
    driver::channel_buffers, Color, Configuration, Driver, DriverError, FrameTimer, ShutdownToken,
};

/// In-memory driver which records every rendered frame of the primary channel.
#[derive(Debug, Default)]
pub struct MemoryDriver {
    channels: Vec<Vec<Color>>,
    /// Frames passed to the render call.
    pub frames: Vec<Vec<Color>>,
    /// Configuration passed to the init call.
    pub config: Option<Configuration>,
    pub init_calls: usize,
    pub fini_calls: usize,

    init_error: Option<DriverError>,
    render_errors: Vec<(usize, DriverError)>,
    shutdown_after: Option<(usize, ShutdownToken)>,
}

impl MemoryDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the init call fail with the given error.
    #[must_use]
    pub fn fail_init(mut self, err: DriverError) -> Self {
        self.init_error = Some(err);
        self
    }

    /// Makes the render call with the given zero based index fail.
    #[must_use]
    pub fn fail_render(mut self, index: usize, err: DriverError) -> Self {
        self.render_errors.push((index, err));
        self
    }

    /// Requests the shutdown right after the given number of rendered frames, as a signal
    /// delivered during the rendering would do.
    #[must_use]
    pub fn shutdown_after(mut self, frames: usize, token: ShutdownToken) -> Self {
        self.shutdown_after = Some((frames, token));
        self
    }
}

impl Driver for MemoryDriver {
    fn init(&mut self, config: &Configuration) -> Result<(), DriverError> {
        self.init_calls += 1;
        if let Some(err) = self.init_error {
            return Err(err);
        }

        self.channels = channel_buffers(config);
        self.config = Some(config.clone());
        Ok(())
    }

    fn leds_mut(&mut self, channel: usize) -> &mut [Color] {
        self.channels
            .get_mut(channel)
            .map(Vec::as_mut_slice)
            .unwrap_or_default()
    }

    fn render(&mut self) -> Result<(), DriverError> {
        let index = self.frames.len();
        self.frames
            .push(self.channels.first().cloned().unwrap_or_default());

        if let Some((frames, token)) = &self.shutdown_after {
            if self.frames.len() >= *frames {
                token.request();
            }
        }

        match self.render_errors.iter().find(|(i, _)| *i == index) {
            Some((_, err)) => Err(*err),
            None => Ok(()),
        }
    }

    fn fini(&mut self) {
        self.fini_calls += 1;
        self.channels.clear();
    }
}

/// Frame timer which records requested periods instead of sleeping.
#[derive(Debug, Default)]
pub struct ManualTimer {
    pub waits: Vec<Duration>,
}

impl FrameTimer for ManualTimer {
    fn wait(&mut self, period: Duration) {
        self.waits.push(period);
    }
}

impl FrameTimer for &mut ManualTimer {
    fn wait(&mut self, period: Duration) {
        self.waits.push(period);
    }
}

#[test]
fn test_memory_driver_buffers() {
    let config = Configuration::builder().length(5).build().unwrap();

    let mut driver = MemoryDriver::new();
    assert!(driver.leds_mut(0).is_empty());

    driver.init(&config).unwrap();
    assert_eq!(driver.leds_mut(0).len(), 5);
    assert!(driver.leds_mut(1).is_empty());

    driver.leds_mut(0)[2] = Color(7);
    driver.render().unwrap();
    assert_eq!(
        driver.frames,
        vec![vec![
            Color::BLACK,
            Color::BLACK,
            Color(7),
            Color::BLACK,
            Color::BLACK
        ]]
    );

    driver.fini();
    assert!(driver.leds_mut(0).is_empty());
    assert_eq!((driver.init_calls, driver.fini_calls), (1, 1));
}
