//! Fixed rate render loop.

use std::time::{Duration, Instant};

use crate::{
    config::PRIMARY_CHANNEL, Configuration, Driver, DriverError, Error, Hertz, Matrix, Result,
    Scene, ShutdownToken,
};

pub use self::stats::RenderingStats;

mod stats;

/// Frame rate of the render loop.
pub const FRAME_RATE: Hertz = Hertz(60);

/// Waits between the rendered frames.
pub trait FrameTimer {
    /// Blocks for the given period.
    fn wait(&mut self, period: Duration);
}

/// Frame timer based on the thread sleep.
#[derive(Clone, Copy, Debug, Default)]
pub struct SleepTimer;

impl FrameTimer for SleepTimer {
    fn wait(&mut self, period: Duration) {
        std::thread::sleep(period);
    }
}

/// Render loop components.
pub struct AppConfig<D, T, S>
where
    D: Driver,
    T: FrameTimer,
    S: Scene,
{
    pub config: Configuration,
    pub driver: D,
    pub timer: T,
    pub scene: S,
    pub shutdown: ShutdownToken,
}

impl<D, T, S> AppConfig<D, T, S>
where
    D: Driver,
    T: FrameTimer,
    S: Scene,
{
    pub fn into_app(self) -> App<D, T, S> {
        let matrix = Matrix::new(self.config.led_count());
        let frame_period = Duration::from(FRAME_RATE);
        App {
            stats: RenderingStats::new(frame_period),
            frame_period,
            matrix,
            config: self.config,
            driver: self.driver,
            timer: self.timer,
            scene: self.scene,
            shutdown: self.shutdown,
        }
    }
}

/// Matrix render loop.
pub struct App<D, T, S>
where
    D: Driver,
    T: FrameTimer,
    S: Scene,
{
    config: Configuration,
    driver: D,
    timer: T,
    scene: S,
    shutdown: ShutdownToken,

    matrix: Matrix,
    frame_period: Duration,
    stats: RenderingStats,
}

impl<D, T, S> App<D, T, S>
where
    D: Driver,
    T: FrameTimer,
    S: Scene,
{
    /// Runs the render loop until the shutdown is requested or the driver fails.
    ///
    /// The driver is finalized before return unless its initialization has failed.
    pub fn run(&mut self) -> Result<()> {
        self.driver.init(&self.config).map_err(|err| {
            log::error!("Unable to initialize driver: {err}");
            Error::DriverInit(err)
        })?;

        let channel = self.config.primary_channel();
        log::info!(
            "Rendering {} leds on gpio {} [strip: {}, dma: {}, freq: {}Hz, brightness: {}]",
            channel.led_count,
            channel.gpio_pin,
            channel.strip_type,
            self.config.dma_channel,
            self.config.target_freq,
            channel.brightness,
        );

        self.scene.start(&mut self.matrix);
        let status = self.event_loop();

        if self.config.clear_on_exit {
            log::info!("Clearing matrix");
            self.matrix.clear();
            if let Err(err) = self.render_frame() {
                log::warn!("Unable to clear matrix: {err}");
            }
        }

        self.driver.fini();
        log::info!("Render loop finished");
        self.stats.show();

        status
    }

    /// Returns the current matrix contents.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Returns the rendering statistics.
    pub fn stats(&self) -> &RenderingStats {
        &self.stats
    }

    fn event_loop(&mut self) -> Result<()> {
        while !self.shutdown.is_requested() {
            self.scene.next_frame(&mut self.matrix);

            let now = Instant::now();
            self.render_frame().map_err(|err| {
                log::error!("Unable to render frame: {err}");
                Error::DriverRender(err)
            })?;
            self.stats.update(now.elapsed());
            log::trace!("Frame {} rendered", self.stats.total_frames());

            // The sleep doesn't depend on the rendering time.
            self.timer.wait(self.frame_period);
        }

        log::info!("Shutdown requested");
        Ok(())
    }

    fn render_frame(&mut self) -> core::result::Result<(), DriverError> {
        self.matrix.render_to(self.driver.leds_mut(PRIMARY_CHANNEL));
        self.driver.render()
    }
}
