//! LED driver boundary.

use crate::{Color, Configuration, DriverError};

/// LED strip driver.
///
/// The driver owns the hardware resources and a pixel buffer per configured channel. The render
/// loop writes pixels into the buffer and then asks the driver to transmit it.
pub trait Driver {
    /// Acquires hardware resources according to the given configuration.
    fn init(&mut self, config: &Configuration) -> Result<(), DriverError>;
    /// Returns the pixel buffer of the given channel.
    ///
    /// The buffer is empty if the channel is not configured or the driver is not initialized.
    fn leds_mut(&mut self, channel: usize) -> &mut [Color];
    /// Transmits the channel buffers.
    ///
    /// It may block until the previous frame transmission is finished.
    fn render(&mut self) -> Result<(), DriverError>;
    /// Releases hardware resources.
    fn fini(&mut self);
}

impl<D: Driver + ?Sized> Driver for &mut D {
    fn init(&mut self, config: &Configuration) -> Result<(), DriverError> {
        D::init(self, config)
    }

    fn leds_mut(&mut self, channel: usize) -> &mut [Color] {
        D::leds_mut(self, channel)
    }

    fn render(&mut self) -> Result<(), DriverError> {
        D::render(self)
    }

    fn fini(&mut self) {
        D::fini(self);
    }
}

/// Allocates blank pixel buffers for every configured channel.
///
/// Helper for the drivers which keep the channel buffers in memory.
pub fn channel_buffers(config: &Configuration) -> Vec<Vec<Color>> {
    config
        .channels
        .iter()
        .map(|channel| vec![Color::BLACK; channel.led_count])
        .collect()
}
