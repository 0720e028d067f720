//! Adapter for the `smart-leds` ecosystem drivers.

use smart_leds::{brightness, SmartLedsWrite, RGB8};
use ws281x_matrix_core::{
    driver::channel_buffers, Color, Configuration, Driver, DriverError,
};

/// Forwards the primary channel into a [`SmartLedsWrite`] implementation.
///
/// The channel brightness is applied on the fly, the white component is dropped.
pub struct SmartLedsDriver<W> {
    writer: W,
    brightness: u8,
    channels: Vec<Vec<Color>>,
}

impl<W> SmartLedsDriver<W>
where
    W: SmartLedsWrite<Color = RGB8>,
    W::Error: core::fmt::Debug,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            brightness: u8::MAX,
            channels: Vec::new(),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Driver for SmartLedsDriver<W>
where
    W: SmartLedsWrite<Color = RGB8>,
    W::Error: core::fmt::Debug,
{
    fn init(&mut self, config: &Configuration) -> Result<(), DriverError> {
        self.channels = channel_buffers(config);
        self.brightness = config.primary_channel().brightness;
        Ok(())
    }

    fn leds_mut(&mut self, channel: usize) -> &mut [Color] {
        self.channels
            .get_mut(channel)
            .map(Vec::as_mut_slice)
            .unwrap_or_default()
    }

    fn render(&mut self) -> Result<(), DriverError> {
        let Some(pixels) = self.channels.first() else {
            return Ok(());
        };

        let colors = pixels.iter().copied().map(RGB8::from);
        self.writer
            .write(brightness(colors, self.brightness))
            .map_err(|err| DriverError::generic(format_args!("{err:?}")))
    }

    fn fini(&mut self) {
        self.channels.clear();
    }
}
