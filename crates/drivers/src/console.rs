//! Terminal preview driver.

use std::io::Write;

use ws281x_matrix_core::{
    driver::channel_buffers, ChannelConfig, Color, Configuration, Driver, DriverError,
};

const PIXEL: &str = "\u{2588}";
const RESET: &str = "\x1b[0m";

/// Draws the primary channel as a line of 24-bit colored blocks.
///
/// Each frame overwrites the previous one by returning the cursor to the line beginning.
pub struct ConsoleDriver<W: Write> {
    out: W,
    channel: Option<ChannelConfig>,
    channels: Vec<Vec<Color>>,
}

impl ConsoleDriver<std::io::Stderr> {
    /// Creates a driver drawing into the standard error.
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write> ConsoleDriver<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            channel: None,
            channels: Vec::new(),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self) -> std::io::Result<()> {
        let Some(channel) = self.channel else {
            return Ok(());
        };

        let mut line = String::from("\r");
        for &pixel in self.channels.first().into_iter().flatten() {
            let [r, g, b] = visible_rgb(pixel, &channel);
            line.push_str(&format!("\x1b[38;2;{r};{g};{b}m{PIXEL}"));
        }
        line.push_str(RESET);

        self.out.write_all(line.as_bytes())?;
        self.out.flush()
    }
}

/// Returns the color the pixel would have on the strip.
fn visible_rgb(pixel: Color, channel: &ChannelConfig) -> [u8; 3] {
    let pixel = pixel.scale(channel.brightness);
    if channel.strip_type.has_white() {
        let w = pixel.w();
        [
            pixel.r().saturating_add(w),
            pixel.g().saturating_add(w),
            pixel.b().saturating_add(w),
        ]
    } else {
        [pixel.r(), pixel.g(), pixel.b()]
    }
}

impl<W: Write> Driver for ConsoleDriver<W> {
    fn init(&mut self, config: &Configuration) -> Result<(), DriverError> {
        self.channels = channel_buffers(config);
        self.channel = Some(*config.primary_channel());
        log::debug!("Console driver initialized with {} leds", config.led_count());
        Ok(())
    }

    fn leds_mut(&mut self, channel: usize) -> &mut [Color] {
        self.channels
            .get_mut(channel)
            .map(Vec::as_mut_slice)
            .unwrap_or_default()
    }

    fn render(&mut self) -> Result<(), DriverError> {
        self.draw().map_err(DriverError::generic)
    }

    fn fini(&mut self) {
        if self.channel.take().is_some() {
            // Move the cursor out of the preview line.
            self.out.write_all(b"\n").ok();
            self.out.flush().ok();
        }
        self.channels.clear();
    }
}
