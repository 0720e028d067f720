//! Matrix configuration model.

use core::{fmt::Display, str::FromStr};

use crate::{Color, Error, Hertz, Result};

/// Default number of LEDs in the strip.
pub const DEFAULT_LED_COUNT: usize = 300;
/// Default DMA channel.
pub const DEFAULT_DMA_CHANNEL: u8 = 10;
/// Default GPIO pin, PWM0 on the most of boards.
pub const DEFAULT_GPIO_PIN: i32 = 18;
/// Default signal frequency of the `ws2811` library.
pub const DEFAULT_TARGET_FREQ: Hertz = Hertz(800_000);
/// Default strip color layout.
pub const DEFAULT_STRIP_TYPE: StripType = StripType::Gbr;
/// Default channel brightness.
pub const DEFAULT_BRIGHTNESS: u8 = 255;
/// Default fill color.
pub const DEFAULT_FILL: Color = Color(0x0010_1010);

/// DMA channels starting from this one are not usable.
pub const DMA_CHANNELS_COUNT: u8 = 14;
/// Number of the PWM channels available on the board.
pub const MAX_CHANNELS: usize = 2;
/// Index of the channel the matrix is rendered into.
pub const PRIMARY_CHANNEL: usize = 0;

/// Color components layout of the LED chipset.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum StripType {
    Rgb,
    Rbg,
    Grb,
    Gbr,
    Brg,
    Bgr,
    /// SK6812 with the additional white LED.
    Rgbw,
    /// SK6812 with the additional white LED.
    Grbw,
}

impl StripType {
    /// All supported layouts.
    pub const ALL: [Self; 8] = [
        Self::Rgb,
        Self::Rbg,
        Self::Grb,
        Self::Gbr,
        Self::Brg,
        Self::Bgr,
        Self::Rgbw,
        Self::Grbw,
    ];

    /// Returns the layout name as it is accepted on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Rbg => "rbg",
            Self::Grb => "grb",
            Self::Gbr => "gbr",
            Self::Brg => "brg",
            Self::Bgr => "bgr",
            Self::Rgbw => "rgbw",
            Self::Grbw => "grbw",
        }
    }

    /// Returns true if the strip has a dedicated white LED.
    pub const fn has_white(self) -> bool {
        matches!(self, Self::Rgbw | Self::Grbw)
    }
}

impl FromStr for StripType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|strip| strip.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidStrip(s.to_owned()))
    }
}

impl Display for StripType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters of a single output channel.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ChannelConfig {
    /// GPIO pin the strip data line is connected to.
    pub gpio_pin: i32,
    /// Invert the output signal.
    pub invert: bool,
    /// The number of LEDs in the strip.
    pub led_count: usize,
    pub strip_type: StripType,
    pub brightness: u8,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            gpio_pin: DEFAULT_GPIO_PIN,
            invert: false,
            led_count: DEFAULT_LED_COUNT,
            strip_type: DEFAULT_STRIP_TYPE,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }
}

/// A validated matrix configuration.
///
/// Use [`ConfigurationBuilder`] to create it from the raw values.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Configuration {
    /// Frequency of the LED signal.
    pub target_freq: Hertz,
    pub dma_channel: u8,
    /// Active output channels, the matrix is rendered into the first one.
    pub channels: Vec<ChannelConfig>,
    /// Color the matrix is filled with.
    pub fill: Color,
    /// Blank the strip before exit.
    pub clear_on_exit: bool,
}

impl Configuration {
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    /// Returns the channel the matrix is rendered into.
    pub fn primary_channel(&self) -> &ChannelConfig {
        &self.channels[PRIMARY_CHANNEL]
    }

    /// Returns the number of LEDs in the primary channel.
    pub fn led_count(&self) -> usize {
        self.primary_channel().led_count
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            target_freq: DEFAULT_TARGET_FREQ,
            dma_channel: DEFAULT_DMA_CHANNEL,
            channels: vec![ChannelConfig::default()],
            fill: DEFAULT_FILL,
            clear_on_exit: false,
        }
    }
}

/// Collects the raw configuration values and validates them at once.
///
/// Setters never fail, the whole set of values is checked by [`ConfigurationBuilder::build`],
/// so an invalid value never leaves a partially applied configuration.
#[derive(Clone, Debug)]
pub struct ConfigurationBuilder {
    dma: i64,
    gpio: i32,
    invert: bool,
    clear_on_exit: bool,
    strip: String,
    length: i64,
    fill: String,
    brightness: i64,
    freq: i64,
}

impl Default for ConfigurationBuilder {
    fn default() -> Self {
        Self {
            dma: DEFAULT_DMA_CHANNEL.into(),
            gpio: DEFAULT_GPIO_PIN,
            invert: false,
            clear_on_exit: false,
            strip: DEFAULT_STRIP_TYPE.name().to_owned(),
            length: DEFAULT_LED_COUNT as i64,
            fill: DEFAULT_FILL.to_string(),
            brightness: DEFAULT_BRIGHTNESS.into(),
            freq: DEFAULT_TARGET_FREQ.0.into(),
        }
    }
}

impl ConfigurationBuilder {
    #[must_use]
    pub fn dma(mut self, dma: i64) -> Self {
        self.dma = dma;
        self
    }

    /// Sets a GPIO pin.
    ///
    /// The pin is not checked here, the driver rejects pins without the PWM, PCM or SPI
    /// function during initialization.
    #[must_use]
    pub fn gpio(mut self, gpio: i32) -> Self {
        self.gpio = gpio;
        self
    }

    #[must_use]
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    #[must_use]
    pub fn clear_on_exit(mut self, clear_on_exit: bool) -> Self {
        self.clear_on_exit = clear_on_exit;
        self
    }

    #[must_use]
    pub fn strip(mut self, strip: impl Into<String>) -> Self {
        self.strip = strip.into();
        self
    }

    #[must_use]
    pub fn length(mut self, length: i64) -> Self {
        self.length = length;
        self
    }

    #[must_use]
    pub fn fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    #[must_use]
    pub fn brightness(mut self, brightness: i64) -> Self {
        self.brightness = brightness;
        self
    }

    #[must_use]
    pub fn freq(mut self, freq: i64) -> Self {
        self.freq = freq;
        self
    }

    /// Validates collected values and creates a configuration.
    pub fn build(self) -> Result<Configuration> {
        let dma_channel = u8::try_from(self.dma)
            .ok()
            .filter(|dma| *dma < DMA_CHANNELS_COUNT)
            .ok_or(Error::InvalidDma(self.dma))?;

        let led_count = usize::try_from(self.length)
            .ok()
            .filter(|len| *len > 0 && i32::try_from(*len).is_ok())
            .ok_or(Error::InvalidLedCount(self.length))?;

        let strip_type = self.strip.parse::<StripType>()?;

        let brightness =
            u8::try_from(self.brightness).map_err(|_| Error::InvalidBrightness(self.brightness))?;

        let fill = self
            .fill
            .parse::<Color>()
            .map_err(|_| Error::InvalidFill(self.fill.clone()))?;

        let target_freq = u32::try_from(self.freq)
            .ok()
            .filter(|freq| *freq > 0)
            .map(Hertz)
            .ok_or(Error::InvalidFrequency(self.freq))?;

        Ok(Configuration {
            target_freq,
            dma_channel,
            channels: vec![ChannelConfig {
                gpio_pin: self.gpio,
                invert: self.invert,
                led_count,
                strip_type,
                brightness,
            }],
            fill,
            clear_on_exit: self.clear_on_exit,
        })
    }
}
