use core::{fmt::Display, str::FromStr, time::Duration};

use smart_leds::RGB8;

/// Frequency in hertz.
#[derive(PartialEq, Eq, Clone, Copy, Debug, PartialOrd, Ord, Hash, Default)]
pub struct Hertz(pub u32);

impl FromStr for Hertz {
    type Err = <u32 as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u32::from_str(s).map(Self)
    }
}

impl From<u32> for Hertz {
    fn from(inner: u32) -> Self {
        Self(inner)
    }
}

impl From<Hertz> for Duration {
    fn from(value: Hertz) -> Self {
        Duration::from_secs_f64(1.0_f64 / f64::from(value.0))
    }
}

impl Display for Hertz {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.0.fmt(f)
    }
}

/// Packed LED color in the `0xWWRRGGBB` layout.
///
/// The white component is only transmitted by the four color strips, the rest of them
/// ignore it.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    /// All components are off.
    pub const BLACK: Self = Self(0);

    /// Creates a color from the red, green and blue components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self((r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Creates a color from the red, green, blue and white components.
    pub const fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self((w as u32) << 24 | Self::rgb(r, g, b).0)
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    pub const fn w(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Scales every component with the given brightness.
    ///
    /// Full brightness `255` leaves the color as is.
    #[must_use]
    pub const fn scale(self, brightness: u8) -> Self {
        const fn scale(c: u8, brightness: u8) -> u8 {
            ((c as u16 * (brightness as u16 + 1)) >> 8) as u8
        }

        Self::rgbw(
            scale(self.r(), brightness),
            scale(self.g(), brightness),
            scale(self.b(), brightness),
            scale(self.w(), brightness),
        )
    }
}

impl From<RGB8> for Color {
    fn from(value: RGB8) -> Self {
        Self::rgb(value.r, value.g, value.b)
    }
}

impl From<Color> for RGB8 {
    fn from(value: Color) -> Self {
        RGB8::new(value.r(), value.g(), value.b())
    }
}

impl FromStr for Color {
    type Err = core::num::ParseIntError;

    /// Parses a hexadecimal color, the `0x` prefix is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        u32::from_str_radix(digits, 16).map(Self)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:#08x}", self.0)
    }
}
