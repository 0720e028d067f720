//! Owned pixel buffer.

use crate::Color;

/// Pixels which should be displayed on the strip.
///
/// The matrix is independent of the driver output buffer, it is copied into the driver
/// buffer on every frame.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Matrix {
    pixels: Vec<Color>,
}

impl Matrix {
    /// Creates a new blank matrix with the given number of pixels.
    pub fn new(len: usize) -> Self {
        Self {
            pixels: vec![Color::BLACK; len],
        }
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Overwrites every pixel with the given color.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Turns off every pixel.
    pub fn clear(&mut self) {
        self.fill(Color::BLACK);
    }

    /// Changes the number of pixels, new pixels are blank.
    pub fn resize(&mut self, len: usize) {
        self.pixels.resize(len, Color::BLACK);
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.pixels
    }

    pub fn as_mut_slice(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Copies pixels into the driver buffer.
    ///
    /// Returns the number of the copied pixels.
    pub fn render_to(&self, leds: &mut [Color]) -> usize {
        let len = core::cmp::min(self.len(), leds.len());
        leds[..len].copy_from_slice(&self.pixels[..len]);
        len
    }
}
