use crate::{Color, Matrix};

use super::Scene;

/// A ticker where a single light runs along the strip towards the lit tail.
///
/// Each time the light reaches the tail, the tail grows by one pixel. Once the whole strip
/// is lit, the scene starts over.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WanderingLight {
    color: Color,
    always_on: usize,
    wandering_index: usize,
}

impl WanderingLight {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            always_on: 0,
            wandering_index: 0,
        }
    }

    /// Returns the number of pixels in the lit tail.
    pub fn always_on(&self) -> usize {
        self.always_on
    }

    fn draw(&self, matrix: &mut Matrix) {
        let len = matrix.len();
        let always_on_pos = len - self.always_on;

        let pixels = matrix.as_mut_slice();
        pixels.fill(Color::BLACK);
        pixels[always_on_pos..].fill(self.color);
        if self.wandering_index < len {
            pixels[self.wandering_index] = self.color;
        }
    }
}

impl Scene for WanderingLight {
    fn start(&mut self, matrix: &mut Matrix) {
        self.always_on = 0;
        self.wandering_index = 0;
        if !matrix.is_empty() {
            self.draw(matrix);
        }
    }

    fn next_frame(&mut self, matrix: &mut Matrix) {
        let len = matrix.len();
        if len == 0 {
            return;
        }

        self.wandering_index += 1;
        if self.wandering_index >= len - self.always_on {
            self.wandering_index = 0;
            self.always_on += 1;
        }
        if self.always_on >= len {
            self.always_on = 0;
        }

        self.draw(matrix);
    }
}
