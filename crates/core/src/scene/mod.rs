//! Scenes drawing into the matrix.

pub use self::wandering_light::WanderingLight;

use crate::{Color, Matrix};

mod wandering_light;

/// Application logic producing the matrix contents.
pub trait Scene {
    /// Draws the initial matrix contents before the first frame.
    fn start(&mut self, matrix: &mut Matrix);
    /// Updates the matrix contents before the next frame is rendered.
    fn next_frame(&mut self, _matrix: &mut Matrix) {}
}

impl<S: Scene + ?Sized> Scene for Box<S> {
    fn start(&mut self, matrix: &mut Matrix) {
        S::start(self, matrix);
    }

    fn next_frame(&mut self, matrix: &mut Matrix) {
        S::next_frame(self, matrix);
    }
}

/// Static scene with the whole matrix filled by a single color.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Fill(pub Color);

impl Scene for Fill {
    fn start(&mut self, matrix: &mut Matrix) {
        matrix.fill(self.0);
    }
}
