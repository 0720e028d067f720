//! LED drivers for the WS281x matrix utility
//!
//! - [`Ws281xDriver`] drives the strip through the Raspberry Pi PWM/DMA hardware, it requires
//!   the `rpi` feature.
//! - [`ConsoleDriver`] draws frames into a terminal, it is useful when there is no hardware.
//! - [`SmartLedsDriver`] forwards frames into any [`smart_leds::SmartLedsWrite`] implementation.

// Linter configuration
#![warn(unsafe_code, clippy::pedantic, clippy::use_self)]
// Too many false positives.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub use crate::{console::ConsoleDriver, writer::SmartLedsDriver};
#[cfg(feature = "rpi")]
pub use crate::rpi::Ws281xDriver;

mod console;
#[cfg(feature = "rpi")]
mod rpi;
mod writer;
