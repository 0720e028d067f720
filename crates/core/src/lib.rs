//! Core of the WS281x matrix utility
//!
//! This crate contains the hardware agnostic part of the utility: the validated configuration
//! model, the owned pixel matrix, scenes drawing into it, the [`Driver`] boundary and the
//! fixed rate render loop.

// Linter configuration
#![warn(unsafe_code, clippy::pedantic, clippy::use_self)]
// Too many false positives.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation
)]

pub use crate::{
    app::{App, AppConfig, FrameTimer, SleepTimer, FRAME_RATE},
    config::{ChannelConfig, Configuration, ConfigurationBuilder, StripType},
    driver::Driver,
    errors::{DriverError, Error, Result},
    matrix::Matrix,
    scene::{Fill, Scene, WanderingLight},
    shutdown::{ShutdownNotifier, ShutdownToken},
    types::{Color, Hertz},
};
pub use smart_leds;

pub mod app;
pub mod config;
pub mod driver;
pub mod errors;
pub mod matrix;
pub mod scene;
pub mod shutdown;
#[cfg(feature = "test-utils")]
pub mod test_utils;
pub mod types;
