//! Command line interface of the WS281x matrix utility.

// Linter configuration
#![warn(unsafe_code, clippy::pedantic, clippy::use_self)]
// Too many false positives.
#![allow(clippy::missing_errors_doc)]

use clap::{ArgAction, Parser, ValueEnum};
use ws281x_matrix_core::{Configuration, Fill, Result, Scene, WanderingLight};

/// WS281x LED matrix utility
///
/// Fills the LED strip attached to the Raspberry Pi GPIO with a color and keeps it lit until
/// interrupted by SIGINT or SIGTERM.
#[derive(Debug, Parser)]
#[command(name = "ws281x-matrix", author, version, about, long_about = None)]
#[command(disable_version_flag = true, allow_negative_numbers = true)]
pub struct Cli {
    /// DMA channel to use
    #[arg(short, long, default_value_t = 10, value_name = "N")]
    pub dma: i64,
    /// GPIO pin to use
    #[arg(short, long, default_value_t = 18, value_name = "PIN")]
    pub gpio: i32,
    /// Invert the output signal
    #[arg(short, long)]
    pub invert: bool,
    /// Clear the matrix on exit
    #[arg(short, long)]
    pub clear: bool,
    /// Strip color layout: rgb, rbg, grb, gbr, brg, bgr, rgbw or grbw
    #[arg(short, long, default_value = "gbr")]
    pub strip: String,
    /// Number of the strip pixels
    #[arg(short, long, default_value_t = 300, value_name = "LEDS")]
    pub length: i64,
    /// Fill color as a hexadecimal `0xWWRRGGBB` value
    #[arg(short, long, default_value = "0x101010", value_name = "HEX")]
    pub fill: String,
    /// Channel brightness
    #[arg(short, long, default_value_t = 255)]
    pub brightness: i64,
    /// Signal frequency
    #[arg(long, default_value_t = 800_000, value_name = "Hz")]
    pub freq: i64,
    /// What to draw on the matrix
    #[arg(long, value_enum, default_value_t = SceneKind::Fill)]
    pub scene: SceneKind,
    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete_command::Shell>,
    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    _version: Option<bool>,
}

/// Kind of the scene drawn into the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// Solid fill color
    Fill,
    /// A light running along the strip with the fill color
    Ticker,
}

impl Cli {
    /// Validates the parsed options and creates a matrix configuration.
    pub fn configuration(&self) -> Result<Configuration> {
        Configuration::builder()
            .dma(self.dma)
            .gpio(self.gpio)
            .invert(self.invert)
            .clear_on_exit(self.clear)
            .strip(self.strip.as_str())
            .length(self.length)
            .fill(self.fill.as_str())
            .brightness(self.brightness)
            .freq(self.freq)
            .build()
    }

    /// Creates the selected scene for the given configuration.
    pub fn scene(&self, config: &Configuration) -> Box<dyn Scene> {
        match self.scene {
            SceneKind::Fill => Box::new(Fill(config.fill)),
            SceneKind::Ticker => Box::new(WanderingLight::new(config.fill)),
        }
    }
}

/// Converts a status code into the process exit status, as the shell sees it.
#[must_use]
pub fn exit_status(code: i32) -> u8 {
    code.to_le_bytes()[0]
}
