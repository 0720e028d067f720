//! Raspberry Pi PWM/DMA driver.

use rs_ws281x::{ChannelBuilder, Controller, ControllerBuilder, WS2811Error};
use ws281x_matrix_core::{
    driver::channel_buffers, Color, Configuration, Driver, DriverError, StripType,
};

fn strip_type(strip: StripType) -> rs_ws281x::StripType {
    match strip {
        StripType::Rgb => rs_ws281x::StripType::Ws2811Rgb,
        StripType::Rbg => rs_ws281x::StripType::Ws2811Rbg,
        StripType::Grb => rs_ws281x::StripType::Ws2811Grb,
        StripType::Gbr => rs_ws281x::StripType::Ws2811Gbr,
        StripType::Brg => rs_ws281x::StripType::Ws2811Brg,
        StripType::Bgr => rs_ws281x::StripType::Ws2811Bgr,
        StripType::Rgbw => rs_ws281x::StripType::Sk6812Rgbw,
        StripType::Grbw => rs_ws281x::StripType::Sk6812Grbw,
    }
}

fn driver_error(err: WS2811Error) -> DriverError {
    match err {
        WS2811Error::OutOfMemory => DriverError::OutOfMemory,
        WS2811Error::HwNotSupported => DriverError::HwNotSupported,
        WS2811Error::MemLock => DriverError::MemLock,
        WS2811Error::Mmap => DriverError::Mmap,
        WS2811Error::MapRegisters => DriverError::MapRegisters,
        WS2811Error::GpioInit => DriverError::GpioInit,
        WS2811Error::PwmSetup => DriverError::PwmSetup,
        WS2811Error::MailboxDevice => DriverError::MailboxDevice,
        WS2811Error::Dma => DriverError::Dma,
        WS2811Error::IllegalGpio => DriverError::IllegalGpio,
        WS2811Error::PcmSetup => DriverError::PcmSetup,
        WS2811Error::SpiSetup => DriverError::SpiSetup,
        WS2811Error::SpiTransfer => DriverError::SpiTransfer,
        _ => DriverError::Generic,
    }
}

/// Drives the strip through the `ws2811` hardware library.
///
/// Pixels are staged in the owned buffers and copied into the controller memory on render.
#[derive(Default)]
pub struct Ws281xDriver {
    controller: Option<Controller>,
    channels: Vec<Vec<Color>>,
}

impl Ws281xDriver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Driver for Ws281xDriver {
    fn init(&mut self, config: &Configuration) -> Result<(), DriverError> {
        let mut builder = ControllerBuilder::new();
        builder
            .freq(config.target_freq.0)
            .dma(i32::from(config.dma_channel));

        for (index, channel) in config.channels.iter().enumerate() {
            let count = i32::try_from(channel.led_count).map_err(DriverError::generic)?;
            builder.channel(
                index,
                ChannelBuilder::new()
                    .pin(channel.gpio_pin)
                    .count(count)
                    .strip_type(strip_type(channel.strip_type))
                    .invert(channel.invert)
                    .brightness(channel.brightness)
                    .build(),
            );
        }

        let controller = builder.build().map_err(driver_error)?;
        log::debug!("ws2811 controller initialized");

        self.controller = Some(controller);
        self.channels = channel_buffers(config);
        Ok(())
    }

    fn leds_mut(&mut self, channel: usize) -> &mut [Color] {
        self.channels
            .get_mut(channel)
            .map(Vec::as_mut_slice)
            .unwrap_or_default()
    }

    fn render(&mut self) -> Result<(), DriverError> {
        let Some(controller) = self.controller.as_mut() else {
            return Err(DriverError::Generic);
        };

        for (index, pixels) in self.channels.iter().enumerate() {
            let leds = controller.leds_mut(index);
            for (led, pixel) in leds.iter_mut().zip(pixels) {
                *led = pixel.0.to_le_bytes();
            }
        }
        controller.render().map_err(driver_error)
    }

    fn fini(&mut self) {
        // Dropping the controller releases the hardware.
        self.controller = None;
        self.channels.clear();
    }
}
