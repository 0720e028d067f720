use displaydoc::Display;

/// A specialized result type for the matrix utility.
pub type Result<T> = core::result::Result<T, Error>;

/// Status code used for the configuration errors.
pub const CONFIG_ERROR_STATUS: i32 = -1;

/// Errors that can occur while configuring and running the matrix.
#[derive(Clone, PartialEq, Eq, Display, Debug)]
pub enum Error {
    /// invalid dma {0}
    InvalidDma(i64),
    /// invalid led_count {0}
    InvalidLedCount(i64),
    /// invalid strip {0}
    InvalidStrip(String),
    /// invalid brightness {0}
    InvalidBrightness(i64),
    /// invalid fill {0}
    InvalidFill(String),
    /// invalid freq {0}
    InvalidFrequency(i64),
    /// driver init failed: {0}
    DriverInit(DriverError),
    /// driver render failed: {0}
    DriverRender(DriverError),
}

impl Error {
    /// Returns a process status code for this error.
    pub fn status_code(&self) -> i32 {
        match self {
            Self::DriverInit(err) | Self::DriverRender(err) => err.into_code(),
            _ => CONFIG_ERROR_STATUS,
        }
    }

    /// Returns true if the error was caused by an invalid configuration value.
    pub fn is_config_error(&self) -> bool {
        !matches!(self, Self::DriverInit(_) | Self::DriverRender(_))
    }
}

impl std::error::Error for Error {}

/// Status reported by the LED driver.
///
/// The codes follow the return values of the `ws2811` library.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Debug)]
pub enum DriverError {
    /// Generic failure
    Generic,
    /// Out of memory
    OutOfMemory,
    /// Hardware revision is not supported
    HwNotSupported,
    /// Memory lock failed
    MemLock,
    /// mmap() failed
    Mmap,
    /// Unable to map registers into userspace
    MapRegisters,
    /// Unable to initialize GPIO
    GpioInit,
    /// Unable to initialize PWM
    PwmSetup,
    /// Failed to create mailbox device
    MailboxDevice,
    /// DMA error
    Dma,
    /// Selected GPIO not possible
    IllegalGpio,
    /// Unable to initialize PCM
    PcmSetup,
    /// Unable to initialize SPI
    SpiSetup,
    /// SPI transfer error
    SpiTransfer,
    /// Unspecified driver error with code {0}
    Unspecified(i32),
}

impl DriverError {
    pub fn from_code(code: i32) -> Self {
        match code {
            -1 => Self::Generic,
            -2 => Self::OutOfMemory,
            -3 => Self::HwNotSupported,
            -4 => Self::MemLock,
            -5 => Self::Mmap,
            -6 => Self::MapRegisters,
            -7 => Self::GpioInit,
            -8 => Self::PwmSetup,
            -9 => Self::MailboxDevice,
            -10 => Self::Dma,
            -11 => Self::IllegalGpio,
            -12 => Self::PcmSetup,
            -13 => Self::SpiSetup,
            -14 => Self::SpiTransfer,

            other => Self::Unspecified(other),
        }
    }

    pub fn into_code(self) -> i32 {
        match self {
            Self::Generic => -1,
            Self::OutOfMemory => -2,
            Self::HwNotSupported => -3,
            Self::MemLock => -4,
            Self::Mmap => -5,
            Self::MapRegisters => -6,
            Self::GpioInit => -7,
            Self::PwmSetup => -8,
            Self::MailboxDevice => -9,
            Self::Dma => -10,
            Self::IllegalGpio => -11,
            Self::PcmSetup => -12,
            Self::SpiSetup => -13,
            Self::SpiTransfer => -14,

            Self::Unspecified(other) => other,
        }
    }

    /// Creates a new generic driver error from the underlying one.
    pub fn generic<E>(err: E) -> Self
    where
        E: core::fmt::Display,
    {
        log::error!("Driver failure: {err}");
        Self::Generic
    }
}

impl std::error::Error for DriverError {}
