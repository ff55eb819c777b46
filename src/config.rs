//! Display configuration types and builder

use embedded_hal::spi::{Mode, Phase, Polarity, MODE_0};

use crate::error::Error;

/// Native panel width of an SSD2119 module
pub const DEFAULT_WIDTH: u16 = 320;

/// Native panel height of an SSD2119 module
pub const DEFAULT_HEIGHT: u16 = 240;

/// Default SPI clock rate in Hz
pub const DEFAULT_BAUDRATE: u32 = 16_000_000;

/// Display rotation relative to the native orientation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayRotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate by 90 degrees clockwise
    Rotate90,
    /// Rotate by 180 degrees clockwise
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

impl DisplayRotation {
    /// Rotation angle in degrees
    pub fn degrees(self) -> u16 {
        match self {
            DisplayRotation::Rotate0 => 0,
            DisplayRotation::Rotate90 => 90,
            DisplayRotation::Rotate180 => 180,
            DisplayRotation::Rotate270 => 270,
        }
    }

    /// True when width and height trade places in this orientation
    pub fn is_transposed(self) -> bool {
        matches!(self, DisplayRotation::Rotate90 | DisplayRotation::Rotate270)
    }
}

impl TryFrom<u16> for DisplayRotation {
    type Error = Error;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(DisplayRotation::Rotate0),
            90 => Ok(DisplayRotation::Rotate90),
            180 => Ok(DisplayRotation::Rotate180),
            270 => Ok(DisplayRotation::Rotate270),
            other => Err(Error::InvalidRotation(other)),
        }
    }
}

/// Validated display configuration
///
/// Only obtainable through [`Builder::build`], so a `Config` always carries
/// non-zero dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    width: u16,
    height: u16,
    rotation: DisplayRotation,
    baudrate: u32,
    spi_mode: Mode,
}

impl Config {
    /// Panel width in pixels, native orientation
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Panel height in pixels, native orientation
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Initial rotation
    pub fn rotation(&self) -> DisplayRotation {
        self.rotation
    }

    /// SPI clock rate the bus should be configured with
    pub fn baudrate(&self) -> u32 {
        self.baudrate
    }

    /// SPI polarity and phase the bus should be configured with
    ///
    /// `SpiDevice` implementations are configured before they are handed to
    /// the driver, so these values are advisory for the caller's bus setup.
    pub fn spi_mode(&self) -> Mode {
        self.spi_mode
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            rotation: DisplayRotation::Rotate0,
            baudrate: DEFAULT_BAUDRATE,
            spi_mode: MODE_0,
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use ssd2119::{Builder, DisplayRotation};
/// use embedded_hal::spi::Polarity;
///
/// let config = Builder::new()
///     .dimensions(320, 240)
///     .rotation(DisplayRotation::Rotate90)
///     .polarity(Polarity::IdleHigh)
///     .build()
///     .expect("valid configuration");
/// assert_eq!(config.baudrate(), 16_000_000);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new Builder with the SSD2119 defaults (320x240, 16 MHz, mode 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set panel dimensions in pixels
    pub fn dimensions(mut self, width: u16, height: u16) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    /// Set display rotation
    pub fn rotation(mut self, rotation: DisplayRotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Set SPI clock rate in Hz
    pub fn baudrate(mut self, baudrate: u32) -> Self {
        self.config.baudrate = baudrate;
        self
    }

    /// Set SPI clock idle level
    pub fn polarity(mut self, polarity: Polarity) -> Self {
        self.config.spi_mode.polarity = polarity;
        self
    }

    /// Set SPI sampling edge
    pub fn phase(mut self, phase: Phase) -> Self {
        self.config.spi_mode.phase = phase;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if width or height is zero.
    pub fn build(self) -> Result<Config, Error> {
        let Config { width, height, .. } = self.config;
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(self.config)
    }
}
