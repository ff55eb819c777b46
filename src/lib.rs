//! SSD2119 TFT Display Driver
//!
//! Used in 3.5" 320x240 TFT modules wired for 4-wire SPI, such as the
//! Kentec EB-LM4F120-L35 BoosterPack.
//!
//! ## Architecture
//!
//! The driver separates the controller description from the drawing code:
//! - **Controllers** (`Ssd2119`) implement [`Controller`](driver::Controller): the
//!   register map, the pixel and window wire formats and the power-up sequence
//! - **[`Display`](driver::Display)** resets the panel, replays that sequence and
//!   turns pixels, rectangles and lines into register writes
//! - **[`SpiInterface`](interface::SpiInterface)** moves 16-bit register indexes
//!   and data bytes over an `embedded-hal` SPI device and data/command line
//!
//! Controller-specific operations such as vertical scrolling are implemented
//! on `Display<Ssd2119, _>` only.
//!
//! ## Usage
//!
//! ```rust, ignore
//! use ssd2119::prelude::*;
//! use embedded_graphics::{prelude::*, pixelcolor::Rgb565, primitives::*};
//!
//! // 1. Wrap the SPI device and control lines
//! let interface = SpiInterface::new(spi_device, dc, Some(rst));
//!
//! // 2. Describe the panel
//! let config = Builder::new()
//!     .dimensions(320, 240)
//!     .rotation(DisplayRotation::Rotate0)
//!     .build()?;
//!
//! // 3. Reset and initialize the controller
//! let mut display = Display::new(Ssd2119::new(), interface, &config, &mut delay)?;
//!
//! // 4. Draw
//! display.fill(Color::new(0xFF, 0x11, 0x22))?;
//! Circle::new(Point::new(60, 20), 25)
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::WHITE))
//!     .draw(&mut display)?;
//!
//! // 5. Scroll the whole panel up by 10 rows
//! display.scroll_by(10)?;
//! ```
//!
#![no_std]
#![deny(missing_docs)]
#![allow(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

mod cmd;
pub mod color;
pub mod config;
#[cfg(feature = "graphics")]
pub mod displays;
pub mod driver;
pub mod error;
pub mod interface;
pub mod ssd2119;

mod flag;

#[cfg(test)]
#[macro_use]
extern crate std;

#[cfg(test)]
mod mock;

pub use color::{Color, ReadColor};
pub use config::{Builder, Config, DisplayRotation};
pub use driver::{Controller, Display, InitStep};
pub use error::{DisplayError, Error};
pub use interface::{NoResetPin, RegisterInterface, SpiInterface};
pub use ssd2119::{Ssd2119, Ssd2119Display};

/// Useful exports
pub mod prelude {
    pub use crate::color::{Color, ReadColor};
    pub use crate::config::{Builder, DisplayRotation};
    pub use crate::driver::{Controller, Display};
    pub use crate::error::Error;
    pub use crate::interface::{NoResetPin, SpiInterface};
    pub use crate::ssd2119::Ssd2119;
}
