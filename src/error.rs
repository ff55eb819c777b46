//! Error types for the driver
//!
//! Transport failures surface as [`DisplayError`] from the
//! [`display-interface`](display_interface) crate, wrapped in [`Error::Interface`].
//! Bad construction parameters are rejected before any bus traffic with
//! [`Error::InvalidDimensions`] or [`Error::InvalidRotation`].
//!
//! ```
//! use ssd2119::{Builder, Error};
//!
//! let result = Builder::new().dimensions(0, 240).build();
//! assert!(matches!(result, Err(Error::InvalidDimensions { width: 0, height: 240 })));
//! ```

pub use display_interface::DisplayError;

/// Errors that can occur when configuring or driving the display
#[derive(Clone, Debug)]
pub enum Error {
    /// SPI or control line failure while talking to the controller
    Interface(DisplayError),
    /// Width and height must both be non-zero
    InvalidDimensions {
        /// Requested width in pixels
        width: u16,
        /// Requested height in pixels
        height: u16,
    },
    /// Rotation must be one of 0, 90, 180 or 270 degrees
    InvalidRotation(u16),
}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Error::Interface(e)
    }
}

// DisplayError carries no data and no PartialEq, compare by variant
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Error::Interface(a), Error::Interface(b)) => {
                core::mem::discriminant(a) == core::mem::discriminant(b)
            }
            (
                Error::InvalidDimensions { width, height },
                Error::InvalidDimensions {
                    width: other_width,
                    height: other_height,
                },
            ) => width == other_width && height == other_height,
            (Error::InvalidRotation(a), Error::InvalidRotation(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Interface(e) => write!(f, "Interface error: {e:?}"),
            Error::InvalidDimensions { width, height } => {
                write!(f, "Invalid dimensions: {width}x{height}")
            }
            Error::InvalidRotation(degrees) => {
                write!(f, "Invalid rotation: {degrees} (expected 0, 90, 180 or 270)")
            }
        }
    }
}

impl core::error::Error for Error {}
