//! Pixel values and their wire formats

/// A 16-bit RGB565 pixel value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u16);

impl Color {
    /// Black
    pub const BLACK: Color = Color(0x0000);
    /// White
    pub const WHITE: Color = Color(0xFFFF);
    /// Red
    pub const RED: Color = Color(0xF800);
    /// Green
    pub const GREEN: Color = Color(0x07E0);
    /// Blue
    pub const BLUE: Color = Color(0x001F);

    /// Pack 8-bit channels into RGB565, dropping the low bits of each channel
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color(((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3))
    }

    /// Raw RGB565 value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Bitwise inverse of this color
    pub const fn inverse(self) -> Self {
        Color(!self.0)
    }

    /// Wire encoding: one big-endian 16-bit word
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics::pixelcolor::Rgb565> for Color {
    fn from(color: embedded_graphics::pixelcolor::Rgb565) -> Self {
        use embedded_graphics::pixelcolor::IntoStorage;
        Color(color.into_storage())
    }
}

/// A pixel as read back from controller RAM
///
/// The controller expands each stored pixel to three bytes on read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReadColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl ReadColor {
    /// Decode the three read-back bytes, in R, G, B order
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        ReadColor {
            r: bytes[0],
            g: bytes[1],
            b: bytes[2],
        }
    }
}

#[cfg(feature = "graphics")]
impl From<ReadColor> for embedded_graphics::pixelcolor::Rgb888 {
    fn from(color: ReadColor) -> Self {
        embedded_graphics::pixelcolor::Rgb888::new(color.r, color.g, color.b)
    }
}

/// Wire encoding of a window bound pair: two big-endian 16-bit words
pub const fn encode_pos(a: u16, b: u16) -> [u8; 4] {
    let [a_hi, a_lo] = a.to_be_bytes();
    let [b_hi, b_lo] = b.to_be_bytes();
    [a_hi, a_lo, b_hi, b_lo]
}
