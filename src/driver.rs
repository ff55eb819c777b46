//! Generic SPI TFT driver, configured by a [`Controller`]
pub use display_interface::DisplayError;

use embedded_hal::delay::DelayNs;

use crate::color::{encode_pos, Color, ReadColor};
use crate::config::{Config, DisplayRotation};
use crate::error::Error;
use crate::interface::RegisterInterface;

use log::debug;

/// Pixels buffered per SPI write when streaming from an iterator
const PIXEL_CHUNK: usize = 64;

/// Steps that a controller-specific init sequence can contain.
/// Kept as static arrays in controller modules and replayed verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitStep {
    /// Select a register with no data phase
    Cmd(u16),
    /// Select a register and send a static payload
    CmdData(u16, &'static [u8]),
}

impl InitStep {
    /// Register this step selects
    pub fn register(&self) -> u16 {
        match *self {
            InitStep::Cmd(register) | InitStep::CmdData(register, _) => register,
        }
    }

    /// Payload sent after the select, if any
    pub fn payload(&self) -> Option<&'static [u8]> {
        match *self {
            InitStep::Cmd(_) => None,
            InitStep::CmdData(_, data) => Some(data),
        }
    }
}

/// Register map and init sequence of one controller family
///
/// [`Display`] drives any type implementing this trait; the controller
/// value itself lives inside the display and may carry controller-specific
/// state.
pub trait Controller {
    /// Register selecting the horizontal window
    const COLUMN_SET: u16;
    /// Register selecting the vertical window
    const PAGE_SET: u16;
    /// Register that starts a pixel write
    const RAM_WRITE: u16;
    /// Register that starts a pixel read
    const RAM_READ: u16;
    /// Column offset of the visible area in controller RAM
    const X_START: u16 = 0;
    /// Row offset of the visible area in controller RAM
    const Y_START: u16 = 0;

    /// Ordered register writes issued once after reset
    fn init_sequence(&self) -> &'static [InitStep];

    /// Wire format of one pixel
    fn encode_pixel(color: Color) -> [u8; 2] {
        color.to_be_bytes()
    }

    /// Wire format of a window bound pair
    fn encode_pos(a: u16, b: u16) -> [u8; 4] {
        encode_pos(a, b)
    }

    /// Decode one pixel read back from RAM
    fn decode_pixel(bytes: [u8; 3]) -> ReadColor {
        ReadColor::from_bytes(bytes)
    }
}

/// A display driven through a register interface
pub struct Display<C, DI> {
    controller: C,
    interface: DI,
    width: u16,
    height: u16,
    rotation: DisplayRotation,
}

impl<C, DI> Display<C, DI>
where
    C: Controller,
    DI: RegisterInterface,
{
    /// Reset the panel and replay the controller's init sequence
    ///
    /// The first failing register write aborts construction.
    pub fn new(
        controller: C,
        mut interface: DI,
        config: &Config,
        delay: &mut impl DelayNs,
    ) -> Result<Self, Error> {
        debug!(
            "creating display {}x{} rotation {} ({} Hz, {:?})",
            config.width(),
            config.height(),
            config.rotation().degrees(),
            config.baudrate(),
            config.spi_mode()
        );
        interface.hard_reset(delay)?;
        for step in controller.init_sequence() {
            debug!("init step: {:?}", step);
            interface.write(step.register(), step.payload())?;
        }
        debug!("init sequence complete");
        Ok(Display {
            controller,
            interface,
            width: config.width(),
            height: config.height(),
            rotation: config.rotation(),
        })
    }

    /// Panel width in pixels, native orientation
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Panel height in pixels, native orientation
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Current rotation
    pub fn rotation(&self) -> DisplayRotation {
        self.rotation
    }

    /// Change the rotation used when drawing through `embedded-graphics`
    pub fn set_rotation(&mut self, rotation: DisplayRotation) {
        self.rotation = rotation;
    }

    /// The controller configuring this display
    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Release the controller and interface
    pub fn release(self) -> (C, DI) {
        (self.controller, self.interface)
    }

    /// Select `register` and, if given, send `data`
    pub fn write(&mut self, register: u16, data: Option<&[u8]>) -> Result<(), Error> {
        self.interface.write(register, data)?;
        Ok(())
    }

    /// Set the column and page window for the next RAM access
    ///
    /// Bounds are inclusive and in native orientation.
    pub fn block(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), Error> {
        debug!("block: x {}-{}, y {}-{}", x0, x1, y0, y1);
        let columns = C::encode_pos(x0 + C::X_START, x1 + C::X_START);
        self.interface.write(C::COLUMN_SET, Some(&columns))?;
        let pages = C::encode_pos(y0 + C::Y_START, y1 + C::Y_START);
        self.interface.write(C::PAGE_SET, Some(&pages))?;
        Ok(())
    }

    /// Set a single pixel; coordinates outside the panel are ignored
    pub fn pixel(&mut self, x: u16, y: u16, color: Color) -> Result<(), Error> {
        if x >= self.width || y >= self.height {
            return Ok(());
        }
        self.block(x, y, x, y)?;
        self.interface
            .write(C::RAM_WRITE, Some(&C::encode_pixel(color)))?;
        Ok(())
    }

    /// Read a single pixel back; `None` outside the panel
    pub fn read_pixel(&mut self, x: u16, y: u16) -> Result<Option<ReadColor>, Error> {
        if x >= self.width || y >= self.height {
            return Ok(None);
        }
        self.block(x, y, x, y)?;
        let mut bytes = [0u8; 3];
        self.interface.read_register(C::RAM_READ, &mut bytes)?;
        Ok(Some(C::decode_pixel(bytes)))
    }

    /// Fill a rectangle with one color
    ///
    /// The origin is clamped into the panel and the size to at least one
    /// pixel and at most what remains of the panel.
    pub fn fill_rectangle(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Color,
    ) -> Result<(), Error> {
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);
        let width = width.clamp(1, self.width - x);
        let height = height.clamp(1, self.height - y);
        self.fill_region(x, y, x + width - 1, y + height - 1, color)
    }

    /// Fill the whole panel with one color
    pub fn fill(&mut self, color: Color) -> Result<(), Error> {
        self.fill_rectangle(0, 0, self.width, self.height, color)
    }

    /// Draw a horizontal line
    pub fn hline(&mut self, x: u16, y: u16, width: u16, color: Color) -> Result<(), Error> {
        self.fill_rectangle(x, y, width, 1, color)
    }

    /// Draw a vertical line
    pub fn vline(&mut self, x: u16, y: u16, height: u16, color: Color) -> Result<(), Error> {
        self.fill_rectangle(x, y, 1, height, color)
    }

    /// Stream pixels into the inclusive window `(x0, y0)..=(x1, y1)`
    ///
    /// Pixels are written in controller RAM order; the caller is expected to
    /// supply exactly one color per pixel of the window.
    pub fn write_pixels<I>(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        colors: I,
    ) -> Result<(), Error>
    where
        I: IntoIterator<Item = Color>,
    {
        self.block(x0, y0, x1, y1)?;
        self.interface.select_register(C::RAM_WRITE)?;

        let mut buffer = [0u8; PIXEL_CHUNK * 2];
        let mut len = 0;
        for color in colors {
            buffer[len..len + 2].copy_from_slice(&C::encode_pixel(color));
            len += 2;
            if len == buffer.len() {
                self.interface.write_data(&buffer)?;
                len = 0;
            }
        }
        if len > 0 {
            self.interface.write_data(&buffer[..len])?;
        }
        Ok(())
    }

    // Inclusive bounds, already clipped to the panel.
    pub(crate) fn fill_region(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        color: Color,
    ) -> Result<(), Error> {
        let count = u32::from(x1 - x0 + 1) * u32::from(y1 - y0 + 1);
        self.block(x0, y0, x1, y1)?;
        self.interface.select_register(C::RAM_WRITE)?;
        self.interface
            .write_repeated(C::encode_pixel(color), count)?;
        Ok(())
    }

    pub(crate) fn interface_mut(&mut self) -> &mut DI {
        &mut self.interface
    }

    pub(crate) fn controller_mut(&mut self) -> &mut C {
        &mut self.controller
    }
}
