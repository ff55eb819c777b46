//! Display interface using SPI
//!
//! The SSD2119 addresses its registers with 16-bit indexes. Every register
//! access is a select phase (DC low, index as two big-endian bytes) followed
//! by an optional data phase (DC high, payload bytes as-is).
//!
//! Chip select belongs to the [`SpiDevice`]: wrap the bus and CS pin in e.g.
//! `embedded_hal_bus::spi::ExclusiveDevice` before handing it over.

use core::convert::Infallible;

use display_interface::DisplayError;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{Operation, SpiDevice};

const RESET_DELAY_MS: u32 = 50;

/// Pixels per SPI write when streaming repeated data
const CHUNK_SIZE: usize = 32;

/// Register level access to a display controller
///
/// [`Display`](crate::driver::Display) is generic over this trait so the
/// same drawing code works for any transport that can select a 16-bit
/// register and move bytes.
pub trait RegisterInterface {
    /// Select a register for the following data phase
    fn select_register(&mut self, register: u16) -> Result<(), DisplayError>;

    /// Send data bytes to the selected register
    fn write_data(&mut self, data: &[u8]) -> Result<(), DisplayError>;

    /// Select `register` and read `buffer.len()` bytes back
    fn read_register(&mut self, register: u16, buffer: &mut [u8]) -> Result<(), DisplayError>;

    /// Toggle the reset line, if there is one
    fn hard_reset(&mut self, delay: &mut impl DelayNs) -> Result<(), DisplayError>;

    /// Select `register` and, if given, send `data`
    fn write(&mut self, register: u16, data: Option<&[u8]>) -> Result<(), DisplayError> {
        self.select_register(register)?;
        match data {
            Some(data) => self.write_data(data),
            None => Ok(()),
        }
    }

    /// Send the same byte pattern `repetitions` times
    ///
    /// Used for filling a window with one color.
    fn write_repeated<const N: usize>(
        &mut self,
        pattern: [u8; N],
        repetitions: u32,
    ) -> Result<(), DisplayError> {
        let mut buffer = [[0u8; N]; CHUNK_SIZE];
        buffer.iter_mut().for_each(|slot| *slot = pattern);
        let chunk = buffer.as_flattened();

        let full_chunks = repetitions / CHUNK_SIZE as u32;
        let remainder = (repetitions % CHUNK_SIZE as u32) as usize;
        for _ in 0..full_chunks {
            self.write_data(chunk)?;
        }
        if remainder > 0 {
            self.write_data(&chunk[..remainder * N])?;
        }
        Ok(())
    }
}

/// Stand-in for a missing reset line
#[derive(Clone, Copy, Debug, Default)]
pub struct NoResetPin;

impl digital::ErrorType for NoResetPin {
    type Error = Infallible;
}

impl OutputPin for NoResetPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// SPI connection to an SSD2119
pub struct SpiInterface<SPI, DC, RST = NoResetPin> {
    /// SPI device, owns chip select
    spi: SPI,
    /// Data/Command Control Pin (High for data, Low for command)
    dc: DC,
    /// Optional reset line (active low)
    rst: Option<RST>,
}

impl<SPI, DC> SpiInterface<SPI, DC, NoResetPin> {
    /// Create an interface for a module whose reset line is not wired
    pub fn without_reset(spi: SPI, dc: DC) -> Self {
        SpiInterface { spi, dc, rst: None }
    }
}

impl<SPI, DC, RST> SpiInterface<SPI, DC, RST> {
    /// Create an interface with an optional reset line
    pub fn new(spi: SPI, dc: DC, rst: Option<RST>) -> Self {
        SpiInterface { spi, dc, rst }
    }

    /// Give back the SPI device and pins
    pub fn release(self) -> (SPI, DC, Option<RST>) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC, RST> RegisterInterface for SpiInterface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    fn select_register(&mut self, register: u16) -> Result<(), DisplayError> {
        // low for commands
        self.dc.set_low().map_err(|_| DisplayError::DCError)?;
        self.spi.write(&register.to_be_bytes()).map_err(|e| {
            log::error!("SPI write error for register 0x{:04X}: {:?}", register, e);
            DisplayError::BusWriteError
        })
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        // high for data
        self.dc.set_high().map_err(|_| DisplayError::DCError)?;
        self.spi.write(data).map_err(|e| {
            log::error!("SPI write error for {} data bytes: {:?}", data.len(), e);
            DisplayError::BusWriteError
        })
    }

    fn read_register(&mut self, register: u16, buffer: &mut [u8]) -> Result<(), DisplayError> {
        // DC stays low for the whole transaction
        self.dc.set_low().map_err(|_| DisplayError::DCError)?;
        let index = register.to_be_bytes();
        self.spi
            .transaction(&mut [Operation::Write(&index), Operation::Read(buffer)])
            .map_err(|e| {
                log::error!("SPI read error for register 0x{:04X}: {:?}", register, e);
                DisplayError::BusWriteError
            })
    }

    fn hard_reset(&mut self, delay: &mut impl DelayNs) -> Result<(), DisplayError> {
        let Some(rst) = self.rst.as_mut() else {
            return Ok(());
        };
        log::debug!("hard reset");
        rst.set_low().map_err(|_| DisplayError::RSError)?;
        delay.delay_ms(RESET_DELAY_MS);
        rst.set_high().map_err(|_| DisplayError::RSError)?;
        delay.delay_ms(RESET_DELAY_MS);
        Ok(())
    }
}
