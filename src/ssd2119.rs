//! SSD2119 register map, init sequence and vertical scroll
//!
//! ```rust, ignore
//! use ssd2119::prelude::*;
//!
//! let interface = SpiInterface::new(spi_device, dc, Some(rst));
//! let config = Builder::new().build()?;
//! let mut display = Display::new(Ssd2119::new(), interface, &config, &mut delay)?;
//!
//! display.fill(Color::BLACK)?;
//! display.scroll_by(50)?;
//! assert_eq!(display.scroll(), 50);
//! ```

use crate::cmd::Cmd;
use crate::driver::{Controller, Display, InitStep};
use crate::error::Error;
use crate::flag::Flag;
use crate::interface::{RegisterInterface, SpiInterface};

use log::debug;

/// Power-up sequence for SSD2119 panels.
///
/// Every payload is one big-endian 16-bit register value. The sequence ends
/// by selecting RAM data so pixel writes can follow directly.
pub const INIT_SEQUENCE: &[InitStep] = &[
    InitStep::CmdData(Cmd::VCOM_OTP, &Flag::VCOM_OTP_DEFAULT),
    InitStep::CmdData(Cmd::OSC_START, &Flag::OSC_ENABLE),
    InitStep::CmdData(Cmd::SLEEP_MODE_1, &Flag::SLEEP_OFF),
    InitStep::CmdData(Cmd::DRIVER_OUTPUT_CTRL, &Flag::DRIVER_OUTPUT_320X240),
    InitStep::CmdData(Cmd::LCD_DRIVE_AC_CTRL, &Flag::LCD_DRIVE_AC_LINE_INVERSION),
    // Power Control 1, VRH[5:0]. Needs checking on hardware, see DESIGN.md
    InitStep::CmdData(Cmd::POWER_CTRL_1, &Flag::POWER_CTRL_1_DEFAULT),
    InitStep::CmdData(Cmd::ENTRY_MODE, &Flag::ENTRY_MODE_65K_INCRX_INCRY),
    InitStep::CmdData(Cmd::GATE_SCAN_START, &Flag::GATE_SCAN_FROM_G0),
    InitStep::CmdData(Cmd::FRAME_CYCLE_CTRL, &Flag::FRAME_CYCLE_DEFAULT),
    // Power Control 2, SAP[2:0], BT[3:0]
    InitStep::CmdData(Cmd::POWER_CTRL_2, &Flag::POWER_CTRL_2_DEFAULT),
    InitStep::CmdData(Cmd::POWER_CTRL_3, &Flag::POWER_CTRL_3_DEFAULT),
    InitStep::CmdData(Cmd::POWER_CTRL_4, &Flag::POWER_CTRL_4_DEFAULT),
    InitStep::CmdData(Cmd::POWER_CTRL_5, &Flag::POWER_CTRL_5_DEFAULT),
    InitStep::CmdData(Cmd::FRAME_FREQ_CTRL, &Flag::FRAME_FREQ_DEFAULT),
    InitStep::CmdData(Cmd::ANALOG_SETTING, &Flag::ANALOG_SETTING_DEFAULT),
    InitStep::CmdData(Cmd::PAGE_SET, &[0x00, 0x00]),
    InitStep::CmdData(Cmd::COLUMN_SET, &[0x00, 0x00]),
    InitStep::CmdData(Cmd::SLEEP_MODE_2, &Flag::SLEEP_MODE_2_DEFAULT),
    // gamma
    InitStep::CmdData(Cmd::GAMMA_CTRL_1, &[0x00, 0x00]),
    InitStep::CmdData(Cmd::GAMMA_CTRL_2, &[0x01, 0x04]),
    InitStep::CmdData(Cmd::GAMMA_CTRL_3, &[0x01, 0x00]),
    InitStep::CmdData(Cmd::GAMMA_CTRL_4, &[0x03, 0x05]),
    InitStep::CmdData(Cmd::GAMMA_CTRL_5, &[0x05, 0x05]),
    InitStep::CmdData(Cmd::GAMMA_CTRL_6, &[0x03, 0x05]),
    InitStep::CmdData(Cmd::GAMMA_CTRL_7, &[0x07, 0x07]),
    InitStep::CmdData(Cmd::GAMMA_CTRL_8, &[0x03, 0x00]),
    InitStep::CmdData(Cmd::GAMMA_CTRL_9, &[0x12, 0x00]),
    InitStep::CmdData(Cmd::GAMMA_CTRL_10, &[0x08, 0x00]),
    InitStep::CmdData(Cmd::DISPLAY_CTRL, &Flag::DISPLAY_ON),
    InitStep::Cmd(Cmd::RAM_DATA),
];

/// SSD2119 controller configuration plus its vertical scroll state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ssd2119 {
    scroll: u16,
}

impl Ssd2119 {
    /// A controller with scroll offset 0
    pub const fn new() -> Self {
        Ssd2119 { scroll: 0 }
    }
}

impl Controller for Ssd2119 {
    const COLUMN_SET: u16 = Cmd::COLUMN_SET;
    const PAGE_SET: u16 = Cmd::PAGE_SET;
    const RAM_WRITE: u16 = Cmd::RAM_DATA;
    const RAM_READ: u16 = Cmd::RAM_DATA;

    fn init_sequence(&self) -> &'static [InitStep] {
        INIT_SEQUENCE
    }
}

/// Offset after moving `current` by `delta` rows on a panel `height` rows tall
fn wrap_offset(current: u16, delta: i32, height: u16) -> u16 {
    (i64::from(current) + i64::from(delta)).rem_euclid(i64::from(height)) as u16
}

impl<DI> Display<Ssd2119, DI>
where
    DI: RegisterInterface,
{
    /// Current vertical scroll offset, in `[0, height)`
    pub fn scroll(&self) -> u16 {
        self.controller().scroll
    }

    /// Scroll by `delta` rows, wrapping around the panel height
    ///
    /// The new offset is written to the controller even when `delta` is 0.
    /// The stored offset only changes once that write has succeeded.
    pub fn scroll_by(&mut self, delta: i32) -> Result<(), Error> {
        let offset = wrap_offset(self.scroll(), delta, self.height());
        debug!("scroll by {}: offset {} -> {}", delta, self.scroll(), offset);
        self.interface_mut()
            .write(Cmd::VERTICAL_SCROLL, Some(&offset.to_be_bytes()))?;
        self.controller_mut().scroll = offset;
        Ok(())
    }
}

/// A display driven by an SSD2119 over SPI
pub type Ssd2119Display<SPI, DC, RST> = Display<Ssd2119, SpiInterface<SPI, DC, RST>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use crate::driver::DisplayError;
    use crate::mock::{Bus, Event, MockInterface, NoopDelay};
    use std::vec::Vec;

    fn display(bus: &Bus, height: u16) -> Display<Ssd2119, MockInterface> {
        let config = Builder::new().dimensions(320, height).build().unwrap();
        let display = Display::new(Ssd2119::new(), bus.interface(), &config, &mut NoopDelay).unwrap();
        bus.clear();
        display
    }

    fn word(value: u16) -> Option<Vec<u8>> {
        Some(value.to_be_bytes().to_vec())
    }

    #[test]
    fn init_replays_table_verbatim() {
        let bus = Bus::new();
        let config = Builder::new().build().unwrap();
        Display::new(Ssd2119::new(), bus.interface(), &config, &mut NoopDelay).unwrap();

        let expected = vec![
            (0x0028, word(0x0006)),
            (0x0000, word(0x0001)),
            (0x0010, word(0x0000)),
            (0x0001, word(0x32EF)),
            (0x0002, word(0x0600)),
            (0x0003, word(0x6A38)),
            (0x0011, word(0x6870)),
            (0x000F, word(0x0000)),
            (0x000B, word(0x5308)),
            (0x000C, word(0x0003)),
            (0x000D, word(0x000A)),
            (0x000E, word(0x2E00)),
            (0x001E, word(0x00BE)),
            (0x0025, word(0x8000)),
            (0x0026, word(0x7800)),
            (0x004E, word(0x0000)),
            (0x004F, word(0x0000)),
            (0x0012, word(0x08D9)),
            (0x0030, word(0x0000)),
            (0x0031, word(0x0104)),
            (0x0032, word(0x0100)),
            (0x0033, word(0x0305)),
            (0x0034, word(0x0505)),
            (0x0035, word(0x0305)),
            (0x0036, word(0x0707)),
            (0x0037, word(0x0300)),
            (0x003A, word(0x1200)),
            (0x003B, word(0x0800)),
            (0x0007, word(0x0033)),
            (0x0022, None),
        ];
        assert_eq!(bus.register_writes(), expected);
        assert_eq!(
            &bus.events()[..2],
            &[Event::Reset(false), Event::Reset(true)]
        );
    }

    #[test]
    fn init_without_reset_line_skips_reset() {
        let bus = Bus::new();
        let config = Builder::new().build().unwrap();
        Display::new(
            Ssd2119::new(),
            bus.interface_without_reset(),
            &config,
            &mut NoopDelay,
        )
        .unwrap();
        assert_eq!(bus.events()[0], Event::Command(vec![0x00, 0x28]));
        assert_eq!(bus.register_writes().len(), INIT_SEQUENCE.len());
    }

    #[test]
    fn zero_width_fails_before_any_bus_traffic() {
        let bus = Bus::new();
        let result = Builder::new()
            .dimensions(0, 240)
            .build()
            .and_then(|config| {
                Display::new(Ssd2119::new(), bus.interface(), &config, &mut NoopDelay)
            });
        assert!(matches!(
            result,
            Err(Error::InvalidDimensions {
                width: 0,
                height: 240
            })
        ));
        assert!(bus.events().is_empty());
    }

    #[test]
    fn register_map() {
        assert_eq!(Ssd2119::COLUMN_SET, 0x004F);
        assert_eq!(Ssd2119::PAGE_SET, 0x004E);
        assert_eq!(Ssd2119::RAM_WRITE, 0x0022);
        assert_eq!(Ssd2119::RAM_READ, 0x0022);
    }

    #[test]
    fn scroll_starts_at_zero() {
        let bus = Bus::new();
        let display = display(&bus, 240);
        assert_eq!(display.scroll(), 0);
    }

    #[test]
    fn scroll_forward_then_back_wraps() {
        let bus = Bus::new();
        let mut display = display(&bus, 240);

        display.scroll_by(50).unwrap();
        assert_eq!(display.scroll(), 50);
        assert_eq!(
            bus.register_writes(),
            vec![(Cmd::VERTICAL_SCROLL, Some(vec![0x00, 0x32]))]
        );

        bus.clear();
        display.scroll_by(-60).unwrap();
        assert_eq!(display.scroll(), 230);
        assert_eq!(
            bus.register_writes(),
            vec![(Cmd::VERTICAL_SCROLL, Some(vec![0x00, 0xE6]))]
        );
    }

    #[test]
    fn scroll_query_has_no_side_effects() {
        let bus = Bus::new();
        let mut display = display(&bus, 240);
        display.scroll_by(7).unwrap();
        bus.clear();
        assert_eq!(display.scroll(), 7);
        assert_eq!(display.scroll(), 7);
        assert!(bus.events().is_empty());
    }

    #[test]
    fn scroll_by_zero_still_writes() {
        let bus = Bus::new();
        let mut display = display(&bus, 240);
        display.scroll_by(12).unwrap();
        bus.clear();
        display.scroll_by(0).unwrap();
        assert_eq!(display.scroll(), 12);
        assert_eq!(
            bus.register_writes(),
            vec![(Cmd::VERTICAL_SCROLL, Some(vec![0x00, 0x0C]))]
        );
    }

    #[test]
    fn scroll_is_sum_of_deltas_modulo_height() {
        let deltas = [
            0,
            1,
            -1,
            239,
            240,
            -240,
            481,
            -1000,
            i32::MAX,
            i32::MIN,
            i32::MIN,
            17,
        ];
        for height in [1u16, 7, 240, 320, u16::MAX] {
            let bus = Bus::new();
            let mut display = display(&bus, height);
            let mut sum: i64 = 0;
            for delta in deltas {
                display.scroll_by(delta).unwrap();
                sum += i64::from(delta);
                let expected = sum.rem_euclid(i64::from(height)) as u16;
                assert_eq!(display.scroll(), expected);
                assert!(display.scroll() < height);
            }
        }
    }

    #[test]
    fn failed_scroll_write_keeps_previous_offset() {
        let bus = Bus::new();
        let mut display = display(&bus, 240);
        display.scroll_by(30).unwrap();
        bus.fail_after(1);
        assert_eq!(
            display.scroll_by(10),
            Err(Error::Interface(DisplayError::BusWriteError))
        );
        assert_eq!(display.scroll(), 30);
    }

    #[test]
    fn wrap_offset_handles_extremes() {
        assert_eq!(wrap_offset(0, -1, 240), 239);
        assert_eq!(wrap_offset(239, 1, 240), 0);
        assert_eq!(wrap_offset(u16::MAX - 1, i32::MAX, u16::MAX), (i32::MAX % 65535) as u16 - 1);
    }
}
