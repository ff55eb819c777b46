//! Recording test doubles for the SPI device, control lines and delay

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{self, Operation, SpiDevice};

use crate::interface::{NoResetPin, SpiInterface};

pub type MockInterface = SpiInterface<MockSpi, MockDc, MockRst>;

/// One observable thing on the wires
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Bytes written while DC was low
    Command(Vec<u8>),
    /// Bytes written while DC was high
    Data(Vec<u8>),
    /// Number of bytes read
    Read(usize),
    /// Reset line driven to this level
    Reset(bool),
}

#[derive(Debug)]
pub struct MockError;

impl spi::Error for MockError {
    fn kind(&self) -> spi::ErrorKind {
        spi::ErrorKind::Other
    }
}

#[derive(Debug)]
pub struct PinError;

impl digital::Error for PinError {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

#[derive(Default)]
struct State {
    dc_high: bool,
    dc_fails: bool,
    rst_fails: bool,
    events: Vec<Event>,
    writes_left: Option<usize>,
    read_data: Vec<u8>,
}

/// Shared transcript behind the mock SPI device and pins
#[derive(Clone, Default)]
pub struct Bus(Rc<RefCell<State>>);

impl Bus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interface(&self) -> MockInterface {
        SpiInterface::new(MockSpi(self.clone()), MockDc(self.clone()), Some(MockRst(self.clone())))
    }

    pub fn interface_without_reset(&self) -> SpiInterface<MockSpi, MockDc, NoResetPin> {
        SpiInterface::without_reset(MockSpi(self.clone()), MockDc(self.clone()))
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().events.clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().events.clear();
    }

    /// Let `writes` more SPI writes succeed, then fail every write after
    pub fn fail_after(&self, writes: usize) {
        self.0.borrow_mut().writes_left = Some(writes);
    }

    /// Make every DC line change fail
    pub fn fail_dc(&self) {
        self.0.borrow_mut().dc_fails = true;
    }

    /// Make every reset line change fail
    pub fn fail_reset(&self) {
        self.0.borrow_mut().rst_fails = true;
    }

    pub fn set_read_data(&self, data: &[u8]) {
        self.0.borrow_mut().read_data = data.to_vec();
    }

    /// Fold the transcript into (register, payload) pairs
    pub fn register_writes(&self) -> Vec<(u16, Option<Vec<u8>>)> {
        let mut writes: Vec<(u16, Option<Vec<u8>>)> = Vec::new();
        for event in self.events() {
            match event {
                Event::Command(index) => {
                    writes.push((u16::from_be_bytes([index[0], index[1]]), None));
                }
                Event::Data(data) => {
                    let (_, payload) = writes.last_mut().expect("data without a register");
                    payload.get_or_insert_with(Vec::new).extend(data);
                }
                Event::Read(_) | Event::Reset(_) => {}
            }
        }
        writes
    }
}

pub struct MockSpi(Bus);

impl spi::ErrorType for MockSpi {
    type Error = MockError;
}

impl SpiDevice for MockSpi {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        let mut state = self.0 .0.borrow_mut();
        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    if let Some(left) = state.writes_left.as_mut() {
                        if *left == 0 {
                            return Err(MockError);
                        }
                        *left -= 1;
                    }
                    let event = if state.dc_high {
                        Event::Data(bytes.to_vec())
                    } else {
                        Event::Command(bytes.to_vec())
                    };
                    state.events.push(event);
                }
                Operation::Read(buffer) => {
                    for (slot, byte) in buffer.iter_mut().zip(state.read_data.iter()) {
                        *slot = *byte;
                    }
                    let len = buffer.len();
                    state.events.push(Event::Read(len));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

pub struct MockDc(Bus);

impl MockDc {
    fn set(&mut self, high: bool) -> Result<(), PinError> {
        let mut state = self.0 .0.borrow_mut();
        if state.dc_fails {
            return Err(PinError);
        }
        state.dc_high = high;
        Ok(())
    }
}

impl digital::ErrorType for MockDc {
    type Error = PinError;
}

impl OutputPin for MockDc {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true)
    }
}

pub struct MockRst(Bus);

impl MockRst {
    fn set(&mut self, high: bool) -> Result<(), PinError> {
        let mut state = self.0 .0.borrow_mut();
        if state.rst_fails {
            return Err(PinError);
        }
        state.events.push(Event::Reset(high));
        Ok(())
    }
}

impl digital::ErrorType for MockRst {
    type Error = PinError;
}

impl OutputPin for MockRst {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true)
    }
}

pub struct NoopDelay;

impl DelayNs for NoopDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}
