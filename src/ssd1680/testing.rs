//! Recording fakes for the embedded-hal traits, host tests only.
//!
//! SPI, DC, RST and the delay append to one shared event log, and BUSY is
//! scripted from the same state, so a test sees the interleaving across devices: which DC level framed each SPI
//! write, and whether the reset strobe came before the first byte.
//! Per-device expectation mocks each check their own queue and cannot
//! assert that ordering.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, InputPin, OutputPin};
use embedded_hal::spi::{self, ErrorKind, Operation, SpiDevice};

use crate::ssd1680::interface::DisplayInterface;

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    DcLow,
    DcHigh,
    RstLow,
    RstHigh,
    Write(Vec<u8>),
    Delay(u32),
}

/// Bus traffic decoded by the level of the DC line
#[derive(Clone, Debug, PartialEq)]
pub enum Frame {
    Command(u8),
    Data(Vec<u8>),
}

#[derive(Default)]
struct State {
    events: Vec<Event>,
    busy_polls: u32,
    fail_writes: bool,
}

#[derive(Clone, Default)]
pub struct Recorder(Rc<RefCell<State>>);

impl Recorder {
    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().events.clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().events.clear();
    }

    /// Number of upcoming BUSY samples that read HIGH
    pub fn set_busy_polls(&self, polls: u32) {
        self.0.borrow_mut().busy_polls = polls;
    }

    pub fn fail_writes(&self, fail: bool) {
        self.0.borrow_mut().fail_writes = fail;
    }

    pub fn delay_ms(&self) -> u32 {
        self.0
            .borrow()
            .events
            .iter()
            .map(|e| match e {
                Event::Delay(ms) => *ms,
                _ => 0,
            })
            .sum()
    }

    pub fn frames(&self) -> Vec<Frame> {
        let mut frames = Vec::new();
        let mut command_mode = false;
        for event in self.0.borrow().events.iter() {
            match event {
                Event::DcLow => command_mode = true,
                Event::DcHigh => command_mode = false,
                Event::Write(bytes) if command_mode => {
                    frames.extend(bytes.iter().map(|b| Frame::Command(*b)))
                }
                Event::Write(bytes) => frames.push(Frame::Data(bytes.clone())),
                _ => {}
            }
        }
        frames
    }

    /// Frames with consecutive data writes merged under their command
    pub fn commands(&self) -> Vec<(u8, Vec<u8>)> {
        let mut out: Vec<(u8, Vec<u8>)> = Vec::new();
        for frame in self.frames() {
            match frame {
                Frame::Command(c) => out.push((c, Vec::new())),
                Frame::Data(bytes) => {
                    if let Some(last) = out.last_mut() {
                        last.1.extend_from_slice(&bytes);
                    }
                }
            }
        }
        out
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().events.push(event);
    }

    pub fn interface(&self) -> TestInterface {
        DisplayInterface::new(
            FakeSpi(self.clone()),
            FakeBusy(self.clone()),
            FakePin(self.clone(), Event::DcLow, Event::DcHigh),
            FakePin(self.clone(), Event::RstLow, Event::RstHigh),
            FakeDelay(self.clone()),
        )
    }
}

pub type TestInterface = DisplayInterface<FakeSpi, FakeBusy, FakePin, FakePin, FakeDelay>;

pub struct Harness {
    pub recorder: Recorder,
    pub interface: TestInterface,
}

impl Harness {
    pub fn new() -> Self {
        let recorder = Recorder::default();
        let interface = recorder.interface();
        Harness {
            recorder,
            interface,
        }
    }
}

pub struct FakeSpi(Recorder);

impl spi::ErrorType for FakeSpi {
    type Error = ErrorKind;
}

impl SpiDevice for FakeSpi {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        if self.0 .0.borrow().fail_writes {
            return Err(ErrorKind::Other);
        }
        for op in operations.iter() {
            if let Operation::Write(bytes) = op {
                self.0.push(Event::Write(bytes.to_vec()));
            }
        }
        Ok(())
    }
}

pub struct FakePin(Recorder, Event, Event);

impl digital::ErrorType for FakePin {
    type Error = Infallible;
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.push(self.1.clone());
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.push(self.2.clone());
        Ok(())
    }
}

pub struct FakeBusy(Recorder);

impl digital::ErrorType for FakeBusy {
    type Error = Infallible;
}

impl InputPin for FakeBusy {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        let mut state = self.0 .0.borrow_mut();
        if state.busy_polls > 0 {
            state.busy_polls -= 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|busy| !busy)
    }
}

pub struct FakeDelay(Recorder);

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.0.push(Event::Delay(ms));
    }
}
