#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::rc::Rc;

use myrtio_led_hal::{Duration, LedError, Level, PinId, PinIo, PinMode, Platform, Rgb};
use smart_leds::SmartLedsWrite;

/// Last observed electrical state of a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinState {
    Input,
    High,
    Low,
    Pwm(u8),
}

impl PinState {
    /// Output driven to the low rail (digital low or zero duty)
    pub fn is_low(self) -> bool {
        matches!(self, Self::Low | Self::Pwm(0))
    }
}

/// Pins driven while a delay was running
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dwell {
    pub high: Vec<PinId>,
    pub low: Vec<PinId>,
    pub duration: Duration,
}

#[derive(Debug, Default)]
pub struct Board {
    pub pins: BTreeMap<PinId, PinState>,
    pub dwells: Vec<Dwell>,
    pub writes: usize,
}

/// Recording pin collaborator; clones share one board
#[derive(Debug, Clone, Default)]
pub struct MockPins {
    board: Rc<RefCell<Board>>,
}

impl MockPins {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, pin: PinId) -> Option<PinState> {
        self.board.borrow().pins.get(&pin).copied()
    }

    pub fn dwells(&self) -> Vec<Dwell> {
        self.board.borrow().dwells.clone()
    }

    pub fn writes(&self) -> usize {
        self.board.borrow().writes
    }

    pub fn clear_log(&self) {
        let mut board = self.board.borrow_mut();
        board.dwells.clear();
        board.writes = 0;
    }

    pub fn snapshot(&self) -> BTreeMap<PinId, PinState> {
        self.board.borrow().pins.clone()
    }
}

impl PinIo for MockPins {
    fn set_pin_mode(&mut self, pin: PinId, mode: PinMode) {
        let mut board = self.board.borrow_mut();
        let state = match mode {
            PinMode::Input => PinState::Input,
            // Switching to output keeps a low latch until written
            PinMode::Output => match board.pins.get(&pin) {
                Some(PinState::Input) | None => PinState::Low,
                Some(other) => *other,
            },
        };
        board.pins.insert(pin, state);
    }

    fn write_digital(&mut self, pin: PinId, level: Level) {
        let mut board = self.board.borrow_mut();
        board.writes += 1;
        let state = match level {
            Level::High => PinState::High,
            Level::Low => PinState::Low,
        };
        board.pins.insert(pin, state);
    }

    fn write_analog(&mut self, pin: PinId, duty: u8) {
        let mut board = self.board.borrow_mut();
        board.writes += 1;
        board.pins.insert(pin, PinState::Pwm(duty));
    }

    fn delay(&mut self, duration: Duration) {
        let mut board = self.board.borrow_mut();
        let high = board
            .pins
            .iter()
            .filter(|(_, state)| **state == PinState::High)
            .map(|(pin, _)| *pin)
            .collect();
        let low = board
            .pins
            .iter()
            .filter(|(_, state)| **state == PinState::Low)
            .map(|(pin, _)| *pin)
            .collect();
        board.dwells.push(Dwell {
            high,
            low,
            duration,
        });
    }
}

/// Recording strip writer; clones share the frame log
#[derive(Debug, Clone, Default)]
pub struct MockStrip {
    frames: Rc<RefCell<Vec<Vec<Rgb>>>>,
}

impl MockStrip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<Vec<Rgb>> {
        self.frames.borrow().clone()
    }

    pub fn last_frame(&self) -> Option<Vec<Rgb>> {
        self.frames.borrow().last().cloned()
    }
}

impl SmartLedsWrite for MockStrip {
    type Error = Infallible;
    type Color = Rgb;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        let frame = iterator.into_iter().map(Into::into).collect();
        self.frames.borrow_mut().push(frame);
        Ok(())
    }
}

/// Board with one shared pin bank and one shared strip recorder
#[derive(Debug, Clone, Default)]
pub struct MockPlatform {
    pub pins: MockPins,
    pub strip: MockStrip,
    pub opened: Rc<RefCell<Vec<(PinId, usize)>>>,
    pub strips_supported: bool,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self {
            strips_supported: true,
            ..Self::default()
        }
    }

    pub fn without_strips() -> Self {
        Self::default()
    }
}

impl Platform for MockPlatform {
    type Pins = MockPins;
    type Strip = MockStrip;

    fn pins(&mut self) -> Self::Pins {
        self.pins.clone()
    }

    fn strip(&mut self, pin: PinId, len: usize) -> Result<Self::Strip, LedError> {
        if !self.strips_supported {
            return Err(LedError::StripUnavailable(pin));
        }
        self.opened.borrow_mut().push((pin, len));
        Ok(self.strip.clone())
    }
}

pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
