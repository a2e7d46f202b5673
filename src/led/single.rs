//! Directly driven monochrome LEDs
//!
//! [`SingleLed`] owns one pin, [`MultiLed`] drives several pins as one
//! load. Both reduce colors to an averaged level and apply every change
//! immediately since they have no refresh path.

use heapless::Vec;

use super::{Led, LedKind, Polarity};
use crate::color::{Rgb, average_luminance};
use crate::error::LedError;
use crate::{PinId, PinIo, PinMode};

/// Maximum pins a [`MultiLed`] drives together
pub const MAX_MULTI_PINS: usize = 8;

/// Monochrome LED on a single PWM pin
pub struct SingleLed<P: PinIo> {
    inner: MultiLed<P>,
}

impl<P: PinIo> SingleLed<P> {
    /// Create a new LED, initially off
    pub fn new(io: P, pin: PinId, polarity: Polarity) -> Self {
        let mut pins = Vec::new();
        // Capacity is MAX_MULTI_PINS, one pin always fits
        let _ = pins.push(pin);
        Self {
            inner: MultiLed::from_pins(io, pins, polarity),
        }
    }

    pub fn pin(&self) -> PinId {
        self.inner.pins.first().copied().unwrap_or_default()
    }

    pub const fn is_on(&self) -> bool {
        self.inner.is_on()
    }
}

impl<P: PinIo> Led for SingleLed<P> {
    fn on(&mut self) {
        self.inner.on();
    }

    fn off(&mut self) {
        self.inner.off();
    }

    fn set_color(&mut self, color: Rgb) {
        self.inner.set_color(color);
    }

    fn set_brightness(&mut self, level: u8) {
        self.inner.set_brightness(level);
    }

    fn brightness(&self) -> u8 {
        self.inner.brightness()
    }
}

/// Several pins driven as one monochrome load
pub struct MultiLed<P: PinIo> {
    io: P,
    pins: Vec<PinId, MAX_MULTI_PINS>,
    polarity: Polarity,
    brightness: u8,
    lit: bool,
}

impl<P: PinIo> MultiLed<P> {
    /// Create a new LED group, initially off
    pub fn new(io: P, pins: &[PinId], polarity: Polarity) -> Result<Self, LedError> {
        let pins = Vec::from_slice(pins).map_err(|()| LedError::TooManyPins {
            kind: LedKind::Multi,
            max: MAX_MULTI_PINS,
            given: pins.len(),
        })?;
        Ok(Self::from_pins(io, pins, polarity))
    }

    fn from_pins(mut io: P, pins: Vec<PinId, MAX_MULTI_PINS>, polarity: Polarity) -> Self {
        for &pin in &pins {
            io.set_pin_mode(pin, PinMode::Output);
        }
        let mut led = Self {
            io,
            pins,
            polarity,
            brightness: 255,
            lit: false,
        };
        led.apply();
        led
    }

    pub fn pins(&self) -> &[PinId] {
        &self.pins
    }

    pub const fn is_on(&self) -> bool {
        self.lit
    }

    /// Push the current state to the pins
    fn apply(&mut self) {
        if self.lit && self.brightness > 0 {
            let duty = self.polarity.duty(self.brightness);
            for &pin in &self.pins {
                self.io.write_analog(pin, duty);
            }
        } else {
            let level = self.polarity.off_level();
            for &pin in &self.pins {
                self.io.write_digital(pin, level);
            }
        }
    }
}

impl<P: PinIo> Led for MultiLed<P> {
    fn on(&mut self) {
        self.lit = true;
        self.apply();
    }

    fn off(&mut self) {
        self.lit = false;
        self.apply();
    }

    /// Level becomes the averaged color; black turns the LED off
    fn set_color(&mut self, color: Rgb) {
        self.set_brightness(average_luminance(color));
    }

    /// Applies immediately: zero turns the LED off, anything else on
    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
        self.lit = level > 0;
        self.apply();
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }
}
