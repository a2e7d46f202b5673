//! Charlieplexed LED engine
//!
//! Lights `N·(N-1)` LEDs from `N` pins. Every ordered pair of distinct pins
//! is one LED (first pin anode, second pin cathode). Only one LED is driven
//! at a time; a `show()` sweep relies on persistence of vision to make the
//! lit set look simultaneous.

use embassy_time::Duration;
use heapless::Vec;

use super::{DisplayState, Led};
use crate::color::{BLACK, Rgb, WHITE, is_lit};
use crate::error::LedError;
use crate::{Level, PinId, PinIo, PinMode};

/// Maximum number of pins a single engine can own
pub const MAX_CHARLIEPLEX_PINS: usize = 16;

/// Maximum number of addressable LEDs (`16 * 15`)
pub const MAX_CHARLIEPLEX_LEDS: usize = MAX_CHARLIEPLEX_PINS * (MAX_CHARLIEPLEX_PINS - 1);

/// Dwell time per brightness step for each lit LED
const DWELL_MICROS_PER_LEVEL: u64 = 10;

/// Number of LEDs addressable with `pin_count` pins
pub const fn charlieplex_led_count(pin_count: usize) -> usize {
    if pin_count < 2 {
        return 0;
    }
    pin_count * (pin_count - 1)
}

/// Map a logical LED index to its `(anode, cathode)` pin positions
///
/// Pairs are enumerated row-major: the outer loop walks anode candidates
/// `i`, the inner loop walks cathode candidates `j`, skipping `i == j`.
/// LED `k` is the k-th pair of that enumeration. Returns `None` when
/// `index >= pin_count * (pin_count - 1)`.
pub const fn charlieplex_pair(pin_count: usize, index: usize) -> Option<(usize, usize)> {
    if index >= charlieplex_led_count(pin_count) {
        return None;
    }
    // Each anode owns a run of `pin_count - 1` cathodes
    let per_anode = pin_count - 1;
    let anode = index / per_anode;
    let slot = index % per_anode;
    let cathode = if slot >= anode { slot + 1 } else { slot };
    Some((anode, cathode))
}

/// Charlieplex driver over an owned pin set
pub struct Charlieplex<P: PinIo> {
    io: P,
    pins: Vec<PinId, MAX_CHARLIEPLEX_PINS>,
    /// On/off per logical LED, length `N·(N-1)`
    lit: Vec<bool, MAX_CHARLIEPLEX_LEDS>,
    brightness: u8,
    state: DisplayState,
}

impl<P: PinIo> Charlieplex<P> {
    /// Create a new engine and release every pin to high impedance
    ///
    /// Pin counts below two are accepted and simply address no LEDs.
    pub fn new(mut io: P, pins: &[PinId]) -> Result<Self, LedError> {
        let pins: Vec<PinId, MAX_CHARLIEPLEX_PINS> =
            Vec::from_slice(pins).map_err(|()| LedError::TooManyPins {
                kind: super::LedKind::Charlieplex,
                max: MAX_CHARLIEPLEX_PINS,
                given: pins.len(),
            })?;

        let mut lit = Vec::new();
        // Cannot overflow: pin count is already bounded by MAX_CHARLIEPLEX_PINS
        let _ = lit.resize(charlieplex_led_count(pins.len()), false);

        for &pin in &pins {
            io.set_pin_mode(pin, PinMode::Input);
        }

        Ok(Self {
            io,
            pins,
            lit,
            brightness: 255,
            state: DisplayState::Constructed,
        })
    }

    /// Number of pins owned by this engine
    pub fn pin_count(&self) -> usize {
        self.pins.len()
    }

    /// Number of addressable LEDs
    pub fn led_count(&self) -> usize {
        self.lit.len()
    }

    /// Physical `(anode, cathode)` pins of LED `index`
    pub fn pin_pair(&self, index: usize) -> Option<(PinId, PinId)> {
        let (anode, cathode) = charlieplex_pair(self.pins.len(), index)?;
        Some((*self.pins.get(anode)?, *self.pins.get(cathode)?))
    }

    /// Whether LED `index` is marked on in the buffer
    pub fn is_lit(&self, index: usize) -> bool {
        self.lit.get(index).copied().unwrap_or(false)
    }

    pub const fn state(&self) -> DisplayState {
        self.state
    }

    /// Access the pin collaborator
    pub const fn io(&self) -> &P {
        &self.io
    }

    fn dwell(&self) -> Duration {
        Duration::from_micros(u64::from(self.brightness) * DWELL_MICROS_PER_LEVEL)
    }

    fn release_pins(&mut self) {
        for &pin in &self.pins {
            self.io.set_pin_mode(pin, PinMode::Input);
        }
    }

    /// Drive exactly one LED: every other pin stays high impedance
    fn light(&mut self, index: usize) {
        let Some((anode, cathode)) = self.pin_pair(index) else {
            return;
        };
        self.release_pins();
        self.io.set_pin_mode(anode, PinMode::Output);
        self.io.write_digital(anode, Level::High);
        self.io.set_pin_mode(cathode, PinMode::Output);
        self.io.write_digital(cathode, Level::Low);
    }
}

impl<P: PinIo> Led for Charlieplex<P> {
    fn on(&mut self) {
        self.set_color(WHITE);
        self.show();
    }

    fn off(&mut self) {
        self.set_color(BLACK);
        self.show();
    }

    /// Marks every LED on if `color` is not black. Takes effect on `show()`.
    fn set_color(&mut self, color: Rgb) {
        let on = is_lit(color);
        self.lit.iter_mut().for_each(|slot| *slot = on);
        self.state = DisplayState::Idle;
    }

    /// Stores the dwell multiplier used by the next `show()`
    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn pixel_count(&self) -> usize {
        self.lit.len()
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        if let Some(slot) = self.lit.get_mut(index) {
            *slot = is_lit(color);
            self.state = DisplayState::Idle;
        }
    }

    fn show(&mut self) {
        self.state = DisplayState::Scanning;
        if self.brightness > 0 {
            let dwell = self.dwell();
            for index in 0..self.lit.len() {
                if self.lit.get(index).copied().unwrap_or(false) {
                    self.light(index);
                    self.io.delay(dwell);
                }
            }
        }
        self.release_pins();
    }
}
