//! Driver factory and group management
//!
//! [`LedHal`] builds drivers from a type tag and a pin list, keeps them in a
//! fixed-capacity table and addresses them globally or by group.

use heapless::Vec;
use smart_leds::SmartLedsWrite;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::command::{CommandReceiver, HalCommand};
use crate::error::LedError;
use crate::led::{
    Charlieplex, Led, LedKind, LedSlot, MAX_STRIP_LEDS, Matrix, MonoStrip, MultiLed,
    PixelStrip, Polarity, RgbLed, SingleLed,
};
use crate::{PinId, PinIo};

/// Hardware resources the factory draws from
///
/// Implement this trait once per board. Every driver gets its own pin
/// handle; strips get a writer bound to their data pin.
pub trait Platform {
    /// Pin-level collaborator handed to each pin-driven LED
    type Pins: PinIo;
    /// Addressable strip writer
    type Strip: SmartLedsWrite<Color = Rgb>;

    /// Get a pin handle for a new driver
    fn pins(&mut self) -> Self::Pins;

    /// Open a strip writer on `pin` for `len` pixels
    fn strip(&mut self, pin: PinId, len: usize) -> Result<Self::Strip, LedError>;
}

/// Description of one driver to create
#[derive(Debug, Clone, Copy)]
pub struct LedConfig<'a> {
    pub kind: LedKind,
    /// Pins in driver order. For a matrix, row pins come first.
    pub pins: &'a [PinId],
    /// Pixel count for strips, row count for a matrix, unused otherwise
    pub num_leds: usize,
    pub group: u8,
    /// Wiring of pin-driven LEDs, `None` picks the variant default
    pub polarity: Option<Polarity>,
}

impl<'a> LedConfig<'a> {
    pub const fn new(kind: LedKind, pins: &'a [PinId]) -> Self {
        Self {
            kind,
            pins,
            num_leds: 0,
            group: 0,
            polarity: None,
        }
    }

    #[must_use]
    pub const fn with_len(mut self, num_leds: usize) -> Self {
        self.num_leds = num_leds;
        self
    }

    #[must_use]
    pub const fn in_group(mut self, group: u8) -> Self {
        self.group = group;
        self
    }

    #[must_use]
    pub const fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = Some(polarity);
        self
    }
}

/// Driver slot type produced by a platform
pub type PlatformSlot<B> = LedSlot<<B as Platform>::Pins, <B as Platform>::Strip>;

struct LedEntry<B: Platform> {
    group: u8,
    index_in_group: u16,
    led: PlatformSlot<B>,
}

/// Driver table - owns every LED driver created from a platform
pub struct LedHal<B: Platform, const MAX_DRIVERS: usize> {
    platform: B,
    leds: Vec<LedEntry<B>, MAX_DRIVERS>,
}

impl<B: Platform, const MAX_DRIVERS: usize> LedHal<B, MAX_DRIVERS> {
    pub const fn new(platform: B) -> Self {
        Self {
            platform,
            leds: Vec::new(),
        }
    }

    /// Create a driver and return its global index
    pub fn add_leds(&mut self, config: &LedConfig<'_>) -> Result<usize, LedError> {
        if self.leds.is_full() {
            return Err(LedError::HalFull);
        }

        let led = self.build(config)?;
        let index_in_group = self.group_len(config.group);
        let index = self.leds.len();
        self.leds
            .push(LedEntry {
                group: config.group,
                index_in_group,
                led,
            })
            .map_err(|_| LedError::HalFull)?;

        #[cfg(feature = "esp32-log")]
        println!(
            "[LedHal.add_leds] {} #{} in group {} (slot {})",
            config.kind.as_str(),
            index_in_group,
            config.group,
            index
        );

        Ok(index)
    }

    fn build(&mut self, config: &LedConfig<'_>) -> Result<PlatformSlot<B>, LedError> {
        let kind = config.kind;
        let pins = config.pins;
        let require = |required: usize| {
            if pins.len() < required {
                Err(LedError::NotEnoughPins {
                    kind,
                    required,
                    given: pins.len(),
                })
            } else {
                Ok(())
            }
        };

        let slot = match kind {
            LedKind::Single => {
                require(1)?;
                let polarity = config.polarity.unwrap_or(Polarity::ActiveHigh);
                LedSlot::Single(SingleLed::new(self.platform.pins(), pins[0], polarity))
            }
            LedKind::Multi => {
                require(2)?;
                let polarity = config.polarity.unwrap_or(Polarity::ActiveHigh);
                LedSlot::Multi(MultiLed::new(self.platform.pins(), pins, polarity)?)
            }
            LedKind::Rgb => {
                require(3)?;
                // Common-anode parts are the usual default
                let polarity = config.polarity.unwrap_or(Polarity::ActiveLow);
                LedSlot::Rgb(RgbLed::new(
                    self.platform.pins(),
                    [pins[0], pins[1], pins[2]],
                    polarity,
                ))
            }
            LedKind::NeoPixel => {
                require(1)?;
                let writer = self.open_strip(kind, pins[0], config.num_leds)?;
                LedSlot::NeoPixel(PixelStrip::new(writer, config.num_leds)?)
            }
            LedKind::Ws2811Mono => {
                require(1)?;
                let writer = self.open_strip(kind, pins[0], config.num_leds)?;
                LedSlot::Ws2811Mono(MonoStrip::new(writer, config.num_leds)?)
            }
            LedKind::Charlieplex => {
                require(2)?;
                LedSlot::Charlieplex(Charlieplex::new(self.platform.pins(), pins)?)
            }
            LedKind::Matrix => {
                let rows = config.num_leds;
                if rows == 0 {
                    return Err(LedError::MissingLength(kind));
                }
                // Needs every row pin plus at least one column
                require(rows.saturating_add(1))?;
                let (row_pins, col_pins) = pins.split_at(rows);
                LedSlot::Matrix(Matrix::new(self.platform.pins(), row_pins, col_pins)?)
            }
        };
        Ok(slot)
    }

    fn open_strip(&mut self, kind: LedKind, pin: PinId, len: usize) -> Result<B::Strip, LedError> {
        if len == 0 {
            return Err(LedError::MissingLength(kind));
        }
        if len > MAX_STRIP_LEDS {
            return Err(LedError::LengthTooLarge {
                kind,
                max: MAX_STRIP_LEDS,
                given: len,
            });
        }
        self.platform.strip(pin, len)
    }

    fn group_len(&self, group: u8) -> u16 {
        let count = self.leds.iter().filter(|entry| entry.group == group).count();
        u16::try_from(count).unwrap_or(u16::MAX)
    }

    /// Number of drivers created so far
    pub fn len(&self) -> usize {
        self.leds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leds.is_empty()
    }

    /// Driver by global index
    pub fn led(&self, index: usize) -> Option<&PlatformSlot<B>> {
        self.leds.get(index).map(|entry| &entry.led)
    }

    /// Mutable driver by global index
    pub fn led_mut(&mut self, index: usize) -> Option<&mut PlatformSlot<B>> {
        self.leds.get_mut(index).map(|entry| &mut entry.led)
    }

    /// Group a driver belongs to
    pub fn group_of(&self, index: usize) -> Option<u8> {
        self.leds.get(index).map(|entry| entry.group)
    }

    /// Position of a driver inside its group
    pub fn index_in_group(&self, index: usize) -> Option<u16> {
        self.leds.get(index).map(|entry| entry.index_in_group)
    }

    fn for_group(&mut self, group: u8, mut action: impl FnMut(&mut PlatformSlot<B>)) {
        self.leds
            .iter_mut()
            .filter(|entry| entry.group == group)
            .for_each(|entry| action(&mut entry.led));
    }

    pub fn set_group_color(&mut self, group: u8, color: Rgb) {
        self.for_group(group, |led| led.set_color(color));
    }

    pub fn set_group_brightness(&mut self, group: u8, level: u8) {
        self.for_group(group, |led| led.set_brightness(level));
    }

    pub fn group_on(&mut self, group: u8) {
        self.for_group(group, Led::on);
    }

    pub fn group_off(&mut self, group: u8) {
        self.for_group(group, Led::off);
    }

    /// Turn every driver off
    pub fn off(&mut self) {
        self.leds.iter_mut().for_each(|entry| entry.led.off());
    }

    /// Run one refresh step on every driver
    ///
    /// Advances scanned matrices by one row, sweeps Charlieplex engines and
    /// pushes strip frames. Call this from the main loop.
    pub fn show_all(&mut self) {
        self.leds.iter_mut().for_each(|entry| entry.led.show());
    }

    /// Apply a single command
    pub fn apply(&mut self, command: HalCommand) {
        match command {
            HalCommand::SetGroupColor { group, color } => self.set_group_color(group, color),
            HalCommand::SetGroupBrightness { group, level } => {
                self.set_group_brightness(group, level);
            }
            HalCommand::GroupOn(group) => self.group_on(group),
            HalCommand::GroupOff(group) => self.group_off(group),
            HalCommand::Off => self.off(),
        }
    }

    /// Drain all queued commands (non-blocking)
    ///
    /// Returns the number of commands applied.
    pub fn process_pending<const SIZE: usize>(
        &mut self,
        commands: &CommandReceiver<'_, SIZE>,
    ) -> usize {
        let mut applied = 0;
        while let Ok(command) = commands.try_receive() {
            self.apply(command);
            applied += 1;
        }
        applied
    }
}
