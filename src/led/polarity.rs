use crate::Level;
use crate::math8::invert8;

/// Wiring polarity of a directly driven LED
///
/// Common-cathode parts light when the pin is high, common-anode parts
/// light when the pin is pulled low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    /// Pin high lights the LED (common cathode)
    #[default]
    ActiveHigh,
    /// Pin low lights the LED (common anode)
    ActiveLow,
}

impl Polarity {
    /// PWM duty that produces `level` on this wiring
    pub const fn duty(self, level: u8) -> u8 {
        match self {
            Self::ActiveHigh => level,
            Self::ActiveLow => invert8(level),
        }
    }

    /// Digital level that keeps the LED dark
    pub const fn off_level(self) -> Level {
        match self {
            Self::ActiveHigh => Level::Low,
            Self::ActiveLow => Level::High,
        }
    }
}
