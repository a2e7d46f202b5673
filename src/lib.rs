#![no_std]

pub mod color;
pub mod command;
pub mod error;
pub mod hal;
pub mod led;
pub mod math8;
pub mod refresh;

pub use command::{CommandQueue, CommandReceiver, CommandSender, HalCommand};
pub use error::LedError;
pub use hal::{LedConfig, LedHal, Platform};
pub use led::{
    Charlieplex, DisplayState, Led, LedKind, LedSlot, Matrix, MonoStrip, MultiLed, PixelStrip,
    Polarity, RgbLed, SingleLed, charlieplex_pair,
};
pub use refresh::{RefreshResult, RefreshScheduler};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Physical pin identifier
pub type PinId = u8;

/// Direction of a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    /// Push-pull output
    Output,
    /// High-impedance input
    Input,
}

/// Digital output level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    High,
    Low,
}

/// Pin-level I/O collaborator
///
/// Implement this trait to support different hardware platforms.
/// Every driver in this crate is generic over it and only uses these
/// four primitives. Calls are expected to take effect immediately.
pub trait PinIo {
    /// Switch a pin between output and high-impedance input
    fn set_pin_mode(&mut self, pin: PinId, mode: PinMode);

    /// Drive an output pin high or low
    fn write_digital(&mut self, pin: PinId, level: Level);

    /// Write a PWM duty cycle (0-255) to a pin
    fn write_analog(&mut self, pin: PinId, duty: u8);

    /// Busy-wait for the given duration
    fn delay(&mut self, duration: Duration);
}
