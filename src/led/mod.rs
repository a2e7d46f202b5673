//! LED drivers with a compile-time known set of variants
//!
//! All drivers are stored in an enum to avoid heap allocations.
//! Each driver implements the `Led` trait.

mod charlieplex;
mod matrix;
mod polarity;
mod rgb;
mod single;
mod strip;

pub use charlieplex::{
    Charlieplex, MAX_CHARLIEPLEX_LEDS, MAX_CHARLIEPLEX_PINS, charlieplex_led_count,
    charlieplex_pair,
};
pub use matrix::{MAX_MATRIX_CELLS, MAX_MATRIX_COLS, MAX_MATRIX_ROWS, Matrix};
pub use polarity::Polarity;
pub use rgb::RgbLed;
pub use single::{MAX_MULTI_PINS, MultiLed, SingleLed};
use smart_leds::SmartLedsWrite;
pub use strip::{MAX_STRIP_LEDS, MonoStrip, PixelStrip};

use crate::PinIo;
use crate::color::Rgb;

const LED_NAME_SINGLE: &str = "single";
const LED_NAME_MULTI: &str = "multi";
const LED_NAME_RGB: &str = "rgb";
const LED_NAME_NEOPIXEL: &str = "neopixel";
const LED_NAME_WS2811_MONO: &str = "ws2811_3x1";
const LED_NAME_CHARLIEPLEX: &str = "charlieplex";
const LED_NAME_MATRIX: &str = "matrix";

const LED_ID_SINGLE: u8 = 0;
const LED_ID_MULTI: u8 = 1;
const LED_ID_RGB: u8 = 2;
const LED_ID_NEOPIXEL: u8 = 3;
const LED_ID_WS2811_MONO: u8 = 4;
const LED_ID_CHARLIEPLEX: u8 = 5;
const LED_ID_MATRIX: u8 = 6;

/// Common control surface of every LED driver
pub trait Led {
    /// Turn the load on
    fn on(&mut self);

    /// Turn the load off
    fn off(&mut self);

    /// Set the whole load to one color
    fn set_color(&mut self, color: Rgb);

    /// Set the global brightness level
    fn set_brightness(&mut self, level: u8);

    /// Current global brightness level
    fn brightness(&self) -> u8;

    /// Number of individually addressable pixels
    ///
    /// Directly driven LEDs have none.
    fn pixel_count(&self) -> usize {
        0
    }

    /// Set one pixel, ignored when `index >= pixel_count()`
    fn set_pixel_color(&mut self, _index: usize, _color: Rgb) {}

    /// Push the buffered frame (or the next scan step) to hardware
    fn show(&mut self) {}
}

/// Refresh state of a buffered driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    /// Created, buffer untouched
    Constructed,
    /// Buffer changed since the last `show()`
    Idle,
    /// `show()` has run on the current buffer
    Scanning,
}

/// Known driver types that can be requested from the factory
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum LedKind {
    Single = LED_ID_SINGLE,
    Multi = LED_ID_MULTI,
    Rgb = LED_ID_RGB,
    NeoPixel = LED_ID_NEOPIXEL,
    Ws2811Mono = LED_ID_WS2811_MONO,
    Charlieplex = LED_ID_CHARLIEPLEX,
    Matrix = LED_ID_MATRIX,
}

impl LedKind {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            LED_ID_SINGLE => Self::Single,
            LED_ID_MULTI => Self::Multi,
            LED_ID_RGB => Self::Rgb,
            LED_ID_NEOPIXEL => Self::NeoPixel,
            LED_ID_WS2811_MONO => Self::Ws2811Mono,
            LED_ID_CHARLIEPLEX => Self::Charlieplex,
            LED_ID_MATRIX => Self::Matrix,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => LED_NAME_SINGLE,
            Self::Multi => LED_NAME_MULTI,
            Self::Rgb => LED_NAME_RGB,
            Self::NeoPixel => LED_NAME_NEOPIXEL,
            Self::Ws2811Mono => LED_NAME_WS2811_MONO,
            Self::Charlieplex => LED_NAME_CHARLIEPLEX,
            Self::Matrix => LED_NAME_MATRIX,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            LED_NAME_SINGLE => Some(Self::Single),
            LED_NAME_MULTI => Some(Self::Multi),
            LED_NAME_RGB => Some(Self::Rgb),
            LED_NAME_NEOPIXEL => Some(Self::NeoPixel),
            LED_NAME_WS2811_MONO => Some(Self::Ws2811Mono),
            LED_NAME_CHARLIEPLEX => Some(Self::Charlieplex),
            LED_NAME_MATRIX => Some(Self::Matrix),
            _ => None,
        }
    }

    /// Whether the driver needs periodic `show()` calls to stay visible
    pub const fn is_multiplexed(self) -> bool {
        matches!(self, Self::Charlieplex | Self::Matrix)
    }
}

/// Driver slot - enum containing all possible drivers
pub enum LedSlot<P: PinIo, S: SmartLedsWrite<Color = Rgb>> {
    Single(SingleLed<P>),
    Multi(MultiLed<P>),
    Rgb(RgbLed<P>),
    NeoPixel(PixelStrip<S>),
    Ws2811Mono(MonoStrip<S>),
    Charlieplex(Charlieplex<P>),
    Matrix(Matrix<P>),
}

impl<P: PinIo, S: SmartLedsWrite<Color = Rgb>> LedSlot<P, S> {
    /// Get the driver type for external observation
    pub const fn kind(&self) -> LedKind {
        match self {
            Self::Single(_) => LedKind::Single,
            Self::Multi(_) => LedKind::Multi,
            Self::Rgb(_) => LedKind::Rgb,
            Self::NeoPixel(_) => LedKind::NeoPixel,
            Self::Ws2811Mono(_) => LedKind::Ws2811Mono,
            Self::Charlieplex(_) => LedKind::Charlieplex,
            Self::Matrix(_) => LedKind::Matrix,
        }
    }

    pub fn as_charlieplex(&self) -> Option<&Charlieplex<P>> {
        match self {
            Self::Charlieplex(led) => Some(led),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&Matrix<P>> {
        match self {
            Self::Matrix(led) => Some(led),
            _ => None,
        }
    }

    pub fn as_matrix_mut(&mut self) -> Option<&mut Matrix<P>> {
        match self {
            Self::Matrix(led) => Some(led),
            _ => None,
        }
    }
}

impl<P: PinIo, S: SmartLedsWrite<Color = Rgb>> Led for LedSlot<P, S> {
    fn on(&mut self) {
        match self {
            Self::Single(led) => led.on(),
            Self::Multi(led) => led.on(),
            Self::Rgb(led) => led.on(),
            Self::NeoPixel(led) => led.on(),
            Self::Ws2811Mono(led) => led.on(),
            Self::Charlieplex(led) => led.on(),
            Self::Matrix(led) => led.on(),
        }
    }

    fn off(&mut self) {
        match self {
            Self::Single(led) => led.off(),
            Self::Multi(led) => led.off(),
            Self::Rgb(led) => led.off(),
            Self::NeoPixel(led) => led.off(),
            Self::Ws2811Mono(led) => led.off(),
            Self::Charlieplex(led) => led.off(),
            Self::Matrix(led) => led.off(),
        }
    }

    fn set_color(&mut self, color: Rgb) {
        match self {
            Self::Single(led) => led.set_color(color),
            Self::Multi(led) => led.set_color(color),
            Self::Rgb(led) => led.set_color(color),
            Self::NeoPixel(led) => led.set_color(color),
            Self::Ws2811Mono(led) => led.set_color(color),
            Self::Charlieplex(led) => led.set_color(color),
            Self::Matrix(led) => led.set_color(color),
        }
    }

    fn set_brightness(&mut self, level: u8) {
        match self {
            Self::Single(led) => led.set_brightness(level),
            Self::Multi(led) => led.set_brightness(level),
            Self::Rgb(led) => led.set_brightness(level),
            Self::NeoPixel(led) => led.set_brightness(level),
            Self::Ws2811Mono(led) => led.set_brightness(level),
            Self::Charlieplex(led) => led.set_brightness(level),
            Self::Matrix(led) => led.set_brightness(level),
        }
    }

    fn brightness(&self) -> u8 {
        match self {
            Self::Single(led) => led.brightness(),
            Self::Multi(led) => led.brightness(),
            Self::Rgb(led) => led.brightness(),
            Self::NeoPixel(led) => led.brightness(),
            Self::Ws2811Mono(led) => led.brightness(),
            Self::Charlieplex(led) => led.brightness(),
            Self::Matrix(led) => led.brightness(),
        }
    }

    fn pixel_count(&self) -> usize {
        match self {
            Self::Single(led) => led.pixel_count(),
            Self::Multi(led) => led.pixel_count(),
            Self::Rgb(led) => led.pixel_count(),
            Self::NeoPixel(led) => led.pixel_count(),
            Self::Ws2811Mono(led) => led.pixel_count(),
            Self::Charlieplex(led) => led.pixel_count(),
            Self::Matrix(led) => led.pixel_count(),
        }
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        match self {
            Self::Single(led) => led.set_pixel_color(index, color),
            Self::Multi(led) => led.set_pixel_color(index, color),
            Self::Rgb(led) => led.set_pixel_color(index, color),
            Self::NeoPixel(led) => led.set_pixel_color(index, color),
            Self::Ws2811Mono(led) => led.set_pixel_color(index, color),
            Self::Charlieplex(led) => led.set_pixel_color(index, color),
            Self::Matrix(led) => led.set_pixel_color(index, color),
        }
    }

    fn show(&mut self) {
        match self {
            Self::Single(led) => led.show(),
            Self::Multi(led) => led.show(),
            Self::Rgb(led) => led.show(),
            Self::NeoPixel(led) => led.show(),
            Self::Ws2811Mono(led) => led.show(),
            Self::Charlieplex(led) => led.show(),
            Self::Matrix(led) => led.show(),
        }
    }
}
