use super::{Led, Polarity};
use crate::color::{BLACK, Rgb, WHITE};
use crate::math8::scale_linear;
use crate::{PinId, PinIo, PinMode};

/// Three-pin RGB LED with per-channel PWM
///
/// Channel outputs are the stored color scaled by the brightness level.
/// Both color and brightness changes are applied immediately.
pub struct RgbLed<P: PinIo> {
    io: P,
    pins: [PinId; 3],
    polarity: Polarity,
    color: Rgb,
    brightness: u8,
}

impl<P: PinIo> RgbLed<P> {
    /// Create a new RGB LED from `[red, green, blue]` pins, initially off
    pub fn new(mut io: P, pins: [PinId; 3], polarity: Polarity) -> Self {
        for pin in pins {
            io.set_pin_mode(pin, PinMode::Output);
        }
        let mut led = Self {
            io,
            pins,
            polarity,
            color: BLACK,
            brightness: 255,
        };
        led.apply();
        led
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    pub const fn pins(&self) -> [PinId; 3] {
        self.pins
    }

    fn apply(&mut self) {
        let [r, g, b] = self.pins;
        let level = self.brightness;
        let channels = [
            (r, scale_linear(self.color.r, level)),
            (g, scale_linear(self.color.g, level)),
            (b, scale_linear(self.color.b, level)),
        ];
        for (pin, value) in channels {
            self.io.write_analog(pin, self.polarity.duty(value));
        }
    }
}

impl<P: PinIo> Led for RgbLed<P> {
    fn on(&mut self) {
        self.set_color(WHITE);
    }

    fn off(&mut self) {
        self.set_color(BLACK);
    }

    fn set_color(&mut self, color: Rgb) {
        self.color = color;
        self.apply();
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
        self.apply();
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }
}
