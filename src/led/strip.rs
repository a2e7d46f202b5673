//! Addressable strip passthroughs
//!
//! Both strips keep a local frame and hand it to any
//! [`SmartLedsWrite`] implementation on `show()`.

use heapless::Vec;
use smart_leds::{SmartLedsWrite, brightness};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{Led, LedKind};
use crate::color::{BLACK, Rgb, WHITE, weighted_luminance};
use crate::error::LedError;

/// Maximum pixels a strip can buffer
pub const MAX_STRIP_LEDS: usize = 256;

/// Pixel frame shared by both strip flavours
struct StripFrame<W> {
    writer: W,
    pixels: Vec<Rgb, MAX_STRIP_LEDS>,
    brightness: u8,
}

impl<W: SmartLedsWrite<Color = Rgb>> StripFrame<W> {
    fn new(kind: LedKind, writer: W, len: usize) -> Result<Self, LedError> {
        if len == 0 {
            return Err(LedError::MissingLength(kind));
        }
        let mut pixels = Vec::new();
        pixels
            .resize(len, BLACK)
            .map_err(|()| LedError::LengthTooLarge {
                kind,
                max: MAX_STRIP_LEDS,
                given: len,
            })?;
        Ok(Self {
            writer,
            pixels,
            brightness: 255,
        })
    }

    fn fill(&mut self, color: Rgb) {
        self.pixels.iter_mut().for_each(|pixel| *pixel = color);
    }

    fn set(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn flush(&mut self) {
        let frame = brightness(self.pixels.iter().copied(), self.brightness);
        if self.writer.write(frame).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[StripFrame.flush] strip write failed, frame dropped");
        }
    }
}

/// Full-color addressable strip (WS2812 / NeoPixel)
pub struct PixelStrip<W> {
    frame: StripFrame<W>,
}

impl<W: SmartLedsWrite<Color = Rgb>> PixelStrip<W> {
    /// Create a new strip of `len` pixels and push an all-black frame
    pub fn new(writer: W, len: usize) -> Result<Self, LedError> {
        let mut strip = Self {
            frame: StripFrame::new(LedKind::NeoPixel, writer, len)?,
        };
        strip.off();
        Ok(strip)
    }

    /// Buffered color of one pixel
    pub fn pixel(&self, index: usize) -> Option<Rgb> {
        self.frame.pixels.get(index).copied()
    }
}

impl<W: SmartLedsWrite<Color = Rgb>> Led for PixelStrip<W> {
    fn on(&mut self) {
        self.set_color(WHITE);
    }

    fn off(&mut self) {
        self.set_color(BLACK);
    }

    /// Fills every pixel and pushes the frame
    fn set_color(&mut self, color: Rgb) {
        self.frame.fill(color);
        self.show();
    }

    /// Stores the global scale and pushes the frame
    fn set_brightness(&mut self, level: u8) {
        self.frame.brightness = level;
        self.show();
    }

    fn brightness(&self) -> u8 {
        self.frame.brightness
    }

    fn pixel_count(&self) -> usize {
        self.frame.pixels.len()
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        self.frame.set(index, color);
    }

    fn show(&mut self) {
        self.frame.flush();
    }
}

/// Strip of single-color WS2811 3x1 modules
///
/// Each module drives three white LEDs from one pixel, so colors are
/// reduced to grey using the fixed luminance weighting.
pub struct MonoStrip<W> {
    frame: StripFrame<W>,
}

impl<W: SmartLedsWrite<Color = Rgb>> MonoStrip<W> {
    /// Create a new strip of `len` modules and push an all-black frame
    pub fn new(writer: W, len: usize) -> Result<Self, LedError> {
        let mut strip = Self {
            frame: StripFrame::new(LedKind::Ws2811Mono, writer, len)?,
        };
        strip.off();
        Ok(strip)
    }

    /// Grey level buffered for one module
    pub fn level(&self, index: usize) -> Option<u8> {
        self.frame.pixels.get(index).map(|pixel| pixel.r)
    }

    fn grey(color: Rgb) -> Rgb {
        let level = weighted_luminance(color);
        Rgb::new(level, level, level)
    }
}

impl<W: SmartLedsWrite<Color = Rgb>> Led for MonoStrip<W> {
    fn on(&mut self) {
        self.set_color(WHITE);
    }

    fn off(&mut self) {
        self.set_color(BLACK);
    }

    fn set_color(&mut self, color: Rgb) {
        self.frame.fill(Self::grey(color));
        self.show();
    }

    fn set_brightness(&mut self, level: u8) {
        self.frame.brightness = level;
        self.show();
    }

    fn brightness(&self) -> u8 {
        self.frame.brightness
    }

    fn pixel_count(&self) -> usize {
        self.frame.pixels.len()
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        self.frame.set(index, Self::grey(color));
    }

    fn show(&mut self) {
        self.frame.flush();
    }
}
