mod common;

mod tests {
    use myrtio_led_hal::{Led, LedError, LedKind, MonoStrip, PixelStrip, Rgb};

    use super::common::{BLACK, MockStrip, RED, WHITE};

    #[test]
    fn test_pixel_strip_starts_dark() {
        let writer = MockStrip::new();
        let strip = PixelStrip::new(writer.clone(), 4).unwrap();
        assert_eq!(strip.pixel_count(), 4);
        assert_eq!(writer.frames(), vec![vec![BLACK; 4]]);
    }

    #[test]
    fn test_pixel_strip_set_pixel_waits_for_show() {
        let writer = MockStrip::new();
        let mut strip = PixelStrip::new(writer.clone(), 3).unwrap();

        strip.set_pixel_color(1, RED);
        strip.set_pixel_color(3, RED);
        assert_eq!(writer.frames().len(), 1);
        assert_eq!(strip.pixel(1), Some(RED));
        assert_eq!(strip.pixel(3), None);

        strip.show();
        assert_eq!(writer.last_frame(), Some(vec![BLACK, RED, BLACK]));
    }

    #[test]
    fn test_pixel_strip_set_color_shows() {
        let writer = MockStrip::new();
        let mut strip = PixelStrip::new(writer.clone(), 2).unwrap();
        strip.on();
        assert_eq!(writer.last_frame(), Some(vec![WHITE; 2]));
        strip.off();
        assert_eq!(writer.last_frame(), Some(vec![BLACK; 2]));
    }

    #[test]
    fn test_pixel_strip_brightness_scales_output_only() {
        let writer = MockStrip::new();
        let mut strip = PixelStrip::new(writer.clone(), 2).unwrap();
        strip.set_color(WHITE);

        strip.set_brightness(0);
        assert_eq!(strip.brightness(), 0);
        assert_eq!(writer.last_frame(), Some(vec![BLACK; 2]));
        assert_eq!(strip.pixel(0), Some(WHITE));

        strip.set_brightness(255);
        assert_eq!(writer.last_frame(), Some(vec![WHITE; 2]));
    }

    #[test]
    fn test_strip_needs_length() {
        assert_eq!(
            PixelStrip::new(MockStrip::new(), 0).err(),
            Some(LedError::MissingLength(LedKind::NeoPixel))
        );
        assert_eq!(
            MonoStrip::new(MockStrip::new(), 257).err(),
            Some(LedError::LengthTooLarge {
                kind: LedKind::Ws2811Mono,
                max: 256,
                given: 257,
            })
        );
    }

    #[test]
    fn test_mono_strip_uses_weighted_luminance() {
        let writer = MockStrip::new();
        let mut strip = MonoStrip::new(writer.clone(), 2).unwrap();

        strip.set_color(Rgb::new(255, 0, 0));
        assert_eq!(strip.level(0), Some(76));
        assert_eq!(writer.last_frame(), Some(vec![Rgb::new(76, 76, 76); 2]));

        strip.set_pixel_color(1, Rgb::new(0, 255, 0));
        assert_eq!(strip.level(1), Some(149));
        strip.show();
        assert_eq!(
            writer.last_frame(),
            Some(vec![Rgb::new(76, 76, 76), Rgb::new(149, 149, 149)])
        );

        strip.on();
        assert_eq!(strip.level(0), Some(255));
    }
}
