mod tests {
    use myrtio_led_hal::color::{average_luminance, is_lit, weighted_luminance};
    use myrtio_led_hal::math8::{invert8, mean3, scale_linear};
    use myrtio_led_hal::{LedKind, Polarity, Rgb};

    #[test]
    fn test_scale_linear_endpoints() {
        assert_eq!(scale_linear(255, 255), 255);
        assert_eq!(scale_linear(255, 51), 51);
        assert_eq!(scale_linear(0, 200), 0);
        assert_eq!(scale_linear(128, 51), 25);
        assert_eq!(scale_linear(200, 0), 0);
    }

    #[test]
    fn test_mean_and_invert() {
        assert_eq!(mean3(30, 60, 90), 60);
        assert_eq!(mean3(1, 1, 0), 0);
        assert_eq!(mean3(255, 255, 255), 255);
        assert_eq!(invert8(0), 255);
        assert_eq!(invert8(200), 55);
    }

    #[test]
    fn test_luminance() {
        assert!(!is_lit(Rgb::new(0, 0, 0)));
        assert!(is_lit(Rgb::new(0, 0, 1)));

        assert_eq!(average_luminance(Rgb::new(255, 0, 0)), 85);
        assert_eq!(weighted_luminance(Rgb::new(255, 255, 255)), 255);
        assert_eq!(weighted_luminance(Rgb::new(0, 0, 0)), 0);
        assert_eq!(weighted_luminance(Rgb::new(255, 0, 0)), 76);
        assert_eq!(weighted_luminance(Rgb::new(0, 255, 0)), 149);
        assert_eq!(weighted_luminance(Rgb::new(0, 0, 255)), 28);
    }

    #[test]
    fn test_polarity() {
        assert_eq!(Polarity::default(), Polarity::ActiveHigh);
        assert_eq!(Polarity::ActiveHigh.duty(40), 40);
        assert_eq!(Polarity::ActiveLow.duty(40), 215);
    }

    #[test]
    fn test_led_kind_names_and_ids() {
        let kinds = [
            LedKind::Single,
            LedKind::Multi,
            LedKind::Rgb,
            LedKind::NeoPixel,
            LedKind::Ws2811Mono,
            LedKind::Charlieplex,
            LedKind::Matrix,
        ];
        for kind in kinds {
            assert_eq!(LedKind::from_raw(kind as u8), Some(kind));
            assert_eq!(LedKind::parse_from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(LedKind::Ws2811Mono.as_str(), "ws2811_3x1");
        assert_eq!(LedKind::from_raw(7), None);
        assert_eq!(LedKind::parse_from_str("strip"), None);

        assert!(LedKind::Matrix.is_multiplexed());
        assert!(LedKind::Charlieplex.is_multiplexed());
        assert!(!LedKind::NeoPixel.is_multiplexed());
    }
}
