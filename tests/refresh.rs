mod common;

mod tests {
    use myrtio_led_hal::refresh::DEFAULT_REFRESH_PERIOD;
    use myrtio_led_hal::{
        CommandQueue, Duration, Instant, LedConfig, LedHal, LedKind, RefreshScheduler,
    };

    use super::common::{MockPlatform, PinState, WHITE};

    fn at(micros: u64) -> Instant {
        Instant::from_micros(micros)
    }

    fn hal() -> (LedHal<MockPlatform, 4>, MockPlatform) {
        let platform = MockPlatform::new();
        let mut hal = LedHal::new(platform.clone());
        hal.add_leds(&LedConfig::new(LedKind::Matrix, &[1, 2, 3]).with_len(2))
            .unwrap();
        hal.add_leds(&LedConfig::new(LedKind::Single, &[9]).in_group(1))
            .unwrap();
        (hal, platform)
    }

    #[test]
    fn test_default_period() {
        let queue = CommandQueue::<2>::new();
        let (hal, _platform) = hal();
        let scheduler = RefreshScheduler::new(hal, queue.receiver());
        assert_eq!(scheduler.period(), DEFAULT_REFRESH_PERIOD);
        assert_eq!(DEFAULT_REFRESH_PERIOD, Duration::from_micros(1000));
    }

    #[test]
    fn test_tick_paces_and_shows() {
        let queue = CommandQueue::<2>::new();
        let (hal, _platform) = hal();
        let mut scheduler = RefreshScheduler::new(hal, queue.receiver());

        let first = scheduler.tick(at(0));
        assert_eq!(first.next_deadline, at(1000));
        assert_eq!(first.sleep_duration, Duration::from_micros(1000));
        assert_eq!(first.commands_applied, 0);

        let second = scheduler.tick(at(500));
        assert_eq!(second.next_deadline, at(2000));
        assert_eq!(second.sleep_duration, Duration::from_micros(1500));

        let matrix = scheduler.hal().led(0).and_then(|led| led.as_matrix());
        assert_eq!(matrix.map(|m| m.current_row()), Some(0));
    }

    #[test]
    fn test_tick_behind_schedule_does_not_sleep() {
        let queue = CommandQueue::<2>::new();
        let (hal, _platform) = hal();
        let mut scheduler = RefreshScheduler::new(hal, queue.receiver());

        scheduler.tick(at(0));
        scheduler.tick(at(1000));
        let late = scheduler.tick(at(3500));
        assert_eq!(late.next_deadline, at(3000));
        assert_eq!(late.sleep_duration, Duration::from_ticks(0));
    }

    #[test]
    fn test_tick_resets_after_large_drift() {
        let queue = CommandQueue::<2>::new();
        let (hal, _platform) = hal();
        let mut scheduler =
            RefreshScheduler::with_period(hal, queue.receiver(), Duration::from_micros(2000));

        scheduler.tick(at(0));
        let resumed = scheduler.tick(at(50_000));
        assert_eq!(resumed.next_deadline, at(52_000));
        assert_eq!(resumed.sleep_duration, Duration::from_micros(2000));
    }

    #[test]
    fn test_tick_applies_queued_commands() {
        let queue = CommandQueue::<4>::new();
        let (hal, platform) = hal();
        let mut scheduler = RefreshScheduler::new(hal, queue.receiver());

        let sender = queue.sender();
        sender.set_group_color(1, WHITE).unwrap();
        sender.set_group_brightness(1, 10).unwrap();

        let result = scheduler.tick(at(0));
        assert_eq!(result.commands_applied, 2);
        assert_eq!(platform.pins.state(9), Some(PinState::Pwm(10)));
        assert!(queue.is_empty());

        assert_eq!(scheduler.tick(at(1000)).commands_applied, 0);
        scheduler.hal_mut().off();
        assert_eq!(platform.pins.state(9), Some(PinState::Low));
    }
}
