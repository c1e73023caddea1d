mod tests {
    use myrtio_light_animation::color::{BLACK, BLUE, GREEN, RED};
    use myrtio_light_animation::{Error, OutputDriver, Parameter, PixelBuffer, Rgb};

    #[derive(Default)]
    struct RecordingDriver {
        frames: Vec<Vec<Rgb>>,
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames.push(colors.to_vec());
        }
    }

    #[test]
    fn test_subset_writes_are_visible_through_parent() {
        let buffer = PixelBuffer::<16>::new();
        let strip = buffer.target();
        let subset = strip.subset(2, 14).unwrap();

        assert_eq!(subset.len(), 14);
        subset.set(0, RED);
        subset.set(13, BLUE);

        assert_eq!(strip.get(2), Some(RED));
        assert_eq!(strip.get(15), Some(BLUE));
        assert_eq!(strip.get(0), Some(BLACK));
        assert_eq!(buffer.snapshot()[2], RED);

        strip.set(5, GREEN);
        assert_eq!(subset.get(3), Some(GREEN));
    }

    #[test]
    fn test_nested_subset_offsets() {
        let buffer = PixelBuffer::<10>::new();
        let inner = buffer.target().subset(2, 6).unwrap().subset(3, 2).unwrap();

        inner.set(1, RED);
        assert_eq!(buffer.snapshot()[6], RED);
    }

    #[test]
    fn test_subset_invalid_range() {
        let buffer = PixelBuffer::<8>::new();
        let strip = buffer.target();

        assert_eq!(
            strip.subset(4, 5).unwrap_err(),
            Error::InvalidRange {
                start: 4,
                len: 5,
                parent_len: 8
            }
        );
        assert!(strip.subset(usize::MAX, 2).is_err());
        assert!(strip.subset(8, 0).is_ok());
    }

    #[test]
    fn test_try_set_out_of_range() {
        let buffer = PixelBuffer::<4>::new();
        let view = buffer.target().subset(1, 2).unwrap();

        assert_eq!(
            view.try_set(2, RED),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(view.get(2), None);
        assert_eq!(buffer.snapshot(), [BLACK; 4]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_out_of_range_panics() {
        let buffer = PixelBuffer::<4>::new();
        buffer.target().set(4, RED);
    }

    #[test]
    fn test_fill_stays_within_view() {
        let buffer = PixelBuffer::<6>::new();
        buffer.target().subset(1, 3).unwrap().fill(RED);

        assert_eq!(buffer.snapshot(), [BLACK, RED, RED, RED, BLACK, BLACK]);
    }

    #[test]
    fn test_step_by() {
        let buffer = PixelBuffer::<7>::new();
        let every_other = buffer.target().step_by(2).unwrap();

        assert_eq!(every_other.len(), 4);
        every_other.fill(RED);
        assert_eq!(
            buffer.snapshot(),
            [RED, BLACK, RED, BLACK, RED, BLACK, RED]
        );

        let tail = every_other.subset(2, 2).unwrap();
        tail.set(0, BLUE);
        assert_eq!(buffer.snapshot()[4], BLUE);

        assert_eq!(
            buffer.target().step_by(0).unwrap_err(),
            Error::InvalidParameter(Parameter::Step)
        );
        assert_eq!(
            every_other.step_by(usize::MAX).unwrap_err(),
            Error::InvalidParameter(Parameter::Step)
        );
    }

    #[test]
    fn test_show_and_clear() {
        let buffer = PixelBuffer::<3>::new();
        let mut driver = RecordingDriver::default();

        buffer.target().set(1, GREEN);
        buffer.show(&mut driver);
        buffer.clear();
        buffer.show(&mut driver);

        assert_eq!(driver.frames.len(), 2);
        assert_eq!(driver.frames[0], vec![BLACK, GREEN, BLACK]);
        assert_eq!(driver.frames[1], vec![BLACK; 3]);
    }
}
