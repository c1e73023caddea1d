mod tests {
    use myrtio_light_animation::color::{BLACK, BLUE, DILUTED_RED, RED, scale};
    use myrtio_light_animation::dome::{LADDER_START, eye_pulse_config, ladder_comet_config};
    use myrtio_light_animation::{
        Animation, DomeBuffers, Instant, OutputDriver, Rgb, Runner, Strip, Tickable,
    };

    static BUFFERS: DomeBuffers = DomeBuffers::new();

    #[derive(Default)]
    struct RecordingDriver {
        frames: usize,
        last: Vec<Rgb>,
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames += 1;
            self.last = colors.to_vec();
        }
    }

    #[test]
    fn test_dome_configuration() {
        let comet = ladder_comet_config();
        assert_eq!(comet.tail_length, 4);
        assert!(comet.bounce);
        assert_eq!(comet.color, scale(DILUTED_RED, 0.1));
        assert_eq!(comet.background_color, scale(RED, 0.1));

        let eye = eye_pulse_config();
        assert_eq!(eye.color, BLUE);
        assert!(eye.min_intensity < eye.max_intensity);
    }

    #[test]
    fn test_dome_animations() {
        let buffers = DomeBuffers::new();
        let mut animations = buffers.animations().unwrap();
        assert_eq!(animations.len(), 3);
        assert!(matches!(animations.members()[0], Animation::Comet(_)));
        assert_eq!(animations.members()[0].target().len(), 14);

        animations.tick(Instant::from_millis(0));

        let ladder = buffers.ladder.snapshot();
        assert_eq!(ladder[0], BLACK);
        assert_eq!(ladder[1], BLACK);
        assert_eq!(ladder[LADDER_START], scale(DILUTED_RED, 0.1));
        assert_eq!(ladder[15], scale(RED, 0.1));

        assert_eq!(buffers.eye_right.snapshot(), [scale(BLUE, 0.01); 7]);
        assert_eq!(buffers.eye_left.snapshot(), [scale(BLUE, 0.01); 7]);
        assert_eq!(buffers.periscope.snapshot(), [BLACK]);
    }

    #[test]
    fn test_runner_ticks_and_flushes() {
        let animations = BUFFERS.animations().unwrap();
        let outputs = (
            Strip::new(&BUFFERS.eye_right, RecordingDriver::default()),
            Strip::new(&BUFFERS.ladder, RecordingDriver::default()),
        );
        let mut runner = Runner::new(animations, outputs);

        for ms in (0..=2_500).step_by(5) {
            runner.step(Instant::from_millis(ms));
        }

        let (eye, ladder) = runner.outputs_mut();
        assert_eq!(eye.driver_mut().frames, 501);
        assert_eq!(ladder.driver_mut().frames, 501);
        assert_eq!(ladder.driver_mut().last, BUFFERS.ladder.snapshot().to_vec());

        // Half a period in, the eyes are at their brightest
        assert_eq!(eye.driver_mut().last, vec![scale(BLUE, 0.3); 7]);

        let cycles = runner.animation().cycle_count();
        assert_eq!(cycles, 0);
    }
}
