mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use ring_clock::{
        ClockCommand, ClockScheduler, ColorRole, ColorScheme, CommandChannel, OFF, OutputDriver,
        Rgb, RingRenderer, SELF_TEST_DWELL, STATUS_LINK_DOWN, WallTime, rgb_from_u32,
    };

    const N: usize = 60;
    const COMMANDS: usize = 4;

    #[derive(Clone, Default)]
    struct RecordingOutput {
        frames: Rc<RefCell<Vec<(Vec<Rgb>, u8)>>>,
    }

    impl RecordingOutput {
        fn flush_count(&self) -> usize {
            self.frames.borrow().len()
        }
    }

    impl OutputDriver for RecordingOutput {
        fn write(&mut self, frame: &[Rgb], brightness: u8) {
            self.frames.borrow_mut().push((frame.to_vec(), brightness));
        }
    }

    fn new_scheduler(
        channel: &CommandChannel<COMMANDS>,
    ) -> (
        ClockScheduler<'_, RecordingOutput, N, COMMANDS>,
        RecordingOutput,
    ) {
        let output = RecordingOutput::default();
        let scheduler = ClockScheduler::new(
            RingRenderer::new(ColorScheme::default()),
            output.clone(),
            channel.receiver(),
        );
        (scheduler, output)
    }

    #[test]
    fn test_poll_flushes_once_per_distinct_second() {
        let channel = CommandChannel::new();
        let (mut scheduler, output) = new_scheduler(&channel);

        let time = WallTime::new(8, 30, 15);
        assert!(scheduler.poll(time).flushed);
        assert!(!scheduler.poll(time).flushed);
        assert_eq!(output.flush_count(), 1);

        assert!(scheduler.poll(WallTime::new(8, 30, 16)).flushed);
        assert_eq!(output.flush_count(), 2);
    }

    #[test]
    fn test_queued_scheme_lands_before_the_next_frame() {
        let channel = CommandChannel::new();
        let (mut scheduler, output) = new_scheduler(&channel);
        scheduler.poll(WallTime::new(0, 0, 0));

        let scheme = ColorScheme::new(
            200,
            [
                rgb_from_u32(0x111111),
                rgb_from_u32(0x222222),
                rgb_from_u32(0x333333),
                rgb_from_u32(0x444444),
                rgb_from_u32(0x555555),
            ],
        );
        channel
            .sender()
            .try_send(ClockCommand::SetScheme(scheme))
            .unwrap();

        scheduler.poll(WallTime::new(0, 0, 1));
        assert_eq!(scheduler.scheme(), &scheme);
        // The flushed frame already carries the new brightness.
        assert_eq!(output.frames.borrow().last().unwrap().1, 200);
    }

    #[test]
    fn test_self_test_request_runs_and_forces_repaint() {
        let channel = CommandChannel::new();
        let (mut scheduler, output) = new_scheduler(&channel);

        let time = WallTime::new(12, 0, 0);
        scheduler.poll(time);
        channel
            .sender()
            .try_send(ClockCommand::RunSelfTest)
            .unwrap();

        let result = scheduler.poll(time);
        assert!(!result.flushed);
        assert!(result.self_test);

        let mut dwells = Vec::new();
        scheduler.run_self_test(|dwell| dwells.push(dwell));
        assert_eq!(dwells, vec![SELF_TEST_DWELL; 4]);
        // Four solid frames plus the clear.
        assert_eq!(output.flush_count(), 1 + 5);

        // The sweep destroyed the display, so the same second repaints.
        let result = scheduler.poll(time);
        assert!(result.flushed);
        assert!(!result.self_test);
    }

    #[test]
    fn test_text_update_replaces_or_leaves_the_scheme() {
        let channel = CommandChannel::new();
        let (mut scheduler, _output) = new_scheduler(&channel);

        scheduler
            .set_scheme_from_text("25", "0b08000000443333aaff0000001100")
            .unwrap();
        assert_eq!(
            scheduler.scheme().color(ColorRole::Ticks),
            rgb_from_u32(0x0B0800)
        );

        let active = *scheduler.scheme();
        assert!(
            scheduler
                .set_scheme_from_text("300", "0b08000000443333aaff0000001100")
                .is_err()
        );
        assert!(
            scheduler
                .set_scheme_from_text("25", "0b08000000443333aaff00000011xx")
                .is_err()
        );
        assert_eq!(scheduler.scheme(), &active);
    }

    #[test]
    fn test_standby_dedupes_by_phase() {
        let channel = CommandChannel::new();
        let (mut scheduler, output) = new_scheduler(&channel);

        assert!(scheduler.poll_standby(STATUS_LINK_DOWN));
        assert!(!scheduler.poll_standby(STATUS_LINK_DOWN));
        assert!(scheduler.poll_standby(OFF));
        assert_eq!(output.flush_count(), 2);

        let frames = output.frames.borrow();
        assert_eq!(frames[0].0[0], STATUS_LINK_DOWN);
        assert_eq!(frames[0].0[5], rgb_from_u32(0x080822));
        assert_eq!(frames[0].0[1], OFF);
        // Off phase: 12 o'clock falls back to its tick.
        assert_eq!(frames[1].0[0], rgb_from_u32(0x080822));
    }
}
