//! Once-per-second repaint glue between the time source, the renderer and
//! the output sink.
//!
//! The scheduler owns the renderer and the driver, drains pending commands
//! between frames, and skips the flush entirely when the wall time has not
//! moved since the last paint. The caller supplies the cadence (and any
//! sleeping), exactly one poll per observed second.

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::color::{Rgb, rgb_from_u32};
use crate::command::{ClockCommand, CommandReceiver};
use crate::renderer::RingRenderer;
use crate::scheme::{ColorScheme, FormatError};
use crate::selftest::SelfTest;
use crate::time::WallTime;

/// Standby status color while the network link is up.
pub const STATUS_LINK_UP: Rgb = rgb_from_u32(0x000044);

/// Standby status color while the network link is down.
pub const STATUS_LINK_DOWN: Rgb = rgb_from_u32(0x440000);

/// What the ring currently displays, for flush deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shown {
    Nothing,
    Time(WallTime),
    Standby(Rgb),
}

/// Outcome of one poll.
#[derive(Debug, Clone, Copy)]
pub struct PollResult {
    /// Whether a frame was computed and flushed.
    pub flushed: bool,
    /// Whether an output sweep has been requested; run it with
    /// [`ClockScheduler::run_self_test`].
    pub self_test: bool,
}

/// Drives the dial: dedupe, command drain, render, single flush.
pub struct ClockScheduler<'a, O: OutputDriver, const N: usize, const COMMANDS: usize> {
    output: O,
    renderer: RingRenderer<N>,
    commands: CommandReceiver<'a, COMMANDS>,
    shown: Shown,
    self_test_pending: bool,
}

impl<'a, O: OutputDriver, const N: usize, const COMMANDS: usize>
    ClockScheduler<'a, O, N, COMMANDS>
{
    pub fn new(
        renderer: RingRenderer<N>,
        output: O,
        commands: CommandReceiver<'a, COMMANDS>,
    ) -> Self {
        Self {
            output,
            renderer,
            commands,
            shown: Shown::Nothing,
            self_test_pending: false,
        }
    }

    pub const fn scheme(&self) -> &ColorScheme {
        self.renderer.scheme()
    }

    /// Replace brightness and the whole palette at once.
    pub fn set_scheme(&mut self, scheme: ColorScheme) {
        self.renderer.set_scheme(scheme);
    }

    /// Decode-and-replace from the text API's two fields.
    ///
    /// The active scheme is untouched when decoding fails; the caller
    /// surfaces the rejection.
    pub fn set_scheme_from_text(
        &mut self,
        brightness: &str,
        colors: &str,
    ) -> Result<(), FormatError> {
        let scheme = ColorScheme::decode_compact(colors, brightness)?;
        self.renderer.set_scheme(scheme);
        #[cfg(feature = "esp32-log")]
        println!("ring-clock: scheme replaced");
        Ok(())
    }

    /// Repaint for the given wall time.
    ///
    /// A poll with an unchanged time is a no-op apart from the command
    /// drain; the frame is flushed at most once per distinct second.
    pub fn poll(&mut self, time: WallTime) -> PollResult {
        self.drain_commands();

        let self_test = self.self_test_pending;
        if self.shown == Shown::Time(time) {
            return PollResult {
                flushed: false,
                self_test,
            };
        }

        let brightness = self.renderer.scheme().brightness();
        let frame = self.renderer.render(time);
        self.output.write(frame, brightness);
        self.shown = Shown::Time(time);

        PollResult {
            flushed: true,
            self_test,
        }
    }

    /// Repaint the standby dial shown while the time source is implausible.
    ///
    /// The caller alternates `status` with [`crate::color::OFF`] at second
    /// parity to blink the 12 o'clock element. Returns whether a flush
    /// happened.
    pub fn poll_standby(&mut self, status: Rgb) -> bool {
        self.drain_commands();

        if self.shown == Shown::Standby(status) {
            return false;
        }

        let brightness = self.renderer.scheme().brightness();
        let frame = self.renderer.render_standby(status);
        self.output.write(frame, brightness);
        self.shown = Shown::Standby(status);
        true
    }

    /// Run the output sweep, blocking through `delay` for each dwell.
    ///
    /// The sweep overwrites whatever the ring displayed, so the next poll
    /// always repaints.
    pub fn run_self_test(&mut self, mut delay: impl FnMut(Duration)) {
        #[cfg(feature = "esp32-log")]
        println!("ring-clock: output sweep");

        self.self_test_pending = false;
        let brightness = self.renderer.scheme().brightness();
        let mut sweep = SelfTest::<N>::new();
        while let Some(step) = sweep.next_frame() {
            self.output.write(step.colors, brightness);
            if let Some(dwell) = step.dwell {
                delay(dwell);
            }
        }
        self.shown = Shown::Nothing;
    }

    fn drain_commands(&mut self) {
        while let Some(command) = self.commands.try_receive() {
            match command {
                ClockCommand::SetScheme(scheme) => {
                    self.renderer.set_scheme(scheme);
                    #[cfg(feature = "esp32-log")]
                    println!("ring-clock: scheme replaced");
                }
                ClockCommand::RunSelfTest => self.self_test_pending = true,
            }
        }
    }
}
