#![no_std]

pub mod color;
pub mod command;
pub mod renderer;
pub mod scheduler;
pub mod scheme;
pub mod selftest;
pub mod time;

pub use color::{OFF, Rgb, rgb_from_u32};
pub use command::{ClockCommand, CommandChannel, CommandReceiver, CommandSender, SendError};
pub use renderer::RingRenderer;
pub use scheduler::{ClockScheduler, PollResult, STATUS_LINK_DOWN, STATUS_LINK_UP};
pub use scheme::{ColorRole, ColorScheme, FormatError};
pub use selftest::{SELF_TEST_DWELL, SelfTest, SelfTestFrame};
pub use time::WallTime;

pub use embassy_time::Duration;

/// Number of elements on the reference dial.
pub const DEFAULT_RING_LEDS: usize = 60;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The clock scheduler is generic over this trait.
pub trait OutputDriver {
    /// Flush one complete frame to the LED ring at the given brightness.
    ///
    /// Called exactly once per computed frame, after every element has been
    /// assigned. Brightness scaling is the driver's job; frames carry
    /// unscaled palette colors.
    fn write(&mut self, frame: &[Rgb], brightness: u8);
}
