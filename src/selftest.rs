//! Output-sink verification sweep.
//!
//! Fills the whole ring with a fixed sequence of solid colors, holding each
//! for a dwell period, then clears. Exercises the sink end to end without
//! touching the time-driven renderer.

use embassy_time::Duration;

use crate::color::{OFF, Rgb, rgb_from_u32};

/// Hold time for each sweep color.
pub const SELF_TEST_DWELL: Duration = Duration::from_millis(500);

const SWEEP: [Rgb; 4] = [
    rgb_from_u32(0xFF0000),
    rgb_from_u32(0x00FF00),
    rgb_from_u32(0x0000FF),
    rgb_from_u32(0xFFFFFF),
];

/// One sweep step: a full frame and how long to hold it.
///
/// The closing clear frame carries no dwell.
pub struct SelfTestFrame<'a> {
    pub colors: &'a [Rgb],
    pub dwell: Option<Duration>,
}

/// Step sequence for the sweep.
///
/// The caller owns the waiting: flush each frame, then sleep for its dwell.
pub struct SelfTest<const N: usize> {
    step: usize,
    frame: [Rgb; N],
}

impl<const N: usize> SelfTest<N> {
    pub const fn new() -> Self {
        Self {
            step: 0,
            frame: [OFF; N],
        }
    }

    /// Produce the next frame of the sweep, or `None` once cleared.
    pub fn next_frame(&mut self) -> Option<SelfTestFrame<'_>> {
        let step = self.step;
        if step > SWEEP.len() {
            return None;
        }
        self.step += 1;

        let (fill, dwell) = if step < SWEEP.len() {
            (SWEEP[step], Some(SELF_TEST_DWELL))
        } else {
            (OFF, None)
        };
        self.frame.fill(fill);
        Some(SelfTestFrame {
            colors: &self.frame,
            dwell,
        })
    }
}

impl<const N: usize> Default for SelfTest<N> {
    fn default() -> Self {
        Self::new()
    }
}
