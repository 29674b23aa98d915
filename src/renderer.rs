//! Time-to-light compositing for the ring dial.
//!
//! The ring carries `N` elements; `N / 12` elements span one hour mark and
//! `N / 60` elements span one minute (and one second). Every frame is a
//! pure function of the active scheme and the wall time.

use crate::color::{OFF, Rgb, is_off};
use crate::scheme::{ColorRole, ColorScheme};
use crate::time::WallTime;

/// Renders the clock face into an owned frame buffer.
///
/// The buffer is fully overwritten on every render and handed out by
/// reference; the caller flushes it to the output sink in one update.
pub struct RingRenderer<const N: usize> {
    scheme: ColorScheme,
    frame: [Rgb; N],
}

impl<const N: usize> RingRenderer<N> {
    /// Create a renderer over an `N`-element ring.
    ///
    /// `N` must subdivide evenly into both the 12 hour marks and the 60
    /// minute positions; anything else fails to compile.
    pub fn new(scheme: ColorScheme) -> Self {
        const {
            assert!(
                N % 12 == 0 && N % 60 == 0,
                "ring length must be a multiple of 12 and 60"
            );
        }
        Self {
            scheme,
            frame: [OFF; N],
        }
    }

    pub const fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }

    /// Replace brightness and the whole palette at once.
    pub fn set_scheme(&mut self, scheme: ColorScheme) {
        self.scheme = scheme;
    }

    /// Compute one frame for the given wall time.
    pub fn render(&mut self, time: WallTime) -> &[Rgb] {
        for (index, led) in self.frame.iter_mut().enumerate() {
            *led = Self::color_at(&self.scheme, time, index);
        }
        &self.frame
    }

    /// Paint the bare dial shown while the time source is implausible:
    /// hour ticks plus a status color on the 12 o'clock element. An off
    /// status yields ticks only; the caller blinks by alternating the two.
    pub fn render_standby(&mut self, status: Rgb) -> &[Rgb] {
        let per_hour = N / 12;
        for (index, led) in self.frame.iter_mut().enumerate() {
            *led = if index == 0 && !is_off(status) {
                status
            } else if index.is_multiple_of(per_hour) {
                self.scheme.color(ColorRole::Ticks)
            } else {
                OFF
            };
        }
        &self.frame
    }

    /// Resolve one element by the indicator priority order. First matching
    /// rule wins; every element is claimed by exactly one rule.
    fn color_at(scheme: &ColorScheme, time: WallTime, index: usize) -> Rgb {
        let per_hour = N / 12;
        let per_minute = N / 60;

        let seconds = scheme.color(ColorRole::Second);
        if !is_off(seconds) && index / per_minute == usize::from(time.second) {
            return seconds;
        }

        // Minutes share even seconds with the dial so they never fight the
        // hour dithering below on the same tick.
        if time.second.is_multiple_of(2) && index / per_minute == usize::from(time.minute) {
            return scheme.color(ColorRole::Minute);
        }

        // Continuous hour position: the whole-hour mark advanced by the
        // elapsed minutes, truncated to element resolution. On even seconds
        // the indicator yields exact tick positions back to the dial, which
        // dithers the marker across the mark at half duty.
        let hour_pos = usize::from(time.hour % 12) * per_hour
            + usize::from(time.minute) * per_hour / 60;
        if index == hour_pos && (!index.is_multiple_of(per_hour) || !time.second.is_multiple_of(2)) {
            return if time.is_night() {
                scheme.color(ColorRole::HourNight)
            } else {
                scheme.color(ColorRole::HourDay)
            };
        }

        if index.is_multiple_of(per_hour) {
            return scheme.color(ColorRole::Ticks);
        }

        OFF
    }
}
