//! Brightness and palette configuration, with the two textual codecs used
//! by the text API and by config persistence.
//!
//! A scheme is only ever replaced as a whole: both decoders build a complete
//! new value or fail, so a rejected update leaves the active scheme intact.

use heapless::String;

use crate::color::{OFF, Rgb, rgb_from_u32};

/// Named palette slots, in encoding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ColorRole {
    /// Background hour marks.
    Ticks = 0,
    /// Hour indicator during night hours.
    HourNight = 1,
    /// Hour indicator during day hours.
    HourDay = 2,
    /// Minute indicator.
    Minute = 3,
    /// Second indicator; the all-zero color disables it.
    Second = 4,
}

/// Number of palette slots.
pub const SLOT_COUNT: usize = 5;

/// Length of the compact encoding: five 6-digit hex colors.
pub const COMPACT_LEN: usize = SLOT_COUNT * 6;

/// Length of the tagged encoding: 2-digit brightness, separator, palette.
pub const TAGGED_LEN: usize = 2 + 1 + COMPACT_LEN;

const DEFAULT_BRIGHTNESS: u8 = 25;

const DEFAULT_COLORS: [Rgb; SLOT_COUNT] = [
    rgb_from_u32(0x080822), // ticks
    rgb_from_u32(0x000044), // night hours
    rgb_from_u32(0x3333AA), // day hours
    rgb_from_u32(0xFF0000), // minutes
    rgb_from_u32(0x001100), // seconds
];

/// Rejected textual scheme. The previously active scheme is unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// Input length does not match the encoding.
    Length,
    /// The tagged separator is missing or misplaced.
    Separator,
    /// A color or brightness field holds a non-hex character.
    Hex,
    /// Brightness is not a decimal value in 0-255.
    Brightness,
}

/// Expected digit case for one codec.
///
/// Each codec accepts only its canonical case so that re-encoding any
/// accepted input reproduces it byte for byte.
#[derive(Clone, Copy)]
enum HexCase {
    Lower,
    Upper,
}

impl HexCase {
    fn value(self, byte: u8) -> Result<u8, FormatError> {
        match (self, byte) {
            (_, b'0'..=b'9') => Ok(byte - b'0'),
            (Self::Lower, b'a'..=b'f') => Ok(byte - b'a' + 10),
            (Self::Upper, b'A'..=b'F') => Ok(byte - b'A' + 10),
            _ => Err(FormatError::Hex),
        }
    }

    const fn digits(self) -> &'static [u8; 16] {
        match self {
            Self::Lower => b"0123456789abcdef",
            Self::Upper => b"0123456789ABCDEF",
        }
    }
}

/// Brightness plus the five-slot palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    brightness: u8,
    colors: [Rgb; SLOT_COUNT],
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::new(DEFAULT_BRIGHTNESS, DEFAULT_COLORS)
    }
}

impl ColorScheme {
    /// Create a scheme from already-validated parts.
    pub const fn new(brightness: u8, colors: [Rgb; SLOT_COUNT]) -> Self {
        Self { brightness, colors }
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Color assigned to one palette slot.
    pub const fn color(&self, role: ColorRole) -> Rgb {
        self.colors[role as usize]
    }

    /// Decode the compact palette string plus its companion decimal
    /// brightness field.
    ///
    /// The palette must be exactly 30 lowercase hex characters, one 6-digit
    /// color per slot in slot order.
    pub fn decode_compact(colors: &str, brightness: &str) -> Result<Self, FormatError> {
        let brightness = parse_brightness(brightness)?;
        let colors = parse_palette(colors.as_bytes(), HexCase::Lower)?;
        Ok(Self::new(brightness, colors))
    }

    /// Decode the tagged form `BB:RRRRRRGGGGGGHHHHHHMMMMMMSSSSSS`.
    ///
    /// Uppercase hex throughout: 2 digits of brightness, the separator,
    /// then the five palette slots.
    pub fn decode_tagged(text: &str) -> Result<Self, FormatError> {
        if text.len() != TAGGED_LEN {
            return Err(FormatError::Length);
        }
        let bytes = text.as_bytes();
        if bytes[2] != b':' {
            return Err(FormatError::Separator);
        }

        let hi = HexCase::Upper.value(bytes[0])?;
        let lo = HexCase::Upper.value(bytes[1])?;
        // Two hex digits cannot exceed 0xFF.
        let brightness = (hi << 4) | lo;

        let colors = parse_palette(&bytes[3..], HexCase::Upper)?;
        Ok(Self::new(brightness, colors))
    }

    /// Inverse of [`Self::decode_compact`]: exactly 30 lowercase hex
    /// characters, zero-padded per slot. Brightness travels separately.
    pub fn encode_compact(&self) -> String<COMPACT_LEN> {
        let mut out = String::new();
        push_palette(&mut out, &self.colors, HexCase::Lower);
        out
    }

    /// Inverse of [`Self::decode_tagged`]: uppercase hex, brightness
    /// zero-padded to 2 digits.
    pub fn encode_tagged(&self) -> String<TAGGED_LEN> {
        let digits = HexCase::Upper.digits();
        let mut out = String::new();
        let _ = out.push(digits[usize::from(self.brightness >> 4)] as char);
        let _ = out.push(digits[usize::from(self.brightness & 0x0F)] as char);
        let _ = out.push(':');
        push_palette(&mut out, &self.colors, HexCase::Upper);
        out
    }
}

fn parse_brightness(text: &str) -> Result<u8, FormatError> {
    let value: u32 = text.parse().map_err(|_| FormatError::Brightness)?;
    u8::try_from(value).map_err(|_| FormatError::Brightness)
}

fn parse_palette(bytes: &[u8], case: HexCase) -> Result<[Rgb; SLOT_COUNT], FormatError> {
    if bytes.len() != COMPACT_LEN {
        return Err(FormatError::Length);
    }
    let mut colors = [OFF; SLOT_COUNT];
    for (slot, group) in colors.iter_mut().zip(bytes.chunks_exact(6)) {
        let mut value: u32 = 0;
        for &byte in group {
            value = (value << 4) | u32::from(case.value(byte)?);
        }
        *slot = rgb_from_u32(value);
    }
    Ok(colors)
}

// Output capacity always covers the five 6-digit slots, so pushes cannot fail.
fn push_palette<const CAP: usize>(out: &mut String<CAP>, colors: &[Rgb; SLOT_COUNT], case: HexCase) {
    let digits = case.digits();
    for color in colors {
        for channel in [color.r, color.g, color.b] {
            let _ = out.push(digits[usize::from(channel >> 4)] as char);
            let _ = out.push(digits[usize::from(channel & 0x0F)] as char);
        }
    }
}
