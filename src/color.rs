use smart_leds::RGB8;

pub type Rgb = RGB8;

/// An unlit element.
pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Check whether a color is the all-zero "disabled" value.
pub const fn is_off(color: Rgb) -> bool {
    color.r == 0 && color.g == 0 && color.b == 0
}
