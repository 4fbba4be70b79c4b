use std::ops::{Add, Mul};

/// Linear-space RGB sample, nominally in `[0, 1]` per channel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Self = Self::new(0., 0., 0.);
    pub const WHITE: Self = Self::new(1., 1., 1.);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        return Self { r, g, b };
    }

    /// Packs the color into a 0RGB pixel: red in bits 16-23, green in 8-15,
    /// blue in 0-7, top byte zero.
    ///
    /// Channels are clamped to `[0, 1]` and then truncated after scaling by
    /// 255.999, so `1.0` maps to 255 and `0.0` to 0.
    pub fn to_packed_pixel(self) -> u32 {
        let r = to_byte(self.r) as u32;
        let g = to_byte(self.g) as u32;
        let b = to_byte(self.b) as u32;
        return (r << 16) | (g << 8) | b;
    }
}

fn to_byte(channel: f64) -> u8 {
    return (255.999 * channel.clamp(0., 1.)) as u8;
}

/// Splits a 0RGB pixel back into its `[r, g, b]` bytes.
pub fn unpack_pixel(pixel: u32) -> [u8; 3] {
    return [(pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8];
}

impl Add for Color {
    type Output = Color;

    fn add(self, c: Color) -> Color {
        return Color::new(self.r + c.r, self.g + c.g, self.b + c.b);
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, t: f64) -> Color {
        return Color::new(self.r * t, self.g * t, self.b * t);
    }
}

impl Mul<Color> for f64 {
    type Output = Color;

    fn mul(self, c: Color) -> Color {
        return c * self;
    }
}
