/// Straight-alpha RGBA color in `[0, 1]` per channel.
///
/// Appearance compilation never blends, so colors stay straight-alpha here;
/// renderers premultiply at paint time if their pipeline needs it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// The "no color" sentinel.
    ///
    /// Selector resolution treats this value identically to an absent
    /// attribute, even though it could legitimately mean fully-transparent
    /// black. Known ambiguity, reproduced as-is.
    pub const TRANSPARENT: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from straight sRGB bytes (`0`–`255`).
    ///
    /// The preferred constructor for colors coming from hex literals in a
    /// markup source.
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Opaque color from sRGB bytes.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 0xff)
    }

    /// True for the [`Color::TRANSPARENT`] sentinel.
    #[inline]
    pub fn is_transparent(self) -> bool {
        self == Self::TRANSPARENT
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Clamps all channels to `[0, 1]`. Intended for user-provided inputs.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_is_the_sentinel() {
        assert!(Color::TRANSPARENT.is_transparent());
        assert!(!Color::from_rgb8(0xff, 0x00, 0x00).is_transparent());
    }

    #[test]
    fn opaque_black_is_not_the_sentinel() {
        assert!(!Color::from_rgb8(0, 0, 0).is_transparent());
    }

    #[test]
    fn from_rgba8_scales_channels() {
        let c = Color::from_rgba8(255, 0, 255, 255);
        assert_eq!(c, Color::new(1.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn clamped_limits_out_of_range_channels() {
        let c = Color::new(2.0, -1.0, 0.5, 1.5).clamped();
        assert_eq!(c, Color::new(1.0, 0.0, 0.5, 1.0));
    }
}
