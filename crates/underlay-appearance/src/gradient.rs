use crate::color::Color;
use crate::error::AppearanceError;

// ── GradientType ──────────────────────────────────────────────────────────

/// Gradient geometry.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum GradientType {
    #[default]
    Linear,
    Radial,
    Sweep,
}

impl GradientType {
    /// Parses a markup token, falling back to `Linear` for unknown input.
    pub fn from_ident(token: &str) -> Self {
        match token {
            "radial" => Self::Radial,
            "sweep" => Self::Sweep,
            _ => Self::Linear,
        }
    }
}

// ── Orientation ───────────────────────────────────────────────────────────

/// One of the 8 fixed linear-gradient directions.
///
/// Derived from a 45°-quantized angle: 0° runs from the leading edge to
/// the trailing edge, and each 45° step continues the rotation clockwise.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    /// 0°
    LeftToRight,
    /// 45°
    BottomLeftToTopRight,
    /// 90°
    BottomToTop,
    /// 135°
    BottomRightToTopLeft,
    /// 180°
    RightToLeft,
    /// 225°
    TopRightToBottomLeft,
    /// 270°
    TopToBottom,
    /// 315°
    TopLeftToBottomRight,
}

impl Orientation {
    /// Maps an angle to an orientation.
    ///
    /// The angle is normalized modulo 360 (negative input wraps, so −45 is
    /// 315). Fails with [`AppearanceError::InvalidGradientAngle`] unless the
    /// normalized angle is a multiple of 45.
    pub fn from_angle(angle: i32) -> Result<Self, AppearanceError> {
        let orientation = match angle.rem_euclid(360) {
            0 => Self::LeftToRight,
            45 => Self::BottomLeftToTopRight,
            90 => Self::BottomToTop,
            135 => Self::BottomRightToTopLeft,
            180 => Self::RightToLeft,
            225 => Self::TopRightToBottomLeft,
            270 => Self::TopToBottom,
            315 => Self::TopLeftToBottomRight,
            _ => return Err(AppearanceError::InvalidGradientAngle { angle }),
        };
        Ok(orientation)
    }

    /// The normalized angle this orientation was derived from.
    #[inline]
    pub const fn angle(self) -> i32 {
        match self {
            Self::LeftToRight => 0,
            Self::BottomLeftToTopRight => 45,
            Self::BottomToTop => 90,
            Self::BottomRightToTopLeft => 135,
            Self::RightToLeft => 180,
            Self::TopRightToBottomLeft => 225,
            Self::TopToBottom => 270,
            Self::TopLeftToBottomRight => 315,
        }
    }
}

// ── GradientSpec ──────────────────────────────────────────────────────────

/// Gradient fill definition.
///
/// `colors` holds either `[start, end]` or `[start, center, end]` when a
/// center color was declared. `orientation` is set only for linear
/// gradients whose source group declared an angle.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    pub gradient_type: GradientType,
    pub colors: Vec<Color>,
    pub center: Option<(f32, f32)>,
    pub radius: Option<f32>,
    pub orientation: Option<Orientation>,
}

impl GradientSpec {
    pub fn new(gradient_type: GradientType, start: Color, end: Color) -> Self {
        Self {
            gradient_type,
            colors: vec![start, end],
            center: None,
            radius: None,
            orientation: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_eight_multiples_of_45_resolve() {
        let expected = [
            (0, Orientation::LeftToRight),
            (45, Orientation::BottomLeftToTopRight),
            (90, Orientation::BottomToTop),
            (135, Orientation::BottomRightToTopLeft),
            (180, Orientation::RightToLeft),
            (225, Orientation::TopRightToBottomLeft),
            (270, Orientation::TopToBottom),
            (315, Orientation::TopLeftToBottomRight),
        ];
        for (angle, orientation) in expected {
            assert_eq!(Orientation::from_angle(angle), Ok(orientation));
        }
    }

    #[test]
    fn mapping_is_bijective_over_normalized_angles() {
        let mut seen = Vec::new();
        for angle in (0..360).step_by(45) {
            let o = Orientation::from_angle(angle).unwrap();
            assert_eq!(o.angle(), angle);
            assert!(!seen.contains(&o));
            seen.push(o);
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn angle_wraps_modulo_360() {
        assert_eq!(Orientation::from_angle(360), Ok(Orientation::LeftToRight));
        assert_eq!(Orientation::from_angle(405), Ok(Orientation::BottomLeftToTopRight));
        assert_eq!(Orientation::from_angle(-45), Ok(Orientation::TopLeftToBottomRight));
        assert_eq!(Orientation::from_angle(-360), Ok(Orientation::LeftToRight));
    }

    #[test]
    fn non_multiples_of_45_fail() {
        for angle in [1, 44, 47, 91, 359, -10, 721] {
            assert_eq!(
                Orientation::from_angle(angle),
                Err(AppearanceError::InvalidGradientAngle { angle }),
                "angle {angle} should be rejected"
            );
        }
    }

    #[test]
    fn gradient_type_parses_known_tokens() {
        assert_eq!(GradientType::from_ident("radial"), GradientType::Radial);
        assert_eq!(GradientType::from_ident("sweep"), GradientType::Sweep);
        assert_eq!(GradientType::from_ident("linear"), GradientType::Linear);
        assert_eq!(GradientType::from_ident("other"), GradientType::Linear);
    }
}
