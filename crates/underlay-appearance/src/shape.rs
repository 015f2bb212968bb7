use crate::color::Color;
use crate::gradient::GradientSpec;

// ── ShapeKind ─────────────────────────────────────────────────────────────

/// Base geometry of a shape descriptor.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Oval,
    Line,
    Ring,
}

impl ShapeKind {
    /// Parses a markup token, falling back to `Rectangle` for unknown input.
    pub fn from_ident(token: &str) -> Self {
        match token {
            "oval" => Self::Oval,
            "line" => Self::Line,
            "ring" => Self::Ring,
            _ => Self::Rectangle,
        }
    }
}

// ── CornerRadii ───────────────────────────────────────────────────────────

/// Corner identifiers, clockwise from top-left.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Offset of this corner's (x, y) pair in the radii vector.
    #[inline]
    const fn pair_index(self) -> usize {
        match self {
            Self::TopLeft => 0,
            Self::TopRight => 2,
            Self::BottomRight => 4,
            Self::BottomLeft => 6,
        }
    }
}

/// Per-corner rounding as 4 independent (x, y) pairs — always 8 floats.
///
/// Order is top-left, top-right, bottom-right, bottom-left (logical
/// pixels). Negative values are treated as zero by renderers.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii([f32; 8]);

impl CornerRadii {
    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self([0.0; 8])
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn uniform(r: f32) -> Self {
        Self([r; 8])
    }

    /// Sets both the x and y radius of one corner.
    #[inline]
    pub fn set_corner(&mut self, corner: Corner, r: f32) {
        let i = corner.pair_index();
        self.0[i] = r;
        self.0[i + 1] = r;
    }

    #[inline]
    pub fn values(&self) -> &[f32; 8] {
        &self.0
    }

    /// True iff at least one of the 8 entries is non-zero.
    #[inline]
    pub fn has_any_set(&self) -> bool {
        self.0.iter().any(|&r| r != 0.0)
    }
}

// ── Stroke ────────────────────────────────────────────────────────────────

/// Border stroke. Dash settings of zero mean a solid line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
    pub dash_width: f32,
    pub dash_gap: f32,
}

impl Stroke {
    #[inline]
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color, dash_width: 0.0, dash_gap: 0.0 }
    }
}

// ── Padding ───────────────────────────────────────────────────────────────

/// Content inset carried on the descriptor itself.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Uniform inset on all four sides.
    #[inline]
    pub const fn all(v: f32) -> Self {
        Self::new(v, v, v, v)
    }
}

// ── Size ──────────────────────────────────────────────────────────────────

/// Explicit intrinsic size in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

// ── Fill ──────────────────────────────────────────────────────────────────

/// Fill source for the shape interior — solid color or gradient, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(Color),
    Gradient(GradientSpec),
}

// ── ShapeDescriptor ───────────────────────────────────────────────────────

/// The resolved visual specification of one shape.
///
/// Built by the compiler from a base attribute group; state-table rows
/// clone fresh descriptors from the same group and recolor them, so a
/// mutation on one row never leaks into another.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeDescriptor {
    pub kind: ShapeKind,
    pub fill: Option<Fill>,
    pub corner_radii: Option<CornerRadii>,
    pub stroke: Option<Stroke>,
    pub size: Option<Size>,
    padding: Option<Padding>,
    pub use_level: bool,
}

impl ShapeDescriptor {
    pub fn new(kind: ShapeKind) -> Self {
        Self { kind, ..Self::default() }
    }

    /// Replaces any previous fill (solid or gradient) with a solid color.
    pub fn set_fill_color(&mut self, color: Color) {
        self.fill = Some(Fill::Solid(color));
    }

    /// The solid fill color, if the fill is solid.
    pub fn fill_color(&self) -> Option<Color> {
        match self.fill {
            Some(Fill::Solid(c)) => Some(c),
            _ => None,
        }
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = Some(padding);
    }

    pub fn padding(&self) -> Option<Padding> {
        self.padding
    }
}
