//! The attribute-to-shape compiler.
//!
//! One pass over the declared indices of a base attribute group, followed
//! by conditional application of everything that only makes sense when a
//! complete set of attributes was declared (stroke needs width *and*
//! color, padding needs all four sides, and so on).

use crate::attrs::{AttrGroup, AttrKey};
use crate::color::Color;
use crate::error::AppearanceError;
use crate::gradient::{GradientSpec, GradientType, Orientation};
use crate::shape::{Corner, CornerRadii, Padding, ShapeDescriptor, ShapeKind, Size, Stroke};

/// Compiles one base attribute group into a [`ShapeDescriptor`].
///
/// Unrecognized indices are skipped so the pass stays forward-compatible.
/// Never touches external resources. Fails only with
/// [`AppearanceError::InvalidGradientAngle`].
pub fn build_shape(attrs: &dyn AttrGroup) -> Result<ShapeDescriptor, AppearanceError> {
    let mut shape = ShapeDescriptor::default();

    let mut radii = CornerRadii::zero();
    let mut size = Size::default();
    let mut stroke_width = 0.0_f32;
    let mut stroke_color = Color::TRANSPARENT;
    let mut dash_width = 0.0_f32;
    let mut dash_gap = 0.0_f32;
    let mut center = (0.0_f32, 0.0_f32);
    let mut start_color = Color::TRANSPARENT;
    let mut center_color = Color::TRANSPARENT;
    let mut end_color = Color::TRANSPARENT;
    let mut gradient_type = GradientType::Linear;
    let mut gradient_radius = None;
    let mut angle = 0_i32;
    let mut padding = Padding::default();

    for i in 0..attrs.index_count() {
        let Some(key) = attrs.key_at(i) else { continue };
        match key {
            AttrKey::Shape => {
                shape.kind = ShapeKind::from_ident(attrs.ident(i).unwrap_or_default());
            }
            AttrKey::SolidColor => shape.set_fill_color(attrs.color(i, Color::TRANSPARENT)),
            AttrKey::CornersRadius => {
                shape.corner_radii = Some(CornerRadii::uniform(attrs.dimension(i, 0.0)));
            }
            AttrKey::CornersTopLeftRadius => {
                radii.set_corner(Corner::TopLeft, attrs.dimension(i, 0.0));
            }
            AttrKey::CornersTopRightRadius => {
                radii.set_corner(Corner::TopRight, attrs.dimension(i, 0.0));
            }
            AttrKey::CornersBottomRightRadius => {
                radii.set_corner(Corner::BottomRight, attrs.dimension(i, 0.0));
            }
            AttrKey::CornersBottomLeftRadius => {
                radii.set_corner(Corner::BottomLeft, attrs.dimension(i, 0.0));
            }
            AttrKey::GradientAngle => angle = attrs.integer(i, 0),
            AttrKey::GradientCenterX => center.0 = attrs.float(i, -1.0),
            AttrKey::GradientCenterY => center.1 = attrs.float(i, -1.0),
            AttrKey::GradientCenterColor => center_color = attrs.color(i, Color::TRANSPARENT),
            AttrKey::GradientStartColor => start_color = attrs.color(i, Color::TRANSPARENT),
            AttrKey::GradientEndColor => end_color = attrs.color(i, Color::TRANSPARENT),
            AttrKey::GradientRadius => gradient_radius = Some(attrs.dimension(i, 0.0)),
            AttrKey::GradientType => {
                gradient_type = GradientType::from_ident(attrs.ident(i).unwrap_or_default());
            }
            AttrKey::GradientUseLevel => shape.use_level = attrs.boolean(i, false),
            AttrKey::PaddingLeft => padding.left = attrs.dimension(i, 0.0),
            AttrKey::PaddingTop => padding.top = attrs.dimension(i, 0.0),
            AttrKey::PaddingRight => padding.right = attrs.dimension(i, 0.0),
            AttrKey::PaddingBottom => padding.bottom = attrs.dimension(i, 0.0),
            AttrKey::SizeWidth => size.width = attrs.dimension(i, 0.0),
            AttrKey::SizeHeight => size.height = attrs.dimension(i, 0.0),
            AttrKey::StrokeWidth => stroke_width = attrs.dimension(i, 0.0),
            AttrKey::StrokeColor => stroke_color = attrs.color(i, Color::TRANSPARENT),
            AttrKey::StrokeDashWidth => dash_width = attrs.dimension(i, 0.0),
            AttrKey::StrokeDashGap => dash_gap = attrs.dimension(i, 0.0),
            // Ripple is a separate stage; press/selector keys belong to
            // other groups and are meaningless here.
            _ => {}
        }
    }

    if radii.has_any_set() {
        shape.corner_radii = Some(radii);
    }
    if attrs.has(AttrKey::SizeWidth) && attrs.has(AttrKey::SizeHeight) {
        shape.size = Some(size);
    }
    if attrs.has(AttrKey::StrokeWidth) && attrs.has(AttrKey::StrokeColor) {
        shape.stroke = Some(Stroke {
            width: stroke_width,
            color: stroke_color,
            dash_width,
            dash_gap,
        });
    }

    // The angle rule applies whenever a linear gradient declared an angle,
    // whether or not the gradient colors ended up usable.
    let orientation = if gradient_type == GradientType::Linear && attrs.has(AttrKey::GradientAngle)
    {
        Some(Orientation::from_angle(angle)?)
    } else {
        None
    };

    if attrs.has(AttrKey::GradientStartColor) && attrs.has(AttrKey::GradientEndColor) {
        let mut spec = GradientSpec::new(gradient_type, start_color, end_color);
        if attrs.has(AttrKey::GradientCenterColor) {
            spec.colors = vec![start_color, center_color, end_color];
        }
        if attrs.has(AttrKey::GradientCenterX) && attrs.has(AttrKey::GradientCenterY) {
            spec.center = Some(center);
        }
        spec.radius = gradient_radius;
        spec.orientation = orientation;
        shape.fill = Some(crate::shape::Fill::Gradient(spec));
    }

    if attrs.has(AttrKey::PaddingLeft)
        && attrs.has(AttrKey::PaddingTop)
        && attrs.has(AttrKey::PaddingRight)
        && attrs.has(AttrKey::PaddingBottom)
    {
        shape.set_padding(padding);
    }

    Ok(shape)
}
