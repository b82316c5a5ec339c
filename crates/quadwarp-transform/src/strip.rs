//! Strip decomposition
//!
//! The source is cut into thin strips along the slicing axis. Strip `k`
//! starts at offset `k * step` and is `step * cover_factor` pixels thick,
//! so consecutive strips overlap and hide the seams between placements.
//!
//! Each strip gets its own rotate + uniform scale + translate placement:
//!
//! ```text
//! Horizontal, r = y / H:              Vertical, r = x / W:
//!   s = lerp(TL, BL, r)                 s = lerp(TL, TR, r)
//!   e = lerp(TR, BR, r)                 e = lerp(BL, BR, r)
//!   angle = atan((ey - sy)/(ex - sx))   angle = atan((sx - ex)/(ey - sy))
//!   scale = |e - s| / W                 scale = |e - s| / H
//! ```
//!
//! The angle uses a single-quadrant `atan`: a row whose end lies left of
//! its start (or a column whose end lies above it) is laid out pointing
//! away from its end. Quadrilaterals turned past 90 degrees are therefore
//! not reproduced; this is a known limit of the approximation.

use crate::analyze::WarpAxis;
use crate::quad::Quadrilateral;
use quadwarp_core::{Canvas, CompositeOp, ImageRef, Point, Surface};
use std::f32::consts::FRAC_PI_2;
use std::num::NonZeroU32;

/// Placement of one strip on the scratch surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripPlacement {
    /// Row (horizontal) or column (vertical) where the strip starts
    pub offset: u32,
    /// Destination point the strip's top-left corner is attached to
    pub origin: Point,
    /// Rotation in radians
    pub angle: f32,
    /// Uniform scale factor
    pub scale: f32,
}

/// `atan(numerator / denominator)` without dividing by zero.
///
/// A zero denominator gives `+pi/2` or `-pi/2` by the sign of the
/// numerator, and 0 when both are zero.
pub fn strip_angle(numerator: f32, denominator: f32) -> f32 {
    if denominator == 0.0 {
        if numerator > 0.0 {
            FRAC_PI_2
        } else if numerator < 0.0 {
            -FRAC_PI_2
        } else {
            0.0
        }
    } else {
        (numerator / denominator).atan()
    }
}

/// Size of the strip surface for a `width` x `height` source.
pub fn strip_size(axis: WarpAxis, width: u32, height: u32, thickness: u32) -> (u32, u32) {
    match axis {
        WarpAxis::Horizontal => (width, thickness),
        WarpAxis::Vertical => (thickness, height),
    }
}

/// Compute the placement of every strip.
///
/// Yields one placement per offset `0, step, 2 * step, ...` below the
/// source extent along `axis`.
pub fn strip_placements(
    axis: WarpAxis,
    quad: &Quadrilateral,
    width: u32,
    height: u32,
    step: NonZeroU32,
) -> impl Iterator<Item = StripPlacement> {
    let q = *quad;
    let (w, h) = (width as f32, height as f32);
    let extent = match axis {
        WarpAxis::Horizontal => height,
        WarpAxis::Vertical => width,
    };

    (0..extent)
        .step_by(step.get() as usize)
        .map(move |offset| match axis {
            WarpAxis::Horizontal => {
                let r = offset as f32 / h;
                let s = q.top_left.lerp(q.bottom_left, r);
                let e = q.top_right.lerp(q.bottom_right, r);
                StripPlacement {
                    offset,
                    origin: s,
                    angle: strip_angle(e.y - s.y, e.x - s.x),
                    scale: s.distance(e) / w,
                }
            }
            WarpAxis::Vertical => {
                let r = offset as f32 / w;
                let s = q.top_left.lerp(q.top_right, r);
                let e = q.bottom_left.lerp(q.bottom_right, r);
                StripPlacement {
                    offset,
                    origin: s,
                    angle: strip_angle(s.x - e.x, e.y - s.y),
                    scale: s.distance(e) / h,
                }
            }
        })
}

/// Draw every strip of `source` onto `scratch`.
///
/// `strip` must already have the size given by [`strip_size`]. It is
/// fully rewritten for each strip. The scratch transform is left at
/// identity and its composite op at source-over.
///
/// Returns the number of strips drawn.
pub fn warp_strips<S: Surface + ?Sized>(
    scratch: &mut S,
    strip: &mut Canvas,
    source: ImageRef<'_>,
    axis: WarpAxis,
    quad: &Quadrilateral,
    step: NonZeroU32,
) -> usize {
    strip.reset_transform();
    strip.set_composite_op(CompositeOp::Copy);
    scratch.set_composite_op(CompositeOp::SourceOver);

    let mut count = 0;
    for p in strip_placements(axis, quad, source.width(), source.height(), step) {
        let (dx, dy) = match axis {
            WarpAxis::Horizontal => (0.0, -(p.offset as f32)),
            WarpAxis::Vertical => (-(p.offset as f32), 0.0),
        };
        strip.draw_image(source, dx, dy);

        scratch.reset_transform();
        scratch.translate(p.origin.x, p.origin.y);
        scratch.rotate(p.angle);
        scratch.scale(p.scale, p.scale);
        scratch.draw_image(strip.view(), 0.0, 0.0);

        log::trace!(
            "strip {} at ({:.2}, {:.2}) angle {:.4} scale {:.4}",
            p.offset,
            p.origin.x,
            p.origin.y,
            p.angle,
            p.scale
        );
        count += 1;
    }
    scratch.reset_transform();
    count
}
