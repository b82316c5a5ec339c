//! Pixel compositing
//!
//! Porter-Duff rules used when a source (an image or a path fill) is
//! drawn onto a surface:
//!
//! - `Copy`: the source replaces the destination, and the destination is
//!   cleared wherever the source does not reach
//! - `SourceOver`: normal alpha blending
//! - `DestinationIn`: the destination is kept only where the source is,
//!   scaled by the source alpha
//!
//! All arithmetic works on straight (non-premultiplied) alpha.

use crate::color;

/// Compositing rule for drawing onto a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositeOp {
    /// Replace the destination with the source (`copy`)
    Copy,
    /// Normal alpha blending (`source-over`)
    #[default]
    SourceOver,
    /// Intersect the destination with the source alpha (`destination-in`)
    DestinationIn,
}

impl CompositeOp {
    /// Whether pixels the source does not cover are cleared.
    ///
    /// For these ops the draw affects the whole surface, not just the
    /// source footprint.
    pub fn clears_uncovered(self) -> bool {
        matches!(self, Self::Copy | Self::DestinationIn)
    }
}

/// Combine one source pixel with one destination pixel.
#[inline]
pub fn composite_pixel(op: CompositeOp, src: u32, dst: u32) -> u32 {
    match op {
        CompositeOp::Copy => src,
        CompositeOp::SourceOver => source_over(src, dst),
        CompositeOp::DestinationIn => destination_in(src, dst),
    }
}

fn source_over(src: u32, dst: u32) -> u32 {
    let sa = color::alpha(src) as u32;
    if sa == 255 {
        return src;
    }
    if sa == 0 {
        return dst;
    }
    let da = color::alpha(dst) as u32;
    // Output alpha scaled by 255 * 255
    let oa = sa * 255 + da * (255 - sa);
    if oa == 0 {
        return color::TRANSPARENT;
    }
    let channel = |s: u8, d: u8| -> u8 {
        let num = s as u32 * sa * 255 + d as u32 * da * (255 - sa);
        ((num + oa / 2) / oa) as u8
    };
    let (sr, sg, sb, _) = color::extract_rgba(src);
    let (dr, dg, db, _) = color::extract_rgba(dst);
    color::compose_rgba(
        channel(sr, dr),
        channel(sg, dg),
        channel(sb, db),
        ((oa + 127) / 255) as u8,
    )
}

fn destination_in(src: u32, dst: u32) -> u32 {
    let sa = color::alpha(src) as u32;
    match sa {
        255 => dst,
        0 => color::TRANSPARENT,
        _ => {
            let da = color::alpha(dst) as u32;
            let a = (da * sa + 127) / 255;
            if a == 0 {
                color::TRANSPARENT
            } else {
                color::with_alpha(dst, a as u8)
            }
        }
    }
}
