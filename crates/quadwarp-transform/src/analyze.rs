//! Quadrilateral analysis
//!
//! Chooses the slicing axis for a warp and detects degenerate targets.
//!
//! Each side is rated by how much it stretches the source: the top and
//! bottom sides (even indices) are divided by the source height, the
//! right and left sides (odd indices) by the source width. The side with
//! the largest rate becomes the base side. An even base side slices the
//! source into rows, an odd one into columns.

use crate::quad::Quadrilateral;

/// A side of a [`Quadrilateral`], in side-length order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// TL -> TR
    Top = 0,
    /// TR -> BR
    Right = 1,
    /// BR -> BL
    Bottom = 2,
    /// BL -> TL
    Left = 3,
}

impl Side {
    /// All sides in side-length order.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// Index into [`Quadrilateral::side_lengths`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Slicing axis chosen when this side is the base side.
    pub fn axis(self) -> WarpAxis {
        if self.index() % 2 == 0 {
            WarpAxis::Horizontal
        } else {
            WarpAxis::Vertical
        }
    }
}

/// Direction in which the source is cut into strips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarpAxis {
    /// Strips are full-width rows, stepping down `y`
    Horizontal,
    /// Strips are full-height columns, stepping across `x`
    Vertical,
}

/// Result of [`analyze`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadAnalysis {
    /// Lengths of top, right, bottom, left
    pub side_lengths: [f32; 4],
    /// Side with the largest scale rate
    pub base_side: Side,
    /// Slicing axis derived from `base_side`
    pub axis: WarpAxis,
    /// Number of sides with length exactly 0
    pub zero_sides: usize,
    /// Scale rate of `base_side`
    pub max_scale_rate: f32,
}

impl QuadAnalysis {
    /// Two or more collapsed sides: nothing must be drawn.
    pub fn is_degenerate(&self) -> bool {
        self.zero_sides >= 2
    }
}

/// Analyze `quad` for a `width` x `height` source.
///
/// Ties between rates keep the earlier side, and an all-zero quad reports
/// [`Side::Top`]. Non-finite lengths never win the comparison.
pub fn analyze(quad: &Quadrilateral, width: u32, height: u32) -> QuadAnalysis {
    let side_lengths = quad.side_lengths();
    let (w, h) = (width as f32, height as f32);

    let mut base_side = Side::Top;
    let mut max_scale_rate = 0.0f32;
    let mut zero_sides = 0;
    for side in Side::ALL {
        let len = side_lengths[side.index()];
        if len == 0.0 {
            zero_sides += 1;
        }
        let rate = if side.index() % 2 == 1 { len / w } else { len / h };
        if rate > max_scale_rate {
            max_scale_rate = rate;
            base_side = side;
        }
    }

    QuadAnalysis {
        side_lengths,
        base_side,
        axis: base_side.axis(),
        zero_sides,
        max_scale_rate,
    }
}
