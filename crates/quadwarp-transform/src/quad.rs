//! Target quadrilaterals

use quadwarp_core::{Path, Point};

/// Four corners on the destination surface
///
/// Corner order is not validated. A self-intersecting quadrilateral is
/// accepted and warps to undefined (but memory-safe) visuals.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quadrilateral {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_right: Point,
    pub bottom_left: Point,
}

impl Quadrilateral {
    /// Create a quadrilateral from its corners.
    pub const fn new(
        top_left: Point,
        top_right: Point,
        bottom_right: Point,
        bottom_left: Point,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Create a quadrilateral from eight scalar coordinates.
    #[allow(clippy::too_many_arguments)]
    pub const fn from_coords(
        top_left_x: f32,
        top_left_y: f32,
        top_right_x: f32,
        top_right_y: f32,
        bottom_right_x: f32,
        bottom_right_y: f32,
        bottom_left_x: f32,
        bottom_left_y: f32,
    ) -> Self {
        Self::new(
            Point::new(top_left_x, top_left_y),
            Point::new(top_right_x, top_right_y),
            Point::new(bottom_right_x, bottom_right_y),
            Point::new(bottom_left_x, bottom_left_y),
        )
    }

    /// The axis-aligned rectangle `(0, 0)..(width, height)`.
    pub fn rect(width: f32, height: f32) -> Self {
        Self::from_coords(0.0, 0.0, width, 0.0, width, height, 0.0, height)
    }

    /// Corners in path order: TL, TR, BR, BL.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    /// Side lengths in the order top, right, bottom, left.
    pub fn side_lengths(&self) -> [f32; 4] {
        let c = self.corners();
        [
            c[0].distance(c[1]),
            c[1].distance(c[2]),
            c[2].distance(c[3]),
            c[3].distance(c[0]),
        ]
    }

    /// Closed outline TL -> TR -> BR -> BL.
    pub fn path(&self) -> Path {
        Path::polygon(&self.corners())
    }

    /// Move every corner by `(dx, dy)`.
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        let [tl, tr, br, bl] = self.corners().map(|p| Point::new(p.x + dx, p.y + dy));
        Self::new(tl, tr, br, bl)
    }
}

impl From<[Point; 4]> for Quadrilateral {
    fn from([top_left, top_right, bottom_right, bottom_left]: [Point; 4]) -> Self {
        Self::new(top_left, top_right, bottom_right, bottom_left)
    }
}
