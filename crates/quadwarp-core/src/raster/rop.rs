//! Region operations
//!
//! Whole-raster and rectangular fills. Rectangles are given in signed
//! pixel coordinates and clipped to the raster, so callers may pass
//! regions that hang off any edge.

use super::RasterMut;
use crate::color;

impl RasterMut {
    /// Clear every pixel to transparent.
    pub fn clear(&mut self) {
        self.data_mut().fill(color::TRANSPARENT);
    }

    /// Set every pixel to `val`.
    pub fn fill(&mut self, val: u32) {
        self.data_mut().fill(val);
    }

    /// Clear a rectangular region to transparent.
    ///
    /// # Arguments
    ///
    /// * `x` - Left edge of region
    /// * `y` - Top edge of region
    /// * `w` - Width of region
    /// * `h` - Height of region
    pub fn clear_region(&mut self, x: i32, y: i32, w: u32, h: u32) {
        self.fill_region(x, y, w, h, color::TRANSPARENT);
    }

    /// Set a rectangular region to `val`.
    ///
    /// The region is clipped to the raster; an empty intersection is a no-op.
    pub fn fill_region(&mut self, x: i32, y: i32, w: u32, h: u32, val: u32) {
        let Some((x0, y0, x1, y1)) = clip_rect(x, y, w, h, self.width(), self.height()) else {
            return;
        };
        for row in y0..y1 {
            self.row_data_mut(row)[x0 as usize..x1 as usize].fill(val);
        }
    }
}

/// Intersect a rectangle with `[0, width) x [0, height)`.
///
/// Returns half-open bounds `(x0, y0, x1, y1)`, or `None` when empty.
fn clip_rect(x: i32, y: i32, w: u32, h: u32, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
    let x0 = i64::from(x).max(0);
    let y0 = i64::from(y).max(0);
    let x1 = (i64::from(x) + i64::from(w)).min(i64::from(width));
    let y1 = (i64::from(y) + i64::from(h)).min(i64::from(height));
    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
}
