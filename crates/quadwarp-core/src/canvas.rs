//! Software canvas
//!
//! [`Canvas`] implements [`Surface`] on top of a [`RasterMut`].
//!
//! Images are resampled by inverse mapping: every destination pixel center
//! is mapped back through the inverse transform and takes the nearest
//! source pixel. There is no filtering, so an integer translation with an
//! identity linear part reproduces the source exactly.

use crate::affine::{AffineMatrix, Point};
use crate::color;
use crate::error::Result;
use crate::path::Path;
use crate::raster::{ImageRef, Raster, RasterMut, composite_pixel};
use crate::surface::{Surface, SurfaceState};

/// Raster-backed drawing surface
#[derive(Debug, Clone)]
pub struct Canvas {
    raster: RasterMut,
    state: SurfaceState,
    stack: Vec<SurfaceState>,
}

impl Canvas {
    /// Create a transparent canvas.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self::from_raster(RasterMut::new(width, height)?))
    }

    /// Draw onto existing pixels.
    pub fn from_raster(raster: RasterMut) -> Self {
        Self {
            raster,
            state: SurfaceState::default(),
            stack: Vec::new(),
        }
    }

    /// Get the backing pixels.
    pub fn raster(&self) -> &RasterMut {
        &self.raster
    }

    /// Get the backing pixels mutably.
    pub fn raster_mut(&mut self) -> &mut RasterMut {
        &mut self.raster
    }

    /// Consume the canvas, keeping the pixels.
    pub fn into_raster(self) -> RasterMut {
        self.raster
    }

    /// Copy the current pixels into a shared raster.
    pub fn snapshot(&self) -> Raster {
        self.raster.clone().into()
    }

    /// Borrow the pixels as a draw source.
    pub fn view(&self) -> ImageRef<'_> {
        self.raster.view()
    }

    /// Clear every pixel to transparent, ignoring the drawing state.
    pub fn clear(&mut self) {
        self.raster.clear();
    }

    /// Number of states currently saved.
    pub fn saved_states(&self) -> usize {
        self.stack.len()
    }
}

/// Device-space bounding box of `width` x `height` under `m`, clipped to
/// the surface. Half-open `(x0, y0, x1, y1)`, `None` when empty.
fn footprint(
    m: &AffineMatrix,
    width: u32,
    height: u32,
    surface_w: u32,
    surface_h: u32,
) -> Option<(u32, u32, u32, u32)> {
    let (w, h) = (width as f32, height as f32);
    let corners = [
        Point::new(0.0, 0.0),
        Point::new(w, 0.0),
        Point::new(w, h),
        Point::new(0.0, h),
    ]
    .map(|p| m.transform_point(p));
    let min_x = corners.iter().map(|p| p.x).fold(f32::INFINITY, f32::min);
    let max_x = corners.iter().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max);
    let min_y = corners.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
    let max_y = corners.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);
    if !(min_x.is_finite() && max_x.is_finite() && min_y.is_finite() && max_y.is_finite()) {
        return None;
    }
    let x0 = min_x.floor().max(0.0) as u32;
    let y0 = min_y.floor().max(0.0) as u32;
    let x1 = (max_x.ceil().max(0.0) as u32).min(surface_w);
    let y1 = (max_y.ceil().max(0.0) as u32).min(surface_h);
    (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
}

/// Nearest source pixel under a user-space point.
#[inline]
fn sample_nearest(image: &ImageRef<'_>, p: Point) -> Option<u32> {
    let (fx, fy) = (p.x.floor(), p.y.floor());
    if fx < 0.0 || fy < 0.0 || fx >= image.width() as f32 || fy >= image.height() as f32 {
        return None;
    }
    image.get_pixel(fx as u32, fy as u32)
}

impl Surface for Canvas {
    fn width(&self) -> u32 {
        self.raster.width()
    }

    fn height(&self) -> u32 {
        self.raster.height()
    }

    fn state(&self) -> &SurfaceState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut SurfaceState {
        &mut self.state
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn draw_image(&mut self, image: ImageRef<'_>, dx: f32, dy: f32) {
        let op = self.state.composite_op;
        let (w, h) = (self.raster.width(), self.raster.height());
        let m = self
            .state
            .transform
            .compose(&AffineMatrix::translation(dx, dy));
        let inv = if image.is_empty() {
            None
        } else {
            m.inverse().ok()
        };
        let bounds = inv.and_then(|_| footprint(&m, image.width(), image.height(), w, h));

        let (x0, y0, x1, y1) = match (op.clears_uncovered(), bounds) {
            (true, _) => (0, 0, w, h),
            (false, Some(b)) => b,
            (false, None) => return,
        };
        let inside = |x: u32, y: u32| bounds.is_some_and(|(bx0, by0, bx1, by1)| {
            x >= bx0 && x < bx1 && y >= by0 && y < by1
        });

        for y in y0..y1 {
            let row = self.raster.row_data_mut(y);
            for x in x0..x1 {
                let sample = match inv {
                    Some(inv) if inside(x, y) => sample_nearest(
                        &image,
                        inv.transform_point(Point::new(x as f32 + 0.5, y as f32 + 0.5)),
                    ),
                    _ => None,
                };
                let px = &mut row[x as usize];
                match sample {
                    Some(src) => *px = composite_pixel(op, src, *px),
                    None if op.clears_uncovered() => *px = color::TRANSPARENT,
                    None => {}
                }
            }
        }
    }

    fn clear_rect(&mut self, x: i32, y: i32, width: u32, height: u32) {
        self.raster.clear_region(x, y, width, height);
    }

    fn fill_path(&mut self, path: &Path) {
        let op = self.state.composite_op;
        let fill = self.state.fill_color.to_pixel32();
        let (w, h) = (self.raster.width(), self.raster.height());
        let spans = path.transformed(&self.state.transform).spans(w, h);

        if op.clears_uncovered() {
            let mut covered = vec![false; w as usize * h as usize];
            for s in &spans {
                let start = s.y as usize * w as usize;
                covered[start + s.x0 as usize..start + s.x1 as usize].fill(true);
            }
            for (px, &inside) in self.raster.data_mut().iter_mut().zip(&covered) {
                *px = if inside {
                    composite_pixel(op, fill, *px)
                } else {
                    color::TRANSPARENT
                };
            }
        } else {
            for s in spans {
                for px in &mut self.raster.row_data_mut(s.y)[s.x0 as usize..s.x1 as usize] {
                    *px = composite_pixel(op, fill, *px);
                }
            }
        }
    }
}
