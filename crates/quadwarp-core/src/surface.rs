//! Drawing surfaces
//!
//! [`Surface`] is the drawing-target interface the warper needs: draw an
//! image under an affine transform and a composite op, clear a rectangle,
//! fill a path, and save/restore the drawing state.

use crate::affine::AffineMatrix;
use crate::path::Path;
use crate::raster::{Color, CompositeOp, ImageRef};

/// Drawing state saved and restored by [`Surface::save`] / [`Surface::restore`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceState {
    /// Current transform applied to images and paths
    pub transform: AffineMatrix,
    /// Current compositing rule
    pub composite_op: CompositeOp,
    /// Color used by [`Surface::fill_path`]
    pub fill_color: Color,
}

/// A raster drawing target
///
/// Transform helpers post-multiply the current transform, so
/// `translate(x, y); rotate(a); scale(s, s)` scales first and translates
/// last, as in a 2D canvas.
pub trait Surface {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Current drawing state.
    fn state(&self) -> &SurfaceState;

    /// Mutable drawing state.
    fn state_mut(&mut self) -> &mut SurfaceState;

    /// Push a copy of the current state.
    fn save(&mut self);

    /// Pop the last saved state; no-op without a matching `save`.
    fn restore(&mut self);

    /// Draw `image` with its top-left corner at `(dx, dy)` in user space.
    fn draw_image(&mut self, image: ImageRef<'_>, dx: f32, dy: f32);

    /// Clear a device-space rectangle to transparent, ignoring the transform.
    fn clear_rect(&mut self, x: i32, y: i32, width: u32, height: u32);

    /// Fill `path` with the fill color under the current composite op.
    fn fill_path(&mut self, path: &Path);

    fn transform(&self) -> AffineMatrix {
        self.state().transform
    }

    fn set_transform(&mut self, transform: AffineMatrix) {
        self.state_mut().transform = transform;
    }

    fn reset_transform(&mut self) {
        self.set_transform(AffineMatrix::identity());
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        let m = self.transform().compose(&AffineMatrix::translation(tx, ty));
        self.set_transform(m);
    }

    /// Rotate by `angle` radians.
    fn rotate(&mut self, angle: f32) {
        let m = self.transform().compose(&AffineMatrix::rotation(angle));
        self.set_transform(m);
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        let m = self.transform().compose(&AffineMatrix::scale(sx, sy));
        self.set_transform(m);
    }

    fn composite_op(&self) -> CompositeOp {
        self.state().composite_op
    }

    fn set_composite_op(&mut self, op: CompositeOp) {
        self.state_mut().composite_op = op;
    }

    fn fill_color(&self) -> Color {
        self.state().fill_color
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state_mut().fill_color = color;
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn state(&self) -> &SurfaceState {
        (**self).state()
    }

    fn state_mut(&mut self) -> &mut SurfaceState {
        (**self).state_mut()
    }

    fn save(&mut self) {
        (**self).save();
    }

    fn restore(&mut self) {
        (**self).restore();
    }

    fn draw_image(&mut self, image: ImageRef<'_>, dx: f32, dy: f32) {
        (**self).draw_image(image, dx, dy);
    }

    fn clear_rect(&mut self, x: i32, y: i32, width: u32, height: u32) {
        (**self).clear_rect(x, y, width, height);
    }

    fn fill_path(&mut self, path: &Path) {
        (**self).fill_path(path);
    }
}
