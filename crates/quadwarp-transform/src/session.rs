//! Warp sessions
//!
//! A [`WarpSession`] binds one source image to one destination surface
//! and redraws the warp whenever the caller moves the corners.
//!
//! Each non-degenerate [`WarpSession::draw`]:
//!
//! 1. analyzes the quadrilateral and picks the slicing axis,
//! 2. clears the scratch canvas (resized first if the destination changed
//!    size),
//! 3. lays out every strip on the scratch canvas,
//! 4. composites the scratch canvas onto the destination clipped to the
//!    quadrilateral.
//!
//! A quadrilateral with two or more zero-length sides is skipped without
//! touching the destination or the scratch canvas.

use crate::analyze::{WarpAxis, analyze};
use crate::compositor::composite_onto;
use crate::error::{WarpError, WarpResult};
use crate::options::WarpOptions;
use crate::quad::Quadrilateral;
use crate::strip::{strip_size, warp_strips};
use quadwarp_core::{Canvas, ImageRef, Raster, Surface};
use std::num::NonZeroU32;

/// Strip-based warp of one image onto one surface
///
/// The session owns the destination. Pass `&mut canvas` to keep
/// ownership on the caller side, since [`Surface`] is implemented for
/// mutable references.
///
/// # Examples
///
/// ```
/// use quadwarp_core::{Canvas, Raster};
/// use quadwarp_transform::{Quadrilateral, WarpSession};
///
/// let image = Raster::new(100, 100).unwrap();
/// let mut canvas = Canvas::new(100, 100).unwrap();
/// let mut session = WarpSession::new(&mut canvas, image.view()).unwrap();
/// session.draw(&Quadrilateral::from_coords(
///     10.0, 10.0, 90.0, 20.0, 80.0, 90.0, 15.0, 85.0,
/// ));
/// ```
#[derive(Debug)]
pub struct WarpSession<S: Surface> {
    destination: S,
    source: Raster,
    scratch: Canvas,
    strip: Option<Canvas>,
    options: WarpOptions,
}

impl<S: Surface> WarpSession<S> {
    /// Create a session with default options.
    ///
    /// # Errors
    ///
    /// Returns [`WarpError::InvalidArgument`] if the image or the
    /// destination has a zero width or height.
    pub fn new(destination: S, image: ImageRef<'_>) -> WarpResult<Self> {
        Self::with_options(destination, image, WarpOptions::default())
    }

    /// Create a session with explicit options.
    ///
    /// The image pixels are copied; later changes to the caller's buffer
    /// do not affect the session.
    pub fn with_options(destination: S, image: ImageRef<'_>, options: WarpOptions) -> WarpResult<Self> {
        if image.is_empty() {
            return Err(WarpError::InvalidArgument(format!(
                "image must not be empty, got {}x{}",
                image.width(),
                image.height()
            )));
        }
        let (dw, dh) = (destination.width(), destination.height());
        if dw == 0 || dh == 0 {
            return Err(WarpError::InvalidArgument(format!(
                "destination must not be empty, got {}x{}",
                dw, dh
            )));
        }

        let source = image.to_raster()?;
        let scratch = Canvas::new(dw, dh)?;
        log::debug!(
            "warp session: source {}x{}, destination {}x{}, step {}, cover {}",
            source.width(),
            source.height(),
            dw,
            dh,
            options.step,
            options.cover_factor
        );

        Ok(Self {
            destination,
            source,
            scratch,
            strip: None,
            options,
        })
    }

    /// Warp the source onto `quad` using the session step.
    pub fn draw(&mut self, quad: &Quadrilateral) {
        self.draw_with_step(quad, self.options.step);
    }

    /// Warp the source onto `quad` with an explicit step.
    pub fn draw_with_step(&mut self, quad: &Quadrilateral, step: NonZeroU32) {
        let (w, h) = (self.source.width(), self.source.height());
        let analysis = analyze(quad, w, h);
        if analysis.is_degenerate() {
            log::debug!(
                "skipping degenerate quad: {} zero-length sides",
                analysis.zero_sides
            );
            return;
        }

        if let Err(e) = self.fit_scratch() {
            log::warn!("cannot resize scratch canvas: {}", e);
            return;
        }
        self.scratch.clear();

        let extent = match analysis.axis {
            WarpAxis::Horizontal => h,
            WarpAxis::Vertical => w,
        };
        let thickness = WarpOptions::thickness_for(step, self.options.cover_factor).min(extent);
        let (sw, sh) = strip_size(analysis.axis, w, h, thickness);
        let strip = match cached_canvas(&mut self.strip, sw, sh) {
            Ok(strip) => strip,
            Err(e) => {
                log::warn!("cannot allocate {}x{} strip canvas: {}", sw, sh, e);
                return;
            }
        };

        let strips = warp_strips(
            &mut self.scratch,
            strip,
            self.source.view(),
            analysis.axis,
            quad,
            step,
        );
        composite_onto(&mut self.destination, self.scratch.view(), quad);

        log::debug!(
            "drew {} strips along {:?} (base side {:?}, step {}, thickness {})",
            strips,
            analysis.axis,
            analysis.base_side,
            step,
            thickness
        );
    }

    /// Reallocate the scratch canvas if the destination changed size.
    fn fit_scratch(&mut self) -> WarpResult<()> {
        let (dw, dh) = (self.destination.width(), self.destination.height());
        if self.scratch.width() != dw || self.scratch.height() != dh {
            log::debug!(
                "destination resized {}x{} -> {}x{}, reallocating scratch",
                self.scratch.width(),
                self.scratch.height(),
                dw,
                dh
            );
            self.scratch = Canvas::new(dw, dh)?;
        }
        Ok(())
    }

    /// Get the destination surface.
    pub fn destination(&self) -> &S {
        &self.destination
    }

    /// Get the destination surface mutably.
    pub fn destination_mut(&mut self) -> &mut S {
        &mut self.destination
    }

    /// End the session, returning the destination.
    pub fn into_destination(self) -> S {
        self.destination
    }

    /// The session's copy of the source image.
    pub fn source(&self) -> &Raster {
        &self.source
    }

    /// The scratch canvas holding the unclipped strips of the last draw.
    pub fn scratch(&self) -> &Canvas {
        &self.scratch
    }

    pub fn options(&self) -> &WarpOptions {
        &self.options
    }

    /// Replace the options used by later draws.
    pub fn set_options(&mut self, options: WarpOptions) {
        self.options = options;
    }
}

/// Reuse the canvas in `slot` if it has the requested size.
fn cached_canvas(slot: &mut Option<Canvas>, width: u32, height: u32) -> WarpResult<&mut Canvas> {
    let canvas = match slot.take() {
        Some(c) if c.width() == width && c.height() == height => c,
        _ => Canvas::new(width, height)?,
    };
    Ok(slot.insert(canvas))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadwarp_core::color;

    fn opaque(width: u32, height: u32) -> Raster {
        let data = (0..width * height)
            .map(|i| color::compose_rgb((i % 251) as u8, (i / 251) as u8, 50))
            .collect();
        Raster::from_pixels(width, height, data).unwrap()
    }

    #[test]
    fn test_rejects_empty_image() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        let empty = ImageRef::new(0, 5, &[]).unwrap();
        let result = WarpSession::new(&mut canvas, empty);
        assert!(matches!(result, Err(WarpError::InvalidArgument(_))));
    }

    #[test]
    fn test_source_is_copied() {
        let mut pixels = vec![color::compose_rgb(1, 1, 1); 4];
        let mut canvas = Canvas::new(2, 2).unwrap();
        let session = WarpSession::new(&mut canvas, ImageRef::new(2, 2, &pixels).unwrap()).unwrap();
        pixels[0] = 0;
        assert_eq!(session.source().get_pixel(0, 0), Some(color::compose_rgb(1, 1, 1)));
        assert_eq!(session.options(), &WarpOptions::default());
    }

    #[test]
    fn test_identity_draw_copies_source() {
        let src = opaque(30, 20);
        let mut session = WarpSession::new(Canvas::new(30, 20).unwrap(), src.view()).unwrap();
        session.draw(&Quadrilateral::rect(30.0, 20.0));
        assert_eq!(session.destination().raster().data(), src.data());
    }

    #[test]
    fn test_degenerate_draw_touches_nothing() {
        let src = opaque(8, 8);
        let mut canvas = Canvas::new(8, 8).unwrap();
        canvas.raster_mut().fill(color::compose_rgb(3, 3, 3));
        let mut session = WarpSession::new(&mut canvas, src.view()).unwrap();
        session.draw(&Quadrilateral::rect(8.0, 8.0));
        let scratch_before = session.scratch().raster().data().to_vec();
        let dest_before = session.destination().raster().data().to_vec();

        let q = Quadrilateral::from_coords(2.0, 2.0, 2.0, 2.0, 6.0, 6.0, 6.0, 6.0);
        session.draw(&q);
        assert_eq!(session.scratch().raster().data(), &scratch_before[..]);
        assert_eq!(session.destination().raster().data(), &dest_before[..]);
    }

    #[test]
    fn test_scratch_follows_destination_size() {
        let src = opaque(8, 8);
        let mut session = WarpSession::new(Canvas::new(8, 8).unwrap(), src.view()).unwrap();
        *session.destination_mut() = Canvas::new(16, 12).unwrap();
        session.draw(&Quadrilateral::rect(16.0, 12.0));
        assert_eq!(session.scratch().width(), 16);
        assert_eq!(session.scratch().height(), 12);
    }

    #[test]
    fn test_strip_canvas_cached() {
        let mut slot = None;
        let first = cached_canvas(&mut slot, 4, 2).unwrap() as *const Canvas;
        let again = cached_canvas(&mut slot, 4, 2).unwrap() as *const Canvas;
        assert_eq!(first, again);
        let resized = cached_canvas(&mut slot, 2, 4).unwrap();
        assert_eq!((resized.width(), resized.height()), (2, 4));
    }
}
