//! Final compositing
//!
//! Strips overlap and overshoot the target outline, so the scratch
//! raster is drawn onto the destination and then masked with the
//! quadrilateral using destination-in.

use crate::quad::Quadrilateral;
use quadwarp_core::{AffineMatrix, Color, CompositeOp, ImageRef, Surface};

/// Draw `scratch` onto `destination` and clip it to `quad`.
///
/// Destination pixels whose centers fall outside the quadrilateral end up
/// transparent. The destination's drawing state is restored afterwards.
pub fn composite_onto<S: Surface + ?Sized>(
    destination: &mut S,
    scratch: ImageRef<'_>,
    quad: &Quadrilateral,
) {
    destination.save();

    destination.set_transform(AffineMatrix::identity());
    destination.draw_image(scratch, 0.0, 0.0);

    destination.set_composite_op(CompositeOp::DestinationIn);
    destination.set_fill_color(Color::BLACK);
    destination.fill_path(&quad.path());

    destination.restore();
}
