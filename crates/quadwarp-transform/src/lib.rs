//! quadwarp-transform - Strip-based quadrilateral warping
//!
//! Warps a rectangular image onto an arbitrary quadrilateral without a
//! projective transform. The source is cut into thin overlapping strips;
//! each strip is placed with its own rotation, uniform scale and
//! translation, and the result is clipped to the quadrilateral.
//!
//! - [`mod@analyze`] - Slicing axis choice and degeneracy check
//! - [`strip`] - Strip placements and the strip drawing loop
//! - [`compositor`] - Clipped compositing onto the destination
//! - [`WarpSession`] - Ties the steps together for repeated redraws

pub mod analyze;
pub mod compositor;
mod error;
pub mod options;
pub mod quad;
pub mod session;
pub mod strip;

pub use analyze::{QuadAnalysis, Side, WarpAxis, analyze};
pub use compositor::composite_onto;
pub use error::{WarpError, WarpResult};
pub use options::{DEFAULT_COVER_FACTOR, DEFAULT_STEP, WarpOptions};
pub use quad::Quadrilateral;
pub use session::WarpSession;
pub use strip::{StripPlacement, strip_angle, strip_placements, strip_size, warp_strips};
