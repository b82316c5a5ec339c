//! quadwarp - Warp images onto arbitrary quadrilaterals
//!
//! A rectangular image is fitted into a four-corner outline by cutting it
//! into thin strips and placing each strip with a rotation, a uniform
//! scale and a translation. The result is clipped to the outline, so it
//! approximates a perspective warp without a homography.
//!
//! # Overview
//!
//! - Raster surfaces and compositing (re-exported from `quadwarp-core`)
//! - PNG loading and saving ([`io`])
//! - Quadrilateral analysis, strip placement and warp sessions
//!   ([`transform`])
//!
//! # Example
//!
//! ```
//! use quadwarp::{Canvas, Raster};
//! use quadwarp::transform::{Quadrilateral, WarpSession};
//!
//! let image = Raster::new(64, 48).unwrap();
//! let mut canvas = Canvas::new(200, 150).unwrap();
//! let mut session = WarpSession::new(&mut canvas, image.view()).unwrap();
//! session.draw(&Quadrilateral::from_coords(
//!     20.0, 10.0, 180.0, 30.0, 170.0, 140.0, 30.0, 120.0,
//! ));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use quadwarp_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use quadwarp_io as io;
pub use quadwarp_transform as transform;
