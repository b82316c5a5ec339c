//! quadwarp-test - Regression test framework for quadwarp
//!
//! This crate provides a regression test harness supporting three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! Test images are synthesized in code, so suites need no binary fixtures.
//!
//! # Usage
//!
//! ```ignore
//! use quadwarp_test::{RegParams, quadrant_image};
//!
//! let mut rp = RegParams::new("warp_identity");
//! let src = quadrant_image(64, 48).unwrap();
//! rp.compare_values(64.0, src.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use quadwarp_core::{Raster, color};

/// Quadrant colors of [`quadrant_image`]: top-left, top-right,
/// bottom-left, bottom-right.
pub const QUADRANT_COLORS: [u32; 4] = [0xff00_00ff, 0x00ff_00ff, 0x0000_ffff, 0xffff_ffff];

/// Load a test image from the test data directory
///
/// # Arguments
///
/// * `name` - Image filename (e.g., "card.png")
pub fn load_test_image(name: &str) -> TestResult<Raster> {
    let path = test_data_path(name);
    quadwarp_io::read_image(&path).map_err(|e| TestError::ImageLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Opaque image split into four solid quadrants.
///
/// The split is at `width / 2` and `height / 2`; colors follow
/// [`QUADRANT_COLORS`].
pub fn quadrant_image(width: u32, height: u32) -> TestResult<Raster> {
    let (mx, my) = (width / 2, height / 2);
    let data = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                let idx = (usize::from(y >= my) << 1) | usize::from(x >= mx);
                QUADRANT_COLORS[idx]
            })
        })
        .collect();
    Ok(Raster::from_pixels(width, height, data)?)
}

/// Opaque gradient: red follows x, green follows y, blue is fixed.
pub fn gradient_image(width: u32, height: u32) -> TestResult<Raster> {
    let ramp = |v: u32, n: u32| if n > 1 { (v * 255 / (n - 1)) as u8 } else { 0 };
    let data = (0..height)
        .flat_map(|y| (0..width).map(move |x| color::compose_rgb(ramp(x, width), ramp(y, height), 128)))
        .collect();
    Ok(Raster::from_pixels(width, height, data)?)
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // quadwarp-test is at crates/quadwarp-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/images/{}", workspace_root(), name)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
