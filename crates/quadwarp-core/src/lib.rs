//! quadwarp core - Raster surfaces for strip-based quadrilateral warping
//!
//! This crate provides the drawing primitives the warper is built on:
//!
//! - [`Raster`] / [`RasterMut`] - 32-bit RGBA pixel container (shared / owned)
//! - [`ImageRef`] - Borrowed read-only view usable as a draw source
//! - [`AffineMatrix`] / [`Point`] - 2D affine geometry
//! - [`Path`] - Closed polygon paths for fills
//! - [`CompositeOp`] - Compositing rules (copy, source-over, destination-in)
//! - [`Surface`] - Drawing target interface with a save/restore state stack
//! - [`Canvas`] - Software [`Surface`] backed by a [`RasterMut`]

pub mod affine;
pub mod canvas;
pub mod error;
pub mod path;
pub mod raster;
pub mod surface;

pub use affine::{AffineMatrix, Point};
pub use canvas::Canvas;
pub use error::{Error, Result};
pub use path::Path;
pub use raster::{Color, CompositeOp, ImageRef, Raster, RasterMut};
pub use surface::{Surface, SurfaceState};

/// Color channel helpers for 32-bit RGBA pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
/// Alpha is straight, not premultiplied.
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Fully transparent pixel.
    pub const TRANSPARENT: u32 = 0;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose an opaque 32-bit pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_rgba(r, g, b, 255)
    }

    /// Compose a 32-bit RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    /// Extract RGBA values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

    /// Replace the alpha byte of a pixel.
    #[inline]
    pub fn with_alpha(pixel: u32, a: u8) -> u32 {
        (pixel & !0xff) | a as u32
    }

}
