//! Raster - The RGBA pixel container
//!
//! The `Raster` structure is the image type every surface draws into and
//! every strip is cut from.
//!
//! # Pixel layout
//!
//! - One 32-bit word per pixel, rows stored top to bottom
//! - Color order is RGBA (red in MSB), straight alpha
//! - There is no row padding: the stride is always `width`
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for cheap cloning (shared ownership).
//! To modify pixel data, convert to `RasterMut` via [`Raster::try_into_mut`]
//! or [`Raster::to_mut`], then convert back with `Into<Raster>`.
//! [`ImageRef`] borrows the pixels of either form as a draw source.

mod access;
pub mod blend;
mod rop;

pub use blend::{CompositeOp, composite_pixel};

use crate::color;
use crate::error::{Error, Result};
use std::sync::Arc;

/// An RGBA color value.
///
/// Used as the fill style of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque black, the default fill style.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    /// Create a color from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Pack into a `0xRRGGBBAA` pixel.
    pub fn to_pixel32(self) -> u32 {
        color::compose_rgba(self.r, self.g, self.b, self.a)
    }

    /// Unpack a `0xRRGGBBAA` pixel.
    pub fn from_pixel32(pixel: u32) -> Self {
        let (r, g, b, a) = color::extract_rgba(pixel);
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Internal raster data
#[derive(Debug, Clone, PartialEq, Eq)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// One `0xRRGGBBAA` word per pixel
    data: Vec<u32>,
}

impl RasterData {
    fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![color::TRANSPARENT; width as usize * height as usize],
        })
    }

    fn from_pixels(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        check_len(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    fn row(&self, y: u32) -> std::ops::Range<usize> {
        let start = y as usize * self.width as usize;
        start..start + self.width as usize
    }
}

fn check_len(width: u32, height: u32, actual: usize) -> Result<()> {
    let expected = width as usize * height as usize;
    if actual != expected {
        return Err(Error::DimensionMismatch {
            width,
            height,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Raster - Shared immutable RGBA image
///
/// # Examples
///
/// ```
/// use quadwarp_core::Raster;
///
/// let raster = Raster::new(640, 480).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new fully transparent raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Raster {
            inner: Arc::new(RasterData::new(width, height)?),
        })
    }

    /// Wrap an existing pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::DimensionMismatch`] if `data.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        Ok(Raster {
            inner: Arc::new(RasterData::from_pixels(width, height, data)?),
        })
    }

    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        &self.inner.data[self.inner.row(y)]
    }

    /// Borrow the pixels as a draw source.
    #[inline]
    pub fn view(&self) -> ImageRef<'_> {
        ImageRef {
            width: self.inner.width,
            height: self.inner.height,
            data: &self.inner.data,
        }
    }

    /// Get the number of strong references to this raster.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check if two rasters have the same width and height.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Check if two rasters are pixel-for-pixel identical.
    pub fn equals(&self, other: &Raster) -> bool {
        self.inner == other.inner
    }

    /// Create a deep copy that shares nothing with `self`.
    pub fn deep_clone(&self) -> Self {
        Raster {
            inner: Arc::new((*self.inner).clone()),
        }
    }

    /// Try to get mutable access to the pixel data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: (*self.inner).clone(),
        }
    }
}

/// Mutable raster
///
/// Exclusively owned pixels. Convert back to a shared [`Raster`]
/// using `Into<Raster>`.
#[derive(Debug, Clone)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Create a new fully transparent mutable raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(RasterMut {
            inner: RasterData::new(width, height)?,
        })
    }

    /// Get the raster width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get the pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        &self.inner.data[self.inner.row(y)]
    }

    /// Get mutable access to row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let range = self.inner.row(y);
        &mut self.inner.data[range]
    }

    /// Borrow the pixels as a draw source.
    #[inline]
    pub fn view(&self) -> ImageRef<'_> {
        ImageRef {
            width: self.inner.width,
            height: self.inner.height,
            data: &self.inner.data,
        }
    }
}

impl From<RasterMut> for Raster {
    fn from(raster: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster.inner),
        }
    }
}

/// Borrowed read-only pixels
///
/// Unlike [`Raster`], an `ImageRef` may have a zero width or height, so an
/// empty decoded image can be represented and rejected by its consumer.
#[derive(Debug, Clone, Copy)]
pub struct ImageRef<'a> {
    width: u32,
    height: u32,
    data: &'a [u32],
}

impl<'a> ImageRef<'a> {
    /// Borrow `data` as a `width` x `height` image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `data.len() != width * height`.
    pub fn new(width: u32, height: u32, data: &'a [u32]) -> Result<Self> {
        check_len(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn data(&self) -> &'a [u32] {
        self.data
    }

    /// True if either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get a pixel, or `None` outside the image.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.data[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Copy the pixels into an owned raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the view is empty.
    pub fn to_raster(&self) -> Result<Raster> {
        Raster::from_pixels(self.width, self.height, self.data.to_vec())
    }
}
