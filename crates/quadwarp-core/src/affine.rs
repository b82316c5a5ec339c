//! Affine geometry
//!
//! Points and 2D affine matrices used to place images on a surface.
//!
//! # Affine Matrix
//!
//! An affine transformation is represented as:
//! ```text
//! | a  b  tx |
//! | c  d  ty |
//! | 0  0  1  |
//! ```
//!
//! The transformation equations are:
//! ```text
//! x' = a*x + b*y + tx
//! y' = c*x + d*y + ty
//! ```
//!
//! Composition follows the 2D canvas convention: `m.compose(&n)` applies
//! `n` first, then `m`, so successive `translate`, `rotate`, `scale`
//! calls on a surface act on the image in reverse order.

use crate::error::{Error, Result};

/// Determinants smaller than this are treated as singular.
const MIN_DETERMINANT: f32 = 1.0e-12;

/// A 2D point with floating-point coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Linear interpolation: `self` at `t = 0`, `other` at `t = 1`.
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// 2D affine transformation matrix (6 coefficients)
///
/// Represents the transformation:
/// ```text
/// x' = coeffs[0]*x + coeffs[1]*y + coeffs[2]
/// y' = coeffs[3]*x + coeffs[4]*y + coeffs[5]
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMatrix {
    /// Coefficients [a, b, tx, c, d, ty]
    coeffs: [f32; 6],
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineMatrix {
    /// Create the identity transformation
    pub const fn identity() -> Self {
        Self {
            coeffs: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        }
    }

    /// Create from raw coefficients
    pub const fn from_coeffs(coeffs: [f32; 6]) -> Self {
        Self { coeffs }
    }

    /// Get the raw coefficients
    pub fn coeffs(&self) -> &[f32; 6] {
        &self.coeffs
    }

    /// Create a translation matrix
    pub const fn translation(tx: f32, ty: f32) -> Self {
        Self {
            coeffs: [1.0, 0.0, tx, 0.0, 1.0, ty],
        }
    }

    /// Create a scaling matrix
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self {
            coeffs: [sx, 0.0, 0.0, 0.0, sy, 0.0],
        }
    }

    /// Create a rotation about the origin.
    ///
    /// Positive angles (radians) turn the x axis towards the y axis,
    /// which is clockwise on a y-down raster.
    pub fn rotation(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            coeffs: [cos, -sin, 0.0, sin, cos, 0.0],
        }
    }

    /// Create a rotation about a given center
    pub fn rotation_about(center_x: f32, center_y: f32, angle: f32) -> Self {
        Self::translation(center_x, center_y)
            .compose(&Self::rotation(angle))
            .compose(&Self::translation(-center_x, -center_y))
    }

    /// Determinant of the linear part.
    pub fn determinant(&self) -> f32 {
        let [a, b, _, c, d, _] = self.coeffs;
        a * d - b * c
    }

    /// Check for the exact identity.
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Compute the inverse transformation
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularMatrix`] when the matrix collapses the plane,
    /// e.g. a zero scale.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < MIN_DETERMINANT {
            return Err(Error::SingularMatrix);
        }
        let [a, b, tx, c, d, ty] = self.coeffs;
        let ia = d / det;
        let ib = -b / det;
        let ic = -c / det;
        let id = a / det;
        Ok(Self {
            coeffs: [
                ia,
                ib,
                -(ia * tx + ib * ty),
                ic,
                id,
                -(ic * tx + id * ty),
            ],
        })
    }

    /// Compose two affine transformations (`self * other`): `other` is
    /// applied first.
    pub fn compose(&self, other: &Self) -> Self {
        let [a1, b1, tx1, c1, d1, ty1] = self.coeffs;
        let [a2, b2, tx2, c2, d2, ty2] = other.coeffs;
        Self {
            coeffs: [
                a1 * a2 + b1 * c2,
                a1 * b2 + b1 * d2,
                a1 * tx2 + b1 * ty2 + tx1,
                c1 * a2 + d1 * c2,
                c1 * b2 + d1 * d2,
                c1 * tx2 + d1 * ty2 + ty1,
            ],
        }
    }

    /// Transform a point through this matrix
    pub fn transform_point(&self, pt: Point) -> Point {
        let [a, b, tx, c, d, ty] = self.coeffs;
        Point::new(a * pt.x + b * pt.y + tx, c * pt.x + d * pt.y + ty)
    }
}
