//! Polygon paths
//!
//! A [`Path`] is a list of polygonal subpaths built with `move_to` /
//! `line_to` / `close`. For filling, every subpath is treated as closed.
//!
//! Rasterization samples pixel centers and uses the nonzero winding rule,
//! so a pixel is inside when the center `(x + 0.5, y + 0.5)` is enclosed.

use crate::affine::{AffineMatrix, Point};

/// A run of covered pixels on one row: `x0..x1` (exclusive end).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub y: u32,
    pub x0: u32,
    pub x1: u32,
}

/// Polygon path
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    subpaths: Vec<Vec<Point>>,
}

impl Path {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a closed polygon from its vertices.
    pub fn polygon(points: &[Point]) -> Self {
        let mut path = Self::new();
        if let Some((first, rest)) = points.split_first() {
            path.move_to(first.x, first.y);
            for p in rest {
                path.line_to(p.x, p.y);
            }
            path.close();
        }
        path
    }

    /// Start a new subpath at `(x, y)`.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.subpaths.push(vec![Point::new(x, y)]);
    }

    /// Extend the current subpath; starts one if there is none.
    pub fn line_to(&mut self, x: f32, y: f32) {
        match self.subpaths.last_mut() {
            Some(sub) => sub.push(Point::new(x, y)),
            None => self.move_to(x, y),
        }
    }

    /// Close the current subpath and start the next one at its first point.
    pub fn close(&mut self) {
        if let Some(&first) = self.subpaths.last().and_then(|sub| sub.first()) {
            self.subpaths.push(vec![first]);
        }
    }

    /// True if no subpath has at least three vertices.
    pub fn is_empty(&self) -> bool {
        self.subpaths.iter().all(|sub| sub.len() < 3)
    }

    /// Get the subpaths.
    pub fn subpaths(&self) -> &[Vec<Point>] {
        &self.subpaths
    }

    /// Map every vertex through `m`.
    pub fn transformed(&self, m: &AffineMatrix) -> Path {
        Path {
            subpaths: self
                .subpaths
                .iter()
                .map(|sub| sub.iter().map(|&p| m.transform_point(p)).collect())
                .collect(),
        }
    }

    /// Rasterize into covered spans, clipped to `width` x `height`.
    pub fn spans(&self, width: u32, height: u32) -> Vec<Span> {
        // Directed edges (x0, y0, x1, y1, winding), horizontal edges dropped
        let mut edges: Vec<(f32, f32, f32, f32, i32)> = Vec::new();
        for sub in self.subpaths.iter().filter(|sub| sub.len() >= 2) {
            let n = sub.len();
            for i in 0..n {
                let p0 = sub[i];
                let p1 = sub[(i + 1) % n];
                if p0.y == p1.y {
                    continue;
                }
                let dir = if p1.y > p0.y { 1 } else { -1 };
                edges.push((p0.x, p0.y, p1.x, p1.y, dir));
            }
        }

        let mut spans = Vec::new();
        if edges.is_empty() {
            return spans;
        }

        let y_min = edges.iter().map(|e| e.1.min(e.3)).fold(f32::INFINITY, f32::min);
        let y_max = edges.iter().map(|e| e.1.max(e.3)).fold(f32::NEG_INFINITY, f32::max);
        let row_start = (y_min - 0.5).ceil().max(0.0) as u32;
        let row_end = ((y_max - 0.5).ceil().max(0.0) as u32).min(height);

        let mut crossings: Vec<(f32, i32)> = Vec::new();
        for row in row_start..row_end {
            let fy = row as f32 + 0.5;
            crossings.clear();
            for &(x0, y0, x1, y1, dir) in &edges {
                let (y_lo, y_hi) = if y0 < y1 { (y0, y1) } else { (y1, y0) };
                if fy >= y_lo && fy < y_hi {
                    let t = (fy - y0) / (y1 - y0);
                    crossings.push((x0 + t * (x1 - x0), dir));
                }
            }
            crossings.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

            let mut winding = 0;
            for pair in crossings.windows(2) {
                winding += pair[0].1;
                if winding == 0 {
                    continue;
                }
                // Pixels whose centers fall in [xa, xb)
                let x0 = (pair[0].0 - 0.5).ceil().max(0.0);
                let x1 = (pair[1].0 - 0.5).ceil().min(width as f32);
                if x1 > x0 {
                    spans.push(Span {
                        y: row,
                        x0: x0 as u32,
                        x1: x1 as u32,
                    });
                }
            }
        }
        spans
    }
}
