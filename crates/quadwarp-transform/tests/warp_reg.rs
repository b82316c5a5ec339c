//! Quadrilateral warp regression test
//!
//! Exercises the full draw pipeline on synthetic images:
//!   1. Identity quads reproduce the source exactly (both slicing axes)
//!   2. An inset square gives a uniformly scaled copy
//!   3. Degenerate quads leave the destination byte-identical
//!   4. Valid quads always change the destination
//!   5. Axis choice does not depend on the step
//!   6. Empty images are rejected
//!   7. Rotated and skewed quads give monotonic strip angles, and
//!      vertical rows resolve to +-pi/2
//!
//! Warped results are also written to `tests/regout` for inspection.

use approx::assert_relative_eq;
use quadwarp_core::{Canvas, ImageRef, Raster, Surface, color};
use quadwarp_test::{RegParams, gradient_image, quadrant_image};
use quadwarp_transform::{
    Quadrilateral, Side, WarpAxis, WarpError, WarpOptions, WarpSession, analyze, strip_placements,
};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};
use std::num::NonZeroU32;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn step(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).expect("nonzero step")
}

/// Warp `src` onto `quad` on a fresh transparent canvas.
fn warp(src: &Raster, dest_w: u32, dest_h: u32, quad: &Quadrilateral) -> Raster {
    let mut canvas = Canvas::new(dest_w, dest_h).expect("canvas");
    let mut session = WarpSession::new(&mut canvas, src.view()).expect("session");
    session.draw(quad);
    canvas.snapshot()
}

#[test]
fn warp_reg_identity() {
    init_logger();
    let mut rp = RegParams::new("warp_identity");

    // 64x48: top side wins, rows
    let src = quadrant_image(64, 48).expect("quadrant");
    let quad = Quadrilateral::rect(64.0, 48.0);
    rp.compare_values(0.0, analyze(&quad, 64, 48).base_side.index() as f64, 0.0);
    let out = warp(&src, 64, 48, &quad);
    rp.compare_raster(&src, &out);

    // 48x64: right side wins, columns
    let src = gradient_image(48, 64).expect("gradient");
    let quad = Quadrilateral::rect(48.0, 64.0);
    let analysis = analyze(&quad, 48, 64);
    rp.compare_values(1.0, analysis.base_side.index() as f64, 0.0);
    rp.compare_values(1.0, (analysis.axis == WarpAxis::Vertical) as u8 as f64, 0.0);
    let out = warp(&src, 48, 64, &quad);
    rp.compare_raster(&src, &out);

    // Every step size gives the same exact copy
    for s in [1, 3, 7, 64] {
        let mut canvas = Canvas::new(48, 64).expect("canvas");
        let mut session = WarpSession::new(&mut canvas, src.view()).expect("session");
        session.draw_with_step(&quad, step(s));
        rp.compare_raster(&src, &canvas.snapshot());
    }

    assert!(rp.cleanup(), "warp_identity regression test failed");
}

#[test]
fn warp_reg_inset_square() {
    init_logger();
    let mut rp = RegParams::new("warp_inset");

    let src = gradient_image(100, 100).expect("gradient");
    let quad = Quadrilateral::from_coords(10.0, 10.0, 90.0, 10.0, 90.0, 90.0, 10.0, 90.0);
    let analysis = analyze(&quad, 100, 100);
    rp.compare_values(0.0, analysis.base_side.index() as f64, 0.0);
    let out = warp(&src, 100, 100, &quad);

    // Uniform 0.8 scale anchored at (10, 10), nearest neighbor
    let inv = |p: u32| ((p as f64 + 0.5 - 10.0) / 0.8).floor() as u32;
    let expected: Vec<u32> = (0..100)
        .flat_map(|y| {
            let src = &src;
            (0..100).map(move |x| {
                if (10..90).contains(&x) && (10..90).contains(&y) {
                    src.get_pixel_unchecked(inv(x), inv(y))
                } else {
                    color::TRANSPARENT
                }
            })
        })
        .collect();
    let expected = Raster::from_pixels(100, 100, expected).expect("expected raster");
    rp.compare_raster(&expected, &out);
    rp.write_raster_and_check(&out).expect("write inset");

    assert!(rp.cleanup(), "warp_inset regression test failed");
}

#[test]
fn warp_reg_degenerate_is_noop() {
    init_logger();
    let mut rp = RegParams::new("warp_degenerate");

    let src = quadrant_image(32, 32).expect("quadrant");
    let mut canvas = Canvas::new(40, 40).expect("canvas");
    canvas.raster_mut().fill(color::compose_rgba(12, 34, 56, 78));
    let before = canvas.snapshot();

    let collapsed = [
        // TL == TR and BL == BR
        Quadrilateral::from_coords(5.0, 5.0, 5.0, 5.0, 30.0, 35.0, 30.0, 35.0),
        // All four corners equal
        Quadrilateral::from_coords(7.0, 7.0, 7.0, 7.0, 7.0, 7.0, 7.0, 7.0),
        // Collapsed onto a segment
        Quadrilateral::from_coords(0.0, 0.0, 20.0, 20.0, 20.0, 20.0, 0.0, 0.0),
    ];
    {
        let mut session = WarpSession::new(&mut canvas, src.view()).expect("session");
        for quad in &collapsed {
            rp.compare_values(1.0, analyze(quad, 32, 32).is_degenerate() as u8 as f64, 0.0);
            session.draw(quad);
            session.draw_with_step(quad, step(1));
        }
        rp.compare_values(
            0.0,
            session.scratch().raster().data().iter().filter(|&&p| p != 0).count() as f64,
            0.0,
        );
    }
    rp.compare_raster(&before, &canvas.snapshot());

    assert!(rp.cleanup(), "warp_degenerate regression test failed");
}

#[test]
fn warp_reg_valid_quads_mutate() {
    init_logger();
    let mut rp = RegParams::new("warp_mutate");

    let src = quadrant_image(50, 40).expect("quadrant");
    let quads = [
        Quadrilateral::from_coords(20.0, 10.0, 80.0, 30.0, 90.0, 90.0, 10.0, 70.0),
        Quadrilateral::from_coords(0.0, 0.0, 0.0, 0.0, 60.0, 60.0, 0.0, 60.0),
        Quadrilateral::from_coords(30.0, 5.0, 70.0, 5.0, 95.0, 95.0, 5.0, 95.0),
    ];
    for quad in &quads {
        let mut canvas = Canvas::new(100, 100).expect("canvas");
        let before = canvas.snapshot();
        let mut session = WarpSession::new(&mut canvas, src.view()).expect("session");
        session.draw(quad);
        let after = session.into_destination().snapshot();
        rp.compare_values(0.0, before.equals(&after) as u8 as f64, 0.0);
        rp.write_raster_and_check(&after).expect("write warped");
    }

    assert!(rp.cleanup(), "warp_mutate regression test failed");
}

#[test]
fn warp_reg_redraw_replaces_previous() {
    init_logger();
    let mut rp = RegParams::new("warp_redraw");

    let src = quadrant_image(20, 20).expect("quadrant");
    let mut canvas = Canvas::new(60, 30).expect("canvas");
    {
        let mut session = WarpSession::new(&mut canvas, src.view()).expect("session");
        session.draw(&Quadrilateral::rect(20.0, 20.0));
        rp.compare_values(
            QUADRANT_OPAQUE as f64,
            session.destination().raster().get_pixel(5, 5).map_or(0, color::alpha) as f64,
            0.0,
        );
        session.draw(&Quadrilateral::rect(20.0, 20.0).translated(40.0, 5.0));
    }
    // The first placement lies outside the second quad and is cleared
    rp.compare_values(0.0, canvas.raster().get_pixel(5, 5).unwrap_or(1) as f64, 0.0);
    rp.compare_values(
        QUADRANT_OPAQUE as f64,
        canvas.raster().get_pixel(45, 10).map_or(0, color::alpha) as f64,
        0.0,
    );
    // The drawing state is restored after every draw
    rp.compare_values(1.0, canvas.transform().is_identity() as u8 as f64, 0.0);
    rp.compare_values(0.0, canvas.saved_states() as f64, 0.0);

    assert!(rp.cleanup(), "warp_redraw regression test failed");
}

const QUADRANT_OPAQUE: u8 = 255;

#[test]
fn warp_reg_axis_independent_of_step() {
    let mut rp = RegParams::new("warp_axis_step");

    let quads = [
        Quadrilateral::from_coords(0.0, 0.0, 10.0, 0.0, 10.0, 200.0, 0.0, 50.0),
        Quadrilateral::from_coords(20.0, 10.0, 80.0, 30.0, 90.0, 90.0, 10.0, 70.0),
        Quadrilateral::from_coords(50.0, 0.0, 100.0, 50.0, 50.0, 100.0, 0.0, 50.0),
    ];
    for quad in &quads {
        let analysis = analyze(quad, 100, 80);
        let coarse: Vec<_> = strip_placements(analysis.axis, quad, 100, 80, step(7)).collect();
        let fine: Vec<_> = strip_placements(analysis.axis, quad, 100, 80, step(1)).collect();
        // Coarse placements are exactly every 7th fine placement
        rp.compare_values(fine.iter().step_by(7).count() as f64, coarse.len() as f64, 0.0);
        let same = fine.iter().step_by(7).zip(&coarse).all(|(a, b)| a == b);
        rp.compare_values(1.0, same as u8 as f64, 0.0);
    }

    assert!(rp.cleanup(), "warp_axis_step regression test failed");
}

#[test]
fn warp_reg_rejects_empty_image() {
    let mut canvas = Canvas::new(10, 10).expect("canvas");
    let empty: [u32; 0] = [];
    for (w, h) in [(0, 0), (0, 10), (10, 0)] {
        let image = ImageRef::new(w, h, &empty).expect("empty view");
        assert!(matches!(
            WarpSession::new(&mut canvas, image),
            Err(WarpError::InvalidArgument(_))
        ));
        assert!(matches!(
            WarpSession::with_options(&mut canvas, image, WarpOptions::default()),
            Err(WarpError::InvalidArgument(_))
        ));
    }
}

#[test]
fn warp_reg_rotated_and_skewed_angles() {
    init_logger();
    let mut rp = RegParams::new("warp_angles");

    // 45 degree diamond: every row has the same angle
    let diamond = Quadrilateral::from_coords(50.0, 0.0, 100.0, 50.0, 50.0, 100.0, 0.0, 50.0);
    let analysis = analyze(&diamond, 100, 100);
    rp.compare_values(0.0, analysis.base_side.index() as f64, 0.0);
    for p in strip_placements(analysis.axis, &diamond, 100, 100, step(2)) {
        rp.compare_values(FRAC_PI_4 as f64, p.angle as f64, 1e-5);
    }
    let out = warp(&quadrant_image(100, 100).expect("quadrant"), 100, 100, &diamond);
    rp.compare_values(0.0, out.get_pixel(2, 2).unwrap_or(1) as f64, 0.0);
    rp.compare_values(255.0, out.get_pixel(50, 50).map_or(0, color::alpha) as f64, 0.0);
    rp.write_raster_and_check(&out).expect("write diamond");

    // Skewed quad: angles increase monotonically along both axes
    let skewed = Quadrilateral::from_coords(0.0, 0.0, 100.0, 0.0, 60.0, 100.0, 40.0, 90.0);
    for axis in [WarpAxis::Horizontal, WarpAxis::Vertical] {
        let angles: Vec<f32> = strip_placements(axis, &skewed, 100, 100, step(2))
            .map(|p| p.angle)
            .collect();
        let monotonic = angles.windows(2).all(|w| w[1] >= w[0]);
        rp.compare_values(1.0, monotonic as u8 as f64, 0.0);
        rp.compare_values(1.0, (angles.last() > angles.first()) as u8 as f64, 0.0);
    }

    // Quarter turns: every row's end is straight below or above its start
    let down = Quadrilateral::from_coords(10.0, 10.0, 10.0, 60.0, 60.0, 60.0, 60.0, 10.0);
    let up = Quadrilateral::from_coords(10.0, 60.0, 10.0, 10.0, 60.0, 10.0, 60.0, 60.0);
    for (quad, expected) in [(down, FRAC_PI_2), (up, -FRAC_PI_2)] {
        for p in strip_placements(WarpAxis::Horizontal, &quad, 50, 50, step(5)) {
            assert_relative_eq!(p.angle, expected);
            assert_relative_eq!(p.scale, 1.0);
        }
    }
    let out = warp(&gradient_image(50, 50).expect("gradient"), 70, 70, &down);
    rp.compare_values(255.0, out.get_pixel(35, 35).map_or(0, color::alpha) as f64, 0.0);
    rp.compare_values(0.0, out.get_pixel(65, 65).unwrap_or(1) as f64, 0.0);

    let skewed_side = analyze(&skewed, 100, 100).base_side;
    rp.compare_values(Side::Right.index() as f64, skewed_side.index() as f64, 0.0);

    assert!(rp.cleanup(), "warp_angles regression test failed");
}
