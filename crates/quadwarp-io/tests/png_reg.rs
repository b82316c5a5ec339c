//! PNG I/O regression test
//!
//! Writes synthetic images to `tests/regout`, reads them back through the
//! path-based API and checks that every pixel, alpha included, survives.

use quadwarp_core::color;
use quadwarp_io::{read_image, read_image_mem, write_image, write_image_mem};
use quadwarp_test::{RegParams, gradient_image, quadrant_image, regout_dir};

#[test]
fn png_reg_file_roundtrip() {
    let mut rp = RegParams::new("png_file");

    for (w, h) in [(64, 48), (1, 1), (33, 7)] {
        let src = gradient_image(w, h).expect("gradient");
        let path = format!("{}/png_file_{}x{}.png", regout_dir(), w, h);
        write_image(&src, &path).expect("write png");
        let back = read_image(&path).expect("read png");
        rp.compare_values(w as f64, back.width() as f64, 0.0);
        rp.compare_values(h as f64, back.height() as f64, 0.0);
        rp.compare_raster(&src, &back);
    }

    assert!(rp.cleanup(), "png_file regression test failed");
}

#[test]
fn png_reg_alpha_preserved() {
    let mut rp = RegParams::new("png_alpha");

    let src = quadrant_image(20, 10).expect("quadrant");
    let mut m = src.to_mut();
    for x in 0..20 {
        m.set_pixel(x, 0, color::compose_rgba(x as u8 * 10, 0, 0, x as u8 * 12))
            .expect("set_pixel");
    }
    let src = quadwarp_core::Raster::from(m);

    let bytes = write_image_mem(&src).expect("encode");
    let back = read_image_mem(&bytes).expect("decode");
    rp.compare_raster(&src, &back);
    rp.write_raster_and_check(&back).expect("write_raster_and_check");

    assert!(rp.cleanup(), "png_alpha regression test failed");
}

#[test]
fn png_reg_unknown_extension_rejected() {
    let src = quadrant_image(4, 4).expect("quadrant");
    let path = format!("{}/png_bad.xyz", regout_dir());
    assert!(write_image(&src, &path).is_err());
}
