//! PNG image format support
//!
//! Decoding normalizes every PNG flavor to 8-bit samples (palette and
//! low-depth gray are expanded, 16-bit samples are stripped to their high
//! byte) and packs them into RGBA rasters. Encoding always writes 8-bit
//! RGBA so the alpha channel survives a round trip.

use crate::{IoError, IoResult};
use quadwarp_core::{Raster, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (color_type, bit_depth) = reader.output_color_type();
    let samples = match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::Eight) => 1,
        (ColorType::GrayscaleAlpha, BitDepth::Eight) => 2,
        (ColorType::Rgb, BitDepth::Eight) => 3,
        (ColorType::Rgba, BitDepth::Eight) => 4,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG format: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let bytes_per_row = output_info.line_size;
    let row_bytes = width as usize * samples;
    if bytes_per_row < row_bytes || buf.len() < bytes_per_row * height as usize {
        return Err(IoError::InvalidData(format!(
            "PNG frame too small for {}x{}",
            width, height
        )));
    }

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for row in buf.chunks_exact(bytes_per_row).take(height as usize) {
        pixels.extend(row[..row_bytes].chunks_exact(samples).map(|s| match *s {
            [g] => color::compose_rgb(g, g, g),
            [g, a] => color::compose_rgba(g, g, g, a),
            [r, g, b] => color::compose_rgb(r, g, b),
            [r, g, b, a] => color::compose_rgba(r, g, b, a),
            _ => color::TRANSPARENT,
        }));
    }

    log::debug!(
        "decoded PNG {}x{} ({:?}, {} samples)",
        width,
        height,
        color_type,
        samples
    );
    Ok(Raster::from_pixels(width, height, pixels)?)
}

/// Write a PNG image as 8-bit RGBA
pub fn write_png<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    let width = raster.width();
    let height = raster.height();

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let data: Vec<u8> = raster
        .data()
        .iter()
        .flat_map(|&pixel| {
            let (r, g, b, a) = color::extract_rgba(pixel);
            [r, g, b, a]
        })
        .collect();

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode_raw(width: u32, height: u32, ct: ColorType, depth: BitDepth, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = Encoder::new(&mut out, width, height);
            encoder.set_color(ct);
            encoder.set_depth(depth);
            if ct == ColorType::Indexed {
                encoder.set_palette(vec![255, 0, 0, 0, 0, 255]);
            }
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        out
    }

    #[test]
    fn test_png_rgba_roundtrip() {
        let raster = Raster::from_pixels(
            3,
            2,
            vec![
                color::compose_rgba(255, 0, 0, 255),
                color::compose_rgba(0, 255, 0, 128),
                color::compose_rgba(0, 0, 255, 0),
                color::compose_rgba(10, 20, 30, 40),
                color::compose_rgba(200, 100, 50, 255),
                color::compose_rgba(1, 2, 3, 4),
            ],
        )
        .unwrap();

        let mut buffer = Vec::new();
        write_png(&raster, &mut buffer).unwrap();
        let decoded = read_png(Cursor::new(buffer)).unwrap();
        assert!(decoded.equals(&raster));
    }

    #[test]
    fn test_png_gray_is_opaque() {
        let png = encode_raw(2, 1, ColorType::Grayscale, BitDepth::Eight, &[0, 200]);
        let decoded = read_png(Cursor::new(png)).unwrap();
        assert_eq!(decoded.get_rgba(1, 0), Some((200, 200, 200, 255)));
    }

    #[test]
    fn test_png_palette_expanded() {
        let png = encode_raw(2, 1, ColorType::Indexed, BitDepth::Eight, &[1, 0]);
        let decoded = read_png(Cursor::new(png)).unwrap();
        assert_eq!(decoded.get_rgba(0, 0), Some((0, 0, 255, 255)));
        assert_eq!(decoded.get_rgba(1, 0), Some((255, 0, 0, 255)));
    }

    #[test]
    fn test_png_16bit_stripped() {
        let png = encode_raw(1, 1, ColorType::Rgb, BitDepth::Sixteen, &[0x12, 0x34, 0xab, 0xcd, 0xff, 0x00]);
        let decoded = read_png(Cursor::new(png)).unwrap();
        assert_eq!(decoded.get_rgba(0, 0), Some((0x12, 0xab, 0xff, 255)));
    }

    #[test]
    fn test_png_garbage_is_decode_error() {
        let result = read_png(Cursor::new(b"not a png at all".to_vec()));
        assert!(matches!(result, Err(IoError::DecodeError(_))));
    }
}
