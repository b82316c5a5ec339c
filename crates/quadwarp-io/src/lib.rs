//! quadwarp-io - Image I/O for quadwarp
//!
//! Loads source images into [`Raster`]s and saves warped results.
//!
//! PNG is the supported file format. Other common signatures are
//! detected so that they fail with a clear [`IoError::UnsupportedFormat`].

mod error;
pub mod format;
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
pub use self::png::{read_png, write_png};

use quadwarp_core::Raster;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor};
use std::path::Path;

/// Read an image from a file path
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    match detect_format(path)? {
        ImageFormat::Png => read_png(BufReader::new(File::open(path)?)),
        other => Err(unsupported(other)),
    }
}

/// Read an image from memory
pub fn read_image_mem(data: &[u8]) -> IoResult<Raster> {
    match detect_format_from_bytes(data)? {
        ImageFormat::Png => read_png(Cursor::new(data)),
        other => Err(unsupported(other)),
    }
}

/// Write an image to a file path
///
/// The format follows the extension; a path without one is written as PNG.
pub fn write_image<P: AsRef<Path>>(raster: &Raster, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let format = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => ImageFormat::from_extension(ext)
            .ok_or_else(|| IoError::UnsupportedFormat(format!("extension '{}'", ext)))?,
        None => ImageFormat::Png,
    };
    match format {
        ImageFormat::Png => write_png(raster, BufWriter::new(File::create(path)?)),
        other => Err(unsupported(other)),
    }
}

/// Encode an image as PNG bytes
pub fn write_image_mem(raster: &Raster) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_png(raster, &mut buffer)?;
    Ok(buffer)
}

fn unsupported(format: ImageFormat) -> IoError {
    IoError::UnsupportedFormat(format!("{:?} images are not supported", format))
}
