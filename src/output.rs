//! Writing a [`Canvas`] to disk.
//!
//! The format is picked from the file extension: `.ppm` produces a binary
//! (P6) pixmap, `.png` a PNG. Alpha is always dropped.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageEncoder};

use crate::error::OutputError;
use crate::raster::Canvas;

/// Supported output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Ppm,
    Png,
}

impl ImageFormat {
    /// Guess the format from a path's extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "ppm" => Some(ImageFormat::Ppm),
            "png" => Some(ImageFormat::Png),
            _ => None,
        }
    }
}

/// Tightly packed R, G, B bytes in row-major order.
pub fn rgb_bytes(canvas: &Canvas) -> Vec<u8> {
    canvas
        .pixels()
        .iter()
        .flat_map(|c| c.to_rgb_bytes())
        .collect()
}

/// Encode `canvas` as a binary PPM into `writer`.
pub fn encode_ppm<W: Write>(canvas: &Canvas, writer: W) -> Result<(), OutputError> {
    let encoder = PnmEncoder::new(writer).with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary));
    encoder.write_image(
        &rgb_bytes(canvas),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(())
}

/// Encode `canvas` as a PNG into `writer`.
pub fn encode_png<W: Write>(canvas: &Canvas, writer: W) -> Result<(), OutputError> {
    PngEncoder::new(writer).write_image(
        &rgb_bytes(canvas),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(())
}

/// Write `canvas` to `path`, choosing the encoding from the extension.
pub fn save<P: AsRef<Path>>(canvas: &Canvas, path: P) -> Result<(), OutputError> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)
        .ok_or_else(|| OutputError::UnsupportedFormat(path.to_path_buf()))?;

    let mut writer = BufWriter::new(File::create(path)?);
    match format {
        ImageFormat::Ppm => encode_ppm(canvas, &mut writer)?,
        ImageFormat::Png => encode_png(canvas, &mut writer)?,
    }
    writer.flush()?;

    log::info!(
        "wrote {}x{} {:?} image to {}",
        canvas.width(),
        canvas.height(),
        format,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color32;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ImageFormat::from_path(Path::new("out.ppm")), Some(ImageFormat::Ppm));
        assert_eq!(ImageFormat::from_path(Path::new("dir/OUT.PNG")), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_path(Path::new("out.bmp")), None);
        assert_eq!(ImageFormat::from_path(Path::new("out")), None);
    }

    #[test]
    fn test_ppm_layout() {
        let mut canvas = Canvas::new(3, 2);
        canvas.set(0, 0, Color32::RED);
        canvas.set(2, 1, Color32::BLUE);

        let mut buf = Vec::new();
        encode_ppm(&canvas, &mut buf).unwrap();

        assert!(buf.starts_with(b"P6"));
        // header is followed by exactly width * height * 3 bytes
        let body = &buf[buf.len() - 18..];
        assert_eq!(&body[0..3], &[255, 0, 0]);
        assert_eq!(&body[3..6], &[0x18, 0x18, 0x18]);
        assert_eq!(&body[15..18], &[0, 0, 255]);

        let header = std::str::from_utf8(&buf[..buf.len() - 18]).unwrap();
        let fields: Vec<&str> = header.split_whitespace().collect();
        assert_eq!(fields, vec!["P6", "3", "2", "255"]);
    }

    #[test]
    fn test_save_rejects_unknown_extension() {
        let canvas = Canvas::new(1, 1);
        let path = PathBuf::from("voronoi-test-output.gif");
        match save(&canvas, &path) {
            Err(OutputError::UnsupportedFormat(p)) => assert_eq!(p, path),
            other => panic!("expected UnsupportedFormat, got {:?}", other),
        }
        assert!(!path.exists());
    }
}
