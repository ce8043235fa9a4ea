//! Per-file re-encode: decode, write a new encoding of the same format to a
//! temporary sibling, then atomically replace the original.

use crate::constants::{
    JPEG_QUALITY, LIBDEFLATER_MAX_LEVEL, MAX_OXIPNG_PRESET, TEMP_PREFIX, TEMP_SUFFIX,
    ZOPFLI_ITERATIONS,
};
use crate::error::{ReexportError, Result};
use crate::formats::ImageKind;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::ImageReader;
use oxipng::{Deflaters, Options};
use std::io::{Cursor, Write};
use std::num::NonZeroU8;
use std::path::Path;

/// Re-encode `path` in place, preserving its format, and return the new
/// file size in bytes.
///
/// The temporary file lives in the same directory as the original, so the
/// final replace is a single rename. On any failure the temporary file is
/// removed on drop and the original is left untouched.
pub fn reencode_in_place(path: &Path, kind: ImageKind, compress_level: u8) -> Result<u64> {
    let img = ImageReader::open(path)?.decode()?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .suffix(TEMP_SUFFIX)
        .tempfile_in(dir)?;

    match kind {
        ImageKind::Png => {
            // The intermediate encode is deliberately fast; oxipng works from
            // the raw rows and picks the real filters and deflate stream.
            let mut encoded = Vec::new();
            let encoder = PngEncoder::new_with_quality(
                Cursor::new(&mut encoded),
                CompressionType::Fast,
                FilterType::Adaptive,
            );
            img.write_with_encoder(encoder)?;

            let optimized = oxipng::optimize_from_memory(&encoded, &oxipng_options(compress_level))
                .map_err(|e| ReexportError::PngOptimization(e.to_string()))?;
            tmp.write_all(&optimized)?;
        }
        ImageKind::Jpeg => {
            // Maximum quality, no chroma subsampling. Not bit-exact across a
            // decode/re-encode cycle; visually indistinguishable is the goal.
            let encoder = JpegEncoder::new_with_quality(&mut tmp, JPEG_QUALITY);
            img.write_with_encoder(encoder)?;
        }
    }

    let replaced = tmp
        .persist(path)
        .map_err(|e| ReexportError::Replace(e.to_string()))?;
    Ok(replaced.metadata()?.len())
}

/// Map the 0-9 compression level onto oxipng effort: the preset scale up to
/// its maximum, then heavier deflate for 7-8 and Zopfli at 9.
fn oxipng_options(compress_level: u8) -> Options {
    let mut options = Options::from_preset(compress_level.min(MAX_OXIPNG_PRESET));
    options.force = true;
    if compress_level >= 9 {
        options.deflate = Deflaters::Zopfli {
            iterations: NonZeroU8::new(ZOPFLI_ITERATIONS).unwrap(),
        };
    } else if compress_level >= 7 {
        options.deflate = Deflaters::Libdeflater {
            compression: LIBDEFLATER_MAX_LEVEL,
        };
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use std::fs;
    use tempfile::TempDir;

    fn gradient(width: u32, height: u32) -> ImageBuffer<Rgb<u8>, Vec<u8>> {
        ImageBuffer::from_fn(width, height, |x, y| {
            Rgb([(x * 4) as u8, (y * 4) as u8, (x * 2 + y * 2) as u8])
        })
    }

    #[test]
    fn test_oxipng_options_top_level_uses_zopfli() {
        let options = oxipng_options(9);
        assert!(matches!(options.deflate, Deflaters::Zopfli { .. }));
    }

    #[test]
    fn test_oxipng_options_high_level_uses_max_libdeflater() {
        let options = oxipng_options(8);
        assert!(matches!(
            options.deflate,
            Deflaters::Libdeflater {
                compression: LIBDEFLATER_MAX_LEVEL
            }
        ));
    }

    #[test]
    fn test_oxipng_options_low_levels_keep_preset_deflate() {
        // Levels at or below the preset maximum never engage Zopfli.
        for level in 0..=6 {
            let options = oxipng_options(level);
            assert!(matches!(options.deflate, Deflaters::Libdeflater { .. }));
        }
    }

    #[test]
    fn test_reencode_png_keeps_pixels() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("img.png");
        let original = gradient(48, 48);
        original.save(&path).unwrap();

        let new_size = reencode_in_place(&path, ImageKind::Png, 2).unwrap();

        assert!(new_size > 0);
        assert_eq!(new_size, fs::metadata(&path).unwrap().len());
        let reloaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(reloaded.as_raw(), original.as_raw());
    }

    #[test]
    fn test_reencode_jpeg_keeps_dimensions() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("img.jpg");
        gradient(48, 32).save(&path).unwrap();

        let new_size = reencode_in_place(&path, ImageKind::Jpeg, 6).unwrap();

        assert!(new_size > 0);
        let reloaded = image::open(&path).unwrap();
        assert_eq!(reloaded.width(), 48);
        assert_eq!(reloaded.height(), 32);
    }

    #[test]
    fn test_reencode_failure_leaves_original_and_no_temp() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.png");
        fs::write(&path, b"this is not a png").unwrap();

        let result = reencode_in_place(&path, ImageKind::Png, 6);

        assert!(result.is_err());
        assert_eq!(fs::read(&path).unwrap(), b"this is not a png");
        // The directory must hold nothing but the original.
        let entries = fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }
}
