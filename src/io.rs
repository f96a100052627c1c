//! Decoding input files into ARGB pixel grids and encoding carved grids back to disk.
use crate::error::{CarveError, Result};
use crate::fast_image::FastImage;
use image::{DynamicImage, ImageError, ImageFormat};
use log::info;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Opens any format the `image` crate understands and packs it into an ARGB grid.
pub fn open_argb(path: &Path) -> Result<FastImage<u32>> {
    let image = image::open(path).map_err(|source| CarveError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let grid = FastImage::from_image(&image.to_rgba8());
    let (width, height) = grid.dimensions();
    info!("loaded image {} ({}x{})", path.display(), width, height);
    Ok(grid)
}

/// Encoder format for `path`, chosen by its extension.
///
/// Fails for extensions the `image` crate cannot write, so callers can reject an output
/// path before doing any work.
pub fn output_format(path: &Path) -> Result<ImageFormat> {
    match ImageFormat::from_path(path) {
        Ok(format) if format.writing_enabled() => Ok(format),
        _ => Err(CarveError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Reshapes the RGBA pixels into a color type the encoder for `format` accepts.
fn encodable(image: DynamicImage, format: ImageFormat) -> DynamicImage {
    match format {
        ImageFormat::Jpeg | ImageFormat::Pnm => DynamicImage::ImageRgb8(image.to_rgb8()),
        ImageFormat::Farbfeld => DynamicImage::ImageRgba16(image.to_rgba16()),
        ImageFormat::Hdr => DynamicImage::ImageRgb32F(image.to_rgb32f()),
        ImageFormat::OpenExr => DynamicImage::ImageRgba32F(image.to_rgba32f()),
        _ => image,
    }
}

/// Writes the logical grid to `path`; the format follows the file extension.
///
/// The image is encoded into a temporary file next to `path` and only moved over it once
/// encoding succeeded, so a failure never leaves a partial file behind nor touches an
/// existing one.
pub fn save_argb(image: FastImage<u32>, path: &Path) -> Result<()> {
    let format = output_format(path)?;
    let encode_err = |source: ImageError| CarveError::Encode {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir).map_err(|e| encode_err(ImageError::IoError(e)))?;

    {
        let mut writer = BufWriter::new(staged.as_file_mut());
        encodable(DynamicImage::ImageRgba8(image.into_image()), format)
            .write_to(&mut writer, format)
            .map_err(encode_err)?;
        writer
            .flush()
            .map_err(|e| encode_err(ImageError::IoError(e)))?;
    }

    staged
        .persist(path)
        .map_err(|e| encode_err(ImageError::IoError(e.error)))?;

    info!("generated {}", path.display());
    Ok(())
}
