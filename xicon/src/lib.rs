use image::imageops::{self, FilterType};
use image::{ImageFormat, ImageReader, RgbaImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub mod android;
pub mod mask;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The icon is missing, unreadable or not an image.
    #[error("failed to decode icon {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// An output directory or file could not be created or written.
    #[error("failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Decodes the image at `path` into 8-bit RGBA. Images without an alpha
/// channel come out fully opaque.
pub fn open<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();
    let decode = || -> image::ImageResult<RgbaImage> {
        let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        Ok(img.to_rgba8())
    };
    decode().map_err(|source| Error::Decode {
        path: path.to_owned(),
        source,
    })
}

/// Turns a decoded logo into a `size` x `size` circular icon.
///
/// The logo is resized first, so the background key runs on resampled
/// pixels. The circle mask then becomes the alpha channel: zero outside the
/// inscribed circle and opaque inside it, keyed pixels included.
pub fn render(img: &RgbaImage, size: u32) -> RgbaImage {
    let mut resized = imageops::resize(img, size, size, FilterType::Lanczos3);
    mask::strip_background(&mut resized);
    let circle = mask::circle_mask(size);
    mask::compose(&resized, &circle)
}

/// Encodes `img` as an RGBA png, replacing any file at `path`.
pub fn write_png<P: AsRef<Path>>(img: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source: std::io::Error| Error::Io {
        path: path.to_owned(),
        source,
    };
    let mut w = BufWriter::new(File::create(path).map_err(io_err)?);
    img.write_to(&mut w, ImageFormat::Png).map_err(|err| {
        io_err(match err {
            image::ImageError::IoError(err) => err,
            err => std::io::Error::other(err),
        })
    })?;
    w.flush().map_err(io_err)?;
    Ok(())
}

/// Reads the logo at `input` and writes a circular `size` x `size` png
/// launcher icon to `output`.
///
/// Nothing is written if `input` can't be decoded.
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q, size: u32) -> Result<()> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let _span = tracing::debug_span!("convert", size).entered();
    let img = open(input)?;
    tracing::debug!(
        "decoded {} ({}x{})",
        input.display(),
        img.width(),
        img.height()
    );
    let icon = render(&img, size);
    write_png(&icon, output)?;
    tracing::debug!("wrote {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn render_is_square() {
        let img = RgbaImage::from_pixel(64, 32, Rgba([10, 20, 30, 255]));
        let icon = render(&img, 72);
        assert_eq!(icon.dimensions(), (72, 72));
    }

    #[test]
    fn render_keeps_opaque_center() {
        let img = RgbaImage::from_pixel(96, 96, Rgba([0, 0, 255, 255]));
        let icon = render(&img, 48);
        assert_eq!(icon.get_pixel(24, 24)[3], 255);
        assert_eq!(icon.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn open_missing_is_decode_error() {
        let err = open("/nonexistent/logo.png").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }
}
