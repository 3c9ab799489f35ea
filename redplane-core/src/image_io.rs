//! Loading and saving of pixel buffers as lossless PNG files.
//!
//! The codec itself never touches the filesystem; everything that maps a
//! path to a [`PixelBuffer`] and back lives here. The embedding survives
//! storage only if every sample value round-trips bit-exactly, which is why
//! the format gate admits PNG alone.

use crate::{
    error::{Error, Result},
    macros::*,
    pixel_buffer::{Pixel, PixelBuffer},
    utilities::file_utils,
};

use image::{ColorType, ImageFormat};

/// Attempt to load an image from a file into a [`PixelBuffer`].
///
/// The file extension must indicate a PNG image and the decoded data must
/// use a multi-channel 8-bit colour layout (RGB or RGBA). Greyscale and
/// palette-backed sources are rejected rather than up-converted, since an
/// operator feeding those in almost certainly picked the wrong file.
///
/// # Arguments
///
/// * `file_path` - The path to the image file.
///
pub fn load_from_file(file_path: &str) -> Result<PixelBuffer> {
    use image::{DynamicImage::*, GenericImageView};

    // The extension gate runs first, before the file is ever opened.
    match ImageFormat::from_path(file_path) {
        Ok(ImageFormat::Png) => {}
        _ => return Err(Error::ImageFormatUnsupported),
    }

    if !file_utils::path_exists(file_path) {
        return Err(Error::PathInvalid);
    }

    let image = unwrap_or_return_err!(image::open(file_path), Error::ImageOpening);
    let (width, height) = image.dimensions();

    let pixels: Vec<Pixel> = match &image {
        ImageRgb8(img) => img
            .pixels()
            .map(|p| Pixel::new(p.0[0], p.0[1], p.0[2], 255))
            .collect(),
        ImageRgba8(img) => img
            .pixels()
            .map(|p| Pixel::new(p.0[0], p.0[1], p.0[2], p.0[3]))
            .collect(),
        _ => return Err(Error::ChannelLayoutUnsupported),
    };

    log::debug!("loaded {file_path} ({width}x{height}, {} px)", pixels.len());

    PixelBuffer::from_pixels(width, height, pixels)
}

/// Save a [`PixelBuffer`] to a file as an RGBA8 PNG.
///
/// # Arguments
///
/// * `path` - The path to which the file should be saved.
/// * `buffer` - The pixel buffer to be saved.
///
pub fn save_to_file(path: &str, buffer: &PixelBuffer) -> Result<()> {
    let (w, h) = buffer.dimensions();

    let mut bytes: Vec<u8> = Vec::with_capacity(buffer.pixels().len() * 4);
    for pix in buffer.pixels() {
        bytes.extend_from_slice(&[pix.red, pix.green, pix.blue, pix.alpha]);
    }

    log::debug!("saving {path} ({w}x{h})");

    image::save_buffer_with_format(path, &bytes, w, h, ColorType::Rgba8, ImageFormat::Png)
        .map_err(|e| Error::ImageSaving(e.to_string()))
}
