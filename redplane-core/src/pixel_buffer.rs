use crate::error::{Error, Result};

/// A single RGBA sample quad.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Pixel {
    /// Fully opaque black, the canonical "no message here" pixel.
    pub const BLACK: Pixel = Pixel::new(0, 0, 0, 255);

    /// Fully opaque bright red, the canonical rendering of a recovered message bit.
    pub const RED: Pixel = Pixel::new(255, 0, 0, 255);

    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

/// An owned rectangular grid of [`Pixel`] samples, stored row-major.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PixelBuffer {
    /// The width of the image, in pixels.
    width: u32,
    /// The height of the image, in pixels.
    height: u32,
    /// The pixel data, row-major: index = y * width + x.
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    /// Create a buffer of the given dimensions with every pixel set to `fill`.
    ///
    /// # Arguments
    ///
    /// * `width` - The width of the buffer, in pixels.
    /// * `height` - The height of the buffer, in pixels.
    /// * `fill` - The pixel value assigned to every coordinate.
    ///
    pub fn filled(width: u32, height: u32, fill: Pixel) -> Result<PixelBuffer> {
        if width == 0 || height == 0 {
            return Err(Error::ImageDimensionsInvalid);
        }

        Ok(Self {
            width,
            height,
            pixels: vec![fill; (width as usize) * (height as usize)],
        })
    }

    /// Create a buffer of the given dimensions from an existing pixel vector.
    ///
    /// # Arguments
    ///
    /// * `width` - The width of the buffer, in pixels.
    /// * `height` - The height of the buffer, in pixels.
    /// * `pixels` - The row-major pixel data, which must hold exactly
    ///   `width * height` entries.
    ///
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<PixelBuffer> {
        if width == 0 || height == 0 {
            return Err(Error::ImageDimensionsInvalid);
        }

        if pixels.len() != (width as usize) * (height as usize) {
            return Err(Error::ImageDimensionsInvalid);
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Return the buffer's dimensions as a (width, height) pair.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel at the given coordinate.
    ///
    /// Panics if the coordinate lies outside the buffer.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Pixel {
        assert!(x < self.width && y < self.height, "coordinate out of bounds");
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Set the pixel at the given coordinate.
    ///
    /// Panics if the coordinate lies outside the buffer.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, pixel: Pixel) {
        assert!(x < self.width && y < self.height, "coordinate out of bounds");
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)] = pixel;
    }

    /// A view of the raw row-major pixel data.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }
}
