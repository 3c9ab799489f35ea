//! The pixel-plane codec.
//!
//! A message image marks, with any non-zero red sample, the pixels that
//! should carry a hidden bit. Embedding parity-encodes those positions into
//! the least significant bit of the carrier's blue channel: a flattened
//! carrier holds only even blue samples, and each marked position is bumped
//! to the next odd value. Decoding reads the parity back out and renders the
//! recovered plane on black or over the carried colours.
//!
//! Every operation here is a pure function over [`PixelBuffer`] values: one
//! or two immutable inputs, one freshly allocated output, a single
//! x-outer/y-inner scan, no I/O.

use crate::{
    error::{Error, Result},
    pixel_buffer::{Pixel, PixelBuffer},
};

use core::convert::TryFrom;

/// The rendering mode used when decoding a recovered message plane.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeMode {
    /// Render the message in bright red on a black background.
    OnBlack,
    /// Render the message in bright red on top of the carried image.
    OnOriginal,
}

impl TryFrom<&str> for DecodeMode {
    type Error = Error;

    fn try_from(mode: &str) -> Result<DecodeMode> {
        match mode.to_lowercase().as_str() {
            "b" | "black" => Ok(DecodeMode::OnBlack),
            "t" | "original" => Ok(DecodeMode::OnOriginal),
            _ => Err(Error::ModeInvalid),
        }
    }
}

/// Flatten a carrier image in preparation for encoding.
///
/// Every odd blue sample is decremented to the even value below it, giving
/// the buffer an all-even blue baseline so that a later parity flip is
/// unambiguous. Alpha is forced to fully opaque on every pixel.
///
/// # Arguments
///
/// * `buffer` - The carrier image to be flattened.
///
pub fn flatten_carrier(buffer: &PixelBuffer) -> PixelBuffer {
    let (w, h) = buffer.dimensions();

    let mut flattened = buffer.clone();
    for x in 0..w {
        for y in 0..h {
            let mut pix = buffer.get(x, y);
            pix.blue &= !1;
            pix.alpha = 255;
            flattened.set(x, y, pix);
        }
    }

    flattened
}

/// Flatten a message image in preparation for encoding.
///
/// Every pixel without a red component becomes pure opaque black; pixels
/// with any red at all pass through unchanged. The result is the canonical
/// black/red marker plane the encoder expects.
///
/// # Arguments
///
/// * `buffer` - The message image to be flattened.
///
pub fn flatten_message(buffer: &PixelBuffer) -> PixelBuffer {
    let (w, h) = buffer.dimensions();

    let mut flattened = buffer.clone();
    for x in 0..w {
        for y in 0..h {
            if buffer.get(x, y).red == 0 {
                flattened.set(x, y, Pixel::BLACK);
            }
        }
    }

    flattened
}

/// Embed a flattened message plane into a flattened carrier.
///
/// For every coordinate within the message extent that carries a red marker,
/// the carrier's blue sample is incremented, taking it from the flattened
/// even baseline to an odd value. Carrier pixels outside the message extent
/// are copied through untouched, so the message may be smaller than the
/// carrier in either axis, never larger.
///
/// Both inputs must already have been flattened; running this on raw images
/// is undefined in the sense that the parity baseline is no longer
/// guaranteed.
///
/// # Arguments
///
/// * `message` - The flattened message plane.
/// * `carrier` - The flattened carrier image.
///
pub fn encode(message: &PixelBuffer, carrier: &PixelBuffer) -> Result<PixelBuffer> {
    let (mw, mh) = message.dimensions();
    let (cw, ch) = carrier.dimensions();

    if mw > cw || mh > ch {
        return Err(Error::DimensionMismatch);
    }

    let mut encoded = carrier.clone();
    for x in 0..mw {
        for y in 0..mh {
            if message.get(x, y).red == 0 {
                continue;
            }

            let mut pix = carrier.get(x, y);
            pix.blue += 1;
            pix.alpha = 255;
            encoded.set(x, y, pix);
        }
    }

    Ok(encoded)
}

/// Recover the message plane carried by a buffer's blue-channel parity.
///
/// Any pixel with an odd blue sample renders as pure bright red. Pixels with
/// no parity bit set render as black under [`DecodeMode::OnBlack`], or keep
/// their own colour (alpha forced opaque) under [`DecodeMode::OnOriginal`].
///
/// No attempt is made to tell an intentionally encoded bit apart from
/// incidental odd samples: decoding an image this tool never touched yields
/// red speckling, not an error.
///
/// # Arguments
///
/// * `buffer` - The image to be decoded.
/// * `mode` - The rendering mode for pixels that carry no message bit.
///
pub fn decode(buffer: &PixelBuffer, mode: DecodeMode) -> PixelBuffer {
    let (w, h) = buffer.dimensions();

    let mut decoded = buffer.clone();
    for x in 0..w {
        for y in 0..h {
            let mut pix = buffer.get(x, y);

            if pix.blue % 2 == 1 {
                decoded.set(x, y, Pixel::RED);
                continue;
            }

            match mode {
                DecodeMode::OnBlack => decoded.set(x, y, Pixel::BLACK),
                DecodeMode::OnOriginal => {
                    pix.alpha = 255;
                    decoded.set(x, y, pix);
                }
            }
        }
    }

    decoded
}

/// A lazy iterator over the pixels of a buffer that currently carry a set
/// parity bit, yielded in x-outer/y-inner order.
///
/// Produced by [`inspect`]. The iterator is restartable: cloning it before
/// use gives a fresh traversal.
#[derive(Clone, Debug)]
pub struct Inspect<'a> {
    buffer: &'a PixelBuffer,
    x: u32,
    y: u32,
}

impl Iterator for Inspect<'_> {
    type Item = ((u32, u32), Pixel);

    fn next(&mut self) -> Option<Self::Item> {
        let (w, h) = self.buffer.dimensions();

        while self.x < w {
            let coord = (self.x, self.y);
            let pix = self.buffer.get(self.x, self.y);

            self.y += 1;
            if self.y == h {
                self.y = 0;
                self.x += 1;
            }

            if pix.blue % 2 == 1 {
                return Some((coord, pix));
            }
        }

        None
    }
}

/// Iterate over every pixel whose blue sample is odd, together with its
/// coordinate. Intended for diagnostic display so an operator can verify
/// which pixels currently carry signal.
///
/// # Arguments
///
/// * `buffer` - The image to be inspected.
///
pub fn inspect(buffer: &PixelBuffer) -> Inspect<'_> {
    Inspect { buffer, x: 0, y: 0 }
}

/// Produce an all-black, fully opaque copy of a buffer.
///
/// A convenience for operators: the result is a blank message canvas that
/// matches the carrier's dimensions exactly.
///
/// # Arguments
///
/// * `buffer` - The image whose dimensions the black copy should match.
///
pub fn black_copy(buffer: &PixelBuffer) -> PixelBuffer {
    let (w, h) = buffer.dimensions();

    let mut black = buffer.clone();
    for x in 0..w {
        for y in 0..h {
            black.set(x, y, Pixel::BLACK);
        }
    }

    black
}
