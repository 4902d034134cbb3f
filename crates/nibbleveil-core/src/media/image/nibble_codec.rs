use image::{Rgb, RgbImage};
use log::debug;

use crate::error::NibbleveilError;
use crate::media::primitives::{merge_channel, unmerge_channel};
use crate::result::Result;

/// substitute secret pixel for coordinates the secret image does not cover
pub const FILL_PIXEL: Rgb<u8> = Rgb([0, 0, 0]);

#[derive(Debug, Clone)]
pub struct CodecOptions {
    /// stands in as the secret input wherever the base image is larger than
    /// the secret image
    pub fill_pixel: Rgb<u8>,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            fill_pixel: FILL_PIXEL,
        }
    }
}

/// Factory for the nibble merge and unmerge transforms
pub struct NibbleCodec;

impl NibbleCodec {
    /// Hides `secret` inside `base`.
    ///
    /// The result has the mode and exact dimensions of `base`. Every output
    /// pixel keeps the high nibble of the base channel and stores the high
    /// nibble of the corresponding secret channel in the low nibble; where
    /// the secret does not cover a coordinate, pure black stands in.
    ///
    /// The secret image must not exceed the base image in either dimension.
    pub fn merge(base: &RgbImage, secret: &RgbImage) -> Result<RgbImage> {
        Self::merge_with_options(base, secret, &CodecOptions::default())
    }

    pub fn merge_with_options(
        base: &RgbImage,
        secret: &RgbImage,
        options: &CodecOptions,
    ) -> Result<RgbImage> {
        let (width, height) = base.dimensions();
        let (secret_width, secret_height) = secret.dimensions();

        if secret_width > width || secret_height > height {
            return Err(NibbleveilError::SecretTooLarge(
                width,
                height,
                secret_width,
                secret_height,
            ));
        }

        debug!("merging a {secret_width}x{secret_height} secret into a {width}x{height} base");

        Ok(RgbImage::from_fn(width, height, |x, y| {
            let secret_pixel = if x < secret_width && y < secret_height {
                *secret.get_pixel(x, y)
            } else {
                options.fill_pixel
            };

            merge_pixels(*base.get_pixel(x, y), secret_pixel)
        }))
    }

    /// Extracts the hidden image from `merged`.
    ///
    /// The result has the mode and exact dimensions of `merged`. Only the
    /// high nibble of every secret channel was stored, so the recovered
    /// channels carry zeros in their low four bits.
    pub fn unmerge(merged: &RgbImage) -> RgbImage {
        RgbImage::from_fn(merged.width(), merged.height(), |x, y| {
            unmerge_pixel(*merged.get_pixel(x, y))
        })
    }
}

/// merges two pixels channel by channel into a fresh pixel
#[inline]
pub fn merge_pixels(base: Rgb<u8>, secret: Rgb<u8>) -> Rgb<u8> {
    Rgb([
        merge_channel(base[0], secret[0]),
        merge_channel(base[1], secret[1]),
        merge_channel(base[2], secret[2]),
    ])
}

/// recovers the hidden pixel from a merged one
#[inline]
pub fn unmerge_pixel(merged: Rgb<u8>) -> Rgb<u8> {
    Rgb([
        unmerge_channel(merged[0]),
        unmerge_channel(merged[1]),
        unmerge_channel(merged[2]),
    ])
}
