//! # Nibbleveil Core API
//!
//! Hides one image inside another by nibble merging. Every channel of the
//! merged output keeps the high nibble of the base image and stores the high
//! nibble of the secret image in the low nibble. The reciprocal operation
//! extracts the hidden image again, at nibble granularity.
//!
//! Both operations are exposed on three levels:
//!
//! - [`NibbleCodec`] for transforming in-memory pixel grids
//! - [`api`] for a builder style file-to-file surface
//! - [`commands`] for one-call path based wrappers, used by the CLI
//!
//! # Usage Examples
//!
//! ## Merge and unmerge in-memory images
//!
//! ```rust
//! use image::{Rgb, RgbImage};
//! use nibbleveil_core::NibbleCodec;
//!
//! let base = RgbImage::from_pixel(2, 2, Rgb([255, 255, 255]));
//! let secret = RgbImage::from_pixel(1, 1, Rgb([255, 0, 0]));
//!
//! let merged = NibbleCodec::merge(&base, &secret).expect("Failed to merge images");
//! assert_eq!(merged.get_pixel(0, 0), &Rgb([255, 240, 240]));
//! // uncovered base pixels merge against pure black
//! assert_eq!(merged.get_pixel(1, 1), &Rgb([240, 240, 240]));
//!
//! let extracted = NibbleCodec::unmerge(&merged);
//! assert_eq!(extracted.get_pixel(0, 0), &Rgb([240, 0, 0]));
//! ```
//!
//! ## Hide an image file inside another image file
//!
//! ```rust
//! use image::{Rgb, RgbImage};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let base_file = temp_dir.path().join("base.png");
//! let secret_file = temp_dir.path().join("secret.png");
//!
//! RgbImage::from_pixel(4, 4, Rgb([200, 100, 50]))
//!     .save(&base_file)
//!     .expect("Failed to write base image");
//! RgbImage::from_pixel(2, 2, Rgb([90, 180, 30]))
//!     .save(&secret_file)
//!     .expect("Failed to write secret image");
//!
//! nibbleveil_core::api::merge::prepare()
//!     .with_base_image(&base_file)
//!     .with_secret_image(&secret_file)
//!     .with_output(temp_dir.path().join("merged.png"))
//!     .execute()
//!     .expect("Failed to merge images");
//! ```

pub mod api;
pub mod commands;
pub mod error;
pub mod media;
pub mod result;

pub use crate::error::NibbleveilError;
pub use crate::media::image::{CodecOptions, NibbleCodec};
pub use crate::result::Result;

#[cfg(test)]
mod e2e_tests {
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;

    use crate::commands::{merge, unmerge};
    use crate::media::{open_image, Persist};
    use crate::test_utils::prepare_gradient_image;
    use crate::{NibbleveilError, Result};

    #[test]
    fn should_error_for_an_unsupported_media_file() {
        match open_image(Path::new("Cargo.toml")).err() {
            Some(NibbleveilError::UnsupportedMedia) => (),
            _ => panic!("Expected the unsupported media to be reported"),
        }
    }

    #[test]
    fn should_error_for_a_missing_image_file() {
        match open_image(Path::new("some_random_file.png")).err() {
            Some(NibbleveilError::InvalidImageMedia) => (),
            _ => panic!("Expected the broken image media to be reported"),
        }
    }

    #[test]
    fn should_merge_and_unmerge_through_files() -> Result<()> {
        let out_dir = TempDir::new()?;
        let base_file = out_dir.path().join("base.png");
        let secret_file = out_dir.path().join("secret.png");
        let merged_file = out_dir.path().join("merged.png");
        let extracted_file = out_dir.path().join("extracted.png");

        let base = prepare_gradient_image(8, 8);
        let secret = prepare_gradient_image(4, 4);
        base.save_as(&base_file)?;
        secret.save_as(&secret_file)?;

        merge(&base_file, &secret_file, &merged_file)?;

        let l = fs::metadata(&merged_file)
            .expect("Merged image was not written.")
            .len();
        assert!(l > 0, "File is not supposed to be empty");

        let merged = open_image(&merged_file)?;
        assert_eq!(merged.dimensions(), (8, 8));
        for (x, y, pixel) in merged.enumerate_pixels() {
            for channel in 0..3 {
                let base_channel = base.get_pixel(x, y)[channel];
                let secret_channel = if x < 4 && y < 4 {
                    secret.get_pixel(x, y)[channel]
                } else {
                    0
                };

                assert_eq!(
                    pixel[channel],
                    (base_channel & 0xF0) | (secret_channel >> 4),
                    "merged channel {channel} at ({x}, {y}) does not match"
                );
            }
        }

        unmerge(&merged_file, &extracted_file)?;

        let extracted = open_image(&extracted_file)?;
        assert_eq!(extracted.dimensions(), (8, 8));
        for (x, y, pixel) in extracted.enumerate_pixels() {
            for channel in 0..3 {
                let expected = if x < 4 && y < 4 {
                    secret.get_pixel(x, y)[channel] & 0xF0
                } else {
                    0
                };

                assert_eq!(
                    pixel[channel], expected,
                    "extracted channel {channel} at ({x}, {y}) does not match"
                );
            }
        }

        Ok(())
    }

    #[test]
    fn should_refuse_to_merge_a_secret_larger_than_the_base() -> Result<()> {
        let out_dir = TempDir::new()?;
        let base_file = out_dir.path().join("base.png");
        let secret_file = out_dir.path().join("secret.png");
        let merged_file = out_dir.path().join("merged.png");

        prepare_gradient_image(2, 2).save_as(&base_file)?;
        prepare_gradient_image(4, 4).save_as(&secret_file)?;

        match merge(&base_file, &secret_file, &merged_file).err() {
            Some(NibbleveilError::SecretTooLarge(2, 2, 4, 4)) => (),
            _ => panic!("Expected the oversized secret to be reported"),
        }
        assert!(
            !merged_file.exists(),
            "No output may be produced for an oversized secret"
        );

        Ok(())
    }
}
