use std::fs::File;
use std::path::Path;

use image::ImageFormat;
pub use image::RgbImage;
use log::error;

use crate::error::NibbleveilError;
use crate::result::Result;

use super::Persist;

/// Loads an image from disk, normalized to 8 bit RGB.
///
/// Whatever color mode the file is in (grayscale, palette, RGBA) is converted
/// up front, so both sides of a merge always share the same mode and alpha is
/// dropped at the door.
pub fn open_image(file: &Path) -> Result<RgbImage> {
    if let Some(ext) = file.extension() {
        let ext = ext.to_string_lossy().to_lowercase();
        match ext.as_str() {
            "png" | "jpg" | "jpeg" => Ok(image::open(file)
                .map_err(|_e| NibbleveilError::InvalidImageMedia)?
                .to_rgb8()),
            _ => Err(NibbleveilError::UnsupportedMedia),
        }
    } else {
        Err(NibbleveilError::UnsupportedMedia)
    }
}

impl Persist for RgbImage {
    fn save_as(&self, file: &Path) -> Result<()> {
        let format =
            ImageFormat::from_path(file).map_err(|_e| NibbleveilError::UnsupportedMedia)?;

        let mut target = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            NibbleveilError::WriteError { source: e }
        })?;

        self.write_to(&mut target, format).map_err(|e| {
            error!("Error saving image: {e}");
            NibbleveilError::ImageEncodingError
        })
    }
}
