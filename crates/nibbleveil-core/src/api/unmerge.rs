use std::path::{Path, PathBuf};

use crate::media::image::NibbleCodec;
use crate::media::{open_image, Persist};
use crate::NibbleveilError;

pub fn prepare() -> UnmergeApi {
    UnmergeApi::default()
}

#[derive(Default, Debug)]
pub struct UnmergeApi {
    merged_image: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl UnmergeApi {
    /// The image that carries a hidden image in its low nibbles
    pub fn from_merged_file(mut self, merged_image: impl AsRef<Path>) -> Self {
        self.merged_image = Some(merged_image.as_ref().to_path_buf());
        self
    }

    /// The extracted image will be stored as this file
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Execute the unmerge and block until the output is written
    pub fn execute(self) -> Result<(), NibbleveilError> {
        let Some(merged_image) = self.merged_image else {
            return Err(NibbleveilError::MergedImageNotSet);
        };
        let Some(output) = self.output else {
            return Err(NibbleveilError::TargetNotSet);
        };

        let merged = open_image(&merged_image)?;

        NibbleCodec::unmerge(&merged).save_as(&output)
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use tempfile::tempdir;

    use crate::NibbleveilError;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let merged_file = temp_dir.path().join("merged.png");
        let extracted_file = temp_dir.path().join("extracted.png");

        RgbImage::from_pixel(2, 2, Rgb([255, 240, 240]))
            .save(&merged_file)
            .expect("Failed to write merged image");

        crate::api::unmerge::prepare()
            .from_merged_file(&merged_file)
            .with_output(&extracted_file)
            .execute()
            .expect("Failed to unmerge image");

        let extracted = image::open(&extracted_file)
            .expect("Failed to open extracted image")
            .to_rgb8();

        for (_, _, pixel) in extracted.enumerate_pixels() {
            assert_eq!(pixel, &Rgb([240, 0, 0]));
        }
    }

    #[test]
    fn should_error_when_no_merged_image_was_set() {
        let result = crate::api::unmerge::prepare()
            .with_output("extracted.png")
            .execute();

        match result.err() {
            Some(NibbleveilError::MergedImageNotSet) => (),
            _ => panic!("Expected the missing merged image to be reported"),
        }
    }
}
