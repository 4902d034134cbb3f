use std::path::{Path, PathBuf};

use crate::media::image::{CodecOptions, NibbleCodec};
use crate::media::{open_image, Persist};
use crate::NibbleveilError;

pub fn prepare() -> MergeApi {
    MergeApi::default()
}

#[derive(Default, Debug)]
pub struct MergeApi {
    base_image: Option<PathBuf>,
    secret_image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl MergeApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// The image that visually dominates the merged output, used readonly
    pub fn with_base_image<A: AsRef<Path>>(mut self, base_image: A) -> Self {
        self.base_image = Some(base_image.as_ref().to_path_buf());
        self
    }

    /// The image to hide; only its high 4 bits per channel survive
    pub fn with_secret_image<A: AsRef<Path>>(mut self, secret_image: A) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// The merged image will be stored as this file
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Execute the merge and block until the output is written
    pub fn execute(self) -> Result<(), NibbleveilError> {
        let Some(base_image) = self.base_image else {
            return Err(NibbleveilError::BaseImageNotSet);
        };
        let Some(secret_image) = self.secret_image else {
            return Err(NibbleveilError::SecretImageNotSet);
        };
        let Some(output) = self.output else {
            return Err(NibbleveilError::TargetNotSet);
        };

        let base = open_image(&base_image)?;
        let secret = open_image(&secret_image)?;

        let merged = NibbleCodec::merge_with_options(&base, &secret, &self.options)?;

        merged.save_as(&output)
    }
}
