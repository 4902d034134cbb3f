use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Hides a secret image inside a base image
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Base image that visually dominates the merged output, used readonly.
    #[arg(long = "base_image", value_name = "base image file", required = true)]
    pub base_image: PathBuf,

    /// Secret image to hide; only its high 4 bits per channel survive
    #[arg(
        long = "secret_image",
        value_name = "secret image file",
        required = true
    )]
    pub secret_image: PathBuf,

    /// Merged image will be stored as file
    #[arg(long = "output", value_name = "output image file", required = true)]
    pub output: PathBuf,
}

impl MergeArgs {
    pub fn run(self) -> CliResult<()> {
        nibbleveil_core::commands::merge(&self.base_image, &self.secret_image, &self.output)
    }
}
