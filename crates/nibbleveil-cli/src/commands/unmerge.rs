use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Extracts the hidden image from a merged image
#[derive(Args, Debug)]
pub struct UnmergeArgs {
    /// Merged image that carries a hidden image in its low nibbles
    #[arg(
        long = "merged_image",
        value_name = "merged image file",
        required = true
    )]
    pub merged_image: PathBuf,

    /// Extracted image will be stored as file
    #[arg(long = "output", value_name = "output image file", required = true)]
    pub output: PathBuf,
}

impl UnmergeArgs {
    pub fn run(self) -> CliResult<()> {
        nibbleveil_core::commands::unmerge(&self.merged_image, &self.output)
    }
}
