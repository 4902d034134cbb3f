use std::path::Path;

use crate::NibbleveilError;

pub fn unmerge(merged_image: &Path, output: &Path) -> Result<(), NibbleveilError> {
    crate::api::unmerge::prepare()
        .from_merged_file(merged_image)
        .with_output(output)
        .execute()
}
