use std::path::Path;

use crate::NibbleveilError;

pub fn merge(
    base_image: &Path,
    secret_image: &Path,
    output: &Path,
) -> Result<(), NibbleveilError> {
    crate::api::merge::prepare()
        .with_base_image(base_image)
        .with_secret_image(secret_image)
        .with_output(output)
        .execute()
}
