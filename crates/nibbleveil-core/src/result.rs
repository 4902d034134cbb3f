use crate::error::NibbleveilError;

pub type Result<T> = std::result::Result<T, NibbleveilError>;
