use crate::error::StripError;

pub type Result<T> = std::result::Result<T, StripError>;
