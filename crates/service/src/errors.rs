use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} is out of range: expected a positive number")]
    OutOfRange(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence failure: {0}")]
    Persistence(#[from] StoreError),
    #[error("{0}")]
    Unknown(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
    pub fn out_of_range(field: &str) -> Self { Self::OutOfRange(field.to_string()) }
}
