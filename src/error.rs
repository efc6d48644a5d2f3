use thiserror::Error;

use crate::store::StoreError;
use crate::{ArgumentError, ValidationError};

/// Unified error type for the promo code operations.
///
/// Returned by [`PromoCodes`](crate::PromoCodes). A denied promo code is a
/// [`Decision`](crate::Decision), not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromoCodeError {
    #[error("Failed to create promo code: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Failed to validate promo code: {0}")]
    Arguments(#[from] ArgumentError),

    #[error("Promo code {name} does not exist")]
    NotFound { name: String },

    #[error("Promo code {name} already exists")]
    Conflict { name: String },
}

impl From<StoreError> for PromoCodeError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict { name } => PromoCodeError::Conflict { name },
        }
    }
}
