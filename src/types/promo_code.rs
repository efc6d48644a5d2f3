use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::advantage::Advantage;
use super::error::ValidationError;
use super::restriction::Restrictions;

/// A stored promo code. Only constructed from validated parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoCode {
    pub uuid: Uuid,
    pub name: String,
    pub advantage: Advantage,
    pub restrictions: Restrictions,
}

impl PromoCode {
    /// Assemble a record from already-validated parts, with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>, advantage: Advantage, restrictions: Restrictions) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.into(),
            advantage,
            restrictions,
        }
    }
}

/// An unvalidated promo code as submitted for creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPromoCode {
    pub name: String,
    pub advantage: serde_json::Value,
    pub restrictions: serde_json::Value,
}

impl NewPromoCode {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        advantage: serde_json::Value,
        restrictions: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            advantage,
            restrictions,
        }
    }

    /// Validate the advantage, then the restrictions, and build the record.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`]; nothing is built on failure.
    pub fn into_promo_code(self) -> Result<PromoCode, ValidationError> {
        let advantage = Advantage::from_json(&self.advantage)?;
        let restrictions = Restrictions::from_json(&self.restrictions)?;
        Ok(PromoCode::new(self.name, advantage, restrictions))
    }
}
