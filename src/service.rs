//! Create, retrieve and validate promo codes against a store and a weather
//! provider.

use tracing::{debug, info};

use crate::evaluate::decide;
use crate::store::PromoCodeStore;
use crate::weather::WeatherProvider;
use crate::{Decision, NewPromoCode, PromoCode, PromoCodeError};

/// Promo code operations over a record store and a weather source.
#[derive(Debug, Clone)]
pub struct PromoCodes<S, W> {
    store: S,
    weather: W,
}

impl<S: PromoCodeStore, W: WeatherProvider> PromoCodes<S, W> {
    #[must_use]
    pub fn new(store: S, weather: W) -> Self {
        Self { store, weather }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate a submission and store it.
    ///
    /// # Errors
    ///
    /// [`PromoCodeError::Invalid`] if the advantage or restrictions are
    /// malformed, [`PromoCodeError::Conflict`] if the name is taken.
    #[tracing::instrument(name = "promocode.create", skip_all, fields(name = %code.name), err)]
    pub fn create(&self, code: NewPromoCode) -> Result<PromoCode, PromoCodeError> {
        let code = code.into_promo_code()?;
        self.store.put(code.clone())?;
        info!(uuid = %code.uuid, "promo code created");
        Ok(code)
    }

    /// # Errors
    ///
    /// [`PromoCodeError::NotFound`] if no code has this name.
    pub fn retrieve(&self, name: &str) -> Result<PromoCode, PromoCodeError> {
        self.store.get(name).ok_or_else(|| PromoCodeError::NotFound {
            name: name.to_owned(),
        })
    }

    /// Check the named promo code against a caller's raw arguments.
    ///
    /// # Errors
    ///
    /// [`PromoCodeError::NotFound`] for an unknown name and
    /// [`PromoCodeError::Arguments`] for malformed arguments. Unmet
    /// restrictions produce [`Decision::Denied`].
    #[tracing::instrument(name = "promocode.validate", skip(self, arguments), err)]
    pub fn validate(
        &self,
        name: &str,
        arguments: &serde_json::Value,
    ) -> Result<Decision, PromoCodeError> {
        let code = self.retrieve(name)?;
        let reasons = decide(&code.restrictions, arguments, &self.weather)?;
        let decision = if reasons.is_empty() {
            Decision::Accepted {
                promocode_name: code.name,
                advantage: code.advantage,
            }
        } else {
            Decision::Denied {
                promocode_name: code.name,
                reasons,
            }
        };
        debug!(accepted = decision.is_accepted(), "promo code validated");
        Ok(decision)
    }
}
