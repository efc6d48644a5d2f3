//! Promo code records keyed by name.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, PoisonError, RwLock};

use thiserror::Error;

use crate::PromoCode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Promo code {name} already exists")]
    Conflict { name: String },
}

/// Lookup and insertion of promo code records by their unique name.
pub trait PromoCodeStore {
    fn get(&self, name: &str) -> Option<PromoCode>;

    /// Insert a new record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] if a record with the same name exists.
    fn put(&self, code: PromoCode) -> Result<(), StoreError>;
}

impl<T: PromoCodeStore + ?Sized> PromoCodeStore for Arc<T> {
    fn get(&self, name: &str) -> Option<PromoCode> {
        (**self).get(name)
    }

    fn put(&self, code: PromoCode) -> Result<(), StoreError> {
        (**self).put(code)
    }
}

/// Process-local store. Records live as long as the store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    codes: RwLock<HashMap<String, PromoCode>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PromoCodeStore for InMemoryStore {
    fn get(&self, name: &str) -> Option<PromoCode> {
        self.codes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    fn put(&self, code: PromoCode) -> Result<(), StoreError> {
        let mut codes = self.codes.write().unwrap_or_else(PoisonError::into_inner);
        match codes.entry(code.name.clone()) {
            Entry::Occupied(_) => Err(StoreError::Conflict { name: code.name }),
            Entry::Vacant(slot) => {
                slot.insert(code);
                Ok(())
            }
        }
    }
}
