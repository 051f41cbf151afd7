//! Currency lookup capability
//!
//! The currency table is owned by the UI flow, not by the form. Transitions
//! only ever see it through [`CurrencyResolver`].

use harbor_core::{Currency, SelectOption};

use crate::constants::SUPPORTED_CURRENCIES;

/// Answers "which currency lives at this index?"
pub trait CurrencyResolver {
    fn resolve(&self, index: usize) -> Option<Currency>;

    /// Number of indices this resolver can answer
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CurrencyResolver for [Currency] {
    fn resolve(&self, index: usize) -> Option<Currency> {
        self.get(index).cloned()
    }

    fn len(&self) -> usize {
        <[Currency]>::len(self)
    }
}

/// Owned currency table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CurrencyTable {
    currencies: Vec<Currency>,
}

impl CurrencyTable {
    pub fn new(currencies: Vec<Currency>) -> Self {
        Self { currencies }
    }

    /// The built-in table of supported collateral currencies
    pub fn supported() -> Self {
        Self::new(
            SUPPORTED_CURRENCIES
                .iter()
                .map(|(short_name, name)| Currency::new(*short_name, *name))
                .collect(),
        )
    }

    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    /// Dropdown entries keyed by table index
    pub fn options(&self) -> Vec<SelectOption<usize>> {
        self.currencies
            .iter()
            .enumerate()
            .map(|(index, currency)| currency.as_option(index))
            .collect()
    }
}

impl CurrencyResolver for CurrencyTable {
    fn resolve(&self, index: usize) -> Option<Currency> {
        self.currencies.as_slice().resolve(index)
    }

    fn len(&self) -> usize {
        self.currencies.len()
    }
}
