//! Collateral Form State
//!
//! The in-progress record of one collateral deposit.

use serde::Serialize;

use crate::constants::defaults;

/// Form buffer for one open deposit flow.
///
/// Serialized with the UI's camelCase keys for the view layer. There is no
/// `Deserialize`: a state only comes from [`FormState::default`] and the
/// transitions, which keep the currency names in sync with the index.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub(crate) currency_index: usize,
    pub(crate) currency_short_name: String,
    pub(crate) currency_name: String,
    pub(crate) amount: f64,
    pub(crate) tx_fee: f64,
    pub(crate) is_loading: bool,
    pub(crate) is_initiated: bool,
    pub(crate) fil_address: String,
    pub(crate) collateral_vault: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            currency_index: defaults::CURRENCY_INDEX,
            currency_short_name: defaults::CURRENCY_SHORT_NAME.to_string(),
            currency_name: defaults::CURRENCY_NAME.to_string(),
            amount: defaults::AMOUNT,
            tx_fee: defaults::TX_FEE,
            is_loading: false,
            is_initiated: defaults::IS_INITIATED,
            fil_address: String::new(),
            collateral_vault: None,
        }
    }
}

impl FormState {
    pub fn currency_index(&self) -> usize {
        self.currency_index
    }

    pub fn currency_short_name(&self) -> &str {
        &self.currency_short_name
    }

    pub fn currency_name(&self) -> &str {
        &self.currency_name
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn tx_fee(&self) -> f64 {
        self.tx_fee
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_initiated(&self) -> bool {
        self.is_initiated
    }

    /// Wallet address; empty until known
    pub fn fil_address(&self) -> &str {
        &self.fil_address
    }

    pub fn collateral_vault(&self) -> Option<&str> {
        self.collateral_vault.as_deref()
    }

    pub fn has_address(&self) -> bool {
        !self.fil_address.is_empty()
    }

    pub fn has_vault(&self) -> bool {
        self.collateral_vault.is_some()
    }

    /// Submit button state: idle, positive amount, vault chosen
    pub fn is_ready_to_submit(&self) -> bool {
        !self.is_loading && self.amount > 0.0 && self.has_vault()
    }
}
