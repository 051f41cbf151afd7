//! Collateral Form Constants
//!
//! Default form values and the built-in supported-currency table.

/// Values a fresh form starts from
pub mod defaults {
    pub const CURRENCY_INDEX: usize = 0;
    pub const CURRENCY_SHORT_NAME: &str = "ETH";
    pub const CURRENCY_NAME: &str = "Ethereum";
    pub const AMOUNT: f64 = 0.0;
    pub const TX_FEE: f64 = 0.0;
    pub const IS_INITIATED: bool = true;
}

/// Supported collateral currencies as (short name, name).
/// Index 0 must match the form defaults.
pub const SUPPORTED_CURRENCIES: &[(&str, &str)] = &[
    ("ETH", "Ethereum"),
    ("USDC", "USD Coin"),
    ("FIL", "Filecoin"),
    ("BTC", "Bitcoin"),
];

/// Field names used in error reports, matching the UI's keys
pub mod fields {
    pub const CURRENCY: &str = "currencyIndex";
    pub const AMOUNT: &str = "amount";
    pub const TX_FEE: &str = "txFee";
    pub const ADDRESS: &str = "filAddress";
    pub const VAULT: &str = "collateralVault";
    pub const INITIATED: &str = "isInitiated";
    /// Whole-form operations such as reset
    pub const FORM: &str = "form";
}
