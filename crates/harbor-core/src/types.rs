//! Core type definitions for Harbor

use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of the supported-currency table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    /// Ticker shown in compact UI ("ETH", "USDC")
    pub short_name: String,
    /// Full display name ("Ethereum", "USD Coin")
    pub name: String,
}

impl Currency {
    pub fn new(short_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            short_name: short_name.into(),
            name: name.into(),
        }
    }

    /// Dropdown entry pointing back at this currency's table index
    pub fn as_option(&self, index: usize) -> SelectOption<usize> {
        SelectOption::new(index, self.short_name.clone())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.short_name)
    }
}

/// A labelled value for select inputs: `{ value, label }`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption<T> {
    pub value: T,
    pub label: String,
}

impl<T> SelectOption<T> {
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SelectOption<U> {
        SelectOption {
            value: f(self.value),
            label: self.label,
        }
    }
}
