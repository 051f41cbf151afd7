//! Command functions invoked by the UI shell

pub mod collateral;

pub use self::collateral::*;

use serde::{Deserialize, Serialize};

use crate::flows::FlowError;

/// Error payload returned to the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandError {
    pub code: String,
    pub message: String,
}

impl CommandError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<FlowError> for CommandError {
    fn from(e: FlowError) -> Self {
        Self::new(e.error_code(), e.to_string())
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}
