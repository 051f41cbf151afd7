//! Configuration types for Harbor

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Whether form fields may change while a submission is outstanding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditPolicy {
    /// Reject field edits until the submission ends
    #[default]
    LockWhileSubmitting,
    /// Fields stay independently settable during a submission
    AllowEdits,
}

/// Form behaviour settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default)]
    pub edit_policy: EditPolicy,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Form settings shared by every flow
    #[serde(default)]
    pub form: FormConfig,

    /// Fallback tracing filter when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "harbor=debug,info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            form: FormConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON config document; missing keys take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }
}
