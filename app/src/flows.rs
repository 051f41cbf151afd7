//! Open flow registry
//!
//! Each open "deposit collateral" dialog gets its own [`CollateralFormStore`]
//! keyed by a [`FlowId`]. Closing a flow drops its store; completions that
//! arrive afterwards find nothing and are ignored by the caller.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use collateral::{CollateralFormStore, CurrencyTable, FormState};
use harbor_core::{AppConfig, FormError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Errors from flow lookups and the transitions run inside them
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Flow not found: {flow_id}")]
    NotFound { flow_id: FlowId },

    #[error(transparent)]
    Form(#[from] FormError),
}

impl FlowError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "flow_not_found",
            Self::Form(e) => e.error_code(),
        }
    }
}

/// Identifier of one open flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlowId(pub Uuid);

impl FlowId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FlowId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FlowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shared handle to all open flows
#[derive(Clone)]
pub struct FlowRegistry {
    inner: Arc<FlowRegistryInner>,
}

struct FlowRegistryInner {
    config: RwLock<AppConfig>,
    currencies: CurrencyTable,
    flows: RwLock<HashMap<FlowId, CollateralFormStore>>,
}

impl FlowRegistry {
    /// Registry with default config and the built-in currency table
    pub fn new() -> Self {
        Self::with_config(AppConfig::default(), CurrencyTable::supported())
    }

    pub fn with_config(config: AppConfig, currencies: CurrencyTable) -> Self {
        Self {
            inner: Arc::new(FlowRegistryInner {
                config: RwLock::new(config),
                currencies,
                flows: RwLock::new(HashMap::new()),
            }),
        }
    }

    pub async fn config(&self) -> AppConfig {
        self.inner.config.read().await.clone()
    }

    /// Replace the config. Already open flows keep the policy they started with.
    pub async fn set_config(&self, config: AppConfig) {
        *self.inner.config.write().await = config;
    }

    pub fn currencies(&self) -> &CurrencyTable {
        &self.inner.currencies
    }

    /// Open a new flow with a default form
    pub async fn open_flow(&self) -> FlowId {
        let policy = self.inner.config.read().await.form.edit_policy;
        let flow_id = FlowId::new();
        self.inner
            .flows
            .write()
            .await
            .insert(flow_id, CollateralFormStore::new(policy));
        tracing::info!(%flow_id, ?policy, "Opened collateral flow");
        flow_id
    }

    /// Drop a flow's state. Returns false if it was not open.
    pub async fn close_flow(&self, flow_id: FlowId) -> bool {
        let removed = self.inner.flows.write().await.remove(&flow_id).is_some();
        if removed {
            tracing::info!(%flow_id, "Closed collateral flow");
        }
        removed
    }

    pub async fn is_open(&self, flow_id: FlowId) -> bool {
        self.inner.flows.read().await.contains_key(&flow_id)
    }

    pub async fn open_flows(&self) -> Vec<FlowId> {
        self.inner.flows.read().await.keys().copied().collect()
    }

    /// Current state of a flow, if open
    pub async fn snapshot(&self, flow_id: FlowId) -> Option<FormState> {
        self.inner
            .flows
            .read()
            .await
            .get(&flow_id)
            .map(|store| store.state().clone())
    }

    /// Run `f` against one flow's store under the write lock and return the
    /// resulting state.
    pub async fn update<F>(&self, flow_id: FlowId, f: F) -> Result<FormState, FlowError>
    where
        F: FnOnce(&mut CollateralFormStore, &CurrencyTable) -> Result<(), FormError>,
    {
        let mut flows = self.inner.flows.write().await;
        let store = flows
            .get_mut(&flow_id)
            .ok_or(FlowError::NotFound { flow_id })?;
        f(store, &self.inner.currencies)?;
        Ok(store.state().clone())
    }
}

impl Default for FlowRegistry {
    fn default() -> Self {
        Self::new()
    }
}
