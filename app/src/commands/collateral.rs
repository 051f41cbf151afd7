use collateral::FormState;
use harbor_core::SelectOption;
use serde::Serialize;

use super::CommandError;
use crate::flows::{FlowId, FlowRegistry};

/// Form snapshot handed back after every command
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollateralFormView {
    pub flow_id: FlowId,
    pub form: FormState,
    /// Submit button enabled state
    pub ready_to_submit: bool,
}

impl CollateralFormView {
    fn new(flow_id: FlowId, form: FormState) -> Self {
        Self {
            flow_id,
            ready_to_submit: form.is_ready_to_submit(),
            form,
        }
    }
}

/// Open a new deposit dialog
pub async fn open_collateral_flow(
    registry: &FlowRegistry,
) -> Result<CollateralFormView, CommandError> {
    let flow_id = registry.open_flow().await;
    let form = registry
        .snapshot(flow_id)
        .await
        .ok_or_else(|| CommandError::new("flow_not_found", "Flow closed while opening"))?;
    Ok(CollateralFormView::new(flow_id, form))
}

/// Close a dialog, discarding its form
pub async fn close_collateral_flow(
    registry: &FlowRegistry,
    flow_id: FlowId,
) -> Result<bool, CommandError> {
    Ok(registry.close_flow(flow_id).await)
}

pub async fn get_collateral_form(
    registry: &FlowRegistry,
    flow_id: FlowId,
) -> Result<CollateralFormView, CommandError> {
    let form = registry.snapshot(flow_id).await.ok_or_else(|| {
        CommandError::new("flow_not_found", format!("Flow not found: {}", flow_id))
    })?;
    Ok(CollateralFormView::new(flow_id, form))
}

/// Currency dropdown entries
pub async fn list_collateral_currencies(
    registry: &FlowRegistry,
) -> Result<Vec<SelectOption<usize>>, CommandError> {
    Ok(registry.currencies().options())
}

pub async fn select_collateral_currency(
    registry: &FlowRegistry,
    flow_id: FlowId,
    currency_index: usize,
) -> Result<CollateralFormView, CommandError> {
    let form = registry
        .update(flow_id, |store, currencies| {
            store.set_currency(currency_index, currencies).map(|_| ())
        })
        .await?;
    Ok(CollateralFormView::new(flow_id, form))
}

pub async fn set_collateral_amount(
    registry: &FlowRegistry,
    flow_id: FlowId,
    amount: f64,
) -> Result<CollateralFormView, CommandError> {
    let form = registry
        .update(flow_id, |store, _| store.set_amount(amount).map(|_| ()))
        .await?;
    Ok(CollateralFormView::new(flow_id, form))
}

pub async fn set_collateral_fee(
    registry: &FlowRegistry,
    flow_id: FlowId,
    tx_fee: f64,
) -> Result<CollateralFormView, CommandError> {
    let form = registry
        .update(flow_id, |store, _| store.set_fee(tx_fee).map(|_| ()))
        .await?;
    Ok(CollateralFormView::new(flow_id, form))
}

pub async fn set_collateral_address(
    registry: &FlowRegistry,
    flow_id: FlowId,
    address: String,
) -> Result<CollateralFormView, CommandError> {
    let form = registry
        .update(flow_id, |store, _| store.set_address(address).map(|_| ()))
        .await?;
    Ok(CollateralFormView::new(flow_id, form))
}

pub async fn set_collateral_vault(
    registry: &FlowRegistry,
    flow_id: FlowId,
    vault_id: String,
) -> Result<CollateralFormView, CommandError> {
    let form = registry
        .update(flow_id, |store, _| store.set_vault(vault_id).map(|_| ()))
        .await?;
    Ok(CollateralFormView::new(flow_id, form))
}

/// Mark the deposit as submitting. The caller then sends the transaction.
pub async fn start_collateral_deposit(
    registry: &FlowRegistry,
    flow_id: FlowId,
) -> Result<CollateralFormView, CommandError> {
    let form = registry
        .update(flow_id, |store, _| store.begin_submission().map(|_| ()))
        .await?;
    tracing::info!(
        %flow_id,
        amount = form.amount(),
        currency = form.currency_short_name(),
        "Collateral deposit started"
    );
    Ok(CollateralFormView::new(flow_id, form))
}

/// Completion callback for a submitted deposit.
///
/// Returns `Ok(None)` when the flow was closed in the meantime; the late
/// result is dropped.
pub async fn finish_collateral_deposit(
    registry: &FlowRegistry,
    flow_id: FlowId,
) -> Result<Option<CollateralFormView>, CommandError> {
    match registry
        .update(flow_id, |store, _| {
            store.end_submission();
            Ok(())
        })
        .await
    {
        Ok(form) => {
            tracing::info!(%flow_id, "Collateral deposit finished");
            Ok(Some(CollateralFormView::new(flow_id, form)))
        }
        Err(crate::FlowError::NotFound { .. }) => {
            tracing::debug!(%flow_id, "Ignoring completion for closed flow");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
