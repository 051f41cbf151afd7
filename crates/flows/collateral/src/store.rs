//! Collateral Form Store
//!
//! Owns the [`FormState`] of a single flow and routes every change through
//! [`crate::transitions`]. The held state is replaced only when a transition
//! succeeds.

use harbor_core::{EditPolicy, FormError};

use crate::constants::fields;
use crate::resolver::CurrencyResolver;
use crate::state::FormState;
use crate::transitions;

/// One store per open deposit flow. Not shared between flows.
#[derive(Debug, Clone, PartialEq)]
pub struct CollateralFormStore {
    state: FormState,
    policy: EditPolicy,
}

impl Default for CollateralFormStore {
    fn default() -> Self {
        Self::new(EditPolicy::default())
    }
}

impl CollateralFormStore {
    pub fn new(policy: EditPolicy) -> Self {
        Self {
            state: transitions::create_default(),
            policy,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn into_state(self) -> FormState {
        self.state
    }

    pub fn policy(&self) -> EditPolicy {
        self.policy
    }

    /// Discard all edits. The loading flag is kept: only
    /// [`Self::end_submission`] clears it.
    pub fn reset(&mut self) -> Result<&FormState, FormError> {
        self.guard_edit(fields::FORM)?;
        self.state = FormState {
            is_loading: self.state.is_loading(),
            ..transitions::create_default()
        };
        Ok(&self.state)
    }

    pub fn set_currency<R>(&mut self, index: usize, resolver: &R) -> Result<&FormState, FormError>
    where
        R: CurrencyResolver + ?Sized,
    {
        self.guard_edit(fields::CURRENCY)?;
        let next = transitions::set_currency(&self.state, index, resolver);
        self.commit(next)
    }

    pub fn set_amount(&mut self, amount: f64) -> Result<&FormState, FormError> {
        self.guard_edit(fields::AMOUNT)?;
        let next = transitions::set_amount(&self.state, amount);
        self.commit(next)
    }

    pub fn set_fee(&mut self, fee: f64) -> Result<&FormState, FormError> {
        self.guard_edit(fields::TX_FEE)?;
        let next = transitions::set_fee(&self.state, fee);
        self.commit(next)
    }

    pub fn set_address(&mut self, address: impl Into<String>) -> Result<&FormState, FormError> {
        self.guard_edit(fields::ADDRESS)?;
        let next = transitions::set_address(&self.state, address);
        self.commit(Ok(next))
    }

    pub fn set_vault(&mut self, vault_id: impl Into<String>) -> Result<&FormState, FormError> {
        self.guard_edit(fields::VAULT)?;
        let next = transitions::set_vault(&self.state, vault_id);
        self.commit(Ok(next))
    }

    pub fn set_initiated(&mut self, initiated: bool) -> Result<&FormState, FormError> {
        self.guard_edit(fields::INITIATED)?;
        let next = transitions::set_initiated(&self.state, initiated);
        self.commit(Ok(next))
    }

    /// Check-and-set of the loading flag. `&mut self` keeps it atomic.
    pub fn begin_submission(&mut self) -> Result<&FormState, FormError> {
        let next = transitions::begin_submission(&self.state);
        self.commit(next)
    }

    /// Always allowed, also under [`EditPolicy::LockWhileSubmitting`]
    pub fn end_submission(&mut self) -> &FormState {
        self.state = transitions::end_submission(&self.state);
        &self.state
    }

    fn guard_edit(&self, field: &'static str) -> Result<(), FormError> {
        if self.policy == EditPolicy::LockWhileSubmitting && self.state.is_loading() {
            let err = FormError::EditWhileSubmitting { field };
            tracing::debug!(field, "Rejected form edit during submission");
            return Err(err);
        }
        Ok(())
    }

    fn commit(&mut self, next: Result<FormState, FormError>) -> Result<&FormState, FormError> {
        match next {
            Ok(state) => {
                self.state = state;
                Ok(&self.state)
            }
            Err(e) => {
                tracing::debug!(code = e.error_code(), error = %e, "Rejected form transition");
                Err(e)
            }
        }
    }
}
