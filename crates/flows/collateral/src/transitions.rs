//! Form Transitions
//!
//! Pure functions over [`FormState`]. No I/O, no policy.
//!
//! Each transition borrows the current state and returns a fresh one. On
//! error nothing was mutated, so the caller still holds the previous state.

use harbor_core::FormError;

use crate::constants::fields;
use crate::resolver::CurrencyResolver;
use crate::state::FormState;

/// Fresh form with the fixed defaults
pub fn create_default() -> FormState {
    FormState::default()
}

/// Switch currency; index and both names change together
pub fn set_currency<R>(
    state: &FormState,
    index: usize,
    resolver: &R,
) -> Result<FormState, FormError>
where
    R: CurrencyResolver + ?Sized,
{
    let currency = resolver
        .resolve(index)
        .ok_or(FormError::InvalidCurrencyIndex {
            index,
            available: resolver.len(),
        })?;

    Ok(FormState {
        currency_index: index,
        currency_short_name: currency.short_name,
        currency_name: currency.name,
        ..state.clone()
    })
}

pub fn set_amount(state: &FormState, amount: f64) -> Result<FormState, FormError> {
    let amount = validate_quantity(fields::AMOUNT, amount)?;
    Ok(FormState {
        amount,
        ..state.clone()
    })
}

/// Fee estimate is independent of the amount
pub fn set_fee(state: &FormState, fee: f64) -> Result<FormState, FormError> {
    let tx_fee = validate_quantity(fields::TX_FEE, fee)?;
    Ok(FormState {
        tx_fee,
        ..state.clone()
    })
}

pub fn begin_submission(state: &FormState) -> Result<FormState, FormError> {
    if state.is_loading {
        return Err(FormError::AlreadySubmitting);
    }
    Ok(FormState {
        is_loading: true,
        ..state.clone()
    })
}

/// Idempotent: ending an idle form is a no-op
pub fn end_submission(state: &FormState) -> FormState {
    FormState {
        is_loading: false,
        ..state.clone()
    }
}

/// Empty string means the address is not yet known
pub fn set_address(state: &FormState, address: impl Into<String>) -> FormState {
    FormState {
        fil_address: address.into(),
        ..state.clone()
    }
}

/// Empty string clears the selected vault
pub fn set_vault(state: &FormState, vault_id: impl Into<String>) -> FormState {
    let vault_id = vault_id.into();
    FormState {
        collateral_vault: (!vault_id.is_empty()).then_some(vault_id),
        ..state.clone()
    }
}

pub fn set_initiated(state: &FormState, initiated: bool) -> FormState {
    FormState {
        is_initiated: initiated,
        ..state.clone()
    }
}

fn validate_quantity(field: &'static str, value: f64) -> Result<f64, FormError> {
    if !value.is_finite() || value < 0.0 {
        return Err(FormError::InvalidAmount { field, value });
    }
    // Normalize -0.0 so equality against a default state holds
    Ok(value + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::CurrencyTable;
    use harbor_core::Currency;

    fn scenario_resolver() -> CurrencyTable {
        CurrencyTable::new(vec![
            Currency::new("ETH", "Ethereum"),
            Currency::new("USDC", "USD Coin"),
        ])
    }

    #[test]
    fn test_create_default() {
        let state = create_default();
        assert_eq!(state, FormState::default());
        assert_eq!(state.currency_short_name(), "ETH");
        assert!(state.is_initiated());
    }

    #[test]
    fn test_set_currency_to_same_index_keeps_names() {
        let state = set_currency(&create_default(), 0, &scenario_resolver()).unwrap();
        assert_eq!(state, create_default());
    }

    #[test]
    fn test_set_currency_updates_names_together() {
        let state = set_currency(&create_default(), 1, &scenario_resolver()).unwrap();
        assert_eq!(state.currency_index(), 1);
        assert_eq!(state.currency_short_name(), "USDC");
        assert_eq!(state.currency_name(), "USD Coin");
    }

    #[test]
    fn test_set_currency_matches_resolver_for_every_index() {
        let table = CurrencyTable::supported();
        let mut state = create_default();
        for index in 0..table.len() {
            state = set_currency(&state, index, &table).unwrap();
            let expected = table.resolve(index).unwrap();
            assert_eq!(state.currency_short_name(), expected.short_name);
            assert_eq!(state.currency_name(), expected.name);
        }
    }

    #[test]
    fn test_set_currency_out_of_range() {
        let before = set_amount(&create_default(), 3.0).unwrap();
        let err = set_currency(&before, 2, &scenario_resolver()).unwrap_err();
        assert_eq!(
            err,
            FormError::InvalidCurrencyIndex {
                index: 2,
                available: 2
            }
        );
        assert_eq!(before.currency_short_name(), "ETH");
        assert_eq!(before.amount(), 3.0);
    }

    #[test]
    fn test_set_currency_with_slice_resolver() {
        let currencies = [Currency::new("FIL", "Filecoin")];
        let state = set_currency(&create_default(), 0, &currencies[..]).unwrap();
        assert_eq!(state.currency_short_name(), "FIL");
        assert!(set_currency(&state, 1, &currencies[..]).is_err());
    }

    #[test]
    fn test_set_amount_changes_only_amount() {
        let before = create_default();
        let after = set_amount(&before, 100.0).unwrap();
        assert_eq!(after.amount(), 100.0);
        assert_eq!(FormState { amount: 0.0, ..after }, before);
    }

    #[test]
    fn test_set_amount_accepts_zero() {
        let state = set_amount(&set_amount(&create_default(), 5.0).unwrap(), 0.0).unwrap();
        assert_eq!(state.amount(), 0.0);
    }

    #[test]
    fn test_set_amount_rejects_invalid_values() {
        let before = create_default();
        for value in [-0.01, -1e9, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = set_amount(&before, value).unwrap_err();
            assert_eq!(err.error_code(), "invalid_amount");
            assert!(matches!(err, FormError::InvalidAmount { field: "amount", .. }));
        }
        assert_eq!(before, create_default());
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        let state = set_amount(&create_default(), -0.0).unwrap();
        assert_eq!(state, create_default());
        assert!(state.amount().is_sign_positive());
    }

    #[test]
    fn test_set_fee_is_independent_of_amount() {
        let state = set_amount(&create_default(), 10.0).unwrap();
        let state = set_fee(&state, 0.25).unwrap();
        assert_eq!(state.tx_fee(), 0.25);
        assert_eq!(state.amount(), 10.0);

        let err = set_fee(&state, -0.5).unwrap_err();
        assert!(matches!(err, FormError::InvalidAmount { field: "txFee", .. }));
        assert!(set_fee(&state, f64::NAN).is_err());
    }

    #[test]
    fn test_begin_submission_twice_is_rejected() {
        let loading = begin_submission(&create_default()).unwrap();
        assert!(loading.is_loading());
        assert_eq!(
            begin_submission(&loading).unwrap_err(),
            FormError::AlreadySubmitting
        );
        assert!(loading.is_loading());
    }

    #[test]
    fn test_end_submission_is_idempotent() {
        let idle = create_default();
        assert_eq!(end_submission(&idle), idle);

        let loading = begin_submission(&idle).unwrap();
        let ended = end_submission(&loading);
        assert!(!ended.is_loading());
        assert_eq!(end_submission(&end_submission(&ended)), ended);
    }

    #[test]
    fn test_begin_then_end_round_trip() {
        let table = CurrencyTable::supported();
        let state = set_currency(&create_default(), 2, &table).unwrap();
        let state = set_amount(&state, 42.0).unwrap();
        let state = set_vault(&state, "vault-7");
        assert_eq!(end_submission(&begin_submission(&state).unwrap()), state);
    }

    #[test]
    fn test_set_address_and_vault() {
        let state = set_address(&create_default(), "f1abcdef");
        assert_eq!(state.fil_address(), "f1abcdef");
        assert!(state.has_address());

        let state = set_vault(&state, "0xvault");
        assert_eq!(state.collateral_vault(), Some("0xvault"));

        let state = set_vault(&set_address(&state, ""), "");
        assert_eq!(state.fil_address(), "");
        assert_eq!(state.collateral_vault(), None);
    }

    #[test]
    fn test_set_initiated() {
        let state = set_initiated(&create_default(), false);
        assert!(!state.is_initiated());
        assert!(set_initiated(&state, true).is_initiated());
    }

    #[test]
    fn test_bare_transitions_allow_edits_while_loading() {
        let loading = begin_submission(&set_amount(&create_default(), 100.0).unwrap()).unwrap();
        let edited = set_amount(&loading, 50.0).unwrap();
        assert_eq!(edited.amount(), 50.0);
        assert!(edited.is_loading());
    }
}
