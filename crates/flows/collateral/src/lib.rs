//! Collateral Deposit Form
//!
//! Client-side state for one "deposit collateral" flow.
//!
//! # Architecture
//!
//! - [`state::FormState`] is the form buffer. Its fields are private and only
//!   change through [`transitions`].
//! - [`transitions`] are pure functions: they take a state by reference and
//!   return a new one, or an error with the input untouched.
//! - [`store::CollateralFormStore`] owns one state per flow and applies the
//!   configured edit policy on top of the transitions.

pub mod constants;
pub mod resolver;
pub mod state;
pub mod store;
pub mod transitions;

// Re-exports
pub use resolver::*;
pub use state::*;
pub use store::*;
