//! Domain layer containing the interview decision core.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, state machine, errors)
//! - `interview` - Classification, feature extraction, catalog, selection and phase control

pub mod foundation;
pub mod interview;
