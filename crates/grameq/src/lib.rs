//! # grameq
//!
//! Structural equality for GramGen record types.
//!
//! ## Architecture
//! - **EqPolicy**: per-type field-selection policy (all / allow-list / deny-list)
//! - **Record**: declared field list plus per-field comparison
//! - **struct_eq**: exact-concrete-type comparison over the selected fields
//!
//! Comparison is pure and single-threaded; two values of different
//! concrete types are never equal regardless of their fields.

#![warn(missing_docs)]

mod error;
mod policy;
mod record;

pub use error::{Error, Result};
pub use policy::EqPolicy;
pub use record::{struct_eq, Record};
