//! FatturaPA document object graph.
//!
//! These types mirror the FatturaPA 1.2 element structure. They are
//! produced by an external deserializer and handed to the engine as an
//! immutable snapshot; the engine never mutates them. All monetary values
//! and VAT rates use [`rust_decimal::Decimal`] — never floating point.

mod body;
mod header;

pub use body::*;
pub use header::*;

use serde::{Deserialize, Serialize};

/// Root of the fiscal document: one header plus one or more bodies
/// (FatturaPA allows a batch of invoices sharing a header).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FatturaElettronica {
    #[serde(rename = "FatturaElettronicaHeader")]
    pub header: FatturaElettronicaHeader,
    #[serde(rename = "FatturaElettronicaBody")]
    pub body: Vec<FatturaElettronicaBody>,
}

/// Recursive emptiness predicate gating optional-substructure validation.
///
/// A structure is empty iff every scalar field is at its default/blank
/// value and every nested structure is itself empty. An absent-or-empty
/// optional block is silently skipped by the validators instead of being
/// reported field by field.
pub trait IsEmpty {
    fn is_empty(&self) -> bool;
}

pub(crate) fn opt_str_empty(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

pub(crate) fn opt_empty<T: IsEmpty>(value: &Option<T>) -> bool {
    value.as_ref().is_none_or(IsEmpty::is_empty)
}

pub(crate) fn all_empty<T: IsEmpty>(values: &[T]) -> bool {
    values.iter().all(IsEmpty::is_empty)
}
