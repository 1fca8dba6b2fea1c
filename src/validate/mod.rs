//! Validation orchestrator.
//!
//! One synchronous, read-only pass over the whole document: header first,
//! then each body in order — substructure validators, then the aggregate
//! reconciliation. Business-rule violations accumulate in the finding
//! list; only a deserializer contract breach aborts the pass.

mod body;
mod header;
mod reconcile;

use crate::error::{EngineError, Finding};
use crate::model::FatturaElettronica;

/// Validate a fiscal document against the published business rules.
///
/// Returns the complete ordered finding list; an empty list means the
/// document is valid. The function is pure: two calls on an unmodified
/// document produce identical ordered findings. A document the engine
/// cannot safely traverse (no body at all) fails fast with an
/// [`EngineError`] instead of producing findings.
pub fn validate(doc: &FatturaElettronica) -> Result<Vec<Finding>, EngineError> {
    if doc.body.is_empty() {
        return Err(EngineError::NoBodies);
    }

    let mut findings = Vec::new();

    header::validate_header(&doc.header, "FatturaElettronicaHeader", &mut findings);

    for (i, body) in doc.body.iter().enumerate() {
        let prefix = format!("FatturaElettronicaBody[{i}]");
        body::validate_body(body, &prefix, &mut findings);
        reconcile::reconcile_body(body, &prefix, &mut findings);
    }

    Ok(findings)
}
