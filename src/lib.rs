//! # fatturapa
//!
//! Business-rule validation engine for Italian electronic invoices
//! (FatturaPA). Validates an already-deserialized document object graph
//! against the Agenzia delle Entrate's published rules and maps failures
//! to the regulator's error codes ("00411", "00419", "00422", …).
//!
//! All monetary values and VAT rates use [`rust_decimal::Decimal`] —
//! never floating point. Parsing/serialization, digital signatures and
//! transmission are external collaborators: the engine only inspects a
//! document snapshot and produces findings.
//!
//! ## Quick Start
//!
//! ```rust
//! use fatturapa::model::{DatiRiepilogo, DettaglioLinee, FatturaElettronica, FatturaElettronicaBody};
//! use fatturapa::validate;
//! use rust_decimal_macros::dec;
//!
//! let mut body = FatturaElettronicaBody::default();
//! body.dati_beni_servizi.dettaglio_linee.push(DettaglioLinee {
//!     numero_linea: 1,
//!     descrizione: "Consulenza fiscale".into(),
//!     prezzo_unitario: dec!(100.00),
//!     prezzo_totale: dec!(100.00),
//!     aliquota_iva: dec!(22.00),
//!     ..Default::default()
//! });
//! body.dati_beni_servizi.dati_riepilogo.push(DatiRiepilogo {
//!     aliquota_iva: dec!(22.00),
//!     imponibile_importo: dec!(100.00),
//!     imposta: dec!(22.00),
//!     ..Default::default()
//! });
//!
//! let mut doc = FatturaElettronica::default();
//! doc.body.push(body);
//!
//! let findings = validate(&doc).unwrap();
//! // line items and summary blocks reconcile: no arithmetic finding
//! assert!(findings.iter().all(|f| f.code.as_deref() != Some("00422")));
//! ```

mod error;
pub mod model;
pub mod rules;
pub mod tables;
mod validate;

pub use error::{EngineError, Finding};
pub use validate::validate;
