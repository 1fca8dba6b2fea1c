//! Field rule primitives.
//!
//! Atomic, pure checks over one field value: length bound, regex pattern,
//! character-set class, numeric upper bound, domain-table membership.
//! Constraints are data (`Constraint`) evaluated by one generic
//! interpreter, so substructure validators stay declarative.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::error::Finding;
use crate::tables::CodeTable;

/// Character-set classes admitted by the FatturaPA specifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// U+0000..=U+007F.
    BasicLatin,
    /// Basic Latin plus the printable part of the Latin-1 Supplement
    /// block (U+00A0..=U+00FF). The C1 controls U+0080..=U+009F are
    /// excluded, narrower than the full Unicode block.
    Latin1Supplement,
}

impl Charset {
    pub fn permits(self, c: char) -> bool {
        match self {
            Charset::BasicLatin => c <= '\u{7f}',
            Charset::Latin1Supplement => c <= '\u{7f}' || ('\u{a0}'..='\u{ff}').contains(&c),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Charset::BasicLatin => "Basic Latin",
            Charset::Latin1Supplement => "Latin-1 Supplement",
        }
    }
}

/// One declarative constraint over a text field.
pub enum Constraint {
    /// Character count bounds, inclusive.
    Length { min: usize, max: usize },
    /// Anchored regex the value must match.
    Pattern {
        re: &'static LazyLock<Regex>,
        expected: &'static str,
    },
    /// Every character must belong to the class.
    Charset(Charset),
    /// Value must be a member of the domain table.
    Domain(&'static CodeTable),
}

/// Evaluate `constraints` against a text field, accumulating findings.
///
/// Empty values are skipped: whether an empty optional field is
/// acceptable is decided by the caller (conditional gating or an explicit
/// required-field check), not by the primitives.
pub fn check_text(findings: &mut Vec<Finding>, path: &str, value: &str, constraints: &[Constraint]) {
    if value.is_empty() {
        return;
    }

    for constraint in constraints {
        match constraint {
            Constraint::Length { min, max } => {
                let len = value.chars().count();
                if len < *min || len > *max {
                    findings.push(Finding::new(
                        path,
                        format!("la lunghezza deve essere compresa tra {min} e {max} caratteri"),
                    ));
                }
            }
            Constraint::Pattern { re, expected } => {
                if !re.is_match(value) {
                    findings.push(Finding::new(
                        path,
                        format!("non rispetta il formato atteso ({expected})"),
                    ));
                }
            }
            Constraint::Charset(charset) => {
                if let Some(c) = value.chars().find(|c| !charset.permits(*c)) {
                    findings.push(Finding::new(
                        path,
                        format!(
                            "carattere {c:?} non ammesso (set di caratteri {})",
                            charset.label()
                        ),
                    ));
                }
            }
            Constraint::Domain(table) => {
                if !table.contains(value) {
                    findings.push(Finding::new(
                        path,
                        format!("valori accettati: {}", table.accepted_values()),
                    ));
                }
            }
        }
    }
}

/// Numeric upper bound over an amount field.
pub fn check_max(findings: &mut Vec<Finding>, path: &str, value: Decimal, max: Decimal) {
    if value > max {
        findings.push(Finding::new(
            path,
            format!("deve essere minore o uguale a {max}"),
        ));
    }
}

/// Mandatory text field.
pub fn check_required(findings: &mut Vec<Finding>, path: &str, value: &str) {
    if value.trim().is_empty() {
        findings.push(Finding::new(path, "campo obbligatorio"));
    }
}

// Shared compiled patterns. Compiled on first use, immutable afterwards.

/// Italian postal code.
pub static RE_CAP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{5}$").unwrap());

/// Province abbreviation.
pub static RE_PROVINCIA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").unwrap());

/// Codice fiscale (11-digit company or 16-char personal form).
pub static RE_CODICE_FISCALE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{11,16}$").unwrap());

/// ISO 4217 currency code shape.
pub static RE_DIVISA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").unwrap());

/// Alphanumeric identifier (ProgressivoInvio, CodiceDestinatario).
pub static RE_ALFANUMERICO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

/// At least one numeric character (rule 00425 on Numero).
pub static RE_CONTIENE_CIFRA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").unwrap());

/// ABI and CAB bank codes.
pub static RE_ABI_CAB: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{5}$").unwrap());

/// IBAN shape.
pub static RE_IBAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}[0-9]{2}[A-Za-z0-9]{11,30}$").unwrap());

/// BIC/SWIFT shape.
pub static RE_BIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{6}[A-Z0-9]{2}([A-Z0-9]{3})?$").unwrap());

/// Minimal e-mail shape for PEC addresses.
pub static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::CONDIZIONI_PAGAMENTO;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_values_are_skipped() {
        let mut findings = Vec::new();
        check_text(
            &mut findings,
            "X",
            "",
            &[Constraint::Length { min: 1, max: 3 }],
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        let mut findings = Vec::new();
        // 4 chars, 7 bytes in UTF-8
        check_text(
            &mut findings,
            "X",
            "àèìò",
            &[Constraint::Length { min: 1, max: 4 }],
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn basic_latin_rejects_accented_chars() {
        let mut findings = Vec::new();
        check_text(
            &mut findings,
            "X",
            "città",
            &[Constraint::Charset(Charset::BasicLatin)],
        );
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("Basic Latin"));
    }

    #[test]
    fn latin1_supplement_accepts_accented_chars() {
        let mut findings = Vec::new();
        check_text(
            &mut findings,
            "X",
            "società città",
            &[Constraint::Charset(Charset::Latin1Supplement)],
        );
        assert!(findings.is_empty());

        // Outside Latin-1: rejected
        check_text(
            &mut findings,
            "X",
            "fattura €",
            &[Constraint::Charset(Charset::Latin1Supplement)],
        );
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn latin1_supplement_rejects_c1_controls() {
        let mut findings = Vec::new();
        check_text(
            &mut findings,
            "X",
            "nota\u{85}finale",
            &[Constraint::Charset(Charset::Latin1Supplement)],
        );
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn domain_failure_enumerates_accepted_set() {
        let mut findings = Vec::new();
        check_text(
            &mut findings,
            "CondizioniPagamento",
            "TP09",
            &[Constraint::Domain(&CONDIZIONI_PAGAMENTO)],
        );
        assert_eq!(findings.len(), 1);
        assert_eq!(
            findings[0].message,
            "valori accettati: TP01, TP02, TP03"
        );
    }

    #[test]
    fn numeric_bound() {
        let mut findings = Vec::new();
        check_max(&mut findings, "PesoLordo", dec!(9999.99), dec!(9999.99));
        assert!(findings.is_empty());
        check_max(&mut findings, "PesoLordo", dec!(10000), dec!(9999.99));
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn shared_patterns() {
        assert!(RE_CAP.is_match("00100"));
        assert!(!RE_CAP.is_match("0010"));
        assert!(RE_CODICE_FISCALE.is_match("RSSMRA80A01H501U"));
        assert!(!RE_CODICE_FISCALE.is_match("rossi"));
        assert!(RE_CONTIENE_CIFRA.is_match("FT/2024/1"));
        assert!(!RE_CONTIENE_CIFRA.is_match("FT/BOZZA"));
        assert!(RE_IBAN.is_match("IT60X0542811101000000123456"));
        assert!(RE_BIC.is_match("UNCRITMM"));
        assert!(RE_EMAIL.is_match("fatture@pec.esempio.it"));
    }
}
