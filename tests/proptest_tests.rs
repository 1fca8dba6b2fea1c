//! Property-based tests: determinism and reconciliation tolerance under
//! randomized amounts and rates.
//!
//! Field findings from the deliberately skeletal header are irrelevant
//! here; the properties assert on specific regulator codes only.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use fatturapa::model::*;
use fatturapa::validate;

fn doc_with(lines: Vec<DettaglioLinee>, riepiloghi: Vec<DatiRiepilogo>) -> FatturaElettronica {
    let mut body = FatturaElettronicaBody::default();
    body.dati_generali.dati_generali_documento = DatiGeneraliDocumento {
        tipo_documento: "TD01".into(),
        divisa: "EUR".into(),
        data: chrono::NaiveDate::from_ymd_opt(2024, 6, 15),
        numero: "1".into(),
        ..Default::default()
    };
    body.dati_beni_servizi.dettaglio_linee = lines;
    body.dati_beni_servizi.dati_riepilogo = riepiloghi;

    let mut doc = FatturaElettronica::default();
    doc.body = vec![body];
    doc
}

fn linea(prezzo: Decimal, aliquota: Decimal) -> DettaglioLinee {
    DettaglioLinee {
        numero_linea: 1,
        descrizione: "Merce".into(),
        prezzo_unitario: prezzo,
        prezzo_totale: prezzo,
        aliquota_iva: aliquota,
        natura: if aliquota.is_zero() {
            Some("N2.2".into())
        } else {
            None
        },
        ..Default::default()
    }
}

/// Cents-scaled decimal, two fractional digits.
fn cents(raw: i64) -> Decimal {
    Decimal::new(raw, 2)
}

fn has_code(findings: &[fatturapa::Finding], code: &str) -> bool {
    findings.iter().any(|f| f.code.as_deref() == Some(code))
}

proptest! {
    // The engine is a pure function of the document: two runs agree on
    // both the set and the order of findings.
    #[test]
    fn validation_is_deterministic(
        prezzi in prop::collection::vec(0i64..10_000_00, 1..8),
        aliquota_raw in 0i64..100_00,
    ) {
        let aliquota = cents(aliquota_raw);
        let lines = prezzi.iter().map(|p| linea(cents(*p), aliquota)).collect();
        let doc = doc_with(lines, Vec::new());

        let first = validate(&doc).unwrap();
        let second = validate(&doc).unwrap();
        prop_assert_eq!(first, second);
    }

    // A summary taxable amount within one currency unit of the line total
    // reconciles; a discrepancy of one unit or more does not.
    #[test]
    fn reconciliation_honors_the_unit_tolerance(
        prezzo_raw in 0i64..10_000_00,
        aliquota_raw in 1i64..100_00,
        delta_raw in -99i64..100,
        eccesso_raw in 100i64..50_00,
    ) {
        let prezzo = cents(prezzo_raw);
        let aliquota = cents(aliquota_raw);

        let in_tolleranza = prezzo + cents(delta_raw);
        let doc = doc_with(
            vec![linea(prezzo, aliquota)],
            vec![DatiRiepilogo {
                aliquota_iva: aliquota,
                imponibile_importo: in_tolleranza,
                imposta: aliquota * in_tolleranza / dec!(100),
                ..Default::default()
            }],
        );
        let findings = validate(&doc).unwrap();
        prop_assert!(!has_code(&findings, "00422"), "spurious 00422: {findings:?}");

        let fuori_tolleranza = prezzo + cents(eccesso_raw);
        let doc = doc_with(
            vec![linea(prezzo, aliquota)],
            vec![DatiRiepilogo {
                aliquota_iva: aliquota,
                imponibile_importo: fuori_tolleranza,
                imposta: aliquota * fuori_tolleranza / dec!(100),
                ..Default::default()
            }],
        );
        let findings = validate(&doc).unwrap();
        prop_assert!(has_code(&findings, "00422"), "missing 00422: {findings:?}");
    }

    // Summary coverage: a summary block per distinct rate silences 00419,
    // one block short raises it.
    #[test]
    fn summary_coverage_tracks_distinct_rates(
        aliquote_raw in prop::collection::btree_set(0i64..100_00, 2..5),
    ) {
        let aliquote: Vec<Decimal> = aliquote_raw.iter().map(|a| cents(*a)).collect();
        let lines: Vec<DettaglioLinee> =
            aliquote.iter().map(|a| linea(Decimal::ZERO, *a)).collect();
        let riepiloghi: Vec<DatiRiepilogo> = aliquote
            .iter()
            .map(|a| DatiRiepilogo {
                aliquota_iva: *a,
                natura: if a.is_zero() { Some("N2.2".into()) } else { None },
                ..Default::default()
            })
            .collect();

        let covered = doc_with(lines.clone(), riepiloghi.clone());
        let findings = validate(&covered).unwrap();
        prop_assert!(!has_code(&findings, "00419"), "spurious 00419: {findings:?}");

        let mut short = riepiloghi;
        short.pop();
        let uncovered = doc_with(lines, short);
        let findings = validate(&uncovered).unwrap();
        prop_assert!(has_code(&findings, "00419"), "missing 00419: {findings:?}");
    }
}
