//! Aggregate reconciliation over the body's full collections.
//!
//! These checks reason document-wide across line items, summary blocks
//! and social-security contributions, so they run unconditionally per
//! body — never gated by the per-substructure emptiness test.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::Finding;
use crate::model::{FatturaElettronicaBody, IsEmpty};

/// Maximum absolute discrepancy tolerated by the per-rate reconciliation,
/// one minor currency unit as mandated by the technical specifications.
const TOLLERANZA: Decimal = dec!(1);

/// Document type reserved for autofattura per splafonamento, which
/// forbids zero-rate lines.
const TIPO_DOCUMENTO_SPLAFONAMENTO: &str = "TD21";

#[derive(Default)]
struct Totali {
    imponibile: Decimal,
    arrotondamento: Decimal,
    prezzo_totale: Decimal,
    contributo_cassa: Decimal,
}

pub(crate) fn reconcile_body(
    body: &FatturaElettronicaBody,
    prefix: &str,
    findings: &mut Vec<Finding>,
) {
    let doc = &body.dati_generali.dati_generali_documento;
    let beni = &body.dati_beni_servizi;

    // 00411 — a line flagged for withholding requires document-level
    // withholding data
    let ritenuta_vuota = doc.dati_ritenuta.iter().all(IsEmpty::is_empty);
    if ritenuta_vuota
        && beni
            .dettaglio_linee
            .iter()
            .any(|l| l.ritenuta.as_deref() == Some("SI"))
    {
        findings.push(Finding::with_code(
            format!("{prefix}.DatiGenerali.DatiGeneraliDocumento.DatiRitenuta"),
            "DatiRitenuta non presente a fronte di almeno un blocco DettaglioLinee con Ritenuta uguale a SI",
            "00411",
        ));
    }

    // 00415 — same requirement for a contribution flagged for withholding
    if ritenuta_vuota
        && doc
            .dati_cassa_previdenziale
            .iter()
            .any(|c| c.ritenuta.as_deref() == Some("SI"))
    {
        findings.push(Finding::with_code(
            format!("{prefix}.DatiGenerali.DatiGeneraliDocumento.DatiRitenuta"),
            "DatiRitenuta non presente a fronte di almeno un blocco DatiCassaPrevidenziale con Ritenuta uguale a SI",
            "00415",
        ));
    }

    // 00419 — every VAT rate referenced by a line or contribution must be
    // covered by the summary blocks. Count proxy: enough summary blocks to
    // cover the distinct rates. Deliberately not set equality, matching
    // the published check (duplicate summary rates can slip through).
    let mut aliquote: BTreeSet<Decimal> = BTreeSet::new();
    for cassa in &doc.dati_cassa_previdenziale {
        if !cassa.is_empty() {
            aliquote.insert(cassa.aliquota_iva.round_dp(2));
        }
    }
    for linea in &beni.dettaglio_linee {
        aliquote.insert(linea.aliquota_iva.round_dp(2));
    }
    if beni.dati_riepilogo.len() < aliquote.len() {
        findings.push(Finding::with_code(
            format!("{prefix}.DatiBeniServizi.DatiRiepilogo"),
            "DatiRiepilogo non presente in corrispondenza di almeno un valore DettaglioLinee.AliquotaIVA o DatiCassaPrevidenziale.AliquotaIVA",
            "00419",
        ));
    }

    // 00422 — per-rate reconciliation: summary taxable plus rounding must
    // match line totals plus contributions within the tolerance. Missing
    // sides of a bucket stay at zero.
    let mut totali: BTreeMap<Decimal, Totali> = BTreeMap::new();
    for riepilogo in &beni.dati_riepilogo {
        let totale = totali
            .entry(riepilogo.aliquota_iva.round_dp(2))
            .or_default();
        totale.imponibile += riepilogo.imponibile_importo;
        totale.arrotondamento += riepilogo.arrotondamento.unwrap_or_default();
    }
    for linea in &beni.dettaglio_linee {
        let totale = totali.entry(linea.aliquota_iva.round_dp(2)).or_default();
        totale.prezzo_totale += linea.prezzo_totale;
    }
    for cassa in &doc.dati_cassa_previdenziale {
        if !cassa.is_empty() {
            let totale = totali.entry(cassa.aliquota_iva.round_dp(2)).or_default();
            totale.contributo_cassa += cassa.importo_contributo_cassa;
        }
    }
    let quadratura = totali.values().all(|t| {
        (t.imponibile + t.arrotondamento - (t.prezzo_totale + t.contributo_cassa)).abs()
            < TOLLERANZA
    });
    if !quadratura {
        findings.push(Finding::with_code(
            format!("{prefix}.DatiBeniServizi.DatiRiepilogo"),
            "ImponibileImporto non calcolato secondo le specifiche tecniche",
            "00422",
        ));
    }

    // 00474 — the reserved document type requires a nonzero rate on every
    // line
    if doc.tipo_documento == TIPO_DOCUMENTO_SPLAFONAMENTO
        && beni.dettaglio_linee.iter().any(|l| l.aliquota_iva.is_zero())
    {
        findings.push(Finding::with_code(
            format!("{prefix}.DatiGenerali.DatiGeneraliDocumento.TipoDocumento"),
            "Nel tipo documento 'autofattura per splafonamento' tutte le linee di dettaglio devono avere un'aliquota IVA diversa da zero",
            "00474",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DatiCassaPrevidenziale, DatiRiepilogo, DatiRitenuta, DettaglioLinee};

    fn body_with(
        linee: Vec<DettaglioLinee>,
        riepiloghi: Vec<DatiRiepilogo>,
    ) -> FatturaElettronicaBody {
        let mut body = FatturaElettronicaBody::default();
        body.dati_beni_servizi.dettaglio_linee = linee;
        body.dati_beni_servizi.dati_riepilogo = riepiloghi;
        body
    }

    fn linea(aliquota: Decimal, prezzo_totale: Decimal) -> DettaglioLinee {
        DettaglioLinee {
            aliquota_iva: aliquota,
            prezzo_totale,
            ..Default::default()
        }
    }

    fn riepilogo(aliquota: Decimal, imponibile: Decimal) -> DatiRiepilogo {
        DatiRiepilogo {
            aliquota_iva: aliquota,
            imponibile_importo: imponibile,
            imposta: aliquota * imponibile / dec!(100),
            ..Default::default()
        }
    }

    fn codes(body: &FatturaElettronicaBody) -> Vec<String> {
        let mut findings = Vec::new();
        reconcile_body(body, "Body", &mut findings);
        findings.into_iter().filter_map(|f| f.code).collect()
    }

    #[test]
    fn balanced_buckets_reconcile() {
        let body = body_with(
            vec![linea(dec!(22), dec!(60)), linea(dec!(22), dec!(40))],
            vec![riepilogo(dec!(22), dec!(100))],
        );
        assert!(codes(&body).is_empty());
    }

    #[test]
    fn discrepancy_above_tolerance_yields_00422() {
        let body = body_with(
            vec![linea(dec!(22), dec!(100))],
            vec![riepilogo(dec!(22), dec!(105))],
        );
        assert_eq!(codes(&body), vec!["00422"]);
    }

    #[test]
    fn discrepancy_below_tolerance_is_accepted() {
        let body = body_with(
            vec![linea(dec!(22), dec!(100))],
            vec![riepilogo(dec!(22), dec!(100.99))],
        );
        assert!(codes(&body).is_empty());
    }

    #[test]
    fn summary_rounding_enters_the_bucket() {
        let mut riep = riepilogo(dec!(22), dec!(99.50));
        riep.arrotondamento = Some(dec!(0.50));
        let body = body_with(vec![linea(dec!(22), dec!(100))], vec![riep]);
        assert!(codes(&body).is_empty());
    }

    #[test]
    fn uncovered_rate_yields_00419() {
        let body = body_with(vec![linea(dec!(10), dec!(50))], vec![]);
        let found = codes(&body);
        assert!(found.contains(&"00419".to_string()));
    }

    #[test]
    fn duplicate_summary_rates_satisfy_the_count_proxy() {
        // Two summary blocks at the same rate cover two distinct line
        // rates by count, even though 4% has no true counterpart.
        let body = body_with(
            vec![linea(dec!(22), dec!(100)), linea(dec!(4), dec!(0))],
            vec![riepilogo(dec!(22), dec!(50)), riepilogo(dec!(22), dec!(50))],
        );
        let mut findings = Vec::new();
        reconcile_body(&body, "Body", &mut findings);
        assert!(findings.iter().all(|f| f.code.as_deref() != Some("00419")));
    }

    #[test]
    fn empty_contribution_block_adds_no_rate() {
        // An all-default cassa must not introduce a phantom 0% rate into
        // the coverage set or the reconciliation buckets
        let mut body = body_with(
            vec![linea(dec!(22), dec!(100))],
            vec![riepilogo(dec!(22), dec!(100))],
        );
        body.dati_generali
            .dati_generali_documento
            .dati_cassa_previdenziale
            .push(DatiCassaPrevidenziale::default());
        assert!(codes(&body).is_empty());
    }

    #[test]
    fn withholding_line_without_dati_ritenuta_yields_00411() {
        let mut body = body_with(
            vec![linea(dec!(22), dec!(100))],
            vec![riepilogo(dec!(22), dec!(100))],
        );
        body.dati_beni_servizi.dettaglio_linee[0].ritenuta = Some("SI".into());
        assert_eq!(codes(&body), vec!["00411"]);

        body.dati_generali
            .dati_generali_documento
            .dati_ritenuta
            .push(DatiRitenuta {
                tipo_ritenuta: "RT01".into(),
                importo_ritenuta: dec!(20),
                aliquota_ritenuta: dec!(20),
                causale_pagamento: "A".into(),
            });
        assert!(codes(&body).is_empty());
    }

    #[test]
    fn withholding_contribution_without_dati_ritenuta_yields_00415() {
        let mut body = body_with(
            vec![linea(dec!(22), dec!(100))],
            vec![riepilogo(dec!(22), dec!(104))],
        );
        body.dati_generali
            .dati_generali_documento
            .dati_cassa_previdenziale
            .push(DatiCassaPrevidenziale {
                tipo_cassa: "TC01".into(),
                al_cassa: dec!(4),
                importo_contributo_cassa: dec!(4),
                aliquota_iva: dec!(22),
                ritenuta: Some("SI".into()),
                ..Default::default()
            });
        assert_eq!(codes(&body), vec!["00415"]);
    }

    #[test]
    fn td21_with_zero_rate_line_yields_00474() {
        let mut body = body_with(
            vec![linea(dec!(0), dec!(100))],
            vec![riepilogo(dec!(0), dec!(100))],
        );
        body.dati_generali.dati_generali_documento.tipo_documento = "TD21".into();
        assert_eq!(codes(&body), vec!["00474"]);

        body.dati_beni_servizi.dettaglio_linee[0].aliquota_iva = dec!(22);
        body.dati_beni_servizi.dati_riepilogo[0].aliquota_iva = dec!(22);
        body.dati_beni_servizi.dati_riepilogo[0].imposta = dec!(22);
        assert!(codes(&body).is_empty());
    }
}
