//! Substructure validators for the invoice body.

use rust_decimal_macros::dec;

use crate::error::Finding;
use crate::model::*;
use crate::rules::{
    Charset, Constraint, RE_ABI_CAB, RE_BIC, RE_CONTIENE_CIFRA, RE_DIVISA, RE_IBAN, check_max,
    check_required, check_text,
};
use crate::tables;

use super::header::{validate_anagrafica, validate_id_fiscale_iva, validate_sede};

pub(crate) fn validate_body(body: &FatturaElettronicaBody, prefix: &str, findings: &mut Vec<Finding>) {
    validate_dati_generali_documento(
        &body.dati_generali.dati_generali_documento,
        &format!("{prefix}.DatiGenerali.DatiGeneraliDocumento"),
        findings,
    );

    if let Some(trasporto) = &body.dati_generali.dati_trasporto {
        if !trasporto.is_empty() {
            validate_dati_trasporto(
                trasporto,
                &format!("{prefix}.DatiGenerali.DatiTrasporto"),
                findings,
            );
        }
    }

    let bs = &body.dati_beni_servizi;
    let bs_prefix = format!("{prefix}.DatiBeniServizi");
    if bs.is_empty() {
        findings.push(Finding::new(&bs_prefix, "DatiBeniServizi è obbligatorio"));
    } else {
        for (i, linea) in bs.dettaglio_linee.iter().enumerate() {
            validate_dettaglio_linee(
                linea,
                &format!("{bs_prefix}.DettaglioLinee[{i}]"),
                findings,
            );
        }
        for (i, riepilogo) in bs.dati_riepilogo.iter().enumerate() {
            validate_dati_riepilogo(
                riepilogo,
                &format!("{bs_prefix}.DatiRiepilogo[{i}]"),
                findings,
            );
        }
    }

    if let Some(veicoli) = &body.dati_veicoli {
        if !veicoli.is_empty() {
            validate_dati_veicoli(veicoli, &format!("{prefix}.DatiVeicoli"), findings);
        }
    }

    for (i, pagamento) in body.dati_pagamento.iter().enumerate() {
        if !pagamento.is_empty() {
            validate_dati_pagamento(
                pagamento,
                &format!("{prefix}.DatiPagamento[{i}]"),
                findings,
            );
        }
    }

    for (i, allegato) in body.allegati.iter().enumerate() {
        if !allegato.is_empty() {
            validate_allegati(allegato, &format!("{prefix}.Allegati[{i}]"), findings);
        }
    }
}

fn validate_dati_generali_documento(
    doc: &DatiGeneraliDocumento,
    prefix: &str,
    findings: &mut Vec<Finding>,
) {
    check_required(
        findings,
        &format!("{prefix}.TipoDocumento"),
        &doc.tipo_documento,
    );
    check_text(
        findings,
        &format!("{prefix}.TipoDocumento"),
        &doc.tipo_documento,
        &[Constraint::Domain(&tables::TIPO_DOCUMENTO)],
    );

    check_required(findings, &format!("{prefix}.Divisa"), &doc.divisa);
    check_text(
        findings,
        &format!("{prefix}.Divisa"),
        &doc.divisa,
        &[Constraint::Pattern {
            re: &RE_DIVISA,
            expected: "codice ISO 4217, 3 lettere maiuscole",
        }],
    );

    if doc.data.is_none() {
        findings.push(Finding::new(format!("{prefix}.Data"), "campo obbligatorio"));
    }

    check_required(findings, &format!("{prefix}.Numero"), &doc.numero);
    check_text(
        findings,
        &format!("{prefix}.Numero"),
        &doc.numero,
        &[
            Constraint::Length { min: 1, max: 20 },
            Constraint::Charset(Charset::BasicLatin),
        ],
    );
    if !doc.numero.is_empty() && !RE_CONTIENE_CIFRA.is_match(&doc.numero) {
        findings.push(Finding::with_code(
            format!("{prefix}.Numero"),
            "Numero non contenente caratteri numerici",
            "00425",
        ));
    }

    for (i, ritenuta) in doc.dati_ritenuta.iter().enumerate() {
        if !ritenuta.is_empty() {
            validate_dati_ritenuta(ritenuta, &format!("{prefix}.DatiRitenuta[{i}]"), findings);
        }
    }

    if let Some(bollo) = &doc.dati_bollo {
        if !bollo.is_empty() {
            let path = format!("{prefix}.DatiBollo.BolloVirtuale");
            check_required(findings, &path, &bollo.bollo_virtuale);
            if !bollo.bollo_virtuale.is_empty() && bollo.bollo_virtuale != "SI" {
                findings.push(Finding::new(path, "valori accettati: SI"));
            }
        }
    }

    for (i, cassa) in doc.dati_cassa_previdenziale.iter().enumerate() {
        if !cassa.is_empty() {
            validate_dati_cassa_previdenziale(
                cassa,
                &format!("{prefix}.DatiCassaPrevidenziale[{i}]"),
                findings,
            );
        }
    }

    for (i, sconto) in doc.sconto_maggiorazione.iter().enumerate() {
        if !sconto.is_empty() {
            validate_sconto_maggiorazione(
                sconto,
                &format!("{prefix}.ScontoMaggiorazione[{i}]"),
                findings,
            );
        }
    }

    for (i, causale) in doc.causale.iter().enumerate() {
        check_text(
            findings,
            &format!("{prefix}.Causale[{i}]"),
            causale,
            &[
                Constraint::Length { min: 1, max: 200 },
                Constraint::Charset(Charset::Latin1Supplement),
            ],
        );
    }
}

fn validate_dati_ritenuta(ritenuta: &DatiRitenuta, prefix: &str, findings: &mut Vec<Finding>) {
    check_required(
        findings,
        &format!("{prefix}.TipoRitenuta"),
        &ritenuta.tipo_ritenuta,
    );
    check_text(
        findings,
        &format!("{prefix}.TipoRitenuta"),
        &ritenuta.tipo_ritenuta,
        &[Constraint::Domain(&tables::TIPO_RITENUTA)],
    );

    check_max(
        findings,
        &format!("{prefix}.AliquotaRitenuta"),
        ritenuta.aliquota_ritenuta,
        dec!(100),
    );

    check_required(
        findings,
        &format!("{prefix}.CausalePagamento"),
        &ritenuta.causale_pagamento,
    );
    check_text(
        findings,
        &format!("{prefix}.CausalePagamento"),
        &ritenuta.causale_pagamento,
        &[Constraint::Domain(&tables::CAUSALE_PAGAMENTO)],
    );
}

fn validate_dati_cassa_previdenziale(
    cassa: &DatiCassaPrevidenziale,
    prefix: &str,
    findings: &mut Vec<Finding>,
) {
    check_required(findings, &format!("{prefix}.TipoCassa"), &cassa.tipo_cassa);
    check_text(
        findings,
        &format!("{prefix}.TipoCassa"),
        &cassa.tipo_cassa,
        &[Constraint::Domain(&tables::TIPO_CASSA)],
    );

    check_max(findings, &format!("{prefix}.AlCassa"), cassa.al_cassa, dec!(100));
    check_max(
        findings,
        &format!("{prefix}.AliquotaIVA"),
        cassa.aliquota_iva,
        dec!(100),
    );

    if let Some(ritenuta) = &cassa.ritenuta {
        if !ritenuta.is_empty() && ritenuta != "SI" {
            findings.push(Finding::new(
                format!("{prefix}.Ritenuta"),
                "valori accettati: SI",
            ));
        }
    }

    let natura = cassa.natura.as_deref().unwrap_or("");
    check_text(
        findings,
        &format!("{prefix}.Natura"),
        natura,
        &[Constraint::Domain(&tables::NATURA)],
    );
    if cassa.aliquota_iva.is_zero() && natura.is_empty() {
        findings.push(Finding::with_code(
            format!("{prefix}.Natura"),
            "Natura non presente a fronte di AliquotaIVA pari a zero",
            "00413",
        ));
    }
    if !cassa.aliquota_iva.is_zero() && !natura.is_empty() {
        findings.push(Finding::new(
            format!("{prefix}.Natura"),
            "Natura presente a fronte di AliquotaIVA diversa da zero",
        ));
    }
}

fn validate_sconto_maggiorazione(
    sconto: &ScontoMaggiorazione,
    prefix: &str,
    findings: &mut Vec<Finding>,
) {
    check_required(findings, &format!("{prefix}.Tipo"), &sconto.tipo);
    check_text(
        findings,
        &format!("{prefix}.Tipo"),
        &sconto.tipo,
        &[Constraint::Domain(&tables::TIPO_SCONTO_MAGGIORAZIONE)],
    );

    if sconto.percentuale.is_none() && sconto.importo.is_none() {
        findings.push(Finding::new(
            prefix,
            "Percentuale oppure Importo devono essere valorizzati",
        ));
    }
    if let Some(percentuale) = sconto.percentuale {
        check_max(findings, &format!("{prefix}.Percentuale"), percentuale, dec!(100));
    }
}

fn validate_dettaglio_linee(linea: &DettaglioLinee, prefix: &str, findings: &mut Vec<Finding>) {
    if let Some(tipo) = &linea.tipo_cessione_prestazione {
        check_text(
            findings,
            &format!("{prefix}.TipoCessionePrestazione"),
            tipo,
            &[Constraint::Domain(&tables::TIPO_CESSIONE_PRESTAZIONE)],
        );
    }

    check_required(findings, &format!("{prefix}.Descrizione"), &linea.descrizione);
    check_text(
        findings,
        &format!("{prefix}.Descrizione"),
        &linea.descrizione,
        &[
            Constraint::Length { min: 1, max: 1000 },
            Constraint::Charset(Charset::Latin1Supplement),
        ],
    );

    if let Some(um) = &linea.unita_misura {
        check_text(
            findings,
            &format!("{prefix}.UnitaMisura"),
            um,
            &[
                Constraint::Length { min: 1, max: 10 },
                Constraint::Charset(Charset::BasicLatin),
            ],
        );
    }

    check_max(
        findings,
        &format!("{prefix}.AliquotaIVA"),
        linea.aliquota_iva,
        dec!(100),
    );

    if let Some(ritenuta) = &linea.ritenuta {
        if !ritenuta.is_empty() && ritenuta != "SI" {
            findings.push(Finding::new(
                format!("{prefix}.Ritenuta"),
                "valori accettati: SI",
            ));
        }
    }

    for (i, sconto) in linea.sconto_maggiorazione.iter().enumerate() {
        if !sconto.is_empty() {
            validate_sconto_maggiorazione(
                sconto,
                &format!("{prefix}.ScontoMaggiorazione[{i}]"),
                findings,
            );
        }
    }

    let natura = linea.natura.as_deref().unwrap_or("");
    check_text(
        findings,
        &format!("{prefix}.Natura"),
        natura,
        &[Constraint::Domain(&tables::NATURA)],
    );
    if linea.aliquota_iva.is_zero() && natura.is_empty() {
        findings.push(Finding::with_code(
            format!("{prefix}.Natura"),
            "Natura non presente a fronte di AliquotaIVA pari a zero",
            "00400",
        ));
    }
    if !linea.aliquota_iva.is_zero() && !natura.is_empty() {
        findings.push(Finding::with_code(
            format!("{prefix}.Natura"),
            "Natura presente a fronte di AliquotaIVA diversa da zero",
            "00401",
        ));
    }
}

fn validate_dati_riepilogo(riepilogo: &DatiRiepilogo, prefix: &str, findings: &mut Vec<Finding>) {
    check_max(
        findings,
        &format!("{prefix}.AliquotaIVA"),
        riepilogo.aliquota_iva,
        dec!(100),
    );

    let natura = riepilogo.natura.as_deref().unwrap_or("");
    check_text(
        findings,
        &format!("{prefix}.Natura"),
        natura,
        &[Constraint::Domain(&tables::NATURA)],
    );
    if riepilogo.aliquota_iva.is_zero() && natura.is_empty() {
        findings.push(Finding::with_code(
            format!("{prefix}.Natura"),
            "Natura non presente a fronte di AliquotaIVA pari a zero",
            "00429",
        ));
    }
    if !riepilogo.aliquota_iva.is_zero() && !natura.is_empty() {
        findings.push(Finding::with_code(
            format!("{prefix}.Natura"),
            "Natura presente a fronte di AliquotaIVA diversa da zero",
            "00430",
        ));
    }

    let esigibilita = riepilogo.esigibilita_iva.as_deref().unwrap_or("");
    check_text(
        findings,
        &format!("{prefix}.EsigibilitaIVA"),
        esigibilita,
        &[Constraint::Domain(&tables::ESIGIBILITA_IVA)],
    );
    if esigibilita == "S" && natura.starts_with("N6") {
        findings.push(Finding::with_code(
            format!("{prefix}.EsigibilitaIVA"),
            "EsigibilitaIVA valorizzata a S (scissione dei pagamenti) a fronte di operazione in inversione contabile (Natura N6)",
            "00420",
        ));
    }

    // Imposta must follow from rate and taxable amount, within the
    // tolerance of one currency unit
    let attesa = riepilogo.aliquota_iva * riepilogo.imponibile_importo / dec!(100);
    if (riepilogo.imposta - attesa).abs() >= dec!(1) {
        findings.push(Finding::with_code(
            format!("{prefix}.Imposta"),
            "Imposta non calcolata secondo le specifiche tecniche",
            "00421",
        ));
    }
}

fn validate_dati_trasporto(trasporto: &DatiTrasporto, prefix: &str, findings: &mut Vec<Finding>) {
    if let Some(vettore) = &trasporto.dati_anagrafici_vettore {
        if !vettore.is_empty() {
            let v_prefix = format!("{prefix}.DatiAnagraficiVettore");
            validate_id_fiscale_iva(
                &vettore.id_fiscale_iva,
                &format!("{v_prefix}.IdFiscaleIVA"),
                findings,
            );
            validate_anagrafica(&vettore.anagrafica, &format!("{v_prefix}.Anagrafica"), findings);
            if let Some(licenza) = &vettore.numero_licenza_guida {
                check_text(
                    findings,
                    &format!("{v_prefix}.NumeroLicenzaGuida"),
                    licenza,
                    &[
                        Constraint::Length { min: 1, max: 20 },
                        Constraint::Charset(Charset::BasicLatin),
                    ],
                );
            }
        }
    }

    if let Some(mezzo) = &trasporto.mezzo_trasporto {
        check_text(
            findings,
            &format!("{prefix}.MezzoTrasporto"),
            mezzo,
            &[
                Constraint::Length { min: 1, max: 80 },
                Constraint::Charset(Charset::Latin1Supplement),
            ],
        );
    }
    if let Some(causale) = &trasporto.causale_trasporto {
        check_text(
            findings,
            &format!("{prefix}.CausaleTrasporto"),
            causale,
            &[
                Constraint::Length { min: 1, max: 100 },
                Constraint::Charset(Charset::Latin1Supplement),
            ],
        );
    }
    if let Some(descrizione) = &trasporto.descrizione {
        check_text(
            findings,
            &format!("{prefix}.Descrizione"),
            descrizione,
            &[
                Constraint::Length { min: 1, max: 100 },
                Constraint::Charset(Charset::Latin1Supplement),
            ],
        );
    }
    if let Some(um) = &trasporto.unita_misura_peso {
        check_text(
            findings,
            &format!("{prefix}.UnitaMisuraPeso"),
            um,
            &[
                Constraint::Length { min: 1, max: 10 },
                Constraint::Charset(Charset::BasicLatin),
            ],
        );
    }
    if let Some(tipo_resa) = &trasporto.tipo_resa {
        check_text(
            findings,
            &format!("{prefix}.TipoResa"),
            tipo_resa,
            &[Constraint::Domain(&tables::TIPO_RESA)],
        );
    }
    if let Some(indirizzo) = &trasporto.indirizzo_resa {
        if !indirizzo.is_empty() {
            validate_sede(indirizzo, &format!("{prefix}.IndirizzoResa"), findings);
        }
    }

    if let Some(peso) = trasporto.peso_lordo {
        check_max(findings, &format!("{prefix}.PesoLordo"), peso, dec!(9999.99));
    }
    if let Some(peso) = trasporto.peso_netto {
        check_max(findings, &format!("{prefix}.PesoNetto"), peso, dec!(9999.99));
    }
}

fn validate_dati_veicoli(veicoli: &DatiVeicoli, prefix: &str, findings: &mut Vec<Finding>) {
    if veicoli.data.is_none() {
        findings.push(Finding::new(format!("{prefix}.Data"), "campo obbligatorio"));
    }
    check_required(
        findings,
        &format!("{prefix}.TotalePercorso"),
        &veicoli.totale_percorso,
    );
    check_text(
        findings,
        &format!("{prefix}.TotalePercorso"),
        &veicoli.totale_percorso,
        &[
            Constraint::Length { min: 1, max: 15 },
            Constraint::Charset(Charset::BasicLatin),
        ],
    );
}

fn validate_dati_pagamento(pagamento: &DatiPagamento, prefix: &str, findings: &mut Vec<Finding>) {
    check_required(
        findings,
        &format!("{prefix}.CondizioniPagamento"),
        &pagamento.condizioni_pagamento,
    );
    check_text(
        findings,
        &format!("{prefix}.CondizioniPagamento"),
        &pagamento.condizioni_pagamento,
        &[Constraint::Domain(&tables::CONDIZIONI_PAGAMENTO)],
    );

    for (i, dettaglio) in pagamento.dettaglio_pagamento.iter().enumerate() {
        if !dettaglio.is_empty() {
            validate_dettaglio_pagamento(
                dettaglio,
                &format!("{prefix}.DettaglioPagamento[{i}]"),
                findings,
            );
        }
    }
}

fn validate_dettaglio_pagamento(
    dettaglio: &DettaglioPagamento,
    prefix: &str,
    findings: &mut Vec<Finding>,
) {
    if let Some(beneficiario) = &dettaglio.beneficiario {
        check_text(
            findings,
            &format!("{prefix}.Beneficiario"),
            beneficiario,
            &[
                Constraint::Length { min: 1, max: 200 },
                Constraint::Charset(Charset::Latin1Supplement),
            ],
        );
    }

    check_required(
        findings,
        &format!("{prefix}.ModalitaPagamento"),
        &dettaglio.modalita_pagamento,
    );
    check_text(
        findings,
        &format!("{prefix}.ModalitaPagamento"),
        &dettaglio.modalita_pagamento,
        &[Constraint::Domain(&tables::MODALITA_PAGAMENTO)],
    );

    if let Some(istituto) = &dettaglio.istituto_finanziario {
        check_text(
            findings,
            &format!("{prefix}.IstitutoFinanziario"),
            istituto,
            &[
                Constraint::Length { min: 1, max: 80 },
                Constraint::Charset(Charset::Latin1Supplement),
            ],
        );
    }
    if let Some(iban) = &dettaglio.iban {
        check_text(
            findings,
            &format!("{prefix}.IBAN"),
            iban,
            &[Constraint::Pattern {
                re: &RE_IBAN,
                expected: "codice IBAN",
            }],
        );
    }
    if let Some(abi) = &dettaglio.abi {
        check_text(
            findings,
            &format!("{prefix}.ABI"),
            abi,
            &[Constraint::Pattern {
                re: &RE_ABI_CAB,
                expected: "5 cifre",
            }],
        );
    }
    if let Some(cab) = &dettaglio.cab {
        check_text(
            findings,
            &format!("{prefix}.CAB"),
            cab,
            &[Constraint::Pattern {
                re: &RE_ABI_CAB,
                expected: "5 cifre",
            }],
        );
    }
    if let Some(bic) = &dettaglio.bic {
        check_text(
            findings,
            &format!("{prefix}.BIC"),
            bic,
            &[Constraint::Pattern {
                re: &RE_BIC,
                expected: "codice BIC/SWIFT",
            }],
        );
    }
}

fn validate_allegati(allegato: &Allegati, prefix: &str, findings: &mut Vec<Finding>) {
    check_required(
        findings,
        &format!("{prefix}.NomeAttachment"),
        &allegato.nome_attachment,
    );
    check_text(
        findings,
        &format!("{prefix}.NomeAttachment"),
        &allegato.nome_attachment,
        &[
            Constraint::Length { min: 1, max: 60 },
            Constraint::Charset(Charset::Latin1Supplement),
        ],
    );

    if let Some(algoritmo) = &allegato.algoritmo_compressione {
        check_text(
            findings,
            &format!("{prefix}.AlgoritmoCompressione"),
            algoritmo,
            &[
                Constraint::Length { min: 1, max: 10 },
                Constraint::Charset(Charset::BasicLatin),
            ],
        );
    }
    if let Some(formato) = &allegato.formato_attachment {
        check_text(
            findings,
            &format!("{prefix}.FormatoAttachment"),
            formato,
            &[
                Constraint::Length { min: 1, max: 10 },
                Constraint::Charset(Charset::BasicLatin),
            ],
        );
    }
    if let Some(descrizione) = &allegato.descrizione_attachment {
        check_text(
            findings,
            &format!("{prefix}.DescrizioneAttachment"),
            descrizione,
            &[
                Constraint::Length { min: 1, max: 100 },
                Constraint::Charset(Charset::Latin1Supplement),
            ],
        );
    }

    check_required(findings, &format!("{prefix}.Attachment"), &allegato.attachment);
}
