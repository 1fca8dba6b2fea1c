//! Substructure validators for the document header.

use crate::error::Finding;
use crate::model::*;
use crate::rules::{
    Charset, Constraint, RE_ALFANUMERICO, RE_CAP, RE_CODICE_FISCALE, RE_EMAIL, RE_PROVINCIA,
    check_required, check_text,
};
use crate::tables;

pub(crate) fn validate_header(
    header: &FatturaElettronicaHeader,
    prefix: &str,
    findings: &mut Vec<Finding>,
) {
    validate_dati_trasmissione(
        &header.dati_trasmissione,
        &format!("{prefix}.DatiTrasmissione"),
        findings,
    );
    validate_cedente_prestatore(
        &header.cedente_prestatore,
        &format!("{prefix}.CedentePrestatore"),
        findings,
    );
    validate_cessionario_committente(
        &header.cessionario_committente,
        &format!("{prefix}.CessionarioCommittente"),
        findings,
    );
}

fn validate_dati_trasmissione(dt: &DatiTrasmissione, prefix: &str, findings: &mut Vec<Finding>) {
    validate_id_fiscale_iva(
        &dt.id_trasmittente,
        &format!("{prefix}.IdTrasmittente"),
        findings,
    );

    check_required(
        findings,
        &format!("{prefix}.ProgressivoInvio"),
        &dt.progressivo_invio,
    );
    check_text(
        findings,
        &format!("{prefix}.ProgressivoInvio"),
        &dt.progressivo_invio,
        &[
            Constraint::Length { min: 1, max: 10 },
            Constraint::Pattern {
                re: &RE_ALFANUMERICO,
                expected: "caratteri alfanumerici",
            },
        ],
    );

    check_required(
        findings,
        &format!("{prefix}.FormatoTrasmissione"),
        &dt.formato_trasmissione,
    );
    check_text(
        findings,
        &format!("{prefix}.FormatoTrasmissione"),
        &dt.formato_trasmissione,
        &[Constraint::Domain(&tables::FORMATO_TRASMISSIONE)],
    );

    check_required(
        findings,
        &format!("{prefix}.CodiceDestinatario"),
        &dt.codice_destinatario,
    );
    check_text(
        findings,
        &format!("{prefix}.CodiceDestinatario"),
        &dt.codice_destinatario,
        &[
            Constraint::Length { min: 6, max: 7 },
            Constraint::Pattern {
                re: &RE_ALFANUMERICO,
                expected: "caratteri alfanumerici",
            },
        ],
    );

    if let Some(pec) = &dt.pec_destinatario {
        check_text(
            findings,
            &format!("{prefix}.PECDestinatario"),
            pec,
            &[
                Constraint::Length { min: 7, max: 256 },
                Constraint::Pattern {
                    re: &RE_EMAIL,
                    expected: "indirizzo e-mail",
                },
            ],
        );
    }
}

fn validate_cedente_prestatore(cp: &CedentePrestatore, prefix: &str, findings: &mut Vec<Finding>) {
    let da = &cp.dati_anagrafici;
    let da_prefix = format!("{prefix}.DatiAnagrafici");

    // IdFiscaleIVA is mandatory for the supplier
    validate_id_fiscale_iva(
        &da.id_fiscale_iva,
        &format!("{da_prefix}.IdFiscaleIVA"),
        findings,
    );

    if let Some(cf) = &da.codice_fiscale {
        check_text(
            findings,
            &format!("{da_prefix}.CodiceFiscale"),
            cf,
            &[Constraint::Pattern {
                re: &RE_CODICE_FISCALE,
                expected: "11-16 caratteri [A-Z0-9]",
            }],
        );
    }

    validate_anagrafica(&da.anagrafica, &format!("{da_prefix}.Anagrafica"), findings);

    check_required(
        findings,
        &format!("{da_prefix}.RegimeFiscale"),
        &da.regime_fiscale,
    );
    check_text(
        findings,
        &format!("{da_prefix}.RegimeFiscale"),
        &da.regime_fiscale,
        &[Constraint::Domain(&tables::REGIME_FISCALE)],
    );

    validate_sede(&cp.sede, &format!("{prefix}.Sede"), findings);

    if let Some(rea) = &cp.iscrizione_rea {
        if !rea.is_empty() {
            validate_iscrizione_rea(rea, &format!("{prefix}.IscrizioneREA"), findings);
        }
    }
}

fn validate_cessionario_committente(
    cc: &CessionarioCommittente,
    prefix: &str,
    findings: &mut Vec<Finding>,
) {
    let da = &cc.dati_anagrafici;
    let da_prefix = format!("{prefix}.DatiAnagrafici");

    // At least one of IdFiscaleIVA / CodiceFiscale must identify the customer
    let cf_blank = da.codice_fiscale.as_deref().is_none_or(str::is_empty);
    if cf_blank && da.id_fiscale_iva.is_empty() {
        findings.push(Finding::with_code(
            &da_prefix,
            "IdFiscaleIVA e CodiceFiscale non valorizzati (almeno uno dei due deve essere valorizzato)",
            "00417",
        ));
    }

    if !da.id_fiscale_iva.is_empty() {
        validate_id_fiscale_iva(
            &da.id_fiscale_iva,
            &format!("{da_prefix}.IdFiscaleIVA"),
            findings,
        );
    }

    if let Some(cf) = &da.codice_fiscale {
        check_text(
            findings,
            &format!("{da_prefix}.CodiceFiscale"),
            cf,
            &[Constraint::Pattern {
                re: &RE_CODICE_FISCALE,
                expected: "11-16 caratteri [A-Z0-9]",
            }],
        );
    }

    validate_anagrafica(&da.anagrafica, &format!("{da_prefix}.Anagrafica"), findings);
    validate_sede(&cc.sede, &format!("{prefix}.Sede"), findings);
}

pub(crate) fn validate_id_fiscale_iva(
    id: &IdFiscaleIVA,
    prefix: &str,
    findings: &mut Vec<Finding>,
) {
    check_required(findings, &format!("{prefix}.IdPaese"), &id.id_paese);
    check_text(
        findings,
        &format!("{prefix}.IdPaese"),
        &id.id_paese,
        &[Constraint::Domain(&tables::NAZIONE)],
    );

    check_required(findings, &format!("{prefix}.IdCodice"), &id.id_codice);
    check_text(
        findings,
        &format!("{prefix}.IdCodice"),
        &id.id_codice,
        &[
            Constraint::Length { min: 1, max: 28 },
            Constraint::Charset(Charset::BasicLatin),
        ],
    );
}

pub(crate) fn validate_anagrafica(an: &Anagrafica, prefix: &str, findings: &mut Vec<Finding>) {
    let denominazione = an.denominazione.as_deref().unwrap_or("");
    let nome = an.nome.as_deref().unwrap_or("");
    let cognome = an.cognome.as_deref().unwrap_or("");

    if denominazione.is_empty() {
        if nome.is_empty() && cognome.is_empty() {
            findings.push(Finding::new(
                prefix,
                "Denominazione oppure Nome e Cognome devono essere valorizzati",
            ));
        } else {
            check_required(findings, &format!("{prefix}.Nome"), nome);
            check_required(findings, &format!("{prefix}.Cognome"), cognome);
        }
    } else if !nome.is_empty() || !cognome.is_empty() {
        findings.push(Finding::new(
            prefix,
            "Denominazione non valorizzabile insieme a Nome e Cognome",
        ));
    }

    check_text(
        findings,
        &format!("{prefix}.Denominazione"),
        denominazione,
        &[
            Constraint::Length { min: 1, max: 80 },
            Constraint::Charset(Charset::Latin1Supplement),
        ],
    );
    check_text(
        findings,
        &format!("{prefix}.Nome"),
        nome,
        &[
            Constraint::Length { min: 1, max: 60 },
            Constraint::Charset(Charset::Latin1Supplement),
        ],
    );
    check_text(
        findings,
        &format!("{prefix}.Cognome"),
        cognome,
        &[
            Constraint::Length { min: 1, max: 60 },
            Constraint::Charset(Charset::Latin1Supplement),
        ],
    );
    if let Some(titolo) = &an.titolo {
        check_text(
            findings,
            &format!("{prefix}.Titolo"),
            titolo,
            &[
                Constraint::Length { min: 2, max: 10 },
                Constraint::Charset(Charset::Latin1Supplement),
            ],
        );
    }
    if let Some(eori) = &an.cod_eori {
        check_text(
            findings,
            &format!("{prefix}.CodEORI"),
            eori,
            &[
                Constraint::Length { min: 13, max: 17 },
                Constraint::Charset(Charset::BasicLatin),
            ],
        );
    }
}

pub(crate) fn validate_sede(sede: &Sede, prefix: &str, findings: &mut Vec<Finding>) {
    check_required(findings, &format!("{prefix}.Indirizzo"), &sede.indirizzo);
    check_text(
        findings,
        &format!("{prefix}.Indirizzo"),
        &sede.indirizzo,
        &[
            Constraint::Length { min: 1, max: 60 },
            Constraint::Charset(Charset::Latin1Supplement),
        ],
    );

    check_required(findings, &format!("{prefix}.CAP"), &sede.cap);
    check_text(
        findings,
        &format!("{prefix}.CAP"),
        &sede.cap,
        &[Constraint::Pattern {
            re: &RE_CAP,
            expected: "5 cifre",
        }],
    );

    check_required(findings, &format!("{prefix}.Comune"), &sede.comune);
    check_text(
        findings,
        &format!("{prefix}.Comune"),
        &sede.comune,
        &[
            Constraint::Length { min: 1, max: 60 },
            Constraint::Charset(Charset::Latin1Supplement),
        ],
    );

    check_required(findings, &format!("{prefix}.Nazione"), &sede.nazione);
    check_text(
        findings,
        &format!("{prefix}.Nazione"),
        &sede.nazione,
        &[Constraint::Domain(&tables::NAZIONE)],
    );

    // Provincia is mandatory for Italian addresses, two uppercase letters
    let provincia = sede.provincia.as_deref().unwrap_or("");
    if sede.nazione == "IT" {
        check_required(findings, &format!("{prefix}.Provincia"), provincia);
    }
    check_text(
        findings,
        &format!("{prefix}.Provincia"),
        provincia,
        &[Constraint::Pattern {
            re: &RE_PROVINCIA,
            expected: "2 lettere maiuscole",
        }],
    );
}

fn validate_iscrizione_rea(rea: &IscrizioneREA, prefix: &str, findings: &mut Vec<Finding>) {
    check_required(findings, &format!("{prefix}.Ufficio"), &rea.ufficio);
    check_text(
        findings,
        &format!("{prefix}.Ufficio"),
        &rea.ufficio,
        &[Constraint::Pattern {
            re: &RE_PROVINCIA,
            expected: "2 lettere maiuscole",
        }],
    );

    check_required(findings, &format!("{prefix}.NumeroREA"), &rea.numero_rea);
    check_text(
        findings,
        &format!("{prefix}.NumeroREA"),
        &rea.numero_rea,
        &[
            Constraint::Length { min: 1, max: 20 },
            Constraint::Charset(Charset::BasicLatin),
        ],
    );

    if let Some(socio) = &rea.socio_unico {
        check_text(
            findings,
            &format!("{prefix}.SocioUnico"),
            socio,
            &[Constraint::Domain(&tables::SOCIO_UNICO)],
        );
    }

    check_required(
        findings,
        &format!("{prefix}.StatoLiquidazione"),
        &rea.stato_liquidazione,
    );
    check_text(
        findings,
        &format!("{prefix}.StatoLiquidazione"),
        &rea.stato_liquidazione,
        &[Constraint::Domain(&tables::STATO_LIQUIDAZIONE)],
    );
}
