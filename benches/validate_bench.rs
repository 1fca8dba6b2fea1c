use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use fatturapa::model::*;
use fatturapa::validate;

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn sede_it() -> Sede {
    Sede {
        indirizzo: "Via Roma 1".into(),
        cap: "00100".into(),
        comune: "Roma".into(),
        provincia: Some("RM".into()),
        nazione: "IT".into(),
        ..Default::default()
    }
}

fn header() -> FatturaElettronicaHeader {
    FatturaElettronicaHeader {
        dati_trasmissione: DatiTrasmissione {
            id_trasmittente: IdFiscaleIVA {
                id_paese: "IT".into(),
                id_codice: "01234567890".into(),
            },
            progressivo_invio: "00001".into(),
            formato_trasmissione: "FPR12".into(),
            codice_destinatario: "0000000".into(),
            pec_destinatario: None,
        },
        cedente_prestatore: CedentePrestatore {
            dati_anagrafici: DatiAnagraficiCedente {
                id_fiscale_iva: IdFiscaleIVA {
                    id_paese: "IT".into(),
                    id_codice: "01234567890".into(),
                },
                codice_fiscale: None,
                anagrafica: Anagrafica {
                    denominazione: Some("Benchmark SRL".into()),
                    ..Default::default()
                },
                regime_fiscale: "RF01".into(),
            },
            sede: sede_it(),
            iscrizione_rea: None,
        },
        cessionario_committente: CessionarioCommittente {
            dati_anagrafici: DatiAnagraficiCessionario {
                id_fiscale_iva: IdFiscaleIVA::default(),
                codice_fiscale: Some("RSSMRA80A01H501U".into()),
                anagrafica: Anagrafica {
                    denominazione: Some("Cliente SPA".into()),
                    ..Default::default()
                },
            },
            sede: sede_it(),
        },
    }
}

fn build_invoice(lines: u32) -> FatturaElettronica {
    let mut body = FatturaElettronicaBody::default();
    body.dati_generali.dati_generali_documento = DatiGeneraliDocumento {
        tipo_documento: "TD01".into(),
        divisa: "EUR".into(),
        data: Some(test_date()),
        numero: "BENCH-1".into(),
        ..Default::default()
    };

    let mut imponibile = Decimal::ZERO;
    for i in 1..=lines {
        let prezzo = dec!(120.00);
        imponibile += prezzo;
        body.dati_beni_servizi.dettaglio_linee.push(DettaglioLinee {
            numero_linea: i,
            descrizione: format!("Prestazione di servizi {i}"),
            quantita: Some(dec!(5)),
            prezzo_unitario: dec!(24.00),
            prezzo_totale: prezzo,
            aliquota_iva: dec!(22.00),
            ..Default::default()
        });
    }
    body.dati_beni_servizi.dati_riepilogo.push(DatiRiepilogo {
        aliquota_iva: dec!(22.00),
        imponibile_importo: imponibile,
        imposta: dec!(22.00) * imponibile / dec!(100),
        ..Default::default()
    });

    FatturaElettronica {
        header: header(),
        body: vec![body],
    }
}

fn bench_validate(c: &mut Criterion) {
    let small = build_invoice(10);
    c.bench_function("validate_10_lines", |b| {
        b.iter(|| validate(black_box(&small)).unwrap())
    });

    let large = build_invoice(1000);
    c.bench_function("validate_1000_lines", |b| {
        b.iter(|| validate(black_box(&large)).unwrap())
    });
}

criterion_group!(benches, bench_validate);
criterion_main!(benches);
