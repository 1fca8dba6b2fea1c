use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::header::{Anagrafica, IdFiscaleIVA, Sede};
use super::{IsEmpty, all_empty, opt_empty, opt_str_empty};

/// One invoice: general data, line items, payment data, attachments,
/// transport and vehicle data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FatturaElettronicaBody {
    pub dati_generali: DatiGenerali,
    pub dati_beni_servizi: DatiBeniServizi,
    pub dati_veicoli: Option<DatiVeicoli>,
    pub dati_pagamento: Vec<DatiPagamento>,
    pub allegati: Vec<Allegati>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatiGenerali {
    pub dati_generali_documento: DatiGeneraliDocumento,
    pub dati_trasporto: Option<DatiTrasporto>,
}

/// Document-level general data: type, currency, date, number, withholding,
/// stamp duty, social-security contributions, discounts and causals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatiGeneraliDocumento {
    pub tipo_documento: String,
    pub divisa: String,
    pub data: Option<NaiveDate>,
    pub numero: String,
    pub dati_ritenuta: Vec<DatiRitenuta>,
    pub dati_bollo: Option<DatiBollo>,
    pub dati_cassa_previdenziale: Vec<DatiCassaPrevidenziale>,
    pub sconto_maggiorazione: Vec<ScontoMaggiorazione>,
    pub importo_totale_documento: Option<Decimal>,
    pub arrotondamento: Option<Decimal>,
    pub causale: Vec<String>,
}

/// Withholding arrangement. Presence signals that at least one line or
/// contribution is subject to withholding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatiRitenuta {
    pub tipo_ritenuta: String,
    pub importo_ritenuta: Decimal,
    pub aliquota_ritenuta: Decimal,
    pub causale_pagamento: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatiBollo {
    pub bollo_virtuale: String,
    pub importo_bollo: Option<Decimal>,
}

/// Social-security contribution block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatiCassaPrevidenziale {
    pub tipo_cassa: String,
    pub al_cassa: Decimal,
    pub importo_contributo_cassa: Decimal,
    pub imponibile_cassa: Option<Decimal>,
    #[serde(rename = "AliquotaIVA")]
    pub aliquota_iva: Decimal,
    pub ritenuta: Option<String>,
    pub natura: Option<String>,
    pub riferimento_amministrazione: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScontoMaggiorazione {
    pub tipo: String,
    pub percentuale: Option<Decimal>,
    pub importo: Option<Decimal>,
}

/// Line items plus per-rate summary blocks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatiBeniServizi {
    pub dettaglio_linee: Vec<DettaglioLinee>,
    pub dati_riepilogo: Vec<DatiRiepilogo>,
}

/// Goods/service line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DettaglioLinee {
    pub numero_linea: u32,
    pub tipo_cessione_prestazione: Option<String>,
    pub descrizione: String,
    pub quantita: Option<Decimal>,
    pub unita_misura: Option<String>,
    pub prezzo_unitario: Decimal,
    pub sconto_maggiorazione: Vec<ScontoMaggiorazione>,
    pub prezzo_totale: Decimal,
    #[serde(rename = "AliquotaIVA")]
    pub aliquota_iva: Decimal,
    pub ritenuta: Option<String>,
    pub natura: Option<String>,
    pub riferimento_amministrazione: Option<String>,
}

/// Per-VAT-rate summary block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatiRiepilogo {
    #[serde(rename = "AliquotaIVA")]
    pub aliquota_iva: Decimal,
    pub natura: Option<String>,
    pub spese_accessorie: Option<Decimal>,
    pub arrotondamento: Option<Decimal>,
    pub imponibile_importo: Decimal,
    pub imposta: Decimal,
    #[serde(rename = "EsigibilitaIVA")]
    pub esigibilita_iva: Option<String>,
    pub riferimento_normativo: Option<String>,
}

/// Transport data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatiTrasporto {
    pub dati_anagrafici_vettore: Option<DatiAnagraficiVettore>,
    pub mezzo_trasporto: Option<String>,
    pub causale_trasporto: Option<String>,
    pub numero_colli: Option<u32>,
    pub descrizione: Option<String>,
    pub unita_misura_peso: Option<String>,
    pub peso_lordo: Option<Decimal>,
    pub peso_netto: Option<Decimal>,
    pub tipo_resa: Option<String>,
    pub indirizzo_resa: Option<Sede>,
    pub data_ora_consegna: Option<NaiveDateTime>,
}

/// Carrier identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatiAnagraficiVettore {
    #[serde(rename = "IdFiscaleIVA")]
    pub id_fiscale_iva: IdFiscaleIVA,
    pub codice_fiscale: Option<String>,
    pub anagrafica: Anagrafica,
    pub numero_licenza_guida: Option<String>,
}

/// Vehicle data (intra-EU supply of new means of transport).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatiVeicoli {
    pub data: Option<NaiveDate>,
    pub totale_percorso: String,
}

/// Payment data: terms plus one or more payment lines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatiPagamento {
    pub condizioni_pagamento: String,
    pub dettaglio_pagamento: Vec<DettaglioPagamento>,
}

/// One payment line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DettaglioPagamento {
    pub beneficiario: Option<String>,
    pub modalita_pagamento: String,
    pub data_scadenza_pagamento: Option<NaiveDate>,
    pub importo_pagamento: Decimal,
    pub istituto_finanziario: Option<String>,
    #[serde(rename = "IBAN")]
    pub iban: Option<String>,
    #[serde(rename = "ABI")]
    pub abi: Option<String>,
    #[serde(rename = "CAB")]
    pub cab: Option<String>,
    #[serde(rename = "BIC")]
    pub bic: Option<String>,
}

/// Attachment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Allegati {
    pub nome_attachment: String,
    pub algoritmo_compressione: Option<String>,
    pub formato_attachment: Option<String>,
    pub descrizione_attachment: Option<String>,
    pub attachment: String,
}

impl IsEmpty for FatturaElettronicaBody {
    fn is_empty(&self) -> bool {
        self.dati_generali.is_empty()
            && self.dati_beni_servizi.is_empty()
            && opt_empty(&self.dati_veicoli)
            && all_empty(&self.dati_pagamento)
            && all_empty(&self.allegati)
    }
}

impl IsEmpty for DatiGenerali {
    fn is_empty(&self) -> bool {
        self.dati_generali_documento.is_empty() && opt_empty(&self.dati_trasporto)
    }
}

impl IsEmpty for DatiGeneraliDocumento {
    fn is_empty(&self) -> bool {
        self.tipo_documento.is_empty()
            && self.divisa.is_empty()
            && self.data.is_none()
            && self.numero.is_empty()
            && all_empty(&self.dati_ritenuta)
            && opt_empty(&self.dati_bollo)
            && all_empty(&self.dati_cassa_previdenziale)
            && all_empty(&self.sconto_maggiorazione)
            && self.importo_totale_documento.is_none()
            && self.arrotondamento.is_none()
            && self.causale.iter().all(String::is_empty)
    }
}

impl IsEmpty for DatiRitenuta {
    fn is_empty(&self) -> bool {
        self.tipo_ritenuta.is_empty()
            && self.importo_ritenuta.is_zero()
            && self.aliquota_ritenuta.is_zero()
            && self.causale_pagamento.is_empty()
    }
}

impl IsEmpty for DatiBollo {
    fn is_empty(&self) -> bool {
        self.bollo_virtuale.is_empty() && self.importo_bollo.is_none()
    }
}

impl IsEmpty for DatiCassaPrevidenziale {
    fn is_empty(&self) -> bool {
        self.tipo_cassa.is_empty()
            && self.al_cassa.is_zero()
            && self.importo_contributo_cassa.is_zero()
            && self.imponibile_cassa.is_none()
            && self.aliquota_iva.is_zero()
            && opt_str_empty(&self.ritenuta)
            && opt_str_empty(&self.natura)
            && opt_str_empty(&self.riferimento_amministrazione)
    }
}

impl IsEmpty for ScontoMaggiorazione {
    fn is_empty(&self) -> bool {
        self.tipo.is_empty() && self.percentuale.is_none() && self.importo.is_none()
    }
}

impl IsEmpty for DatiBeniServizi {
    fn is_empty(&self) -> bool {
        all_empty(&self.dettaglio_linee) && all_empty(&self.dati_riepilogo)
    }
}

impl IsEmpty for DettaglioLinee {
    fn is_empty(&self) -> bool {
        self.numero_linea == 0
            && opt_str_empty(&self.tipo_cessione_prestazione)
            && self.descrizione.is_empty()
            && self.quantita.is_none()
            && opt_str_empty(&self.unita_misura)
            && self.prezzo_unitario.is_zero()
            && all_empty(&self.sconto_maggiorazione)
            && self.prezzo_totale.is_zero()
            && self.aliquota_iva.is_zero()
            && opt_str_empty(&self.ritenuta)
            && opt_str_empty(&self.natura)
            && opt_str_empty(&self.riferimento_amministrazione)
    }
}

impl IsEmpty for DatiRiepilogo {
    fn is_empty(&self) -> bool {
        self.aliquota_iva.is_zero()
            && opt_str_empty(&self.natura)
            && self.spese_accessorie.is_none()
            && self.arrotondamento.is_none()
            && self.imponibile_importo.is_zero()
            && self.imposta.is_zero()
            && opt_str_empty(&self.esigibilita_iva)
            && opt_str_empty(&self.riferimento_normativo)
    }
}

impl IsEmpty for DatiTrasporto {
    fn is_empty(&self) -> bool {
        opt_empty(&self.dati_anagrafici_vettore)
            && opt_str_empty(&self.mezzo_trasporto)
            && opt_str_empty(&self.causale_trasporto)
            && self.numero_colli.is_none()
            && opt_str_empty(&self.descrizione)
            && opt_str_empty(&self.unita_misura_peso)
            && self.peso_lordo.is_none()
            && self.peso_netto.is_none()
            && opt_str_empty(&self.tipo_resa)
            && opt_empty(&self.indirizzo_resa)
            && self.data_ora_consegna.is_none()
    }
}

impl IsEmpty for DatiAnagraficiVettore {
    fn is_empty(&self) -> bool {
        self.id_fiscale_iva.is_empty()
            && opt_str_empty(&self.codice_fiscale)
            && self.anagrafica.is_empty()
            && opt_str_empty(&self.numero_licenza_guida)
    }
}

impl IsEmpty for DatiVeicoli {
    fn is_empty(&self) -> bool {
        self.data.is_none() && self.totale_percorso.is_empty()
    }
}

impl IsEmpty for DatiPagamento {
    fn is_empty(&self) -> bool {
        self.condizioni_pagamento.is_empty() && all_empty(&self.dettaglio_pagamento)
    }
}

impl IsEmpty for DettaglioPagamento {
    fn is_empty(&self) -> bool {
        opt_str_empty(&self.beneficiario)
            && self.modalita_pagamento.is_empty()
            && self.data_scadenza_pagamento.is_none()
            && self.importo_pagamento.is_zero()
            && opt_str_empty(&self.istituto_finanziario)
            && opt_str_empty(&self.iban)
            && opt_str_empty(&self.abi)
            && opt_str_empty(&self.cab)
            && opt_str_empty(&self.bic)
    }
}

impl IsEmpty for Allegati {
    fn is_empty(&self) -> bool {
        self.nome_attachment.is_empty()
            && opt_str_empty(&self.algoritmo_compressione)
            && opt_str_empty(&self.formato_attachment)
            && opt_str_empty(&self.descrizione_attachment)
            && self.attachment.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn default_structures_are_empty() {
        assert!(FatturaElettronicaBody::default().is_empty());
        assert!(DatiTrasporto::default().is_empty());
        assert!(DatiVeicoli::default().is_empty());
        assert!(DettaglioLinee::default().is_empty());
        assert!(DatiRitenuta::default().is_empty());
    }

    #[test]
    fn emptiness_is_recursive() {
        // A nested default structure keeps the parent empty
        let mut trasporto = DatiTrasporto {
            dati_anagrafici_vettore: Some(DatiAnagraficiVettore::default()),
            ..Default::default()
        };
        assert!(trasporto.is_empty());

        // One scalar deep inside flips the whole chain
        trasporto
            .dati_anagrafici_vettore
            .as_mut()
            .unwrap()
            .anagrafica
            .denominazione = Some("Trasporti SRL".into());
        assert!(!trasporto.is_empty());
    }

    #[test]
    fn vec_of_empty_elements_counts_as_empty() {
        let body = FatturaElettronicaBody {
            dati_pagamento: vec![DatiPagamento::default()],
            ..Default::default()
        };
        assert!(body.is_empty());
    }

    #[test]
    fn any_amount_breaks_emptiness() {
        let ritenuta = DatiRitenuta {
            importo_ritenuta: dec!(20),
            ..Default::default()
        };
        assert!(!ritenuta.is_empty());
    }
}
