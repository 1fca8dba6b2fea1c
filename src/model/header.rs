use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{IsEmpty, opt_empty, opt_str_empty};

/// Issuer and recipient fiscal identity plus transmission data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FatturaElettronicaHeader {
    pub dati_trasmissione: DatiTrasmissione,
    pub cedente_prestatore: CedentePrestatore,
    pub cessionario_committente: CessionarioCommittente,
}

/// Routing data for the Sistema di Interscambio.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatiTrasmissione {
    pub id_trasmittente: IdFiscaleIVA,
    pub progressivo_invio: String,
    pub formato_trasmissione: String,
    pub codice_destinatario: String,
    #[serde(rename = "PECDestinatario")]
    pub pec_destinatario: Option<String>,
}

/// Country-qualified VAT identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IdFiscaleIVA {
    pub id_paese: String,
    pub id_codice: String,
}

/// Name block: either a company name or a natural person's name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Anagrafica {
    pub denominazione: Option<String>,
    pub nome: Option<String>,
    pub cognome: Option<String>,
    pub titolo: Option<String>,
    #[serde(rename = "CodEORI")]
    pub cod_eori: Option<String>,
}

/// Supplier (seller) party.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CedentePrestatore {
    pub dati_anagrafici: DatiAnagraficiCedente,
    pub sede: Sede,
    #[serde(rename = "IscrizioneREA")]
    pub iscrizione_rea: Option<IscrizioneREA>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatiAnagraficiCedente {
    #[serde(rename = "IdFiscaleIVA")]
    pub id_fiscale_iva: IdFiscaleIVA,
    pub codice_fiscale: Option<String>,
    pub anagrafica: Anagrafica,
    pub regime_fiscale: String,
}

/// Customer (buyer) party.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CessionarioCommittente {
    pub dati_anagrafici: DatiAnagraficiCessionario,
    pub sede: Sede,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatiAnagraficiCessionario {
    #[serde(rename = "IdFiscaleIVA")]
    pub id_fiscale_iva: IdFiscaleIVA,
    pub codice_fiscale: Option<String>,
    pub anagrafica: Anagrafica,
}

/// Postal address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Sede {
    pub indirizzo: String,
    pub numero_civico: Option<String>,
    #[serde(rename = "CAP")]
    pub cap: String,
    pub comune: String,
    pub provincia: Option<String>,
    pub nazione: String,
}

/// Business-register entry of the supplier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IscrizioneREA {
    pub ufficio: String,
    #[serde(rename = "NumeroREA")]
    pub numero_rea: String,
    pub capitale_sociale: Option<Decimal>,
    pub socio_unico: Option<String>,
    pub stato_liquidazione: String,
}

impl IsEmpty for FatturaElettronicaHeader {
    fn is_empty(&self) -> bool {
        self.dati_trasmissione.is_empty()
            && self.cedente_prestatore.is_empty()
            && self.cessionario_committente.is_empty()
    }
}

impl IsEmpty for DatiTrasmissione {
    fn is_empty(&self) -> bool {
        self.id_trasmittente.is_empty()
            && self.progressivo_invio.is_empty()
            && self.formato_trasmissione.is_empty()
            && self.codice_destinatario.is_empty()
            && opt_str_empty(&self.pec_destinatario)
    }
}

impl IsEmpty for IdFiscaleIVA {
    fn is_empty(&self) -> bool {
        self.id_paese.is_empty() && self.id_codice.is_empty()
    }
}

impl IsEmpty for Anagrafica {
    fn is_empty(&self) -> bool {
        opt_str_empty(&self.denominazione)
            && opt_str_empty(&self.nome)
            && opt_str_empty(&self.cognome)
            && opt_str_empty(&self.titolo)
            && opt_str_empty(&self.cod_eori)
    }
}

impl IsEmpty for CedentePrestatore {
    fn is_empty(&self) -> bool {
        self.dati_anagrafici.is_empty()
            && self.sede.is_empty()
            && opt_empty(&self.iscrizione_rea)
    }
}

impl IsEmpty for DatiAnagraficiCedente {
    fn is_empty(&self) -> bool {
        self.id_fiscale_iva.is_empty()
            && opt_str_empty(&self.codice_fiscale)
            && self.anagrafica.is_empty()
            && self.regime_fiscale.is_empty()
    }
}

impl IsEmpty for CessionarioCommittente {
    fn is_empty(&self) -> bool {
        self.dati_anagrafici.is_empty() && self.sede.is_empty()
    }
}

impl IsEmpty for DatiAnagraficiCessionario {
    fn is_empty(&self) -> bool {
        self.id_fiscale_iva.is_empty()
            && opt_str_empty(&self.codice_fiscale)
            && self.anagrafica.is_empty()
    }
}

impl IsEmpty for Sede {
    fn is_empty(&self) -> bool {
        self.indirizzo.is_empty()
            && opt_str_empty(&self.numero_civico)
            && self.cap.is_empty()
            && self.comune.is_empty()
            && opt_str_empty(&self.provincia)
            && self.nazione.is_empty()
    }
}

impl IsEmpty for IscrizioneREA {
    fn is_empty(&self) -> bool {
        self.ufficio.is_empty()
            && self.numero_rea.is_empty()
            && self.capitale_sociale.is_none()
            && opt_str_empty(&self.socio_unico)
            && self.stato_liquidazione.is_empty()
    }
}
