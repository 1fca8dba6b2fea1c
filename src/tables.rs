//! FatturaPA domain code tables.
//!
//! Closed sets of permitted codes for the categorical fields of the
//! document, as published with the FatturaPA technical specifications.
//! Each table is a sorted static slice with binary-search membership;
//! matching is case-sensitive and exact. Tables are immutable process-wide
//! and safe to share across concurrent validation passes.

/// One closed code set for a categorical field.
pub struct CodeTable {
    /// FatturaPA element name the table belongs to.
    pub name: &'static str,
    codes: &'static [&'static str],
}

impl CodeTable {
    /// Case-sensitive exact membership test.
    pub fn contains(&self, code: &str) -> bool {
        self.codes.binary_search(&code).is_ok()
    }

    /// The full accepted set, comma-separated, for failure messages.
    pub fn accepted_values(&self) -> String {
        self.codes.join(", ")
    }

    /// All codes in the table.
    pub fn codes(&self) -> &'static [&'static str] {
        self.codes
    }
}

/// TipoDocumento — document type codes (fattura ordinaria).
pub static TIPO_DOCUMENTO: CodeTable = CodeTable {
    name: "TipoDocumento",
    codes: &[
        "TD01", // fattura
        "TD02", // acconto/anticipo su fattura
        "TD03", // acconto/anticipo su parcella
        "TD04", // nota di credito
        "TD05", // nota di debito
        "TD06", // parcella
        "TD16", // integrazione fattura reverse charge interno
        "TD17", // integrazione/autofattura per acquisto servizi dall'estero
        "TD18", // integrazione per acquisto di beni intracomunitari
        "TD19", // integrazione/autofattura per acquisto di beni ex art.17 c.2
        "TD20", // autofattura per regolarizzazione
        "TD21", // autofattura per splafonamento
        "TD22", // estrazione beni da Deposito IVA
        "TD23", // estrazione beni da Deposito IVA con versamento dell'IVA
        "TD24", // fattura differita di cui all'art. 21, comma 4, lett. a)
        "TD25", // fattura differita di cui all'art. 21, comma 4, lett. b)
        "TD26", // cessione di beni ammortizzabili e per passaggi interni
        "TD27", // fattura per autoconsumo o per cessioni gratuite
        "TD28", // acquisti da San Marino con IVA (fattura cartacea)
    ],
};

/// Natura — VAT-nature codes for exempt/non-taxable operations.
pub static NATURA: CodeTable = CodeTable {
    name: "Natura",
    codes: &[
        "N1",   // escluse ex art. 15
        "N2",   // non soggette (fino al 31/12/2020)
        "N2.1", // non soggette ad IVA ex artt. da 7 a 7-septies
        "N2.2", // non soggette - altri casi
        "N3",   // non imponibili (fino al 31/12/2020)
        "N3.1", // non imponibili - esportazioni
        "N3.2", // non imponibili - cessioni intracomunitarie
        "N3.3", // non imponibili - cessioni verso San Marino
        "N3.4", // non imponibili - operazioni assimilate
        "N3.5", // non imponibili - a seguito di dichiarazioni d'intento
        "N3.6", // non imponibili - altre operazioni
        "N4",   // esenti
        "N5",   // regime del margine / IVA non esposta
        "N6",   // inversione contabile (fino al 31/12/2020)
        "N6.1", // inversione contabile - cessione di rottami
        "N6.2", // inversione contabile - cessione di oro e argento
        "N6.3", // inversione contabile - subappalto nel settore edile
        "N6.4", // inversione contabile - cessione di fabbricati
        "N6.5", // inversione contabile - cessione di telefoni cellulari
        "N6.6", // inversione contabile - cessione di prodotti elettronici
        "N6.7", // inversione contabile - prestazioni comparto edile
        "N6.8", // inversione contabile - operazioni settore energetico
        "N6.9", // inversione contabile - altri casi
        "N7",   // IVA assolta in altro stato UE
    ],
};

/// RegimeFiscale — fiscal regime of the supplier.
pub static REGIME_FISCALE: CodeTable = CodeTable {
    name: "RegimeFiscale",
    codes: &[
        "RF01", // ordinario
        "RF02", // contribuenti minimi
        "RF04", // agricoltura e attività connesse e pesca
        "RF05", // vendita sali e tabacchi
        "RF06", // commercio fiammiferi
        "RF07", // editoria
        "RF08", // gestione servizi telefonia pubblica
        "RF09", // rivendita documenti di trasporto pubblico e di sosta
        "RF10", // intrattenimenti, giochi e altre attività
        "RF11", // agenzie viaggi e turismo
        "RF12", // agriturismo
        "RF13", // vendite a domicilio
        "RF14", // rivendita beni usati, oggetti d'arte
        "RF15", // agenzie di vendite all'asta di oggetti d'arte
        "RF16", // IVA per cassa P.A.
        "RF17", // IVA per cassa
        "RF18", // altro
        "RF19", // forfettario
    ],
};

/// TipoCassa — social security fund codes.
pub static TIPO_CASSA: CodeTable = CodeTable {
    name: "TipoCassa",
    codes: &[
        "TC01", "TC02", "TC03", "TC04", "TC05", "TC06", "TC07", "TC08", "TC09", "TC10", "TC11",
        "TC12", "TC13", "TC14", "TC15", "TC16", "TC17", "TC18", "TC19", "TC20", "TC21", "TC22",
    ],
};

/// TipoRitenuta — withholding type codes.
pub static TIPO_RITENUTA: CodeTable = CodeTable {
    name: "TipoRitenuta",
    codes: &[
        "RT01", // ritenuta persone fisiche
        "RT02", // ritenuta persone giuridiche
        "RT03", // contributo INPS
        "RT04", // contributo ENASARCO
        "RT05", // contributo ENPAM
        "RT06", // altro contributo previdenziale
    ],
};

/// CausalePagamento — withholding causal codes (modello CU).
pub static CAUSALE_PAGAMENTO: CodeTable = CodeTable {
    name: "CausalePagamento",
    codes: &[
        "A", "B", "C", "D", "E", "G", "H", "I", "L", "L1", "M", "M1", "M2", "N", "O", "O1", "P",
        "Q", "R", "S", "T", "U", "V", "V1", "V2", "W", "X", "Y", "Z", "ZO",
    ],
};

/// ModalitaPagamento — payment method codes.
pub static MODALITA_PAGAMENTO: CodeTable = CodeTable {
    name: "ModalitaPagamento",
    codes: &[
        "MP01", // contanti
        "MP02", // assegno
        "MP03", // assegno circolare
        "MP04", // contanti presso Tesoreria
        "MP05", // bonifico
        "MP06", // vaglia cambiario
        "MP07", // bollettino bancario
        "MP08", // carta di pagamento
        "MP09", // RID
        "MP10", // RID utenze
        "MP11", // RID veloce
        "MP12", // RIBA
        "MP13", // MAV
        "MP14", // quietanza erario
        "MP15", // giroconto su conti di contabilità speciale
        "MP16", // domiciliazione bancaria
        "MP17", // domiciliazione postale
        "MP18", // bollettino di c/c postale
        "MP19", // SEPA Direct Debit
        "MP20", // SEPA Direct Debit CORE
        "MP21", // SEPA Direct Debit B2B
        "MP22", // trattenuta su somme già riscosse
        "MP23", // PagoPA
    ],
};

/// CondizioniPagamento — payment terms codes.
pub static CONDIZIONI_PAGAMENTO: CodeTable = CodeTable {
    name: "CondizioniPagamento",
    codes: &[
        "TP01", // pagamento a rate
        "TP02", // pagamento completo
        "TP03", // anticipo
    ],
};

/// TipoResa — Incoterms delivery terms.
pub static TIPO_RESA: CodeTable = CodeTable {
    name: "TipoResa",
    codes: &[
        "CFR", "CIF", "CIP", "CPT", "DAF", "DAP", "DAT", "DDP", "DDU", "DEQ", "DES", "EXW", "FAS",
        "FCA", "FOB",
    ],
};

/// EsigibilitaIVA — VAT chargeability codes.
pub static ESIGIBILITA_IVA: CodeTable = CodeTable {
    name: "EsigibilitaIVA",
    codes: &[
        "D", // esigibilità differita
        "I", // esigibilità immediata
        "S", // scissione dei pagamenti
    ],
};

/// SocioUnico — sole-shareholder flag for IscrizioneREA.
pub static SOCIO_UNICO: CodeTable = CodeTable {
    name: "SocioUnico",
    codes: &[
        "SM", // più soci
        "SU", // socio unico
    ],
};

/// StatoLiquidazione — liquidation status for IscrizioneREA.
pub static STATO_LIQUIDAZIONE: CodeTable = CodeTable {
    name: "StatoLiquidazione",
    codes: &[
        "LN", // non in liquidazione
        "LS", // in liquidazione
    ],
};

/// TipoScontoMaggiorazione — discount/surcharge flag.
pub static TIPO_SCONTO_MAGGIORAZIONE: CodeTable = CodeTable {
    name: "TipoScontoMaggiorazione",
    codes: &[
        "MG", // maggiorazione
        "SC", // sconto
    ],
};

/// TipoCessionePrestazione — line item kind qualifier.
pub static TIPO_CESSIONE_PRESTAZIONE: CodeTable = CodeTable {
    name: "TipoCessionePrestazione",
    codes: &[
        "AB", // abbuono
        "AC", // spesa accessoria
        "PR", // premio
        "SC", // sconto
    ],
};

/// FormatoTrasmissione — transmission format codes.
pub static FORMATO_TRASMISSIONE: CodeTable = CodeTable {
    name: "FormatoTrasmissione",
    codes: &[
        "FPA12", // fattura verso pubblica amministrazione
        "FPR12", // fattura verso privati
    ],
};

/// Nazione / IdPaese — ISO 3166-1 alpha-2 country codes.
pub static NAZIONE: CodeTable = CodeTable {
    name: "Nazione",
    codes: &[
        "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU", "AW", "AX",
        "AZ", "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM", "BN", "BO", "BQ",
        "BR", "BS", "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK",
        "CL", "CM", "CN", "CO", "CR", "CU", "CV", "CW", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM",
        "DO", "DZ", "EC", "EE", "EG", "EH", "ER", "ES", "ET", "FI", "FJ", "FK", "FM", "FO", "FR",
        "GA", "GB", "GD", "GE", "GF", "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS",
        "GT", "GU", "GW", "GY", "HK", "HM", "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN",
        "IO", "IQ", "IR", "IS", "IT", "JE", "JM", "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN",
        "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC", "LI", "LK", "LR", "LS", "LT", "LU", "LV",
        "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK", "ML", "MM", "MN", "MO", "MP", "MQ",
        "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA", "NC", "NE", "NF", "NG", "NI",
        "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG", "PH", "PK", "PL", "PM",
        "PN", "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW", "SA", "SB", "SC",
        "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS", "ST", "SV",
        "SX", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO", "TR",
        "TT", "TV", "TW", "TZ", "UA", "UG", "UM", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI",
        "VN", "VU", "WF", "WS", "YE", "YT", "ZA", "ZM", "ZW",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    static ALL_TABLES: &[&CodeTable] = &[
        &TIPO_DOCUMENTO,
        &NATURA,
        &REGIME_FISCALE,
        &TIPO_CASSA,
        &TIPO_RITENUTA,
        &CAUSALE_PAGAMENTO,
        &MODALITA_PAGAMENTO,
        &CONDIZIONI_PAGAMENTO,
        &TIPO_RESA,
        &ESIGIBILITA_IVA,
        &SOCIO_UNICO,
        &STATO_LIQUIDAZIONE,
        &TIPO_SCONTO_MAGGIORAZIONE,
        &TIPO_CESSIONE_PRESTAZIONE,
        &FORMATO_TRASMISSIONE,
        &NAZIONE,
    ];

    #[test]
    fn tables_are_sorted() {
        for table in ALL_TABLES {
            for window in table.codes().windows(2) {
                assert!(
                    window[0] < window[1],
                    "{} not sorted: {} >= {}",
                    table.name,
                    window[0],
                    window[1]
                );
            }
        }
    }

    #[test]
    fn every_listed_code_is_member() {
        for table in ALL_TABLES {
            for code in table.codes() {
                assert!(table.contains(code), "{} rejects own code {}", table.name, code);
            }
        }
    }

    #[test]
    fn membership_is_case_sensitive() {
        assert!(TIPO_DOCUMENTO.contains("TD01"));
        assert!(!TIPO_DOCUMENTO.contains("td01"));
        assert!(!TIPO_DOCUMENTO.contains("TD99"));
        assert!(NATURA.contains("N2.1"));
        assert!(!NATURA.contains("N2.3"));
        assert!(NAZIONE.contains("IT"));
        assert!(!NAZIONE.contains("it"));
    }

    #[test]
    fn accepted_values_enumerates_full_set() {
        let accepted = CONDIZIONI_PAGAMENTO.accepted_values();
        assert_eq!(accepted, "TP01, TP02, TP03");
    }
}
