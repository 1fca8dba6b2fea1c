use thiserror::Error;

/// Hard faults raised when the input object graph breaches the
/// deserializer's contract. These are never reported as findings:
/// a document the engine cannot safely traverse fails fast instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// The document carries no `FatturaElettronicaBody` at all.
    #[error("documento privo di FatturaElettronicaBody")]
    NoBodies,
}

/// One validation outcome: a business rule that did not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Path to the offending element, in FatturaPA element names
    /// (e.g. "FatturaElettronicaBody[0].DatiBeniServizi.DettaglioLinee[2].AliquotaIVA").
    pub path: String,
    /// Human-readable description, Italian per the published rules.
    pub message: String,
    /// Error code from the Agenzia delle Entrate table (e.g. "00422"),
    /// where the rule has one assigned. Reproduced verbatim.
    pub code: Option<String>,
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(code) = &self.code {
            write!(f, "[{}] {}: {}", code, self.path, self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

impl Finding {
    /// Create a finding without a regulator error code.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            code: None,
        }
    }

    /// Create a finding carrying a regulator error code.
    pub fn with_code(
        path: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            code: Some(code.into()),
        }
    }
}
