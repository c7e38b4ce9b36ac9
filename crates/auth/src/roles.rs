use serde::{Deserialize, Serialize};

/// Role granted to a portal principal.
///
/// The set is closed: the portal only distinguishes loan analysts from loan
/// applicants. Role names arriving from the authentication collaborator that
/// match neither variant are discarded at the decoding boundary and grant
/// nothing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Back-office loan analyst.
    #[serde(rename = "ANALISTA")]
    Analista,
    /// Loan applicant.
    #[serde(rename = "SOLICITANTE")]
    Solicitante,
}

impl Role {
    /// Parse a wire role name. Unknown names yield `None`, never an error.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ANALISTA" => Some(Self::Analista),
            "SOLICITANTE" => Some(Self::Solicitante),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Analista => "ANALISTA",
            Self::Solicitante => "SOLICITANTE",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
