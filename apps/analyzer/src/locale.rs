use std::str::FromStr;

use crate::intake::IntakeError;

/// Language of the texts shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    PtBr,
    En,
}

impl Locale {
    pub fn intake_error(&self, error: &IntakeError) -> &'static str {
        match (self, error) {
            (Locale::PtBr, IntakeError::InvalidType { .. }) => {
                "Por favor, selecione um arquivo no formato PDF."
            }
            (Locale::PtBr, IntakeError::TooLarge { .. }) => {
                "O arquivo é muito grande. O tamanho máximo é de 5MB."
            }
            (Locale::En, IntakeError::InvalidType { .. }) => "Please select a file in PDF format.",
            (Locale::En, IntakeError::TooLarge { .. }) => {
                "The file is too large. The maximum size is 5MB."
            }
        }
    }

    /// Generic text for any failed analysis request. Never includes the cause.
    pub fn analysis_failed(&self) -> &'static str {
        match self {
            Locale::PtBr => "Ocorreu um erro ao analisar o currículo. Tente novamente mais tarde.",
            Locale::En => "An error occurred while analyzing the résumé. Please try again later.",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pt" | "pt-br" | "pt_br" => Ok(Locale::PtBr),
            "en" | "en-us" | "en_us" => Ok(Locale::En),
            other => Err(format!("unsupported locale '{other}' (expected pt-BR or en)")),
        }
    }
}
