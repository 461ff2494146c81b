use thiserror::Error;

use crate::status::{describe_status, StatusInfo};

/// Fallos clasificados de una búsqueda. Cada variante conserva lo necesario
/// para reconstruir el mensaje original del servicio.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Texto de entrada inválido (p. ej. CID no numérico).
    #[error("Validation error: {0}")]
    Validation(String),
    /// El nombre buscado no tiene ningún CID asociado.
    #[error("PUGREST.NotFound: {detail}")]
    NotFound { detail: String },
    /// Fault estructurado del servicio distinto de not-found.
    #[error("{code}: {detail}")]
    ServiceFault { code: String, detail: String },
    /// Fallo de conexión o de parseo antes de tener un estado HTTP útil.
    #[error("Transport error: {0}")]
    Transport(String),
    /// Estado HTTP fuera de {200, 202}.
    #[error("{}", describe_status(.0.to_owned()))]
    HttpStatus(u16),
    /// Fallo al escribir un archivo exportado.
    #[error("Export error: {0}")]
    Export(String),
}

impl LookupError {
    /// Símbolo o código corto del fallo, tal como se muestra al usuario.
    pub fn symbol(&self) -> String {
        match self {
            LookupError::Validation(_) => "ValidationError".to_string(),
            LookupError::NotFound { .. } => "PUGREST.NotFound".to_string(),
            LookupError::ServiceFault { code, .. } => code.clone(),
            LookupError::Transport(_) => "TransportError".to_string(),
            LookupError::HttpStatus(code) => describe_status(*code).symbol
                                                                 .unwrap_or("HTTP")
                                                                 .to_string(),
            LookupError::Export(_) => "ExportError".to_string(),
        }
    }

    /// Descripción legible que acompaña al símbolo.
    pub fn description(&self) -> String {
        match self {
            LookupError::Validation(msg) | LookupError::Transport(msg) | LookupError::Export(msg) => msg.clone(),
            LookupError::NotFound { detail } | LookupError::ServiceFault { detail, .. } => detail.clone(),
            LookupError::HttpStatus(code) => describe_status(*code).description.to_string(),
        }
    }

    /// Fila de la tabla de estados, sólo para `HttpStatus`.
    pub fn status_info(&self) -> Option<StatusInfo> {
        match self {
            LookupError::HttpStatus(code) => Some(describe_status(*code)),
            _ => None,
        }
    }

    /// Texto de dos líneas "símbolo\ndescripción" para diálogos de error.
    pub fn user_message(&self) -> String { format!("{}\n{}", self.symbol(), self.description()) }
}

impl From<std::io::Error> for LookupError {
    fn from(e: std::io::Error) -> Self { LookupError::Export(e.to_string()) }
}
