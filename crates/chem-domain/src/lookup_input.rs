use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Cid, LookupError};

/// Tipo de entrada declarado por el usuario al enviar una búsqueda.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKind {
    Name,
    Identifier,
}

/// Entrada de búsqueda validada. Se construye por envío y se descarta tras
/// la resolución.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupInput {
    Name(String),
    Identifier(Cid),
}

impl LookupInput {
    /// Construye la entrada a partir del texto bruto y del tipo declarado.
    ///
    /// # Errores
    /// `LookupError::Validation` si el texto está vacío o, para
    /// `InputKind::Identifier`, si no es un entero positivo.
    pub fn parse(kind: InputKind, raw: &str) -> Result<Self, LookupError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(LookupError::Validation("search text must not be empty".to_string()));
        }
        match kind {
            InputKind::Name => Ok(LookupInput::Name(text.to_string())),
            InputKind::Identifier => Ok(LookupInput::Identifier(text.parse()?)),
        }
    }

    /// Texto original de la búsqueda (el CID en forma decimal si se buscó por
    /// identificador).
    pub fn search_text(&self) -> String {
        match self {
            LookupInput::Name(name) => name.clone(),
            LookupInput::Identifier(cid) => cid.to_string(),
        }
    }
}

impl fmt::Display for LookupInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupInput::Name(name) => write!(f, "name '{name}'"),
            LookupInput::Identifier(cid) => write!(f, "CID {cid}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_trims_text() {
        let input = LookupInput::parse(InputKind::Name, "  aspirin ").unwrap();
        assert_eq!(input, LookupInput::Name("aspirin".into()));
        assert_eq!(input.search_text(), "aspirin");
    }

    #[test]
    fn test_parse_identifier() {
        let input = LookupInput::parse(InputKind::Identifier, "2244").unwrap();
        assert_eq!(input, LookupInput::Identifier(Cid::new(2244).unwrap()));
        assert_eq!(input.to_string(), "CID 2244");
        assert_eq!(input.search_text(), "2244");
    }

    #[test]
    fn test_non_numeric_identifier_is_validation_error() {
        let err = LookupInput::parse(InputKind::Identifier, "aspirin").unwrap_err();
        assert!(matches!(err, LookupError::Validation(_)));
    }

    #[test]
    fn test_blank_text_is_validation_error() {
        assert!(matches!(LookupInput::parse(InputKind::Name, "   "), Err(LookupError::Validation(_))));
        assert!(matches!(LookupInput::parse(InputKind::Identifier, ""), Err(LookupError::Validation(_))));
    }
}
