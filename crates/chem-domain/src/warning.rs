use std::fmt;

use crate::{LookupError, PropertyKey};

/// Aviso no fatal que acompaña a un `CompoundRecord` ya construido.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// El servicio omitió una de las propiedades pedidas.
    MissingProperty(PropertyKey),
    /// El endpoint de sinónimos devolvió un fallo; el nombre queda vacío.
    SynonymsUnavailable(LookupError),
    /// El servicio respondió bien pero sin ningún sinónimo.
    NoSynonyms,
}

impl Warning {
    pub fn symbol(&self) -> String {
        match self {
            Warning::MissingProperty(key) => key.as_str().to_string(),
            Warning::SynonymsUnavailable(err) => err.symbol(),
            Warning::NoSynonyms => "Synonym".to_string(),
        }
    }

    pub fn description(&self) -> String {
        match self {
            Warning::MissingProperty(key) => key.missing_message().to_string(),
            Warning::SynonymsUnavailable(err) => format!("No synonyms returned: {}", err.description()),
            Warning::NoSynonyms => "No synonyms returned".to_string(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.symbol(), self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_property_text() {
        let w = Warning::MissingProperty(PropertyKey::IupacName);
        assert_eq!(w.to_string(), "IUPACName: No IUPAC name returned");
    }

    #[test]
    fn test_synonyms_warning_carries_fault() {
        let w = Warning::SynonymsUnavailable(LookupError::ServiceFault { code: "PUGREST.NotFound".into(),
                                                                         detail: "No synonyms".into() });
        assert_eq!(w.symbol(), "PUGREST.NotFound");
        assert_eq!(w.description(), "No synonyms returned: No synonyms");
    }
}
