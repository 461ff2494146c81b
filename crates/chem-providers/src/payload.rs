//! Formas JSON de las respuestas PUG REST.
//!
//! Se deserializan de forma estructurada; nunca se inspecciona el texto del
//! payload buscando un nombre de clave.
use chem_domain::LookupError;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Código de fault que PubChem usa para "sin resultados".
pub const NOT_FOUND_CODE: &str = "PUGREST.NotFound";
/// Código asumido cuando el fault no trae `Code`.
pub const UNKNOWN_FAULT_CODE: &str = "PUGREST.ServerError/Unknown";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaultEnvelope {
    pub fault: Fault,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Fault {
    #[serde(default = "unknown_fault_code")]
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Vec<String>,
}

fn unknown_fault_code() -> String { UNKNOWN_FAULT_CODE.to_string() }

impl Fault {
    /// Primera línea de `Details`, o `Message` si no hay detalles.
    pub fn detail(&self) -> String {
        self.details
            .first()
            .cloned()
            .or_else(|| self.message.clone())
            .unwrap_or_default()
    }

    pub fn into_error(self) -> LookupError {
        let detail = self.detail();
        if self.code == NOT_FOUND_CODE {
            LookupError::NotFound { detail }
        } else {
            LookupError::ServiceFault { code: self.code, detail }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IdentifierListEnvelope {
    pub identifier_list: IdentifierListBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdentifierListBody {
    #[serde(rename = "CID", default)]
    pub cid: Vec<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyTableEnvelope {
    pub property_table: PropertyTableBody,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyTableBody {
    #[serde(default)]
    pub properties: Vec<Map<String, Value>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InformationListEnvelope {
    pub information_list: InformationListBody,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InformationListBody {
    #[serde(default)]
    pub information: Vec<Information>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Information {
    #[serde(default)]
    pub synonym: Vec<String>,
}

/// Extrae el fault si el payload lo trae.
pub fn fault_of(value: &Value) -> Option<Fault> {
    value.get("Fault")?;
    serde_json::from_value::<FaultEnvelope>(value.clone()).ok().map(|e| e.fault)
}
