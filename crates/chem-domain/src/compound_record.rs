// compound_record.rs
use chrono::{DateTime, Utc};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fmt;

use crate::{Cid, LookupError, PropertySet};

/// Resultado inmutable de una búsqueda exitosa, listo para que los
/// colaboradores de presentación y exportación lo lean.
///
/// Invariante: `image_bytes` nunca está vacío. Si la imagen no se pudo
/// obtener, el registro no llega a existir.
#[derive(Debug, Clone)]
pub struct CompoundRecord {
    identifier: Cid,
    display_name: String,
    properties: PropertySet,
    image_bytes: Vec<u8>,
    image_digest: String,
    raw_properties: Value,
    raw_identifiers: Option<Value>,
    source: String,
    retrieved_at: DateTime<Utc>,
}

impl CompoundRecord {
    /// Crea el registro y calcula el hash SHA-256 de la imagen.
    ///
    /// # Errores
    /// `LookupError::Transport` si `image_bytes` está vacío.
    pub fn new(identifier: Cid,
               display_name: impl Into<String>,
               properties: PropertySet,
               image_bytes: Vec<u8>,
               raw_properties: Value,
               raw_identifiers: Option<Value>,
               source: impl Into<String>)
               -> Result<Self, LookupError> {
        if image_bytes.is_empty() {
            return Err(LookupError::Transport(format!("empty structure image for CID {identifier}")));
        }
        let mut hasher = Sha256::new();
        hasher.update(&image_bytes);
        let image_digest = format!("{:x}", hasher.finalize());
        Ok(CompoundRecord { identifier,
                            display_name: display_name.into(),
                            properties,
                            image_bytes,
                            image_digest,
                            raw_properties,
                            raw_identifiers,
                            source: source.into(),
                            retrieved_at: Utc::now() })
    }

    pub fn identifier(&self) -> Cid { self.identifier }
    pub fn display_name(&self) -> &str { &self.display_name }
    pub fn properties(&self) -> &PropertySet { &self.properties }
    pub fn image_bytes(&self) -> &[u8] { &self.image_bytes }
    pub fn image_digest(&self) -> &str { &self.image_digest }
    /// Payload JSON de propiedades tal como lo devolvió el servicio.
    pub fn raw_properties(&self) -> &Value { &self.raw_properties }
    /// Payload JSON de la resolución por nombre, si la hubo.
    pub fn raw_identifiers(&self) -> Option<&Value> { self.raw_identifiers.as_ref() }
    /// Nombre del proveedor que produjo el registro.
    pub fn source(&self) -> &str { &self.source }
    pub fn retrieved_at(&self) -> DateTime<Utc> { self.retrieved_at }

    /// Encabezado de presentación: `"Aspirin (CID: 2244)"`.
    pub fn heading(&self) -> String { format!("{} (CID: {})", title_case(&self.display_name), self.identifier) }

    /// Compara contenido (propiedades e imagen), ignorando la marca de
    /// tiempo.
    pub fn same_content(&self, other: &CompoundRecord) -> bool {
        self.identifier == other.identifier
        && self.properties == other.properties
        && self.image_digest == other.image_digest
    }
}

impl fmt::Display for CompoundRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<cid: {}, name: {}>", self.identifier, self.display_name)
    }
}

/// Pone en mayúscula la primera letra de cada palabra y en minúscula el
/// resto. Cualquier carácter no alfabético separa palabras.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
