//! Exportación de un `CompoundRecord` a disco.
//!
//! Texto: payload JSON del servicio en forma canónica, extensión `.txt`.
//! Imagen: bytes PNG sin tocar, extensión `.png`. Una ruta `None` significa
//! que el usuario canceló el diálogo de guardado; no es un error.
use std::fs;
use std::path::{Path, PathBuf};

use chem_domain::{CompoundRecord, LookupError, LookupInput};
use serde_json::{Map, Value};
use tracing::info;

use crate::canonical_json::to_canonical_json;

pub const TEXT_EXTENSION: &str = "txt";
pub const IMAGE_EXTENSION: &str = "png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written(PathBuf),
    Cancelled,
}

/// Contenido del export de texto. Si el registro viene de una búsqueda por
/// nombre, las claves de nivel superior de ambos payloads se combinan
/// (`IdentifierList` y `PropertyTable`).
pub fn text_payload(record: &CompoundRecord) -> String {
    let mut merged = Map::new();
    for raw in record.raw_identifiers().into_iter().chain(std::iter::once(record.raw_properties())) {
        match raw {
            Value::Object(map) => merged.extend(map.iter().map(|(k, v)| (k.clone(), v.clone()))),
            other => {
                merged.insert("Payload".to_string(), other.clone());
            }
        }
    }
    to_canonical_json(&Value::Object(merged))
}

/// Nombre de archivo sugerido: el texto buscado tal cual. Para una búsqueda
/// por identificador es el CID, no el sinónimo mostrado.
pub fn default_file_stem(input: &LookupInput) -> String { input.search_text() }

pub fn export_text(record: &CompoundRecord, path: Option<&Path>) -> Result<ExportOutcome, LookupError> {
    write_with_extension(path, TEXT_EXTENSION, text_payload(record).as_bytes())
}

pub fn export_image(record: &CompoundRecord, path: Option<&Path>) -> Result<ExportOutcome, LookupError> {
    write_with_extension(path, IMAGE_EXTENSION, record.image_bytes())
}

fn write_with_extension(path: Option<&Path>, extension: &str, contents: &[u8]) -> Result<ExportOutcome, LookupError> {
    let Some(path) = path else {
        return Ok(ExportOutcome::Cancelled);
    };
    let target = path.with_extension(extension);
    fs::write(&target, contents).map_err(|e| LookupError::Export(format!("{}: {e}", target.display())))?;
    info!(path = %target.display(), bytes = contents.len(), "exported");
    Ok(ExportOutcome::Written(target))
}
