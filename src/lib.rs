//! chem-lookup: búsqueda de compuestos en PubChem
//!
//! Este crate une las piezas del pipeline:
//! - `resolver` convierte la entrada del usuario en un CID canónico.
//! - `assembler` construye el `CompoundRecord` (imagen, propiedades, nombre).
//! - `pipeline` encadena ambos para un envío completo.
//! - `export` escribe el registro en `.txt` / `.png`.
//!
//! El cliente remoto vive en `chem-providers` y los tipos en `chem-domain`.

pub mod assembler;
pub mod canonical_json;
pub mod export;
pub mod pipeline;
pub mod resolver;

pub use assembler::{Assembled, RecordAssembler};
pub use export::{default_file_stem, export_image, export_text, ExportOutcome};
pub use pipeline::{Lookup, LookupOutcome};
pub use resolver::{disambiguation_prompt, AcceptFirst, DeclineAll, Disambiguator, Resolution, Resolver};
