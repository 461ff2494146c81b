//! Ensamblado del `CompoundRecord` a partir de un CID canónico.
//!
//! Orden fijo: imagen, propiedades, nombre. La imagen es obligatoria; las
//! propiedades y el nombre toleran ausencias, que se reportan como avisos.
use chem_domain::{Cid, CompoundRecord, LookupError, LookupInput, Warning};
use chem_providers::CompoundProvider;
use serde_json::Value;
use tracing::{debug, warn};

/// Registro construido junto con los avisos no fatales.
#[derive(Debug, Clone)]
pub struct Assembled {
    pub record: CompoundRecord,
    pub warnings: Vec<Warning>,
}

pub struct RecordAssembler<P: CompoundProvider> {
    provider: P,
}

impl<P: CompoundProvider> RecordAssembler<P> {
    pub fn new(provider: P) -> Self { Self { provider } }

    /// `input` decide el nombre: texto buscado para `Name`, primer sinónimo
    /// para `Identifier`. `raw_identifiers` se guarda para exportar.
    pub fn assemble(&self,
                    cid: Cid,
                    input: &LookupInput,
                    raw_identifiers: Option<Value>)
                    -> Result<Assembled, LookupError> {
        let image_bytes = self.provider.fetch_image(cid)?;
        let payload = self.provider.fetch_properties(cid)?;

        let mut warnings: Vec<Warning> = payload.properties
                                                .missing_keys()
                                                .into_iter()
                                                .map(Warning::MissingProperty)
                                                .collect();

        let display_name = match input {
            LookupInput::Name(name) => name.clone(),
            LookupInput::Identifier(_) => match self.provider.fetch_synonyms(cid) {
                Ok(synonyms) => match synonyms.into_iter().next() {
                    Some(first) => first,
                    None => {
                        warnings.push(Warning::NoSynonyms);
                        String::new()
                    }
                },
                Err(err @ LookupError::Transport(_)) => return Err(err),
                Err(err) => {
                    warnings.push(Warning::SynonymsUnavailable(err));
                    String::new()
                }
            },
        };

        for w in &warnings {
            warn!(%cid, symbol = %w.symbol(), "{}", w.description());
        }

        let record = CompoundRecord::new(cid,
                                         display_name,
                                         payload.properties,
                                         image_bytes,
                                         payload.raw,
                                         raw_identifiers,
                                         self.provider.get_name())?;
        debug!(%cid, digest = %record.image_digest(), "record assembled");
        Ok(Assembled { record, warnings })
    }
}
