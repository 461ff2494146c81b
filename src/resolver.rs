//! Resolución de la entrada del usuario a un único CID.
//!
//! - `Identifier(n)`: se usa `n` directamente, sin red.
//! - `Name(s)`: se consulta el servicio; con varias coincidencias se pide
//!   confirmación para usar la primera, respetando el orden del servicio.
use chem_domain::{Cid, LookupError, LookupInput};
use chem_providers::CompoundProvider;
use serde_json::Value;
use tracing::{debug, info};

/// Colaborador que confirma el uso del primer candidato cuando un nombre
/// tiene varios CIDs. Recibe la lista completa en el orden del servicio.
pub trait Disambiguator {
    fn confirm_first(&self, candidates: &[Cid]) -> bool;
}

impl<F> Disambiguator for F where F: Fn(&[Cid]) -> bool
{
    fn confirm_first(&self, candidates: &[Cid]) -> bool { self(candidates) }
}

/// Acepta siempre el primer candidato.
pub struct AcceptFirst;

impl Disambiguator for AcceptFirst {
    fn confirm_first(&self, _candidates: &[Cid]) -> bool { true }
}

/// Rechaza siempre; útil para modos no interactivos estrictos.
pub struct DeclineAll;

impl Disambiguator for DeclineAll {
    fn confirm_first(&self, _candidates: &[Cid]) -> bool { false }
}

/// Texto de confirmación para varias coincidencias.
pub fn disambiguation_prompt(candidates: &[Cid]) -> String {
    let listed = candidates.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(", ");
    let first = candidates.first().map(|c| c.to_string()).unwrap_or_default();
    format!("Multiple values returned with CIDs [{listed}]\nWill use first CID of {first}\nProceed?")
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// CID canónico; `raw_identifiers` sólo existe si hubo consulta por nombre.
    Resolved { cid: Cid, raw_identifiers: Option<Value> },
    /// El usuario rechazó la confirmación. No es un error.
    Cancelled { candidates: Vec<Cid> },
}

pub struct Resolver<P: CompoundProvider> {
    provider: P,
}

impl<P: CompoundProvider> Resolver<P> {
    pub fn new(provider: P) -> Self { Self { provider } }

    pub fn resolve(&self, input: &LookupInput, confirm: &dyn Disambiguator) -> Result<Resolution, LookupError> {
        let name = match input {
            LookupInput::Identifier(cid) => {
                debug!(%cid, "identifier input, no resolution request");
                return Ok(Resolution::Resolved { cid: *cid, raw_identifiers: None });
            }
            LookupInput::Name(name) => name,
        };
        let list = self.provider.resolve_identifiers(name)?;
        let first = match list.cids.first() {
            Some(first) => *first,
            None => return Err(LookupError::NotFound { detail: format!("No CID found for '{name}'") }),
        };
        if list.cids.len() > 1 {
            info!(name = %name, candidates = list.cids.len(), "multiple matches, asking for confirmation");
            if !confirm.confirm_first(&list.cids) {
                info!(name = %name, "resolution declined");
                return Ok(Resolution::Cancelled { candidates: list.cids });
            }
        }
        Ok(Resolution::Resolved { cid: first, raw_identifiers: Some(list.raw) })
    }
}
