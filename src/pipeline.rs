//! Pipeline completo de una búsqueda: entrada -> CID -> registro.
//!
//! Una invocación por envío del usuario. No hay estado compartido entre
//! búsquedas; el resultado se devuelve por valor.
use chem_domain::{Cid, LookupError, LookupInput};
use chem_providers::CompoundProvider;
use tracing::{info, info_span};

use crate::assembler::{Assembled, RecordAssembler};
use crate::resolver::{Disambiguator, Resolution, Resolver};

#[derive(Debug, Clone)]
pub enum LookupOutcome {
    Found(Assembled),
    /// El usuario rechazó la desambiguación; no se hicieron más peticiones.
    Cancelled { candidates: Vec<Cid> },
}

impl LookupOutcome {
    pub fn compound_found(&self) -> bool { matches!(self, LookupOutcome::Found(_)) }

    pub fn assembled(&self) -> Option<&Assembled> {
        match self {
            LookupOutcome::Found(assembled) => Some(assembled),
            LookupOutcome::Cancelled { .. } => None,
        }
    }
}

pub struct Lookup<P: CompoundProvider> {
    provider: P,
}

impl<P: CompoundProvider> Lookup<P> {
    pub fn new(provider: P) -> Self { Self { provider } }

    pub fn provider(&self) -> &P { &self.provider }

    pub fn run(&self, input: &LookupInput, confirm: &dyn Disambiguator) -> Result<LookupOutcome, LookupError> {
        let span = info_span!("lookup", %input);
        let _guard = span.enter();

        let resolution = Resolver::new(&self.provider).resolve(input, confirm)?;
        let (cid, raw_identifiers) = match resolution {
            Resolution::Resolved { cid, raw_identifiers } => (cid, raw_identifiers),
            Resolution::Cancelled { candidates } => return Ok(LookupOutcome::Cancelled { candidates }),
        };
        let assembled = RecordAssembler::new(&self.provider).assemble(cid, input, raw_identifiers)?;
        info!(%cid, warnings = assembled.warnings.len(), "compound found");
        Ok(LookupOutcome::Found(assembled))
    }
}
