//! Contrato del cliente remoto de compuestos.
//! Cada operación es una llamada síncrona que devuelve un payload tipado o
//! un `LookupError` ya clasificado. Los consumidores (resolver, ensamblador)
//! dependen sólo de este trait.
use chem_domain::{Cid, LookupError, PropertySet};
use serde_json::Value;

/// CIDs devueltos por la resolución de un nombre, en el orden del servicio.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierList {
    pub cids: Vec<Cid>,
    pub raw: Value,
}

/// Propiedades parseadas junto con el payload original para exportar.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyPayload {
    pub properties: PropertySet,
    pub raw: Value,
}

pub trait CompoundProvider {
    fn get_name(&self) -> &str;

    /// # Errores
    /// `NotFound` si no hay coincidencias, `ServiceFault` para otros faults,
    /// `Transport` por conexión o JSON inválido.
    fn resolve_identifiers(&self, name: &str) -> Result<IdentifierList, LookupError>;

    /// # Errores
    /// `HttpStatus(code)` si el estado no es 200 ni 202.
    fn fetch_image(&self, cid: Cid) -> Result<Vec<u8>, LookupError>;

    fn fetch_properties(&self, cid: Cid) -> Result<PropertyPayload, LookupError>;

    fn fetch_synonyms(&self, cid: Cid) -> Result<Vec<String>, LookupError>;
}

impl<P: CompoundProvider + ?Sized> CompoundProvider for &P {
    fn get_name(&self) -> &str { (**self).get_name() }
    fn resolve_identifiers(&self, name: &str) -> Result<IdentifierList, LookupError> { (**self).resolve_identifiers(name) }
    fn fetch_image(&self, cid: Cid) -> Result<Vec<u8>, LookupError> { (**self).fetch_image(cid) }
    fn fetch_properties(&self, cid: Cid) -> Result<PropertyPayload, LookupError> { (**self).fetch_properties(cid) }
    fn fetch_synonyms(&self, cid: Cid) -> Result<Vec<String>, LookupError> { (**self).fetch_synonyms(cid) }
}
