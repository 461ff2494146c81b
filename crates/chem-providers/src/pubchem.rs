//! Cliente PUG REST de PubChem.
//!
//! Traduce cada respuesta HTTP a un payload tipado o a un `LookupError`:
//! - faults JSON -> `NotFound` / `ServiceFault`
//! - estado fuera de {200, 202} sin fault -> `HttpStatus`
//! - conexión o JSON inválido -> `Transport`
//!
//! Un fault JSON manda sobre el estado HTTP en los tres endpoints JSON: un
//! 503 con `{"Fault": {"Code": "PUGREST.ServerBusy", ..}}` es `ServiceFault`
//! con ese código, no `HttpStatus(503)`. Así se conservan el código y el
//! detalle que envía el servicio. `HttpStatus` queda para cuerpos sin fault
//! y para la imagen, que nunca se interpreta como JSON.
use chem_domain::{is_success_status, Cid, LookupError, PropertyKey, PropertySet};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::config::PubChemConfig;
use crate::payload::{fault_of, IdentifierListEnvelope, InformationListEnvelope, PropertyTableEnvelope};
use crate::provider::{CompoundProvider, IdentifierList, PropertyPayload};
use crate::transport::{HttpResponse, Transport, UreqTransport};

pub const PROVIDER_NAME: &str = "pubchem-pug-rest";

pub fn name_cids_path(name: &str) -> String {
    format!("/compound/name/{}/cids/JSON", utf8_percent_encode(name, NON_ALPHANUMERIC))
}

pub fn image_path(cid: Cid) -> String { format!("/compound/cid/{cid}/PNG") }

pub fn properties_path(cid: Cid) -> String {
    format!("/compound/cid/{cid}/property/{}/JSON", PropertyKey::request_list())
}

pub fn synonyms_path(cid: Cid) -> String { format!("/compound/cid/{cid}/synonyms/JSON") }

pub struct PubChemClient<T: Transport> {
    base_url: String,
    transport: T,
}

impl PubChemClient<UreqTransport> {
    /// Cliente de red configurado desde el entorno.
    pub fn from_env() -> Self {
        let config = PubChemConfig::from_env();
        let transport = UreqTransport::new(&config);
        Self::with_transport(&config, transport)
    }
}

impl<T: Transport> PubChemClient<T> {
    pub fn with_transport(config: &PubChemConfig, transport: T) -> Self {
        Self { base_url: config.base_url.clone(),
               transport }
    }

    pub fn transport(&self) -> &T { &self.transport }

    fn get(&self, path: &str) -> Result<HttpResponse, LookupError> {
        let url = format!("{}{}", self.base_url, path);
        self.transport.get(&url)
    }
}

/// Interpreta un cuerpo JSON: primero el fault, luego el estado.
fn decode_json(response: &HttpResponse) -> Result<Value, LookupError> {
    let value = match serde_json::from_slice::<Value>(&response.body) {
        Ok(value) => value,
        Err(_) if !is_success_status(response.status) => return Err(LookupError::HttpStatus(response.status)),
        Err(e) => return Err(LookupError::Transport(format!("malformed JSON payload: {e}"))),
    };
    if let Some(fault) = fault_of(&value) {
        return Err(fault.into_error());
    }
    if !is_success_status(response.status) {
        return Err(LookupError::HttpStatus(response.status));
    }
    Ok(value)
}

fn shape<S: DeserializeOwned>(value: &Value, what: &str) -> Result<S, LookupError> {
    serde_json::from_value(value.clone()).map_err(|e| LookupError::Transport(format!("unexpected {what} payload: {e}")))
}

impl<T: Transport> CompoundProvider for PubChemClient<T> {
    fn get_name(&self) -> &str { PROVIDER_NAME }

    #[instrument(skip(self))]
    fn resolve_identifiers(&self, name: &str) -> Result<IdentifierList, LookupError> {
        let response = self.get(&name_cids_path(name))?;
        let raw = decode_json(&response)?;
        let envelope: IdentifierListEnvelope = shape(&raw, "identifier list")?;
        let cids = envelope.identifier_list
                           .cid
                           .into_iter()
                           .map(|n| Cid::new(n).map_err(|_| LookupError::Transport(format!("invalid CID {n} in payload"))))
                           .collect::<Result<Vec<_>, _>>()?;
        if cids.is_empty() {
            return Err(LookupError::NotFound { detail: "No CID found that matches the given name".to_string() });
        }
        debug!(matches = cids.len(), "identifiers resolved");
        Ok(IdentifierList { cids, raw })
    }

    #[instrument(skip(self))]
    fn fetch_image(&self, cid: Cid) -> Result<Vec<u8>, LookupError> {
        let response = self.get(&image_path(cid))?;
        if !is_success_status(response.status) {
            return Err(LookupError::HttpStatus(response.status));
        }
        debug!(bytes = response.body.len(), "structure image fetched");
        Ok(response.body)
    }

    #[instrument(skip(self))]
    fn fetch_properties(&self, cid: Cid) -> Result<PropertyPayload, LookupError> {
        let response = self.get(&properties_path(cid))?;
        let raw = decode_json(&response)?;
        let envelope: PropertyTableEnvelope = shape(&raw, "property table")?;
        let empty = Map::new();
        let entry = envelope.property_table.properties.first().unwrap_or(&empty);
        let properties = PropertySet::from_json_object(entry);
        Ok(PropertyPayload { properties, raw })
    }

    #[instrument(skip(self))]
    fn fetch_synonyms(&self, cid: Cid) -> Result<Vec<String>, LookupError> {
        let response = self.get(&synonyms_path(cid))?;
        let raw = decode_json(&response)?;
        let envelope: InformationListEnvelope = shape(&raw, "synonym list")?;
        Ok(envelope.information_list
                   .information
                   .into_iter()
                   .next()
                   .map(|info| info.synonym)
                   .unwrap_or_default())
    }
}
