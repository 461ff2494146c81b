//! Capa de transporte HTTP.
//!
//! `Transport` es la costura entre el cliente PubChem y la red: devuelve el
//! estado y el cuerpo sin interpretar. Cualquier estado HTTP es una
//! respuesta válida aquí; sólo los fallos de conexión son errores.
use std::time::Duration;

use chem_domain::LookupError;
use tracing::debug;
use ureq::Agent;

use crate::config::PubChemConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self { Self { status, body: body.into() } }
}

pub trait Transport {
    /// Ejecuta un `GET` bloqueante sobre `url`.
    fn get(&self, url: &str) -> Result<HttpResponse, LookupError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<HttpResponse, LookupError> { (**self).get(url) }
}

/// Transporte real sobre un `ureq::Agent` síncrono.
pub struct UreqTransport {
    agent: Agent,
    user_agent: String,
}

impl UreqTransport {
    pub fn new(config: &PubChemConfig) -> Self {
        let agent_config = Agent::config_builder().http_status_as_error(false)
                                                  .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
                                                  .build();
        Self { agent: Agent::new_with_config(agent_config),
               user_agent: config.user_agent.clone() }
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, LookupError> {
        debug!(%url, "GET");
        let mut response = self.agent
                               .get(url)
                               .header("User-Agent", self.user_agent.as_str())
                               .call()
                               .map_err(|e| LookupError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.body_mut()
                           .read_to_vec()
                           .map_err(|e| LookupError::Transport(format!("reading response body: {e}")))?;
        debug!(%url, status, bytes = body.len(), "response");
        Ok(HttpResponse { status, body })
    }
}
