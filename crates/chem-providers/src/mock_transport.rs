//! Transporte en memoria con respuestas guionizadas por URL.
//!
//! Pensado para tests: ninguna petición sale a la red y cada llamada queda
//! registrada en orden. Una URL sin guion responde como fallo de conexión.
use std::cell::RefCell;
use std::collections::HashMap;

use chem_domain::LookupError;
use serde_json::Value;

use crate::config::DEFAULT_BASE_URL;
use crate::transport::{HttpResponse, Transport};

pub struct MockTransport {
    base_url: String,
    routes: HashMap<String, Result<HttpResponse, LookupError>>,
    calls: RefCell<Vec<String>>,
}

impl Default for MockTransport {
    fn default() -> Self { Self::new(DEFAULT_BASE_URL) }
}

impl MockTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(),
               routes: HashMap::new(),
               calls: RefCell::new(Vec::new()) }
    }

    /// Responde `path` (relativo a la base) con un cuerpo JSON.
    pub fn with_json(self, path: &str, status: u16, body: Value) -> Self {
        self.with_bytes(path, status, body.to_string().into_bytes())
    }

    pub fn with_bytes(mut self, path: &str, status: u16, body: impl Into<Vec<u8>>) -> Self {
        let url = self.url(path);
        self.routes.insert(url, Ok(HttpResponse::new(status, body)));
        self
    }

    /// Simula un fallo de conexión para `path`.
    pub fn with_failure(mut self, path: &str, message: &str) -> Self {
        let url = self.url(path);
        self.routes.insert(url, Err(LookupError::Transport(message.to_string())));
        self
    }

    /// URLs pedidas, en orden.
    pub fn calls(&self) -> Vec<String> { self.calls.borrow().clone() }

    pub fn call_count(&self) -> usize { self.calls.borrow().len() }

    /// Cuántas veces se pidió `path`.
    pub fn calls_to(&self, path: &str) -> usize {
        let url = self.url(path);
        self.calls.borrow().iter().filter(|c| **c == url).count()
    }

    fn url(&self, path: &str) -> String { format!("{}{}", self.base_url, path) }
}

impl Transport for MockTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, LookupError> {
        self.calls.borrow_mut().push(url.to_string());
        match self.routes.get(url) {
            Some(reply) => reply.clone(),
            None => Err(LookupError::Transport(format!("connection refused: {url}"))),
        }
    }
}
