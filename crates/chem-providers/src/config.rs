//! Carga de configuración del cliente PubChem desde variables de entorno.
//! Usa `PUBCHEM_BASE_URL`, `PUBCHEM_TIMEOUT_SECS` y `PUBCHEM_USER_AGENT`;
//! todas son opcionales.

use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

/// Base fija de PUG REST.
pub const DEFAULT_BASE_URL: &str = "https://pubchem.ncbi.nlm.nih.gov/rest/pug";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PubChemConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for PubChemConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(),
               timeout_secs: DEFAULT_TIMEOUT_SECS,
               user_agent: default_user_agent() }
    }
}

impl PubChemConfig {
    pub fn from_env() -> Self {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero leyendo de una función arbitraria; valores
    /// vacíos o no numéricos caen al valor por defecto.
    pub fn from_lookup<F>(get: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        let defaults = Self::default();
        let base_url = get("PUBCHEM_BASE_URL").map(|v| v.trim().trim_end_matches('/').to_string())
                                              .filter(|v| !v.is_empty())
                                              .unwrap_or(defaults.base_url);
        let timeout_secs = get("PUBCHEM_TIMEOUT_SECS").and_then(|v| v.trim().parse().ok())
                                                      .filter(|v| *v > 0)
                                                      .unwrap_or(defaults.timeout_secs);
        let user_agent = get("PUBCHEM_USER_AGENT").filter(|v| !v.trim().is_empty())
                                                  .unwrap_or(defaults.user_agent);
        Self { base_url, timeout_secs, user_agent }
    }
}

fn default_user_agent() -> String { format!("chem-lookup/{}; {}", env!("CARGO_PKG_VERSION"), env::consts::OS) }

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() { Lazy::force(&DOTENV_LOADED); }

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let cfg = PubChemConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.timeout_secs, 30);
        assert!(cfg.user_agent.starts_with("chem-lookup/"));
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let cfg = PubChemConfig::from_lookup(lookup(&[("PUBCHEM_BASE_URL", "http://localhost:8080/rest/pug/"),
                                                      ("PUBCHEM_TIMEOUT_SECS", "5"),
                                                      ("PUBCHEM_USER_AGENT", "tests")]));
        assert_eq!(cfg.base_url, "http://localhost:8080/rest/pug");
        assert_eq!(cfg.timeout_secs, 5);
        assert_eq!(cfg.user_agent, "tests");
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        let cfg = PubChemConfig::from_lookup(lookup(&[("PUBCHEM_TIMEOUT_SECS", "soon")]));
        assert_eq!(cfg.timeout_secs, DEFAULT_TIMEOUT_SECS);
        let cfg = PubChemConfig::from_lookup(lookup(&[("PUBCHEM_TIMEOUT_SECS", "0")]));
        assert_eq!(cfg.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
