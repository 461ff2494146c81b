use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::LookupError;

/// Identificador canónico de un compuesto en PubChem (CID).
///
/// Siempre es un entero positivo; el cero se rechaza en la construcción.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Cid(u64);

impl Cid {
    pub fn new(value: u64) -> Result<Self, LookupError> {
        if value == 0 {
            return Err(LookupError::Validation("CID must be a positive integer".to_string()));
        }
        Ok(Cid(value))
    }

    pub fn get(&self) -> u64 { self.0 }
}

impl TryFrom<u64> for Cid {
    type Error = LookupError;

    fn try_from(value: u64) -> Result<Self, Self::Error> { Cid::new(value) }
}

impl From<Cid> for u64 {
    fn from(cid: Cid) -> Self { cid.0 }
}

impl FromStr for Cid {
    type Err = LookupError;

    /// Interpreta texto de usuario; espacios alrededor se ignoran.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed.parse::<u64>()
                           .map_err(|_| LookupError::Validation(format!("'{trimmed}' is not a valid CID")))?;
        Cid::new(value)
    }
}

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_cid() {
        let cid: Cid = " 2244 ".parse().unwrap();
        assert_eq!(cid.get(), 2244);
        assert_eq!(cid.to_string(), "2244");
    }

    #[test]
    fn test_parse_rejects_non_numeric_and_zero() {
        assert!(matches!("aspirin".parse::<Cid>(), Err(LookupError::Validation(_))));
        assert!(matches!("-5".parse::<Cid>(), Err(LookupError::Validation(_))));
        assert!(matches!("0".parse::<Cid>(), Err(LookupError::Validation(_))));
        assert!(matches!("".parse::<Cid>(), Err(LookupError::Validation(_))));
    }

    #[test]
    fn test_deserialize_goes_through_validation() {
        let cid: Cid = serde_json::from_str("2244").unwrap();
        assert_eq!(cid, Cid::new(2244).unwrap());
        assert!(serde_json::from_str::<Cid>("0").is_err());
    }
}
