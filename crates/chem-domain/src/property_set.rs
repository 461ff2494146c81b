//! Conjunto fijo de propiedades escalares de un compuesto.
//!
//! Sólo se conocen tres claves. Cada una queda presente o ausente según lo
//! que devolvió el servicio; una ausencia se registra, nunca es fatal.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKey {
    MolecularFormula,
    MolecularWeight,
    #[serde(rename = "IUPACName")]
    IupacName,
}

impl PropertyKey {
    /// Orden de petición y de presentación.
    pub const ALL: [PropertyKey; 3] = [PropertyKey::MolecularFormula, PropertyKey::MolecularWeight, PropertyKey::IupacName];

    /// Nombre de la clave en el payload JSON de PubChem.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKey::MolecularFormula => "MolecularFormula",
            PropertyKey::MolecularWeight => "MolecularWeight",
            PropertyKey::IupacName => "IUPACName",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PropertyKey::MolecularFormula => "Molecular Formula",
            PropertyKey::MolecularWeight => "Molecular Weight",
            PropertyKey::IupacName => "IUPAC Name",
        }
    }

    /// Texto de aviso cuando el servicio omite la clave.
    pub fn missing_message(&self) -> &'static str {
        match self {
            PropertyKey::MolecularFormula => "No molecular formula returned",
            PropertyKey::MolecularWeight => "No molecular weight returned",
            PropertyKey::IupacName => "No IUPAC name returned",
        }
    }

    /// Texto que se muestra en lugar de un valor ausente.
    pub fn placeholder(&self) -> &'static str {
        match self {
            PropertyKey::MolecularFormula | PropertyKey::MolecularWeight => "Nothing returned",
            PropertyKey::IupacName => "N/A",
        }
    }

    fn index(&self) -> usize {
        match self {
            PropertyKey::MolecularFormula => 0,
            PropertyKey::MolecularWeight => 1,
            PropertyKey::IupacName => 2,
        }
    }

    /// Lista separada por comas usada en la URL de propiedades.
    pub fn request_list() -> String {
        PropertyKey::ALL.iter().map(|k| k.as_str()).collect::<Vec<_>>().join(",")
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySet {
    values: [Option<String>; 3],
}

impl PropertySet {
    pub fn new() -> Self { Self::default() }

    /// Extrae las tres claves conocidas de una entrada de `PropertyTable`.
    /// Los números se conservan en su forma textual; `null` cuenta como
    /// ausente.
    pub fn from_json_object(entry: &Map<String, Value>) -> Self {
        let mut set = PropertySet::new();
        for key in PropertyKey::ALL {
            let value = match entry.get(key.as_str()) {
                Some(Value::String(s)) => Some(s.clone()),
                Some(Value::Null) | None => None,
                Some(other) => Some(other.to_string()),
            };
            if let Some(value) = value {
                set.set(key, value);
            }
        }
        set
    }

    pub fn set(&mut self, key: PropertyKey, value: impl Into<String>) { self.values[key.index()] = Some(value.into()); }

    pub fn get(&self, key: PropertyKey) -> Option<&str> { self.values[key.index()].as_deref() }

    pub fn is_present(&self, key: PropertyKey) -> bool { self.values[key.index()].is_some() }

    /// Claves ausentes, en el orden de `PropertyKey::ALL`.
    pub fn missing_keys(&self) -> Vec<PropertyKey> {
        PropertyKey::ALL.into_iter().filter(|k| !self.is_present(*k)).collect()
    }

    /// Valor para mostrar, con el texto sustituto si falta.
    pub fn display_value(&self, key: PropertyKey) -> &str { self.get(key).unwrap_or(key.placeholder()) }

    pub fn molecular_formula(&self) -> Option<&str> { self.get(PropertyKey::MolecularFormula) }
    pub fn molecular_weight(&self) -> Option<&str> { self.get(PropertyKey::MolecularWeight) }
    pub fn iupac_name(&self) -> Option<&str> { self.get(PropertyKey::IupacName) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_from_complete_entry() {
        let entry = object(json!({
            "CID": 2244,
            "MolecularFormula": "C9H8O4",
            "MolecularWeight": "180.16",
            "IUPACName": "2-acetyloxybenzoic acid"
        }));
        let set = PropertySet::from_json_object(&entry);
        assert_eq!(set.molecular_formula(), Some("C9H8O4"));
        assert_eq!(set.molecular_weight(), Some("180.16"));
        assert_eq!(set.iupac_name(), Some("2-acetyloxybenzoic acid"));
        assert!(set.missing_keys().is_empty());
    }

    #[test]
    fn test_numeric_weight_keeps_text_form() {
        let entry = object(json!({ "MolecularWeight": 180.16 }));
        let set = PropertySet::from_json_object(&entry);
        assert_eq!(set.molecular_weight(), Some("180.16"));
    }

    #[test]
    fn test_missing_and_null_keys_are_absent() {
        let entry = object(json!({ "MolecularFormula": "C9H8O4", "IUPACName": null }));
        let set = PropertySet::from_json_object(&entry);
        assert_eq!(set.missing_keys(), vec![PropertyKey::MolecularWeight, PropertyKey::IupacName]);
        assert_eq!(set.display_value(PropertyKey::MolecularWeight), "Nothing returned");
        assert_eq!(set.display_value(PropertyKey::IupacName), "N/A");
        assert_eq!(set.display_value(PropertyKey::MolecularFormula), "C9H8O4");
    }

    #[test]
    fn test_key_names_do_not_match_by_substring() {
        // Una clave parecida no debe contar como presente.
        let entry = object(json!({ "MolecularFormulaHill": "C9H8O4", "note": "MolecularWeight" }));
        let set = PropertySet::from_json_object(&entry);
        assert_eq!(set.missing_keys().len(), 3);
    }

    #[test]
    fn test_request_list() {
        assert_eq!(PropertyKey::request_list(), "MolecularFormula,MolecularWeight,IUPACName");
    }
}
