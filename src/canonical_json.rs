use serde_json::Value;
use std::collections::BTreeMap;

/// Serializa un `Value` de JSON a una representación canónica:
/// - Objetos con claves ordenadas
/// - Sin espacios redundantes
///
/// Dos exportaciones del mismo payload producen exactamente los mismos bytes.
pub fn to_canonical_json(value: &Value) -> String {
    match value {
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(to_canonical_json).collect();
            format!("[{}]", items.join(","))
        }
        Value::Object(map) => {
            let tree: BTreeMap<&String, String> = map.iter().map(|(k, v)| (k, to_canonical_json(v))).collect();
            let items: Vec<String> = tree.into_iter()
                                         .map(|(k, v)| format!("{}:{}", Value::String(k.clone()), v))
                                         .collect();
            format!("{{{}}}", items.join(","))
        }
        // Escalares: `Display` de serde_json ya es compacto y escapa strings.
        scalar => scalar.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::to_canonical_json;
    use serde_json::json;

    #[test]
    fn test_primitives() {
        assert_eq!(to_canonical_json(&json!(null)), "null");
        assert_eq!(to_canonical_json(&json!(180.16)), "180.16");
        assert_eq!(to_canonical_json(&json!("C9H8O4")), "\"C9H8O4\"");
    }

    #[test]
    fn test_object_sorted_keys() {
        let val = json!({ "MolecularWeight": "180.16", "CID": 2244 });
        assert_eq!(to_canonical_json(&val), "{\"CID\":2244,\"MolecularWeight\":\"180.16\"}");
    }

    #[test]
    fn test_nested() {
        let val = json!({ "PropertyTable": { "Properties": [ { "IUPACName": "a \"b\"", "CID": 1 } ] } });
        assert_eq!(to_canonical_json(&val),
                   "{\"PropertyTable\":{\"Properties\":[{\"CID\":1,\"IUPACName\":\"a \\\"b\\\"\"}]}}");
    }
}
