//! Conversion of YAML data documents into engine render contexts

use serde_json::{Map, Number, Value};

use crate::domain::Document;

/// Convert a data document into a JSON value the engine can walk.
///
/// Tagged values are unwrapped. Scalar mapping keys are stringified; null and
/// compound keys cannot be addressed from a template and are dropped.
pub fn to_context(document: &Document) -> Value {
    match document {
        Document::Null => Value::Null,
        Document::Bool(b) => Value::Bool(*b),
        Document::Number(n) => number_to_json(n),
        Document::String(s) => Value::String(s.clone()),
        Document::Sequence(items) => Value::Array(items.iter().map(to_context).collect()),
        Document::Mapping(mapping) => {
            let mut object = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                match key_to_string(key) {
                    Some(name) => {
                        object.insert(name, to_context(value));
                    }
                    None => tracing::warn!("Dropping unaddressable mapping key {:?}", key),
                }
            }
            Value::Object(object)
        }
        Document::Tagged(tagged) => to_context(&tagged.value),
    }
}

fn number_to_json(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::from(i)
    } else if let Some(u) = n.as_u64() {
        Value::from(u)
    } else {
        // NaN and infinities have no JSON form
        n.as_f64().and_then(Number::from_f64).map_or(Value::Null, Value::Number)
    }
}

fn key_to_string(key: &Document) -> Option<String> {
    match key {
        Document::String(s) => Some(s.clone()),
        Document::Number(n) => Some(n.to_string()),
        Document::Bool(b) => Some(b.to_string()),
        Document::Tagged(tagged) => key_to_string(&tagged.value),
        Document::Null | Document::Sequence(_) | Document::Mapping(_) => None,
    }
}
