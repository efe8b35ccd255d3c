use super::{collect_entries, MappingParser};
use crate::error::{Result, ValueGraphError};
use crate::graph::Entry;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::value::RawValue;
use std::fmt;

/// JSON parser for flat object documents
pub struct JsonParser;

impl MappingParser for JsonParser {
    fn can_parse(&self, extension: &str) -> bool {
        extension == "json"
    }

    fn parse(&self, content: &str, path: &str) -> Result<Vec<Entry>> {
        let object: OrderedObject = serde_json::from_str(content)
            .map_err(|e| ValueGraphError::Parse(format!("JSON parse error in {}: {}", path, e)))?;

        let mut pairs = Vec::with_capacity(object.0.len());
        for (key, value) in object.0 {
            let raw = value.get();
            let text = match raw.as_bytes().first() {
                Some(b'"') => serde_json::from_str::<String>(raw).map_err(|e| {
                    ValueGraphError::Parse(format!("value of '{}' in {}: {}", key, path, e))
                })?,
                Some(b'[') | Some(b'{') => {
                    return Err(ValueGraphError::Parse(format!(
                        "value of '{}' in {} must be a scalar",
                        key, path
                    )))
                }
                _ if raw == "null" => String::new(),
                // Numbers and booleans exactly as written
                _ => raw.to_string(),
            };
            pairs.push((key, text));
        }

        collect_entries(pairs, path)
    }
}

/// Top-level object as written, keeping member order, repeated keys and
/// the source text of each value.
struct OrderedObject(Vec<(String, Box<RawValue>)>);

impl<'de> Deserialize<'de> for OrderedObject {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ObjectVisitor;

        impl<'de> Visitor<'de> for ObjectVisitor {
            type Value = OrderedObject;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object of key/value pairs")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<OrderedObject, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut members = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, Box<RawValue>>()? {
                    members.push((key, value));
                }
                Ok(OrderedObject(members))
            }
        }

        deserializer.deserialize_map(ObjectVisitor)
    }
}
