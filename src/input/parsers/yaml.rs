use super::{collect_entries, MappingParser};
use crate::error::{Result, ValueGraphError};
use crate::graph::Entry;
use serde::de::{Deserialize, Deserializer, Error as _, MapAccess, Visitor};
use std::fmt;

/// YAML parser for flat key/value documents
pub struct YamlParser;

impl MappingParser for YamlParser {
    fn can_parse(&self, extension: &str) -> bool {
        matches!(extension, "yaml" | "yml")
    }

    fn parse(&self, content: &str, path: &str) -> Result<Vec<Entry>> {
        let mapping: ScalarMapping = serde_yaml_ng::from_str(content)
            .map_err(|e| ValueGraphError::Parse(format!("YAML parse error in {}: {}", path, e)))?;

        collect_entries(mapping.0, path)
    }
}

/// Root mapping with every scalar kept as written (`1.50` stays `1.50`).
/// Null values become the empty string; an empty document is an empty mapping.
struct ScalarMapping(Vec<(String, String)>);

impl<'de> Deserialize<'de> for ScalarMapping {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MappingVisitor;

        impl<'de> Visitor<'de> for MappingVisitor {
            type Value = ScalarMapping;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping of keys to scalar values")
            }

            // Empty or comment-only document
            fn visit_unit<E>(self) -> std::result::Result<ScalarMapping, E>
            where
                E: serde::de::Error,
            {
                Ok(ScalarMapping(Vec::new()))
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<ScalarMapping, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(key) = access.next_key::<Option<String>>()? {
                    let key = key.ok_or_else(|| A::Error::custom("null key"))?;
                    let value = access.next_value::<Option<String>>().map_err(|e| {
                        A::Error::custom(format!("value of '{}' must be a scalar: {}", key, e))
                    })?;
                    pairs.push((key, value.unwrap_or_default()));
                }
                Ok(ScalarMapping(pairs))
            }
        }

        deserializer.deserialize_any(MappingVisitor)
    }
}
