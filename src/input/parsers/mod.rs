pub mod json;
pub mod yaml;

use std::collections::HashSet;

use crate::error::{Result, ValueGraphError};
use crate::graph::Entry;

/// Trait for key/value document parsers
pub trait MappingParser {
    /// Check if this parser can handle the given file extension
    fn can_parse(&self, extension: &str) -> bool;

    /// Decode a flat mapping into entries, in document order
    fn parse(&self, content: &str, path: &str) -> Result<Vec<Entry>>;
}

/// Parser registry that selects appropriate parser by extension
pub struct ParserRegistry {
    parsers: Vec<Box<dyn MappingParser>>,
}

impl ParserRegistry {
    /// Create a new parser registry with all built-in parsers
    pub fn new() -> Self {
        let mut registry = Self {
            parsers: Vec::new(),
        };

        registry.register(Box::new(yaml::YamlParser));
        registry.register(Box::new(json::JsonParser));

        registry
    }

    /// Register a parser
    pub fn register(&mut self, parser: Box<dyn MappingParser>) {
        self.parsers.push(parser);
    }

    /// Find a parser that can handle the given extension
    pub fn find_parser(&self, extension: &str) -> Option<&dyn MappingParser> {
        self.parsers
            .iter()
            .find(|p| p.can_parse(extension))
            .map(|p| p.as_ref())
    }

    /// Parse content using the parser for the extension.
    ///
    /// Unknown extensions are decoded as YAML. Parse failures are returned
    /// as-is; there is no fallback.
    pub fn parse(&self, content: &str, path: &str, extension: &str) -> Result<Vec<Entry>> {
        match self.find_parser(extension) {
            Some(parser) => parser.parse(content, path),
            None => {
                log::debug!("No parser for extension '{}' ({}), decoding as YAML", extension, path);
                yaml::YamlParser.parse(content, path)
            }
        }
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn decoded (key, value) pairs into entries, rejecting repeated keys.
pub(crate) fn collect_entries(pairs: Vec<(String, String)>, path: &str) -> Result<Vec<Entry>> {
    let mut seen = HashSet::with_capacity(pairs.len());
    let mut entries = Vec::with_capacity(pairs.len());

    for (key, value) in pairs {
        if !seen.insert(key.clone()) {
            return Err(ValueGraphError::Parse(format!(
                "duplicate key '{}' in {}",
                key, path
            )));
        }
        entries.push(Entry { key, value });
    }

    Ok(entries)
}
