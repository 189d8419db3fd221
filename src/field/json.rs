//! JSON field registry loader.
//!
//! # Feature
//!
//! Requires the `json` feature.
//!
//! # Supported Formats
//!
//! ## Array format
//!
//! ```json
//! [
//!   {
//!     "name": "rg",
//!     "plain": { "kind": "template", "pattern": "##.###.###-#", "options": { "only_numbers": true } },
//!     "secret": { "mask_then_format": { "start": 2, "end": 1 } }
//!   }
//! ]
//! ```
//!
//! ## Object format (keyed by field name)
//!
//! ```json
//! {
//!   "rate": { "plain": { "kind": "percent" } },
//!   "login": {
//!     "secret": { "segmented": { "start": [2, 1], "end": 0, "special_characters": ["@", "."] } }
//!   }
//! }
//! ```
//!
//! A single field object is accepted too.

use super::{FieldRegistry, FieldSpec};
use crate::error::FormatError;
use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

/// JSON field registry loader.
pub struct JsonFieldLoader;

impl JsonFieldLoader {
    /// Loads a registry from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use format_mask::field::JsonFieldLoader;
    ///
    /// let registry = JsonFieldLoader::from_file("fields.json")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<FieldRegistry, FormatError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Loads a registry from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<FieldRegistry, FormatError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::parse(&content)
    }

    /// Loads a registry from a JSON string.
    ///
    /// Every field is validated with [`FieldSpec::validate`].
    pub fn parse(json: &str) -> Result<FieldRegistry, FormatError> {
        let trimmed = json.trim();

        let specs = if trimmed.starts_with('[') {
            Self::parse_array(trimmed)?
        } else if trimmed.starts_with('{') {
            if Self::is_single_field(trimmed)? {
                vec![parse_json::<FieldSpec>(trimmed)?]
            } else {
                Self::parse_object(trimmed)?
            }
        } else {
            return Err(FormatError::Parse(
                "Invalid JSON format: expected array or object".to_string(),
            ));
        };

        for spec in &specs {
            spec.validate()?;
        }

        tracing::trace!(count = specs.len(), "loaded field definitions");
        Ok(specs.into_iter().collect())
    }

    /// Writes a registry as a pretty-printed JSON array.
    pub fn to_string(registry: &FieldRegistry) -> Result<String, FormatError> {
        let specs: Vec<&FieldSpec> = registry.iter().collect();
        serde_json::to_string_pretty(&specs)
            .map_err(|e| FormatError::Parse(format!("JSON write error: {}", e)))
    }

    fn parse_array(json: &str) -> Result<Vec<FieldSpec>, FormatError> {
        parse_json(json)
    }

    /// A single field carries a top-level `"name"` string; a keyed object never does.
    fn is_single_field(json: &str) -> Result<bool, FormatError> {
        let value: serde_json::Value = parse_json(json)?;
        Ok(value.get("name").is_some_and(serde_json::Value::is_string))
    }

    fn parse_object(json: &str) -> Result<Vec<FieldSpec>, FormatError> {
        let map: BTreeMap<String, FieldSpec> = parse_json(json)?;

        Ok(map
            .into_iter()
            .map(|(name, mut spec)| {
                // The key names the field unless the entry does
                if spec.name.is_empty() {
                    spec.name = name;
                }
                spec
            })
            .collect())
    }
}

fn parse_json<T: serde::de::DeserializeOwned>(json: &str) -> Result<T, FormatError> {
    serde_json::from_str(json).map_err(|e| FormatError::Parse(format!("JSON parse error: {}", e)))
}

impl FieldRegistry {
    /// Loads a registry from a JSON string. See [`JsonFieldLoader::parse`].
    pub fn from_json_str(json: &str) -> Result<Self, FormatError> {
        JsonFieldLoader::parse(json)
    }

    /// Loads a registry from a JSON file. See [`JsonFieldLoader::from_file`].
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, FormatError> {
        JsonFieldLoader::from_file(path)
    }

    /// Loads a registry from a reader. See [`JsonFieldLoader::from_reader`].
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, FormatError> {
        JsonFieldLoader::from_reader(reader)
    }

    /// Writes the registry as JSON. See [`JsonFieldLoader::to_string`].
    pub fn to_json(&self) -> Result<String, FormatError> {
        JsonFieldLoader::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{PatternChoice, PlainRule, SecretRule};
    use crate::mask::{Hidden, SecretSpan};
    use crate::segment::Bounds;

    #[test]
    fn test_parse_array_format() {
        let json = r###"[
            {
                "name": "rg",
                "plain": {
                    "kind": "template",
                    "pattern": "##.###.###-#",
                    "options": { "only_numbers": true }
                },
                "secret": { "mask_then_format": { "start": 2, "end": 1 } }
            },
            {
                "name": "amount",
                "plain": { "kind": "currency", "code": "USD" }
            }
        ]"###;

        let registry = JsonFieldLoader::parse(json).unwrap();
        assert_eq!(registry.len(), 2);

        let rg = registry.get("rg").unwrap();
        match &rg.plain {
            Some(PlainRule::Template { pattern, options }) => {
                assert_eq!(pattern, &PatternChoice::Fixed("##.###.###-#".to_string()));
                assert!(options.only_numbers);
                assert!(!options.uppercase);
            }
            other => panic!("Expected template rule, got {:?}", other),
        }
        assert_eq!(rg.secret, Some(SecretRule::MaskThenFormat(SecretSpan::new(2, 1))));

        assert_eq!(
            registry.get("amount").and_then(|f| f.plain.clone()),
            Some(PlainRule::currency("USD"))
        );
    }

    #[test]
    fn test_parse_object_format() {
        let json = r#"{
            "rate": { "plain": { "kind": "percent" } },
            "login": {
                "secret": {
                    "segmented": { "start": [2, 1], "end": 0, "special_characters": ["@", "."] }
                }
            }
        }"#;

        let registry = JsonFieldLoader::parse(json).unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["login", "rate"]);

        match &registry.get("login").unwrap().secret {
            Some(SecretRule::Segmented(span)) => {
                assert_eq!(span.start, Bounds::Each(vec![2, 1]));
                assert_eq!(span.end, Bounds::One(0));
                assert_eq!(span.special_characters, vec!['@', '.']);
            }
            other => panic!("Expected segmented rule, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_single_field() {
        let json = r#"{
            "name": "doc",
            "secret": { "format_then_mask": { "start": 1, "end": 1, "hidden": "edges" } }
        }"#;

        let registry = JsonFieldLoader::parse(json).unwrap();
        match &registry.get("doc").unwrap().secret {
            Some(SecretRule::FormatThenMask(span)) => assert_eq!(span.hidden, Hidden::Edges),
            other => panic!("Expected format-then-mask rule, got {:?}", other),
        }
    }

    #[test]
    fn test_pattern_by_length() {
        let json = r#"[{
            "name": "phone",
            "plain": {
                "kind": "template",
                "pattern": { "lengths": [[11, "(##) # ####-####"]], "fallback": "(##) ####-####" }
            }
        }]"#;

        let registry = JsonFieldLoader::parse(json).unwrap();
        match &registry.get("phone").unwrap().plain {
            Some(PlainRule::Template { pattern, .. }) => {
                assert_eq!(pattern.select("12934567890"), "(##) # ####-####");
            }
            other => panic!("Expected template rule, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_field_rejected() {
        let result = JsonFieldLoader::parse(r#"[{ "name": "nothing" }]"#);
        assert!(matches!(result, Err(FormatError::InvalidField { .. })));

        let result = JsonFieldLoader::parse(r#"[{ "plain": { "kind": "percent" } }]"#);
        assert!(matches!(result, Err(FormatError::InvalidField { .. })));
    }

    #[test]
    fn test_empty_json() {
        assert!(JsonFieldLoader::parse("[]").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(JsonFieldLoader::parse("not valid json"), Err(FormatError::Parse(_))));
        assert!(matches!(JsonFieldLoader::parse("[{"), Err(FormatError::Parse(_))));
    }

    #[test]
    fn test_keyed_object_reports_parse_error() {
        let json = r###"{ "rg": { "plain": { "kind": "templat", "pattern": "##.###" } } }"###;
        match FieldRegistry::from_json_str(json) {
            Err(FormatError::Parse(message)) => assert!(message.contains("templat")),
            other => panic!("Expected parse error, got {:?}", other),
        }

        // A malformed single field reports its own parse error
        let json = r#"{ "name": "doc", "secret": { "format_then_mask": { "start": "one" } } }"#;
        assert!(matches!(JsonFieldLoader::parse(json), Err(FormatError::Parse(_))));
    }

    #[test]
    fn test_field_keyed_as_name() {
        let json = r#"{ "name": { "plain": { "kind": "percent" } } }"#;
        let registry = JsonFieldLoader::parse(json).unwrap();
        assert!(registry.contains("name"));
    }

    #[test]
    fn test_from_reader() {
        let json = br#"[{ "name": "rate", "plain": { "kind": "percent" } }]"#;
        let registry = JsonFieldLoader::from_reader(&json[..]).unwrap();
        assert!(registry.contains("rate"));
    }

    #[test]
    fn test_missing_file() {
        let result = FieldRegistry::from_json_file("/nonexistent/fields.json");
        assert!(matches!(result, Err(FormatError::Io(_))));
    }

    #[test]
    fn test_builtin_registry_survives_json() {
        let registry = FieldRegistry::brazilian();
        let json = registry.to_json().unwrap();
        assert_eq!(FieldRegistry::from_json_str(&json).unwrap(), registry);
    }
}
