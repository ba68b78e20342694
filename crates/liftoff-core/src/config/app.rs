//! Application configuration shared with plugin hooks.
//!
//! The host never interprets these values. Plugins own a namespace (a
//! top-level key, usually their own name) and are expected to validate it
//! and fill in defaults during `configure`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AppError, ErrorKind};

/// Mutable, JSON-shaped application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppConfig {
    values: Map<String, Value>,
}

impl AppConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(AppError::configuration(format!(
                "Application config must be an object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Loads a configuration file. `.toml` files are parsed as TOML, anything
    /// else as JSON. Keys are kept exactly as written.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Failed to read application config '{}': {e}", path.display()),
                e,
            )
        })?;

        let parsed = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str::<Value>(&text).map_err(|e| e.to_string()),
            _ => serde_json::from_str::<Value>(&text).map_err(|e| e.to_string()),
        };
        let value = parsed.map_err(|e| {
            AppError::configuration(format!(
                "Failed to parse application config '{}': {e}",
                path.display()
            ))
        })?;

        Self::from_value(value)
    }

    /// Returns a top-level value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns a top-level string value.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Inserts a top-level value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.values.insert(key.into(), value)
    }

    /// Returns the section owned by a plugin, if present and an object.
    pub fn namespace(&self, name: &str) -> Option<&Map<String, Value>> {
        self.values.get(name).and_then(Value::as_object)
    }

    /// Returns the section owned by a plugin, creating an empty one if missing.
    ///
    /// Fails when the key exists but does not hold an object.
    pub fn namespace_mut(&mut self, name: &str) -> Result<&mut Map<String, Value>, AppError> {
        let entry = self
            .values
            .entry(name.to_string())
            .or_insert_with(|| Value::Object(Map::new()));

        let kind = json_type_name(entry);
        entry.as_object_mut().ok_or_else(|| {
            AppError::configuration(format!("Section '{name}' must be an object, got {kind}"))
        })
    }

    /// Writes `value` under `name.key` unless the user already set it.
    ///
    /// Returns `true` when the default was applied.
    pub fn set_default(&mut self, name: &str, key: &str, value: Value) -> Result<bool, AppError> {
        let section = self.namespace_mut(name)?;
        if section.contains_key(key) {
            return Ok(false);
        }
        section.insert(key.to_string(), value);
        Ok(true)
    }

    /// Lists keys in a namespace that are not in `allowed`, sorted.
    pub fn unknown_keys(&self, name: &str, allowed: &[&str]) -> Vec<String> {
        let mut unknown: Vec<String> = self
            .namespace(name)
            .map(|section| {
                section
                    .keys()
                    .filter(|key| !allowed.contains(&key.as_str()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        unknown.sort();
        unknown
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
