//! Assembling variable bindings from command line input

use super::CliError;
use crate::{Bindings, Value};

/// Parses `NAME=VALUE`; the value is bound as text.
///
/// A leading `$` on the name is accepted and dropped.
pub fn parse_variable(spec: &str) -> Result<(String, Value), CliError> {
    let (name, value) = spec
        .split_once('=')
        .ok_or_else(|| CliError::InvalidVariable(spec.to_string()))?;

    let name = name.trim();
    let name = name.strip_prefix('$').unwrap_or(name);
    if name.is_empty() {
        return Err(CliError::InvalidVariable(spec.to_string()));
    }

    Ok((name.to_string(), Value::String(value.to_string())))
}

/// Converts a JSON object into bindings.
pub fn bindings_from_json(json: &str) -> Result<Bindings, CliError> {
    match serde_json::from_str(json)? {
        serde_json::Value::Object(obj) => Ok(obj
            .into_iter()
            .map(|(name, value)| (name, Value::from(value)))
            .collect()),
        _ => Err(CliError::BindingsNotObject),
    }
}

/// Merges JSON bindings with `--var` definitions.
///
/// Every name may be defined once across both sources.
pub fn build_bindings(variables: &[String], input: Option<&str>) -> Result<Bindings, CliError> {
    let mut bindings = match input {
        Some(json) if !json.trim().is_empty() => bindings_from_json(json)?,
        _ => Bindings::new(),
    };

    for spec in variables {
        let (name, value) = parse_variable(spec)?;
        if bindings.contains_key(&name) {
            return Err(CliError::DuplicateVariable(name));
        }
        bindings.insert(name, value);
    }

    Ok(bindings)
}
