//! Shared JSON Schema loader.
//!
//! Keeps registry schema handling in one place: callers compile the schema
//! once and validate raw JSON values against it before any serde parsing, so
//! malformed registries fail with field-level schema errors instead of serde
//! noise.

use anyhow::{Context, Result, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

/// A compiled schema plus the raw document it was built from.
pub(crate) struct CompiledSchema {
    pub compiled: JSONSchema,
    // Keeps the schema document alive for the lifetime of `compiled`, which
    // borrows it as 'static below.
    #[allow(dead_code)]
    raw: Arc<Value>,
}

/// Read, parse, and compile a JSON Schema from disk.
pub(crate) fn compile_schema(path: &Path) -> Result<CompiledSchema> {
    let schema_value: Value = serde_json::from_reader(BufReader::new(
        File::open(path).with_context(|| format!("opening schema {}", path.display()))?,
    ))
    .with_context(|| format!("parsing schema {}", path.display()))?;

    let raw = Arc::new(schema_value);
    let raw_static: &'static Value = unsafe { &*(Arc::as_ptr(&raw)) };
    let compiled = JSONSchema::compile(raw_static)
        .with_context(|| format!("compiling schema {}", path.display()))?;

    Ok(CompiledSchema { compiled, raw })
}

/// Validate a JSON value, joining every schema error into one report.
pub(crate) fn validate_with_schema(schema: &CompiledSchema, value: &Value) -> Result<()> {
    if let Err(errors) = schema.compiled.validate(value) {
        let details = errors
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        bail!("{details}");
    }
    Ok(())
}
