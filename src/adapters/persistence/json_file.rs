//! JSON File - Whole-file JSON Array Storage
//!
//! The storage primitive every record store is built on. A backing file
//! holds one pretty-printed JSON array; reads load all of it and writes
//! replace all of it. Elements are kept as raw JSON values and are never
//! schema-checked here, so a rewrite carries every element and every
//! field through unchanged. A missing file, a file that does not parse
//! and a file whose top level is not an array all read as empty.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, warn};

use crate::ports::{Result, StoreError};

/// Indentation used for every backing file.
const INDENT: &[u8] = b"    ";

/// How a full-collection write reaches the disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate and rewrite the backing file in place. A crash mid-write
    /// can leave it truncated.
    #[default]
    Direct,
    /// Write a sibling `.tmp` file, then rename it over the backing file.
    Atomic,
}

/// Load the whole collection from `path` as raw elements.
///
/// Returns an empty vec when the file is absent, is not valid JSON, or
/// holds something other than an array. Any other I/O failure is
/// returned.
pub fn read(path: &Path) -> Result<Vec<Value>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "Backing file missing, reading as empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(StoreError::io(path, e)),
    };

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Array(elements)) => Ok(elements),
        Ok(other) => {
            warn!(
                path = %path.display(),
                found = json_kind(&other),
                "Backing file is not a JSON array, reading as empty"
            );
            Ok(Vec::new())
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "Backing file is not valid JSON, reading as empty"
            );
            Ok(Vec::new())
        }
    }
}

/// Replace the contents of `path` with `elements`.
pub fn write<T: Serialize>(path: &Path, elements: &[T], mode: WriteMode) -> Result<()> {
    let bytes = encode(elements).map_err(|e| StoreError::serialize(path, e))?;

    match mode {
        WriteMode::Direct => fs::write(path, &bytes).map_err(|e| StoreError::io(path, e))?,
        WriteMode::Atomic => {
            let tmp = tmp_path(path);
            fs::write(&tmp, &bytes).map_err(|e| StoreError::io(&tmp, e))?;
            fs::rename(&tmp, path).map_err(|e| StoreError::io(path, e))?;
        }
    }

    debug!(
        path = %path.display(),
        count = elements.len(),
        ?mode,
        "Backing file written"
    );
    Ok(())
}

/// Read the collection, push `element` and write everything back.
pub fn append(path: &Path, element: Value, mode: WriteMode) -> Result<()> {
    let mut elements = read(path)?;
    elements.push(element);
    write(path, &elements, mode)
}

fn encode<T: Serialize>(elements: &[T]) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    elements.serialize(&mut ser)?;
    Ok(buf)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
