/*
SPDX-License-Identifier: MPL-2.0
*/

//! Loading reference records from files.

use std::fs;
use std::path::Path;

use abnt_core::ReferenceRecord;

use crate::ProcessorError;

/// Load reference records from a file given its path.
/// Supports YAML and JSON, holding either a list of records or a single one.
pub fn load_records(path: &Path) -> Result<Vec<ReferenceRecord>, ProcessorError> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    match ext {
        "json" => {
            // Check for syntax errors first
            let _: serde_json::Value = serde_json::from_slice(&bytes)
                .map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string()))?;

            if let Ok(records) = serde_json::from_slice::<Vec<ReferenceRecord>>(&bytes) {
                return Ok(records);
            }
            match serde_json::from_slice::<ReferenceRecord>(&bytes) {
                Ok(record) => Ok(vec![record]),
                Err(e) => Err(ProcessorError::ParseError(
                    "JSON".to_string(),
                    e.to_string(),
                )),
            }
        }
        _ => {
            let content = String::from_utf8_lossy(&bytes);
            // Check for syntax errors first
            let _: serde_yaml::Value = serde_yaml::from_str(&content)
                .map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string()))?;

            if let Ok(records) = serde_yaml::from_str::<Vec<ReferenceRecord>>(&content) {
                return Ok(records);
            }
            match serde_yaml::from_str::<ReferenceRecord>(&content) {
                Ok(record) => Ok(vec![record]),
                Err(e) => Err(ProcessorError::ParseError(
                    "YAML".to_string(),
                    e.to_string(),
                )),
            }
        }
    }
}
