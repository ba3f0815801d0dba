//! Utility functions for error handling
//!
//! Helpers for reading patient records from disk with rich error information.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{PathwayError, Result};
use crate::models::PatientData;

/// Safely read a file to string with rich error information
///
/// # Arguments
/// * `path` - The path to the file to read
/// * `purpose` - Why the file is being read (for error context)
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    if !path.exists() {
        return Err(PathwayError::file(
            format!("File not found (needed for: {purpose})"),
            path,
            io::Error::from(io::ErrorKind::NotFound),
        ));
    }

    if !path.is_file() {
        return Err(PathwayError::file(
            format!("Path is not a file (expected a file for: {purpose})"),
            path,
            io::Error::from(io::ErrorKind::InvalidInput),
        ));
    }

    fs::read_to_string(path).map_err(|e| {
        let message = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            io::ErrorKind::InvalidData => {
                "File contains invalid UTF-8 data - cannot read as text".to_string()
            }
            _ => format!("Failed to read file content for: {purpose}"),
        };
        PathwayError::file(message, path, e)
    })
}

/// Load a patient record from a JSON document
///
/// Missing fields take the pathway start defaults, so a document only needs
/// to carry the findings that differ from them.
pub fn load_patient(path: &Path) -> Result<PatientData> {
    let content = safe_read_to_string(path, "patient record")?;
    let patient = serde_json::from_str(&content)?;
    Ok(patient)
}
