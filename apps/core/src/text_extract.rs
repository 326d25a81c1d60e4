//! Task source ingestion.
//! Accepts plain-text `.txt` sources only; everything else is rejected before analysis.

use std::path::Path;
use tracing::{info, warn};

use crate::error::AppError;

/// Extensions accepted as task sources
const ACCEPTED_EXTENSIONS: &[&str] = &["txt"];

/// Validate a task source and return its text unchanged
pub fn extract_task_text(file_name: &str, file_data: &[u8]) -> Result<String, AppError> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    info!("Reading task source: {} (type: {})", file_name, extension);

    if !ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
        warn!("Rejected task source {}: unsupported extension", file_name);
        return Err(AppError::Validation(format!(
            "Unsupported file extension: {} (only .txt files are accepted)",
            if extension.is_empty() { "<none>" } else { extension.as_str() }
        )));
    }

    let text = match String::from_utf8(file_data.to_vec()) {
        Ok(text) => text,
        Err(err) => {
            // Only name the format once the bytes are known not to be text;
            // short magic prefixes also match ordinary task lines.
            if let Some(kind) = infer::get(file_data) {
                if kind.matcher_type() != infer::MatcherType::Text {
                    warn!("Rejected task source {}: detected {}", file_name, kind.mime_type());
                    return Err(AppError::Validation(format!(
                        "Binary content detected: {}",
                        kind.mime_type()
                    )));
                }
            }
            warn!("Rejected task source {}: invalid UTF-8", file_name);
            return Err(err.into());
        }
    };

    if text.contains('\0') {
        warn!("Rejected task source {}: contains NUL bytes", file_name);
        return Err(AppError::Validation(
            "Binary files are not supported".to_string(),
        ));
    }

    info!("Task source accepted: {} characters", text.chars().count());
    Ok(text)
}

/// Read and validate a task file from disk
pub fn read_task_file(path: &Path) -> Result<String, AppError> {
    let data = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    extract_task_text(file_name, &data)
}
