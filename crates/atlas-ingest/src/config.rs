//! Saved-configuration parsing.

use atlas_model::SavedConfig;
use serde_json::Value;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Configuration schema versions this layer can read.
pub const SUPPORTED_CONFIG_VERSIONS: [&str; 2] = ["v0", "v1"];

/// Parses and version-checks a saved map configuration.
///
/// The body stays opaque; only the version envelope is interpreted here,
/// and an unsupported version is refused rather than passed through for
/// the engine to choke on.
pub fn parse_saved_config(raw: &Value) -> Result<SavedConfig> {
    let version = raw
        .get("version")
        .and_then(Value::as_str)
        .ok_or(IngestError::MissingConfigVersion)?;

    if !SUPPORTED_CONFIG_VERSIONS.contains(&version) {
        return Err(IngestError::UnsupportedConfigVersion {
            version: version.to_string(),
        });
    }

    let config = raw
        .get("config")
        .cloned()
        .ok_or(IngestError::MissingConfigBody)?;

    debug!(version, "parsed saved configuration");
    Ok(SavedConfig {
        version: version.to_string(),
        config,
    })
}
