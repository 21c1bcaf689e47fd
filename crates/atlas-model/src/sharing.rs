//! The sharing slice: credential and file-push status.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::Token;

/// Status of the sharing workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SharingStatus {
    /// A remote resource or authentication step failed.
    Error {
        message: String,
        /// URL of the failing resource, when one was involved.
        url: Option<String>,
    },
}

/// Metadata about a file being pushed to (or fetched from) a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl FileMetadata {
    pub fn named(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            url: None,
            provider: None,
        }
    }
}

/// Cloud-sharing state.
///
/// Invariant: `auth_tokens` keys are provider names recognized by the auth
/// token store; an absent key means "not authenticated".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SharingState {
    pub auth_tokens: BTreeMap<String, Token>,
    /// True while a file push is in flight.
    pub is_loading: bool,
    pub status: Option<SharingStatus>,
    pub info: Option<FileMetadata>,
}

impl SharingState {
    pub fn initial() -> Self {
        Self::default()
    }
}
