//! The app slice: workflow and UI state for the demo shell.

use std::collections::BTreeMap;

use crate::methods::{DEFAULT_LOADING_METHOD, LoadingMethodId, MethodOption, default_loading_method};
use crate::samples::SampleMapDescriptor;
use crate::types::{ErrorInfo, Token};

/// Display name of the shell.
pub const APP_NAME: &str = "atlas";

/// Workflow state owned by the app slice.
///
/// Invariants: `loading_method` is always a member of the fixed catalog;
/// `previous_method` is the value `loading_method` held immediately before
/// the last change.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub app_name: String,
    pub loaded: bool,
    pub loading_method: LoadingMethodId,
    pub current_option: Option<MethodOption>,
    pub previous_method: Option<LoadingMethodId>,
    /// Sample catalog fetched from a remote JSON document.
    pub sample_maps: Vec<SampleMapDescriptor>,
    /// True while a sample map is being fetched and merged.
    pub is_map_loading: bool,
    pub auth_tokens: BTreeMap<String, Token>,
    /// Set when loading or retrieving data/configuration failed.
    pub error: Option<ErrorInfo>,
}

impl AppState {
    pub fn initial() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            loaded: false,
            loading_method: DEFAULT_LOADING_METHOD,
            current_option: default_loading_method().default_option(),
            previous_method: None,
            sample_maps: Vec::new(),
            is_map_loading: false,
            auth_tokens: BTreeMap::new(),
            error: None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::initial()
    }
}
