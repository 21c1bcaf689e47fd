//! The fixed catalog of data-loading methods.
//!
//! The app slice always points at exactly one member of this catalog. The
//! catalog itself is a compile-time table so that the set of methods and
//! their preset options cannot drift at runtime.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for one of the fixed loading methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingMethodId {
    /// Load files from the local machine.
    Upload,
    /// Fetch a dataset from a remote URL.
    Remote,
    /// Pick one of the curated sample maps.
    Sample,
    /// Open a dataset shared through a cloud-storage provider.
    Storage,
}

impl LoadingMethodId {
    /// Every member of the catalog, in display order.
    pub const ALL: [LoadingMethodId; 4] = [
        LoadingMethodId::Upload,
        LoadingMethodId::Remote,
        LoadingMethodId::Sample,
        LoadingMethodId::Storage,
    ];

    /// Stable string id used in catalogs and URLs.
    pub fn as_str(self) -> &'static str {
        match self {
            LoadingMethodId::Upload => "upload",
            LoadingMethodId::Remote => "remote",
            LoadingMethodId::Sample => "sample",
            LoadingMethodId::Storage => "storage",
        }
    }
}

impl fmt::Display for LoadingMethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A preset option offered by a loading method (e.g. a known remote URL).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodOption {
    pub id: &'static str,
    pub label: &'static str,
    /// Remote location of the preset dataset, when the option names one.
    pub data_url: Option<&'static str>,
}

/// Descriptor of one loading method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingMethod {
    pub id: LoadingMethodId,
    pub label: &'static str,
    /// Preset options shown when this method is selected.
    pub options: &'static [MethodOption],
}

impl LoadingMethod {
    /// First preset option, used as the selection default.
    pub fn default_option(&self) -> Option<MethodOption> {
        self.options.first().copied()
    }
}

/// Method selected when the shell starts.
pub const DEFAULT_LOADING_METHOD: LoadingMethodId = LoadingMethodId::Upload;

/// The fixed loading-method catalog.
pub static LOADING_METHODS: [LoadingMethod; 4] = [
    LoadingMethod {
        id: LoadingMethodId::Upload,
        label: "Load Files",
        options: &[MethodOption {
            id: "local",
            label: "Drop files or browse",
            data_url: None,
        }],
    },
    LoadingMethod {
        id: LoadingMethodId::Remote,
        label: "Load Map using URL",
        options: &[
            MethodOption {
                id: "earthquakes",
                label: "Earthquakes (CSV)",
                data_url: Some("https://atlas-demo-data.example.com/earthquakes.csv"),
            },
            MethodOption {
                id: "sf-buildings",
                label: "SF Buildings (GeoJSON)",
                data_url: Some("https://atlas-demo-data.example.com/sf-buildings.geojson"),
            },
        ],
    },
    LoadingMethod {
        id: LoadingMethodId::Sample,
        label: "Try out a sample map",
        options: &[],
    },
    LoadingMethod {
        id: LoadingMethodId::Storage,
        label: "Load from cloud storage",
        options: &[MethodOption {
            id: "dropbox",
            label: "Dropbox",
            data_url: None,
        }],
    },
];

/// Looks up a method descriptor in the catalog.
///
/// Returns `None` only if the enum and the catalog table have drifted out
/// of sync; callers surface that as an explicit error rather than carrying
/// on with an undefined selection.
pub fn loading_method(id: LoadingMethodId) -> Option<&'static LoadingMethod> {
    LOADING_METHODS.iter().find(|method| method.id == id)
}

/// Descriptor of [`DEFAULT_LOADING_METHOD`].
pub fn default_loading_method() -> &'static LoadingMethod {
    loading_method(DEFAULT_LOADING_METHOD)
        .unwrap_or(&LOADING_METHODS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_id_has_a_catalog_entry() {
        for id in LoadingMethodId::ALL {
            assert!(loading_method(id).is_some(), "missing catalog entry: {id}");
        }
    }

    #[test]
    fn default_method_has_an_option() {
        assert!(default_loading_method().default_option().is_some());
    }

    #[test]
    fn ids_round_trip_through_serde() {
        let json = serde_json::to_string(&LoadingMethodId::Storage).unwrap();
        assert_eq!(json, "\"storage\"");
        let back: LoadingMethodId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LoadingMethodId::Storage);
    }
}
