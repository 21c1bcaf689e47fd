use atlas_ingest::{
    GENERATED_ID_LEN, ProcessorKind, classify_data_url, process_response, resolve_dataset_id,
};
use atlas_model::DatasetData;
use proptest::prelude::*;

#[test]
fn classification_drives_the_processor() {
    let csv = "city,population\noslo,700000\nbergen,280000\n";
    let kind = classify_data_url("https://host/cities.csv");
    assert_eq!(kind, ProcessorKind::Tabular);
    let data = process_response(kind, csv).unwrap();
    assert!(matches!(data, DatasetData::Tabular(ref t) if t.row_count() == 2));

    let geojson = r#"{"type": "FeatureCollection", "features": []}"#;
    let kind = classify_data_url("https://host/cities.geojson");
    assert_eq!(kind, ProcessorKind::Geospatial);
    let data = process_response(kind, geojson).unwrap();
    assert!(matches!(data, DatasetData::Geospatial(ref g) if g.feature_count() == 0));
}

#[test]
fn misclassified_payload_fails_rather_than_guessing() {
    // A CSV body fetched from a .json-looking URL goes to the geospatial
    // processor and fails there; the sniff never falls back on content.
    let csv = "a,b\n1,2\n";
    let kind = classify_data_url("export.json.csv");
    assert_eq!(kind, ProcessorKind::Geospatial);
    assert!(process_response(kind, csv).is_err());
}

proptest! {
    #[test]
    fn classification_is_total(url in ".*") {
        // Any URL classifies without panicking, defaulting to tabular.
        let kind = classify_data_url(&url);
        if !url.contains(".json") && !url.contains(".geojson") {
            prop_assert_eq!(kind, ProcessorKind::Tabular);
        }
    }

    #[test]
    fn resolved_ids_are_never_empty(id in proptest::option::of("[a-z0-9]{0,12}")) {
        let resolved = resolve_dataset_id(id.as_deref());
        prop_assert!(!resolved.is_empty());
        match id.as_deref() {
            Some(requested) if !requested.is_empty() => prop_assert_eq!(resolved, requested),
            _ => prop_assert_eq!(resolved.len(), GENERATED_ID_LEN),
        }
    }
}
