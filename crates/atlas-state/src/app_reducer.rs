//! Pure reducer for the app slice.

use atlas_model::{AppState, ErrorInfo, loading_method};
use tracing::warn;

use crate::event::Event;

/// Applies an event to the app slice. Pure; no I/O.
///
/// Events the slice does not handle are identity transitions.
pub fn reduce_app<E>(state: &AppState, event: &Event<E>) -> AppState {
    match event {
        Event::Init => AppState {
            loaded: true,
            ..state.clone()
        },
        Event::SetLoadingMethod(id) => match loading_method(*id) {
            Some(method) => AppState {
                previous_method: Some(state.loading_method),
                loading_method: method.id,
                current_option: method.default_option(),
                error: None,
                ..state.clone()
            },
            // Enum and catalog table drifted; keep the current method and
            // surface the failure instead of carrying an undefined one.
            None => {
                warn!(%id, "loading method missing from catalog");
                AppState {
                    error: Some(ErrorInfo::message(format!(
                        "unknown loading method: {id}"
                    ))),
                    ..state.clone()
                }
            }
        },
        Event::LoadMapSampleFile(samples) => AppState {
            sample_maps: samples.clone(),
            ..state.clone()
        },
        Event::SetSampleLoadingStatus(is_map_loading) => AppState {
            is_map_loading: *is_map_loading,
            ..state.clone()
        },
        _ => state.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_model::{LoadingMethodId, SampleMapDescriptor};

    type TestEvent = Event<()>;

    #[test]
    fn init_marks_the_shell_loaded() {
        let state = AppState::initial();
        let next = reduce_app(&state, &TestEvent::Init);
        assert!(next.loaded);
        // Everything else untouched.
        assert_eq!(next.loading_method, state.loading_method);
        assert_eq!(next.sample_maps, state.sample_maps);
    }

    #[test]
    fn set_loading_method_tracks_the_previous_method() {
        let state = AppState::initial();
        let next = reduce_app(&state, &TestEvent::SetLoadingMethod(LoadingMethodId::Remote));
        assert_eq!(next.loading_method, LoadingMethodId::Remote);
        assert_eq!(next.previous_method, Some(state.loading_method));

        let again = reduce_app(&next, &TestEvent::SetLoadingMethod(LoadingMethodId::Sample));
        assert_eq!(again.loading_method, LoadingMethodId::Sample);
        assert_eq!(again.previous_method, Some(LoadingMethodId::Remote));
    }

    #[test]
    fn set_loading_method_resets_option_and_error() {
        let mut state = AppState::initial();
        state.error = Some(atlas_model::ErrorInfo::message("stale"));
        let next = reduce_app(&state, &TestEvent::SetLoadingMethod(LoadingMethodId::Remote));
        assert!(next.error.is_none());
        assert_eq!(next.current_option.unwrap().id, "earthquakes");
    }

    #[test]
    fn load_map_sample_file_replaces_the_catalog() {
        let state = AppState::initial();
        let samples = vec![SampleMapDescriptor {
            id: "quakes".to_string(),
            label: "Earthquakes".to_string(),
            description: None,
            query_type: "sample".to_string(),
            image_url: None,
            data_url: "https://host/quakes.csv".to_string(),
            config_url: None,
            size: None,
        }];
        let next = reduce_app(&state, &TestEvent::LoadMapSampleFile(samples.clone()));
        assert_eq!(next.sample_maps, samples);
    }

    #[test]
    fn sample_loading_status_replaces_the_flag() {
        let state = AppState::initial();
        let on = reduce_app(&state, &TestEvent::SetSampleLoadingStatus(true));
        assert!(on.is_map_loading);
        let off = reduce_app(&on, &TestEvent::SetSampleLoadingStatus(false));
        assert!(!off.is_map_loading);
    }

    #[test]
    fn unrelated_events_are_identity() {
        let state = AppState::initial();
        let next = reduce_app(&state, &TestEvent::PropagateStorageEvent);
        assert_eq!(next, state);
    }
}
