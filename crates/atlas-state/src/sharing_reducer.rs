//! Reducer for the sharing slice.
//!
//! Pure over its slice except for the token-store reads, which go through
//! the injected [`ReducerContext`] collaborators.

use atlas_model::{FileMetadata, SharingState, SharingStatus};
use tracing::warn;

use crate::context::ReducerContext;
use crate::event::Event;

/// Error message surfaced when token validation yields nothing.
pub const AUTHENTICATION_FAILED: &str = "AUTHENTICATION FAILED";

/// Applies an event to the sharing slice.
pub fn reduce_sharing<E>(
    state: &SharingState,
    event: &Event<E>,
    context: &ReducerContext,
) -> SharingState {
    match event {
        // Both events repopulate the token map from the store; storage
        // events fire when another window changed the persisted file.
        Event::Init | Event::PropagateStorageEvent => SharingState {
            auth_tokens: context.read_auth_tokens(),
            ..state.clone()
        },
        Event::SetAuthToken { provider } => {
            let token = context
                .provider(provider)
                .and_then(|handler| context.token_store().validate_and_store(handler));
            match token {
                Some(token) => {
                    let mut auth_tokens = state.auth_tokens.clone();
                    auth_tokens.insert(provider.clone(), token);
                    SharingState {
                        auth_tokens,
                        ..state.clone()
                    }
                }
                None => {
                    warn!(%provider, "authentication failed");
                    SharingState {
                        status: Some(SharingStatus::Error {
                            message: AUTHENTICATION_FAILED.to_string(),
                            url: None,
                        }),
                        ..state.clone()
                    }
                }
            }
        }
        Event::RemoteResourceError { error, url } => SharingState {
            status: Some(SharingStatus::Error {
                message: error.message.clone(),
                url: Some(url.clone()),
            }),
            info: Some(FileMetadata {
                filename: url.rsplit('/').next().unwrap_or(url).to_string(),
                url: Some(url.clone()),
                provider: None,
            }),
            is_loading: false,
            ..state.clone()
        },
        Event::PushingFile {
            is_loading,
            metadata,
        } => SharingState {
            is_loading: *is_loading,
            info: Some(metadata.clone()),
            ..state.clone()
        },
        _ => state.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_auth::{DropboxHandler, MemoryStorage};
    use atlas_model::{ErrorInfo, Token};

    type TestEvent = Event<()>;

    fn context_with_stored_token() -> ReducerContext {
        ReducerContext::new()
            .with_storage(MemoryStorage::new().with_entry("auth:dropbox", "stored"))
            .with_provider(DropboxHandler::new())
    }

    #[test]
    fn init_populates_tokens_from_the_store() {
        let context = context_with_stored_token();
        let state = SharingState::initial();
        let next = reduce_sharing(&state, &TestEvent::Init, &context);
        assert_eq!(next.auth_tokens.get("dropbox"), Some(&Token::from("stored")));
    }

    #[test]
    fn storage_event_rereads_all_tokens() {
        let context = context_with_stored_token();
        let mut state = SharingState::initial();
        state
            .auth_tokens
            .insert("gdrive".to_string(), Token::from("gone"));
        let next = reduce_sharing(&state, &TestEvent::PropagateStorageEvent, &context);
        // Only registered providers survive the re-read.
        assert_eq!(next.auth_tokens.len(), 1);
        assert!(next.auth_tokens.contains_key("dropbox"));
    }

    #[test]
    fn failed_validation_sets_the_error_and_keeps_tokens() {
        // Handler registered but no auth flow happened, so no pending token.
        let context = ReducerContext::new().with_provider(DropboxHandler::new());
        let mut state = SharingState::initial();
        state
            .auth_tokens
            .insert("dropbox".to_string(), Token::from("old"));

        let next = reduce_sharing(
            &state,
            &TestEvent::SetAuthToken {
                provider: "dropbox".to_string(),
            },
            &context,
        );
        assert_eq!(next.auth_tokens, state.auth_tokens);
        assert_eq!(
            next.status,
            Some(SharingStatus::Error {
                message: AUTHENTICATION_FAILED.to_string(),
                url: None,
            })
        );
    }

    #[test]
    fn unknown_provider_fails_the_same_way() {
        let context = ReducerContext::new();
        let state = SharingState::initial();
        let next = reduce_sharing(
            &state,
            &TestEvent::SetAuthToken {
                provider: "gdrive".to_string(),
            },
            &context,
        );
        assert!(matches!(next.status, Some(SharingStatus::Error { .. })));
        assert!(next.auth_tokens.is_empty());
    }

    #[test]
    fn successful_validation_merges_the_token() {
        let context = ReducerContext::new()
            .with_provider(DropboxHandler::new().with_auth_response("#access_token=fresh"));
        let state = SharingState::initial();
        let next = reduce_sharing(
            &state,
            &TestEvent::SetAuthToken {
                provider: "dropbox".to_string(),
            },
            &context,
        );
        assert_eq!(next.auth_tokens.get("dropbox"), Some(&Token::from("fresh")));
    }

    #[test]
    fn remote_resource_error_records_the_failing_url() {
        // No producer dispatches this event today; the handler is kept for
        // the error display contract.
        let context = ReducerContext::new();
        let mut state = SharingState::initial();
        state.is_loading = true;

        let next = reduce_sharing(
            &state,
            &TestEvent::RemoteResourceError {
                error: ErrorInfo::with_status(404, "not found"),
                url: "https://host/data/missing.csv".to_string(),
            },
            &context,
        );
        assert!(!next.is_loading);
        assert_eq!(
            next.status,
            Some(SharingStatus::Error {
                message: "not found".to_string(),
                url: Some("https://host/data/missing.csv".to_string()),
            })
        );
        assert_eq!(next.info.unwrap().filename, "missing.csv");
    }

    #[test]
    fn pushing_file_sets_flag_and_metadata() {
        let context = ReducerContext::new();
        let state = SharingState::initial();
        let next = reduce_sharing(
            &state,
            &TestEvent::PushingFile {
                is_loading: true,
                metadata: FileMetadata::named("map.json"),
            },
            &context,
        );
        assert!(next.is_loading);
        assert_eq!(next.info.unwrap().filename, "map.json");
    }

    #[test]
    fn unrelated_events_are_identity() {
        let context = ReducerContext::new();
        let state = SharingState::initial();
        let next = reduce_sharing(&state, &TestEvent::SetSampleLoadingStatus(true), &context);
        assert_eq!(next, state);
    }
}
