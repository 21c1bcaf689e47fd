//! The auth token store: retrieve and validate-and-persist credentials.

use atlas_model::Token;
use tracing::{debug, warn};

use crate::provider::ProviderHandler;
use crate::storage::TokenStorage;

/// Storage key for one provider's token.
fn token_key(provider: &str) -> String {
    format!("auth:{provider}")
}

/// Reads, validates, and persists credential tokens, keyed by provider
/// handler name.
///
/// Both operations return `Option<Token>`: backend failures are logged and
/// reported as "no token" so callers can treat them as "not
/// authenticated" rather than unwinding the dispatch loop.
#[derive(Debug)]
pub struct AuthTokenStore<S: TokenStorage> {
    storage: S,
}

impl<S: TokenStorage> AuthTokenStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The persisted token for a provider, if any.
    pub fn retrieve(&self, handler: &dyn ProviderHandler) -> Option<Token> {
        let key = token_key(handler.name());
        match self.storage.get(&key) {
            Ok(Some(value)) => {
                debug!(provider = handler.name(), "retrieved auth token");
                Some(Token::new(value))
            }
            Ok(None) => None,
            Err(error) => {
                warn!(provider = handler.name(), %error, "token storage read failed");
                None
            }
        }
    }

    /// Validates the handler's pending credential and persists it.
    ///
    /// Returns `None` — leaving storage untouched — when no credential is
    /// pending, validation rejects it, or the backend write fails.
    pub fn validate_and_store(&self, handler: &dyn ProviderHandler) -> Option<Token> {
        let token = handler.pending_token()?;
        if !handler.validate(&token) {
            warn!(provider = handler.name(), "auth token failed validation");
            return None;
        }
        let key = token_key(handler.name());
        if let Err(error) = self.storage.set(&key, token.as_str()) {
            warn!(provider = handler.name(), %error, "token storage write failed");
            return None;
        }
        debug!(provider = handler.name(), "stored auth token");
        Some(token)
    }

    /// Drops the persisted token for a provider.
    pub fn forget(&self, handler: &dyn ProviderHandler) {
        if let Err(error) = self.storage.remove(&token_key(handler.name())) {
            warn!(provider = handler.name(), %error, "token storage remove failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::DropboxHandler;
    use crate::storage::MemoryStorage;

    #[test]
    fn retrieve_reads_the_persisted_token() {
        let storage = MemoryStorage::new().with_entry("auth:dropbox", "tok");
        let store = AuthTokenStore::new(storage);
        let token = store.retrieve(&DropboxHandler::new());
        assert_eq!(token, Some(Token::from("tok")));
    }

    #[test]
    fn validate_and_store_persists_a_valid_token() {
        let store = AuthTokenStore::new(MemoryStorage::new());
        let handler = DropboxHandler::new().with_auth_response("#access_token=fresh");
        assert_eq!(store.validate_and_store(&handler), Some(Token::from("fresh")));
        assert_eq!(store.retrieve(&handler), Some(Token::from("fresh")));
    }

    #[test]
    fn validate_and_store_without_pending_token_leaves_storage_untouched() {
        let store = AuthTokenStore::new(MemoryStorage::new());
        let handler = DropboxHandler::new();
        assert_eq!(store.validate_and_store(&handler), None);
        assert_eq!(store.retrieve(&handler), None);
    }
}
