//! Injected collaborators for the reducer layer.
//!
//! Provider handlers and the token store travel in an explicit context
//! handed to the composed reducer at construction; nothing in this layer
//! reaches for module-level globals.

use std::collections::BTreeMap;

use atlas_auth::{AuthTokenStore, MemoryStorage, ProviderHandler, TokenStorage};
use atlas_model::Token;

/// Collaborators the reducers need: registered provider handlers and the
/// credential store.
pub struct ReducerContext {
    providers: Vec<Box<dyn ProviderHandler>>,
    token_store: AuthTokenStore<Box<dyn TokenStorage>>,
}

impl ReducerContext {
    /// Context with in-memory credential storage and no providers.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            token_store: AuthTokenStore::new(Box::new(MemoryStorage::new())),
        }
    }

    /// Replaces the credential storage backend.
    pub fn with_storage(mut self, storage: impl TokenStorage + 'static) -> Self {
        self.token_store = AuthTokenStore::new(Box::new(storage));
        self
    }

    /// Registers a provider handler.
    pub fn with_provider(mut self, handler: impl ProviderHandler + 'static) -> Self {
        self.providers.push(Box::new(handler));
        self
    }

    /// Registered handlers, in registration order.
    pub fn providers(&self) -> impl Iterator<Item = &dyn ProviderHandler> {
        self.providers.iter().map(Box::as_ref)
    }

    /// The handler registered under a provider name.
    pub fn provider(&self, name: &str) -> Option<&dyn ProviderHandler> {
        self.providers
            .iter()
            .map(Box::as_ref)
            .find(|handler| handler.name() == name)
    }

    pub fn token_store(&self) -> &AuthTokenStore<Box<dyn TokenStorage>> {
        &self.token_store
    }

    /// Reads the persisted token of every registered provider.
    ///
    /// Providers without a stored token are omitted, which is how the
    /// sharing slice encodes "not authenticated".
    pub fn read_auth_tokens(&self) -> BTreeMap<String, Token> {
        self.providers()
            .filter_map(|handler| {
                self.token_store
                    .retrieve(handler)
                    .map(|token| (handler.name().to_string(), token))
            })
            .collect()
    }
}

impl Default for ReducerContext {
    fn default() -> Self {
        Self::new()
    }
}
