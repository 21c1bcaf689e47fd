//! Provider handlers: named adapters for one cloud-storage backend each.

use atlas_model::Token;

/// Integration adapter for one storage provider.
///
/// A handler knows how to pull the credential its provider's auth flow
/// produced (for OAuth implicit flows, the redirect fragment) and how to
/// judge whether a candidate token is usable.
pub trait ProviderHandler {
    /// Provider name; keys the token store and the state-slice maps.
    fn name(&self) -> &str;

    /// Credential produced by the most recent auth flow, if any.
    fn pending_token(&self) -> Option<Token>;

    /// Whether a candidate token is acceptable for this provider.
    fn validate(&self, token: &Token) -> bool {
        !token.is_empty()
    }
}

/// Dropbox OAuth handler.
///
/// The implicit-grant flow redirects back with the credential in the URL
/// fragment (`...#access_token=XYZ&token_type=bearer`); the shell hands
/// that fragment to the handler before dispatching `SetAuthToken`.
#[derive(Debug, Default)]
pub struct DropboxHandler {
    auth_response: Option<String>,
}

impl DropboxHandler {
    pub const NAME: &'static str = "dropbox";

    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the redirect URL (or bare fragment) of a finished flow.
    pub fn with_auth_response(mut self, response: impl Into<String>) -> Self {
        self.auth_response = Some(response.into());
        self
    }

    fn parse_fragment(response: &str) -> Option<Token> {
        // Accept a full redirect URL or just the fragment after '#'.
        let fragment = response.rsplit_once('#').map_or(response, |(_, f)| f);
        fragment
            .split('&')
            .find_map(|pair| pair.strip_prefix("access_token="))
            .filter(|value| !value.is_empty())
            .map(Token::from)
    }
}

impl ProviderHandler for DropboxHandler {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn pending_token(&self) -> Option<Token> {
        let response = self.auth_response.as_deref()?;
        Self::parse_fragment(response)
    }
}
