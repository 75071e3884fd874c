//! Credential provider for outbound requests.
//!
//! The token source is an explicit capability handed to the client
//! rather than ambient global state: [`CatalogApi`](crate::CatalogApi)
//! holds an `Arc<dyn CredentialStore>` and asks it for a bearer token
//! per request. A request with no token proceeds without an
//! `Authorization` header.

/// Source of the bearer token attached to outbound requests.
pub trait CredentialStore: Send + Sync {
    /// Current bearer token, if any.
    fn bearer_token(&self) -> Option<String>;
}

/// Environment variable read by [`EnvCredentials`].
pub const TOKEN_ENV_VAR: &str = "AYUMART_API_TOKEN";

/// A fixed token, supplied at construction.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    token: String,
}

impl StaticCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl CredentialStore for StaticCredentials {
    fn bearer_token(&self) -> Option<String> {
        Some(self.token.clone())
    }
}

/// Reads the token from the `AYUMART_API_TOKEN` environment variable on
/// every request, so an updated token takes effect without rebuilding
/// the client.
#[derive(Debug, Clone, Default)]
pub struct EnvCredentials;

impl CredentialStore for EnvCredentials {
    fn bearer_token(&self) -> Option<String> {
        std::env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.is_empty())
    }
}

/// No credentials; every request goes out unauthenticated.
#[derive(Debug, Clone, Default)]
pub struct Anonymous;

impl CredentialStore for Anonymous {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}
