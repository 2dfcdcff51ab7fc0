use std::time::Duration;

use reqwest::Client as HttpClient;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{info, warn};

use super::client::EbayClient;
use super::error::{MarketplaceError, MarketplaceResult};
use super::model::AccessToken;
use crate::constants::{DEFAULT_EBAY_TOKEN_URL, EBAY_OAUTH_SCOPE};

/// `Authorization` header value for a bearer token.
///
/// ```
/// assert_eq!(betterbay::marketplace::build_authorization("token"), "Bearer token");
/// ```
pub fn build_authorization(token: &str) -> String {
    format!("Bearer {token}")
}

/// Acquires application tokens with the OAuth client-credentials grant.
#[derive(Clone)]
pub struct TokenProvider {
    http: HttpClient,
    token_url: String,
    client_id: String,
    client_secret: String,
    scope: String,
}

impl TokenProvider {
    /// Creates a provider for the production identity endpoint.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            token_url: DEFAULT_EBAY_TOKEN_URL.to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            scope: EBAY_OAUTH_SCOPE.to_string(),
        }
    }

    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// Requests a fresh application token.
    pub async fn generate_token(&self) -> MarketplaceResult<AccessToken> {
        let response = self
            .http
            .post(&self.token_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[
                ("grant_type", "client_credentials"),
                ("scope", self.scope.as_str()),
            ])
            .send()
            .await
            .map_err(|e| MarketplaceError::Request {
                endpoint: self.token_url.clone(),
                source: e,
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| MarketplaceError::Request {
                endpoint: self.token_url.clone(),
                source: e,
            })?;

        if !status.is_success() {
            return Err(MarketplaceError::Auth {
                reason: format!(
                    "identity endpoint returned status {}: {}",
                    status.as_u16(),
                    String::from_utf8_lossy(&body)
                ),
            });
        }

        serde_json::from_slice(&body).map_err(|e| MarketplaceError::Decode {
            endpoint: self.token_url.clone(),
            source: e,
        })
    }
}

impl std::fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenProvider")
            .field("token_url", &self.token_url)
            .field("client_id", &self.client_id)
            .field("scope", &self.scope)
            .finish()
    }
}

/// Starts a background task that installs a fresh token on `client` every `period`.
///
/// The first refresh happens one `period` after the call. Failed refreshes are logged and
/// the previous token stays in place until the next tick.
pub fn spawn_token_refresh(
    provider: TokenProvider,
    client: EbayClient,
    period: Duration,
) -> MarketplaceResult<JoinHandle<()>> {
    if period.is_zero() {
        return Err(MarketplaceError::InvalidConfig {
            reason: "token refresh period must be greater than zero".to_string(),
        });
    }

    Ok(tokio::spawn(async move {
        let mut interval = time::interval_at(Instant::now() + period, period);
        loop {
            interval.tick().await;
            match provider.generate_token().await {
                Ok(token) => {
                    client.set_token(&token.access_token);
                    info!(expires_in = token.expires_in, "Access token refreshed");
                }
                Err(e) => warn!(error = %e, "Failed to refresh access token"),
            }
        }
    }))
}
