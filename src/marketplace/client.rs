use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::auth::build_authorization;
use super::error::{MarketplaceError, MarketplaceResult};
use super::model::{EbayItemResponse, HealthReport, RateLimitResponse, RateLimitStatus};
use super::selection::build_item_group;
use crate::constants::DEFAULT_EBAY_API_BASE;
use crate::item::ItemGroup;

const ITEM_GROUP_PATH: &str = "/buy/browse/v1/item/get_items_by_item_group";
const RATE_LIMIT_PATH: &str = "/developer/analytics/v1_beta/rate_limit";
const BROWSE_API_NAME: &str = "Browse";
const BROWSE_RESOURCE: &str = "buy.browse";

#[async_trait]
/// Source of grouped listings.
pub trait ItemGroupSource: Send + Sync {
    async fn get_item_group(&self, group_id: &str) -> MarketplaceResult<ItemGroup>;
}

/// Browse and Analytics API client.
///
/// Clones share the bearer token, so a token installed by a refresh task is seen by every
/// clone.
#[derive(Clone)]
pub struct EbayClient {
    http: HttpClient,
    api_base: String,
    token: Arc<RwLock<String>>,
}

impl EbayClient {
    /// Creates a client for the production API.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            api_base: DEFAULT_EBAY_API_BASE.to_string(),
            token: Arc::new(RwLock::new(access_token.into())),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Replaces the bearer token used by subsequent requests.
    pub fn set_token(&self, access_token: &str) {
        *self.token.write() = access_token.to_string();
    }

    /// Current `Authorization` header value.
    pub fn authorization(&self) -> String {
        build_authorization(&self.token.read())
    }

    /// Reports the Browse API quota backing cheapest-item lookups.
    pub async fn health_check(&self) -> MarketplaceResult<HealthReport> {
        let url = format!("{}{}", self.api_base, RATE_LIMIT_PATH);
        let response: RateLimitResponse = self.get_json(&url, &[]).await?;

        let rate = response.find_rate(BROWSE_API_NAME, BROWSE_RESOURCE);
        if rate.is_none() {
            debug!("Browse rate limit not reported");
        }

        Ok(HealthReport {
            cheapest_item: RateLimitStatus::from(rate),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> MarketplaceResult<T> {
        let response = self
            .http
            .get(url)
            .query(query)
            .header(reqwest::header::AUTHORIZATION, self.authorization())
            .send()
            .await
            .map_err(|e| MarketplaceError::Request {
                endpoint: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        debug!(url, status = status.as_u16(), "Marketplace response");

        if !status.is_success() {
            return Err(MarketplaceError::Status {
                endpoint: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| MarketplaceError::Request {
                endpoint: url.to_string(),
                source: e,
            })?;

        serde_json::from_slice(&body).map_err(|e| MarketplaceError::Decode {
            endpoint: url.to_string(),
            source: e,
        })
    }
}

impl std::fmt::Debug for EbayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EbayClient")
            .field("api_base", &self.api_base)
            .finish()
    }
}

#[async_trait]
impl ItemGroupSource for EbayClient {
    async fn get_item_group(&self, group_id: &str) -> MarketplaceResult<ItemGroup> {
        let url = format!("{}{}", self.api_base, ITEM_GROUP_PATH);
        let response: EbayItemResponse = self.get_json(&url, &[("item_group_id", group_id)]).await?;

        build_item_group(group_id, &response.items)
    }
}
