use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Price block of a Browse API item.
///
/// `convertedFrom*` carries the seller's listing price; `value`/`currency` are the
/// marketplace-converted amount and are used only when the former is absent.
pub struct EbayPrice {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub converted_from_value: Option<String>,
    #[serde(default)]
    pub converted_from_currency: Option<String>,
}

impl EbayPrice {
    pub fn amount(&self) -> &str {
        self.converted_from_value
            .as_deref()
            .or(self.value.as_deref())
            .unwrap_or_default()
    }

    pub fn currency(&self) -> &str {
        self.converted_from_currency
            .as_deref()
            .or(self.currency.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocalizedAspect {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EbayItem {
    pub item_id: String,
    #[serde(default)]
    pub title: String,
    pub price: EbayPrice,
    #[serde(default)]
    pub localized_aspects: Vec<LocalizedAspect>,
}

impl EbayItem {
    /// Value of the aspect called `name`; the last occurrence wins.
    pub fn aspect(&self, name: &str) -> Option<&str> {
        self.localized_aspects
            .iter()
            .rev()
            .find(|aspect| aspect.name == name)
            .map(|aspect| aspect.value.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
/// `get_items_by_item_group` response body.
pub struct EbayItemResponse {
    #[serde(default)]
    pub items: Vec<EbayItem>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
/// OAuth application token issued by the identity endpoint.
pub struct AccessToken {
    pub access_token: String,
    /// Lifetime in seconds.
    pub expires_in: u64,
    pub token_type: String,
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .field("token_type", &self.token_type)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Analytics API `rate_limit` response body.
pub struct RateLimitResponse {
    #[serde(default)]
    pub rate_limits: Vec<ApiRateLimit>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRateLimit {
    pub api_name: String,
    #[serde(default)]
    pub resources: Vec<RateLimitResource>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RateLimitResource {
    pub name: String,
    #[serde(default)]
    pub rates: Vec<Rate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rate {
    #[serde(deserialize_with = "lenient_count")]
    pub limit: i64,
    #[serde(deserialize_with = "lenient_count")]
    pub remaining: i64,
}

/// Accepts a JSON number or a numeric string; anything unparseable becomes `-1`.
fn lenient_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(i64),
        Text(String),
    }

    Ok(match Count::deserialize(deserializer)? {
        Count::Number(n) => n,
        Count::Text(s) => s.trim().parse().unwrap_or(RateLimitStatus::UNREPORTED),
    })
}

impl RateLimitResponse {
    /// First rate of `resource` under `api_name` (names compared after trimming).
    pub fn find_rate(&self, api_name: &str, resource: &str) -> Option<Rate> {
        self.rate_limits
            .iter()
            .find(|limit| limit.api_name.trim() == api_name)?
            .resources
            .iter()
            .find(|r| r.name.trim() == resource)?
            .rates
            .first()
            .copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateLimitStatus {
    pub limit: i64,
    pub remaining: i64,
}

impl RateLimitStatus {
    /// Sentinel for a rate the API did not report.
    pub const UNREPORTED: i64 = -1;

    pub const fn unreported() -> Self {
        Self {
            limit: Self::UNREPORTED,
            remaining: Self::UNREPORTED,
        }
    }
}

impl From<Option<Rate>> for RateLimitStatus {
    fn from(rate: Option<Rate>) -> Self {
        match rate {
            Some(rate) => Self {
                limit: rate.limit,
                remaining: rate.remaining,
            },
            None => Self::unreported(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Health check output, keyed by the operation the quota protects.
pub struct HealthReport {
    pub cheapest_item: RateLimitStatus,
}
