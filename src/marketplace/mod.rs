//! eBay Browse API integration.
//!
//! [`EbayClient`] fetches item groups and reports the Browse quota, [`TokenProvider`]
//! acquires application tokens, and [`CheapestItemFinder`] combines price reduction with
//! the relevance verdict from [`RelevanceEngine`](crate::scoring::RelevanceEngine).
//!
//! Item descriptions are restricted to the aspects that vary across a group (see
//! [`get_selection_keys`]), so the scorer only sees what distinguishes one variant from
//! another.

pub mod auth;
pub mod client;
pub mod error;
pub mod finder;
pub mod model;
pub mod selection;


pub use auth::{TokenProvider, build_authorization, spawn_token_refresh};
pub use client::{EbayClient, ItemGroupSource};
pub use error::{MarketplaceError, MarketplaceResult};
pub use finder::{CheapestItem, CheapestItemFinder};
pub use model::{AccessToken, EbayItem, EbayItemResponse, HealthReport, RateLimitStatus};
pub use selection::{build_item_description, build_item_group, cheapest_item, get_selection_keys};
