//! BetterBay command-line entrypoint.
//!
//! ```text
//! betterbay [--analyse] [--health-check] <item-group-id>...
//! ```

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use mimalloc::MiMalloc;
use tracing_subscriber::EnvFilter;

use betterbay::config::Config;
use betterbay::dictionary::DictionaryApiClient;
use betterbay::marketplace::{CheapestItemFinder, EbayClient, TokenProvider, spawn_token_refresh};
use betterbay::scoring::RelevanceEngine;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const USAGE: &str = "usage: betterbay [--analyse] [--health-check] <item-group-id>...";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{USAGE}");
        return Ok(());
    }

    let analyse = args.iter().any(|arg| arg == "--analyse" || arg == "--analyze");
    let health_check = args.iter().any(|arg| arg == "--health-check");
    let group_ids: Vec<&str> = args
        .iter()
        .filter(|arg| !arg.starts_with("--"))
        .map(String::as_str)
        .collect();

    if group_ids.is_empty() && !health_check {
        eprintln!("{USAGE}");
        std::process::exit(2);
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let (client_id, client_secret) = config.require_credentials()?;

    let provider = TokenProvider::new(client_id, client_secret)
        .with_token_url(config.ebay_token_url.as_str());
    let token = provider
        .generate_token()
        .await
        .context("failed to acquire eBay application token")?;
    tracing::info!(expires_in = token.expires_in, "Access token acquired");

    let client = EbayClient::new(token.access_token.as_str())
        .with_api_base(config.ebay_api_base.as_str());

    if config.auto_refresh_token {
        spawn_token_refresh(
            provider,
            client.clone(),
            Duration::from_secs(token.expires_in),
        )?;
    }

    if health_check {
        let report = client.health_check().await?;
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if group_ids.is_empty() {
        return Ok(());
    }

    let mut dictionary = DictionaryApiClient::with_base_url(config.dictionary_url.as_str());
    if let Some(timeout) = config.dictionary_timeout {
        dictionary = dictionary.with_timeout(timeout)?;
    }

    let engine = RelevanceEngine::with_dictionary(Arc::new(dictionary), config.engine_config());
    tracing::info!(
        confidence_threshold = engine.config().confidence_threshold,
        groups = group_ids.len(),
        analyse,
        "Finding cheapest items"
    );

    let finder = CheapestItemFinder::new(Arc::new(client), Arc::new(engine));
    let cheapest = finder
        .get_cheapest_items(group_ids.iter().copied(), analyse)
        .await?;

    println!("{}", serde_json::to_string_pretty(&cheapest)?);
    Ok(())
}
