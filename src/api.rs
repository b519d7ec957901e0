//! HTTP access to the analytics backend.
//!
//! Callers never see a failure: every request error is logged here and turned
//! into an empty list or `None`, so display code can consume results without
//! an error branch.
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::model::{MarketOverview, StockSample};
use log::{debug, error};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// The three backend reads the dashboard needs.
#[allow(async_fn_in_trait)]
pub trait StockApi {
    /// `GET /api/all-stocks`; latest snapshot per symbol, empty on failure.
    async fn fetch_all_stocks(&self) -> Vec<StockSample>;

    /// `GET /api/stock-history/{symbol}`; time-ordered, empty on failure.
    async fn fetch_stock_history(&self, symbol: &str) -> Vec<StockSample>;

    /// `GET /api/market-overview`; `None` on failure.
    async fn fetch_market_overview(&self) -> Option<MarketOverview>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let parsed = Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_base_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // Each segment is percent-escaped on its own, so a symbol can never
    // introduce extra path components.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {url}");
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

impl StockApi for ApiClient {
    async fn fetch_all_stocks(&self) -> Vec<StockSample> {
        let url = self.endpoint(&["api", "all-stocks"]);
        match self.get_json::<Vec<StockSample>>(url).await {
            Ok(stocks) => {
                debug!("Fetched {} stocks", stocks.len());
                stocks
            }
            Err(e) => {
                error!("Error fetching all stocks: {e}");
                Vec::new()
            }
        }
    }

    async fn fetch_stock_history(&self, symbol: &str) -> Vec<StockSample> {
        let url = self.endpoint(&["api", "stock-history", symbol]);
        match self.get_json::<Vec<StockSample>>(url).await {
            Ok(history) => {
                debug!("Fetched {} history samples for {symbol}", history.len());
                history
            }
            Err(e) => {
                error!("Error fetching history for {symbol}: {e}");
                Vec::new()
            }
        }
    }

    async fn fetch_market_overview(&self) -> Option<MarketOverview> {
        let url = self.endpoint(&["api", "market-overview"]);
        match self.get_json::<MarketOverview>(url).await {
            Ok(overview) => Some(overview),
            Err(e) => {
                error!("Error fetching market overview: {e}");
                None
            }
        }
    }
}
