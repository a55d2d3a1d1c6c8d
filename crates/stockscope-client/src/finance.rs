use crate::endp::{autocomplete, chart, news, quotes};
use crate::fetched::Fetched;
use crate::prelude::build_client;
use crate::{ChartSeries, HistoryParams, NewsItem, Quote, SearchCandidate};
use anyhow::Result;
use reqwest::Client;
use stockscope_common::ApiConfig;

/// The quote API, as the screens see it.
///
/// Every call catches its own transport and parsing errors, logs them, and
/// hands back a [`Fetched`] instead of an error.
///
/// ```ignore
/// let finance = Finance::new(&ApiConfig::from_env()?)?;
/// let quotes = finance.quotes(&["AAPL".to_string()]).await;
/// ```
#[derive(Debug, Clone)]
pub struct Finance {
    url: String,
    client: Client,
}

impl Finance {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self::with_client(&config.base_url, build_client(config)?))
    }

    pub fn with_client(url: &str, client: Client) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub async fn quotes(&self, symbols: &[String]) -> Fetched<Vec<Quote>> {
        Fetched::settle(
            quotes::fetch(&self.client, &self.url, symbols).await,
            "stock overview",
        )
    }

    pub async fn search(&self, query: &str) -> Fetched<Vec<SearchCandidate>> {
        Fetched::settle(
            autocomplete::fetch(&self.client, &self.url, query).await,
            "search results",
        )
    }

    pub async fn history(&self, symbol: &str, params: &HistoryParams) -> Fetched<ChartSeries> {
        Fetched::settle(
            chart::fetch(&self.client, &self.url, symbol, params).await,
            "historical data",
        )
    }

    pub async fn news(&self, symbol: &str) -> Fetched<Vec<NewsItem>> {
        Fetched::settle(news::fetch(&self.client, &self.url, symbol).await, "news")
    }
}
