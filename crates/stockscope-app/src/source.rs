use std::future::Future;
use stockscope_client::{ChartSeries, Fetched, Finance, HistoryParams, NewsItem, Quote, SearchCandidate};

/// Where the screens get their data from; [`Finance`] in the binary, a canned
/// source in tests.
pub trait QuoteSource: Sync {
    fn quotes(&self, symbols: &[String]) -> impl Future<Output = Fetched<Vec<Quote>>> + Send;

    fn search(&self, query: &str) -> impl Future<Output = Fetched<Vec<SearchCandidate>>> + Send;

    fn history(
        &self,
        symbol: &str,
        params: &HistoryParams,
    ) -> impl Future<Output = Fetched<ChartSeries>> + Send;

    fn news(&self, symbol: &str) -> impl Future<Output = Fetched<Vec<NewsItem>>> + Send;
}

impl QuoteSource for Finance {
    async fn quotes(&self, symbols: &[String]) -> Fetched<Vec<Quote>> {
        Finance::quotes(self, symbols).await
    }

    async fn search(&self, query: &str) -> Fetched<Vec<SearchCandidate>> {
        Finance::search(self, query).await
    }

    async fn history(&self, symbol: &str, params: &HistoryParams) -> Fetched<ChartSeries> {
        Finance::history(self, symbol, params).await
    }

    async fn news(&self, symbol: &str) -> Fetched<Vec<NewsItem>> {
        Finance::news(self, symbol).await
    }
}
