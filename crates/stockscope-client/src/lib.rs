pub mod client_ext;
pub mod endp;
pub mod fetched;
pub mod finance;

pub use endp::autocomplete::SearchCandidate;
pub use endp::chart::{ChartPoint, ChartSeries, HistoryParams};
pub use endp::news::NewsItem;
pub use endp::quotes::Quote;
pub use fetched::Fetched;
pub use finance::Finance;

pub mod prelude {
    use reqwest::header::{HeaderMap, HeaderValue};
    use reqwest::Client;
    use std::time::Duration;
    use stockscope_common::ApiConfig;

    /// Build the HTTP client, with the RapidAPI key/host pair installed as default headers.
    pub fn build_client(config: &ApiConfig) -> anyhow::Result<Client> {
        let mut key = HeaderValue::from_str(&config.api_key)?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("x-rapidapi-key", key);
        headers.insert("x-rapidapi-host", HeaderValue::from_str(&config.api_host)?);

        let client = reqwest::ClientBuilder::new()
            .user_agent(concat!("stockscope/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(client)
    }
}
