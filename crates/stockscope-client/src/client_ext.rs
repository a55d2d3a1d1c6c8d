use anyhow::{Context, Result};
use reqwest::Client;
use std::future::Future;

pub trait ClientFinanceExt {
    fn get_json<T>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> impl Future<Output = Result<T>> + Send
    where
        T: serde::de::DeserializeOwned + Send;
}

/// Add-on methods for [`reqwest::Client`].
///
/// [`reqwest::Client`]: https://docs.rs/reqwest/latest/reqwest/struct.Client.html
impl ClientFinanceExt for Client {
    /// GET `url` with the `query` parameters and deserialize the JSON body.
    ///
    /// Non-2xx statuses are errors, as is a body that doesn't fit `T`.
    async fn get_json<T>(&self, url: &str, query: &[(&str, &str)]) -> Result<T>
    where
        T: serde::de::DeserializeOwned + Send,
    {
        log::debug!("GET {url} {query:?}");
        let response = self
            .get(url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?
            .error_for_status()?;

        // read as text first, so a schema mismatch can name the endpoint
        let body = response.text().await?;
        let data: T = serde_json::from_str(&body)
            .with_context(|| format!("unexpected response shape from {url}"))?;
        Ok(data)
    }
}
