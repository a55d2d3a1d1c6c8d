use crate::client_ext::ClientFinanceExt;
use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const PATH: &str = "/news/v2/get-details";

/// The full news stream for `symbol`; callers cap it to what they show.
pub async fn fetch(client: &Client, base_url: &str, symbol: &str) -> Result<Vec<NewsItem>> {
    let url = format!("{base_url}{PATH}");
    let response: NewsStream = client.get_json(&url, &[("symbol", symbol)]).await?;
    Ok(response.data.stream_items)
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct NewsItem {
    pub uuid: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub article_url: String,
}

// `news` schema
#[derive(Deserialize, Debug)]
pub struct NewsStream {
    pub data: NewsData,
}

#[derive(Deserialize, Debug)]
pub struct NewsData {
    #[serde(default)]
    pub stream_items: Vec<NewsItem>,
}
