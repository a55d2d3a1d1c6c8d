use crate::client_ext::ClientFinanceExt;
use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const PATH: &str = "/auto-complete";

/// Free-text to symbol resolution; best match first.
pub async fn fetch(client: &Client, base_url: &str, query: &str) -> Result<Vec<SearchCandidate>> {
    let url = format!("{base_url}{PATH}");
    let response: AutoComplete = client.get_json(&url, &[("q", query)]).await?;
    Ok(response.quotes)
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchCandidate {
    pub symbol: String,
    #[serde(rename = "shortname")]
    pub short_name: Option<String>,
    #[serde(rename = "longname")]
    pub long_name: Option<String>,
    pub exchange: Option<String>,
    pub quote_type: Option<String>,
}

impl SearchCandidate {
    pub fn name(&self) -> &str {
        self.short_name
            .as_deref()
            .or(self.long_name.as_deref())
            .unwrap_or_default()
    }
}

// `auto-complete` schema; the endpoint also returns news, which is ignored here
#[derive(Deserialize, Debug)]
pub struct AutoComplete {
    #[serde(default)]
    pub quotes: Vec<SearchCandidate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_keep_api_order() {
        let json = r#"{
            "quotes": [
                { "symbol": "TSLA", "shortname": "Tesla, Inc.", "exchange": "NMS", "quoteType": "EQUITY" },
                { "symbol": "TL0.DE", "longname": "Tesla, Inc." }
            ],
            "news": []
        }"#;
        let response: AutoComplete = serde_json::from_str(json).unwrap();
        assert_eq!(response.quotes[0].symbol, "TSLA");
        assert_eq!(response.quotes[0].quote_type.as_deref(), Some("EQUITY"));
        assert_eq!(response.quotes[1].name(), "Tesla, Inc.");
    }

    #[test]
    fn missing_quotes_array_is_empty() {
        let response: AutoComplete = serde_json::from_str(r#"{ "news": [] }"#).unwrap();
        assert!(response.quotes.is_empty());
    }
}
