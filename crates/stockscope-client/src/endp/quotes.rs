use crate::client_ext::ClientFinanceExt;
use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const PATH: &str = "/market/v2/get-quotes";

/// Quotes for one or more symbols, in the order the API returns them.
pub async fn fetch(client: &Client, base_url: &str, symbols: &[String]) -> Result<Vec<Quote>> {
    let url = format!("{base_url}{PATH}");
    let symbols = symbols.join(",");
    let response: QuotesResponse = client.get_json(&url, &[("symbols", symbols.as_str())]).await?;
    Ok(response.quote_response.result.unwrap_or_default())
}

/// Trading snapshot for one security; every metric may be missing.
/// ```json
/// {
///     "symbol": "AAPL",
///     "shortName": "Apple Inc.",
///     "regularMarketPrice": 189.98,
///     "regularMarketChangePercent": -0.57,
///     "marketCap": 2950000000000,
///     // ...
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    pub short_name: Option<String>,
    pub regular_market_price: Option<f64>,
    pub regular_market_change: Option<f64>,
    pub regular_market_change_percent: Option<f64>,
    pub regular_market_open: Option<f64>,
    pub regular_market_day_high: Option<f64>,
    pub regular_market_day_low: Option<f64>,
    pub regular_market_volume: Option<f64>,
    pub market_cap: Option<f64>,
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
}

impl Quote {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            ..Default::default()
        }
    }

    /// `shortName`, or an empty string when the API left it out.
    pub fn name(&self) -> &str {
        self.short_name.as_deref().unwrap_or_default()
    }
}

// `quotes` schema
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct QuotesResponse {
    pub quote_response: QuoteResponse,
}

#[derive(Deserialize, Debug)]
pub struct QuoteResponse {
    pub result: Option<Vec<Quote>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_quote_deserializes() {
        let json = r#"{
            "quoteResponse": {
                "result": [
                    { "symbol": "AAPL", "shortName": "Apple Inc.", "regularMarketPrice": 189.98,
                      "trailingPE": 29.5, "marketCap": 2950000000000, "language": "en-US" },
                    { "symbol": "ZZZZ" }
                ],
                "error": null
            }
        }"#;
        let response: QuotesResponse = serde_json::from_str(json).unwrap();
        let quotes = response.quote_response.result.unwrap();

        assert_eq!(quotes[0].name(), "Apple Inc.");
        assert_eq!(quotes[0].trailing_pe, Some(29.5));
        assert_eq!(quotes[0].market_cap, Some(2.95e12));
        assert_eq!(quotes[1], Quote::new("ZZZZ"));
    }

    #[test]
    fn null_result_is_tolerated() {
        let response: QuotesResponse =
            serde_json::from_str(r#"{ "quoteResponse": { "result": null } }"#).unwrap();
        assert!(response.quote_response.result.is_none());
    }
}
