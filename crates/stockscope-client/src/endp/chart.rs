use crate::client_ext::ClientFinanceExt;
use crate::fetched::Payload;
use anyhow::Result;
use chrono::{DateTime, NaiveDate};
use reqwest::Client;
use serde::{Deserialize, Deserializer};

pub const PATH: &str = "/stock/v3/get-chart";

/// Query parameters of the chart endpoint; the default is the 30-day daily window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryParams {
    pub interval: String,
    pub range: String,
    pub region: String,
}

impl Default for HistoryParams {
    fn default() -> Self {
        Self {
            interval: "1d".to_string(),
            range: "30d".to_string(),
            region: "US".to_string(),
        }
    }
}

pub async fn fetch(
    client: &Client,
    base_url: &str,
    symbol: &str,
    params: &HistoryParams,
) -> Result<ChartSeries> {
    let url = format!("{base_url}{PATH}");
    let response: PriceHistory = client
        .get_json(
            &url,
            &[
                ("interval", params.interval.as_str()),
                ("symbol", symbol),
                ("range", params.range.as_str()),
                ("region", params.region.as_str()),
            ],
        )
        .await?;

    let series = match response.chart.result.as_deref() {
        Some([base, ..]) => {
            let closes = base
                .indicators
                .quote
                .first()
                .map(|quote| quote.close.as_slice())
                .unwrap_or_default();
            ChartSeries::zip(&base.dates, closes)
        }

        _ => {
            log::warn!("[{symbol}] no chart data returned; filling with an empty series instead");
            ChartSeries::default()
        }
    };
    Ok(series)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Daily closing prices, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// Pair up the API's parallel arrays. Days without a close (`null`) are skipped.
    pub fn zip(dates: &[NaiveDate], closes: &[Option<f64>]) -> Self {
        let points = dates
            .iter()
            .zip(closes.iter())
            .filter_map(|(date, close)| {
                close.map(|close| ChartPoint {
                    date: *date,
                    close,
                })
            })
            .collect();
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.close).collect()
    }

    /// Date labels (`M/D/YYYY`) for the most recent `count` points.
    pub fn axis_labels(&self, count: usize) -> Vec<String> {
        let skip = self.points.len().saturating_sub(count);
        self.points
            .iter()
            .skip(skip)
            .map(|point| point.date.format("%-m/%-d/%Y").to_string())
            .collect()
    }
}

impl Payload for ChartSeries {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

// `chart` schema
#[derive(Deserialize, Debug)]
pub struct PriceHistory {
    pub chart: PriceResponse,
}

#[derive(Deserialize, Debug)]
pub struct PriceResponse {
    pub result: Option<Vec<PriceCategories>>,
}

#[derive(Deserialize, Debug)]
pub struct PriceCategories {
    #[serde(rename = "timestamp", default, deserialize_with = "de_timestamps_to_naive_date")]
    pub dates: Vec<NaiveDate>,
    pub indicators: Indicators,
}

#[derive(Deserialize, Debug)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<CloseSeries>,
}

#[derive(Deserialize, Debug)]
pub struct CloseSeries {
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

/// Transform `unix timestamps` -> `naive dates`, e.g.,
///             `1705795200`    -> `2024-01-21`
pub fn de_timestamps_to_naive_date<'de, D>(deserializer: D) -> Result<Vec<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let timestamps: Vec<i64> = Deserialize::deserialize(deserializer)?;
    timestamps
        .into_iter()
        .map(|timestamp| {
            DateTime::from_timestamp(timestamp, 0)
                .map(|datetime| datetime.date_naive())
                .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {timestamp}")))
        })
        .collect()
}
