use crate::format;
use crate::lookup::ValidationError;
use crate::source::QuoteSource;
use futures::future::try_join;
use std::fmt;
use stockscope_client::{Fetched, Quote};

/// Side-by-side quotes for two symbols.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub left: Quote,
    pub right: Quote,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub left: String,
    pub right: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompareError {
    Invalid(ValidationError),
    /// At least one symbol returned no quote.
    UnknownSymbol,
    /// A lookup failed in transport or decoding.
    Unavailable(String),
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CompareError::Invalid(e) => write!(f, "{e}"),
            CompareError::UnknownSymbol => write!(f, "One or both stock symbols are invalid"),
            CompareError::Unavailable(_) => write!(f, "An error occurred while fetching stock data"),
        }
    }
}

impl std::error::Error for CompareError {}

impl From<ValidationError> for CompareError {
    fn from(e: ValidationError) -> Self {
        CompareError::Invalid(e)
    }
}

type Metric = fn(&Quote) -> Option<f64>;
type Formatter = fn(Option<f64>) -> String;

const ROWS: [(&str, Metric, Formatter); 6] = [
    ("Price", |q| q.regular_market_price, format::price),
    ("Market Cap", |q| q.market_cap, format::billions),
    ("P/E Ratio", |q| q.trailing_pe, format::ratio),
    ("Dividend Yield", |q| q.dividend_yield, format::percent_of_fraction),
    ("52 Week High", |q| q.fifty_two_week_high, format::price),
    ("52 Week Low", |q| q.fifty_two_week_low, format::price),
];

impl Comparison {
    /// The six metric rows, always in the same order.
    pub fn rows(&self) -> Vec<ComparisonRow> {
        ROWS.iter()
            .map(|&(label, metric, fmt)| ComparisonRow {
                label,
                left: fmt(metric(&self.left)),
                right: fmt(metric(&self.right)),
            })
            .collect()
    }

    /// `"AAPL vs MSFT"`
    pub fn title(&self) -> String {
        format!("{} vs {}", self.left.symbol, self.right.symbol)
    }
}

/// Trim and upper-case both inputs; either blank is rejected.
pub fn validate(first: &str, second: &str) -> Result<(String, String), ValidationError> {
    let first = first.trim();
    let second = second.trim();
    if first.is_empty() || second.is_empty() {
        return Err(ValidationError::MissingSymbols);
    }
    Ok((first.to_uppercase(), second.to_uppercase()))
}

async fn quote_for<S: QuoteSource>(source: &S, symbol: &str) -> Result<Quote, CompareError> {
    match source.quotes(&[symbol.to_string()]).await {
        Fetched::Found(quotes) => quotes.into_iter().next().ok_or(CompareError::UnknownSymbol),
        Fetched::Empty => Err(CompareError::UnknownSymbol),
        Fetched::Failed(reason) => Err(CompareError::Unavailable(reason)),
    }
}

/// Look up two already validated symbols concurrently. Both must resolve.
pub async fn compare_symbols<S: QuoteSource>(
    source: &S,
    first: &str,
    second: &str,
) -> Result<Comparison, CompareError> {
    let (left, right) = try_join(quote_for(source, first), quote_for(source, second)).await?;
    Ok(Comparison { left, right })
}

/// [`validate`] then [`compare_symbols`].
pub async fn compare<S: QuoteSource>(
    source: &S,
    first: &str,
    second: &str,
) -> Result<Comparison, CompareError> {
    let (first, second) = validate(first, second)?;
    compare_symbols(source, &first, &second).await
}
