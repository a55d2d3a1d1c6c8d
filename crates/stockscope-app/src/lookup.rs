use crate::source::QuoteSource;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use stockscope_client::{Fetched, Quote};

lazy_static! {
    static ref TICKER: Regex = Regex::new(r"^[A-Z]+$").expect("ticker pattern compiles");
}

/// How a search query is resolved to quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryKind {
    /// All upper-case letters, looked up directly.
    Ticker(String),
    /// Anything else, sent through auto-complete first.
    Name(String),
}

/// Input rejected before any request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyQuery,
    MissingSymbols,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationError::EmptyQuery => write!(f, "Please enter a stock name or symbol."),
            ValidationError::MissingSymbols => write!(f, "Please enter both stock symbols"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Trim the query and decide whether it is a ticker or a company name.
///
/// "AAPL" is a ticker; "aapl", "BRK.B" and "Apple" are names.
pub fn classify(query: &str) -> Result<QueryKind, ValidationError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ValidationError::EmptyQuery);
    }

    if TICKER.is_match(query) {
        Ok(QueryKind::Ticker(query.to_string()))
    } else {
        Ok(QueryKind::Name(query.to_string()))
    }
}

/// Quotes for a classified query. A name resolves to the first auto-complete
/// candidate only; the rest are ignored.
pub async fn resolve<S: QuoteSource>(source: &S, kind: &QueryKind) -> Fetched<Vec<Quote>> {
    match kind {
        QueryKind::Ticker(symbol) => source.quotes(&[symbol.clone()]).await,
        QueryKind::Name(name) => match source.search(name).await {
            Fetched::Found(candidates) => match candidates.first() {
                Some(best) => source.quotes(&[best.symbol.clone()]).await,
                None => Fetched::Empty,
            },
            Fetched::Empty => Fetched::Empty,
            Fetched::Failed(reason) => Fetched::Failed(reason),
        },
    }
}

/// [`classify`] then [`resolve`].
pub async fn resolve_quotes<S: QuoteSource>(
    source: &S,
    query: &str,
) -> Result<Fetched<Vec<Quote>>, ValidationError> {
    let kind = classify(query)?;
    Ok(resolve(source, &kind).await)
}
