use super::{error, heading, muted};
use crate::comparison::{compare_symbols, validate, CompareError, Comparison};
use crate::generation::{Generation, Ticket};
use crate::source::QuoteSource;
use stockscope_common::Theme;

/// Validated symbols for one comparison run.
#[derive(Debug, Clone)]
pub struct CompareRequest {
    ticket: Ticket,
    pub first: String,
    pub second: String,
}

#[derive(Debug, Default)]
pub struct CompareScreen {
    pub first: String,
    pub second: String,
    loading: bool,
    error: Option<String>,
    comparison: Option<Comparison>,
    generation: Generation,
}

impl CompareScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn comparison(&self) -> Option<&Comparison> {
        self.comparison.as_ref()
    }

    /// A blank input sets the error and leaves any earlier result alone.
    pub fn begin(&mut self) -> Option<CompareRequest> {
        match validate(&self.first, &self.second) {
            Ok((first, second)) => {
                self.loading = true;
                self.error = None;
                Some(CompareRequest {
                    ticket: self.generation.begin(),
                    first,
                    second,
                })
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Apply the outcome unless superseded. Any error clears the previous result.
    pub fn finish(&mut self, request: &CompareRequest, result: Result<Comparison, CompareError>) -> bool {
        if !self.generation.is_current(request.ticket) {
            log::debug!("dropping stale comparison {} vs {}", request.first, request.second);
            return false;
        }

        self.loading = false;
        match result {
            Ok(comparison) => self.comparison = Some(comparison),
            Err(e) => {
                if let CompareError::Unavailable(reason) = &e {
                    log::error!("Error comparing stocks: {reason}");
                }
                self.error = Some(e.to_string());
                self.comparison = None;
            }
        }
        true
    }

    pub async fn submit<S: QuoteSource>(&mut self, source: &S) {
        if let Some(request) = self.begin() {
            let result = compare_symbols(source, &request.first, &request.second).await;
            self.finish(&request, result);
        }
    }

    pub fn render(&self, theme: &Theme) -> String {
        let mut lines = vec![heading(theme, "Compare Stocks").to_string()];
        if self.loading {
            lines.push(muted(theme, "Comparing...").to_string());
        }
        if let Some(message) = &self.error {
            lines.push(error(theme, message).to_string());
        }

        if let Some(comparison) = &self.comparison {
            lines.push(String::new());
            lines.push(heading(theme, &comparison.title()).to_string());
            lines.push(format!(
                "{} {} {}",
                muted(theme, &format!("{:<16}", "Metric")),
                heading(theme, &format!("{:>14}", comparison.left.symbol)),
                heading(theme, &format!("{:>14}", comparison.right.symbol)),
            ));
            for row in comparison.rows() {
                lines.push(format!("{:<16} {:>14} {:>14}", row.label, row.left, row.right));
            }
        }
        lines.join("\n")
    }
}
