use super::{accent, heading, muted, trend};
use crate::format;
use crate::generation::{Generation, Ticket};
use crate::source::QuoteSource;
use stockscope_client::{ChartSeries, Fetched, HistoryParams, NewsItem, Quote};
use stockscope_common::Theme;

/// Headlines kept from the news stream.
pub const NEWS_LIMIT: usize = 3;
/// Dates printed under the chart.
pub const LABEL_POINTS: usize = 7;

/// One quote in full, with its 30-day chart and latest headlines.
#[derive(Debug)]
pub struct DetailScreen {
    quote: Quote,
    chart: Option<Fetched<ChartSeries>>,
    news: Option<Fetched<Vec<NewsItem>>>,
    generation: Generation,
}

impl DetailScreen {
    pub fn new(quote: Quote) -> Self {
        Self {
            quote,
            chart: None,
            news: None,
            generation: Generation::default(),
        }
    }

    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    /// The loaded series, if there is one to plot.
    pub fn chart(&self) -> Option<&ChartSeries> {
        match &self.chart {
            Some(Fetched::Found(series)) => Some(series),
            _ => None,
        }
    }

    pub fn news(&self) -> &[NewsItem] {
        match &self.news {
            Some(Fetched::Found(items)) => items.as_slice(),
            _ => &[],
        }
    }

    pub fn begin_load(&mut self) -> Ticket {
        self.chart = None;
        self.news = None;
        self.generation.begin()
    }

    pub fn finish_load(
        &mut self,
        ticket: Ticket,
        chart: Fetched<ChartSeries>,
        news: Fetched<Vec<NewsItem>>,
    ) -> bool {
        if !self.generation.is_current(ticket) {
            log::debug!("dropping stale detail data for {}", self.quote.symbol);
            return false;
        }

        self.chart = Some(chart);
        self.news = Some(news.map(|mut items| {
            items.truncate(NEWS_LIMIT);
            items
        }));
        true
    }

    /// Fetch chart and news together.
    pub async fn load<S: QuoteSource>(&mut self, source: &S) {
        let ticket = self.begin_load();
        let symbol = self.quote.symbol.clone();
        let params = HistoryParams::default();
        let (chart, news) = futures::join!(source.history(&symbol, &params), source.news(&symbol));
        self.finish_load(ticket, chart, news);
    }

    /// Name, price, change and the key statistics.
    pub fn render_summary(&self, theme: &Theme) -> String {
        let q = &self.quote;
        let gain = format::is_gain(q.regular_market_change_percent);

        let mut lines = vec![
            heading(theme, &q.symbol).to_string(),
            muted(
                theme,
                q.short_name.as_deref().unwrap_or(format::NOT_AVAILABLE),
            )
            .to_string(),
            format!(
                "{}  {}",
                heading(theme, &format::price(q.regular_market_price)),
                trend(
                    theme,
                    &format::change(q.regular_market_change, q.regular_market_change_percent),
                    gain
                ),
            ),
            String::new(),
        ];

        let stats = [
            ("Open", format::price(q.regular_market_open)),
            ("High", format::price(q.regular_market_day_high)),
            ("Low", format::price(q.regular_market_day_low)),
            ("Volume", format::large_number(q.regular_market_volume)),
            ("Market Cap", format::large_number(q.market_cap)),
            ("52W High", format::price(q.fifty_two_week_high)),
            ("52W Low", format::price(q.fifty_two_week_low)),
        ];
        for (label, value) in stats {
            lines.push(format!("{} {}", muted(theme, &format!("{label:<12}")), value));
        }
        lines.join("\n")
    }

    /// Chart heading with its date labels, or the reason there is no chart.
    pub fn render_chart_caption(&self, theme: &Theme) -> String {
        match &self.chart {
            None => muted(theme, "Loading chart data...").to_string(),
            Some(Fetched::Found(series)) => format!(
                "{}\n{}",
                heading(theme, "30-Day Price Chart"),
                muted(theme, &series.axis_labels(LABEL_POINTS).join("  "))
            ),
            Some(Fetched::Empty) => muted(theme, "No chart data available.").to_string(),
            Some(Fetched::Failed(_)) => muted(theme, "Chart data could not be loaded.").to_string(),
        }
    }

    pub fn render_news(&self, theme: &Theme) -> String {
        let mut lines = vec![heading(theme, "Recent News").to_string()];
        match &self.news {
            None => lines.push(muted(theme, "Loading news...").to_string()),
            Some(Fetched::Found(items)) if !items.is_empty() => {
                for item in items {
                    lines.push(format!("• {}", item.title));
                    lines.push(format!(
                        "  {} {}",
                        muted(theme, &item.publisher),
                        accent(theme, &item.article_url)
                    ));
                }
            }
            Some(_) => lines.push(muted(theme, "No recent news available.").to_string()),
        }
        lines.join("\n")
    }

    /// Everything but the plot itself.
    pub fn render(&self, theme: &Theme) -> String {
        [
            self.render_summary(theme),
            self.render_chart_caption(theme),
            self.render_news(theme),
        ]
        .join("\n\n")
    }
}
