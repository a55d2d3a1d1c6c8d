use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;
use stockscope_app::DetailScreen;
use stockscope_client::ChartSeries;
use stockscope_common::Theme;
use textplots::{Chart, Plot, Shape};

/// Spinner standing in for a screen's loading flag.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Run `task` with a spinner up, cleared once it finishes.
pub async fn with_spinner<F: Future>(message: &str, task: F) -> F::Output {
    let pb = spinner(message);
    let output = task.await;
    pb.finish_and_clear();
    output
}

/// Closing prices, oldest on the left.
pub fn plot(series: &ChartSeries) {
    let points: Vec<(f32, f32)> = series
        .closes()
        .into_iter()
        .enumerate()
        .map(|(i, close)| (i as f32, close as f32))
        .collect();
    if points.is_empty() {
        return;
    }

    let xmax = points.len().saturating_sub(1).max(1) as f32;
    Chart::new(120, 40, 0.0, xmax)
        .lineplot(&Shape::Lines(&points))
        .display();
}

pub fn print_detail(detail: &DetailScreen, theme: &Theme) {
    println!("{}\n", detail.render_summary(theme));
    println!("{}", detail.render_chart_caption(theme));
    if let Some(series) = detail.chart() {
        plot(series);
    }
    println!("\n{}", detail.render_news(theme));
}
