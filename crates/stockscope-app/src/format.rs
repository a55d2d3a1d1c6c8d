//! Display formatting for quote metrics.
//!
//! Missing or non-finite values render as [`NOT_AVAILABLE`]. Market cap,
//! volume and dividend yield also treat zero as missing.

pub const NOT_AVAILABLE: &str = "N/A";

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn nonzero(value: Option<f64>) -> Option<f64> {
    present(value).filter(|v| *v != 0.0)
}

fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// `$189.98`
pub fn price(value: Option<f64>) -> String {
    or_na(present(value).map(|v| format!("${v:.2}")))
}

/// `$2950.00B`
pub fn billions(value: Option<f64>) -> String {
    or_na(nonzero(value).map(|v| format!("${:.2}B", v / 1e9)))
}

/// `29.54`
pub fn ratio(value: Option<f64>) -> String {
    or_na(present(value).map(|v| format!("{v:.2}")))
}

/// A fraction shown as a percentage: `0.0051` is `0.51%`.
pub fn percent_of_fraction(value: Option<f64>) -> String {
    or_na(nonzero(value).map(|v| format!("{:.2}%", v * 100.0)))
}

/// `2.95T`, `52.34M`, `950,000`. No currency sign.
pub fn large_number(value: Option<f64>) -> String {
    or_na(nonzero(value).map(|v| {
        if v >= 1e12 {
            format!("{:.2}T", v / 1e12)
        } else if v >= 1e9 {
            format!("{:.2}B", v / 1e9)
        } else if v >= 1e6 {
            format!("{:.2}M", v / 1e6)
        } else {
            group_thousands(v)
        }
    }))
}

/// `▲ $1.23 (0.65%)`. Direction follows the percentage; magnitudes are absolute.
pub fn change(change: Option<f64>, percent: Option<f64>) -> String {
    let percent = present(percent).unwrap_or(0.0);
    let change = present(change).unwrap_or(0.0);
    format!(
        "{} ${:.2} ({:.2}%)",
        arrow(percent),
        change.abs(),
        percent.abs()
    )
}

/// `▼ 0.57%`, as shown on a search result row.
pub fn change_percent(percent: Option<f64>) -> String {
    let percent = present(percent).unwrap_or(0.0);
    format!("{} {:.2}%", arrow(percent), percent.abs())
}

pub fn is_gain(percent: Option<f64>) -> bool {
    present(percent).unwrap_or(0.0) >= 0.0
}

fn arrow(percent: f64) -> char {
    if percent >= 0.0 {
        '▲'
    } else {
        '▼'
    }
}

// Up to three fraction digits, trailing zeros dropped.
fn group_thousands(value: f64) -> String {
    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(rounded.len() + int_part.len() / 3 + 1);
    if value < 0.0 {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if !frac_part.is_empty() {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}
