/// Turn a numeric string into a human-scaled display string.
///
/// Magnitude buckets (checked on the absolute value) divide and suffix:
/// billions → `b$`, millions → `m$`, thousands → `k$`, all with two
/// decimals. Below that, values in `[0.01, 1)` keep two decimals and
/// sub-cent values keep six so tiny assets stay readable; everything
/// else gets two decimals and a plain `$`. Unparseable input and exact
/// zero render as a single-space placeholder.
///
/// Bucket ordering and thresholds are load-bearing: every surface that
/// renders a price goes through here.
#[must_use]
pub fn format_value(raw: &str) -> String {
    let Ok(value) = raw.trim().parse::<f64>() else {
        return " ".to_string();
    };
    if value == 0.0 || value.is_nan() {
        return " ".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e9 {
        return format!("{:.2}b$", value / 1e9);
    }
    if magnitude >= 1e6 {
        return format!("{:.2}m$", value / 1e6);
    }
    if magnitude >= 1e3 {
        return format!("{:.2}k$", value / 1e3);
    }

    if (0.01..1.0).contains(&value) {
        return format!("{value:.2}$");
    }
    if value > 0.0 && value < 0.01 {
        return format!("{value:.6}$");
    }

    format!("{value:.2}$")
}
