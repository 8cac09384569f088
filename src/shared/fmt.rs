//! Number formatting utilities for human-readable display.
//!
//! Used by UI layers to render prices, market caps and 24h change values
//! the way the trading screens show them.

/// Format an f64 with auto-detected decimal places and thousands separators.
///
/// Large values round to whole numbers; sub-1 prices keep enough precision
/// to stay meaningful (e.g. `0.000012` for micro-cap coins).
pub fn display(amount: f64) -> String {
    display_with_decimals(amount, auto_decimals(amount))
}

/// Format an f64 with explicit decimal places and thousands separators.
pub fn display_with_decimals(amount: f64, decimals: usize) -> String {
    let formatted = format!("{:.1$}", amount, decimals);
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (formatted.as_str(), ""),
    };

    let grouped = group_thousands(int_part);
    if frac_part.is_empty() {
        grouped
    } else {
        format!("{}.{}", grouped, frac_part)
    }
}

/// Compact suffix notation for market caps and volumes: `1.23M`, `45.6B`.
pub fn compact(amount: f64) -> String {
    let abs = amount.abs();
    let (scaled, suffix) = if abs >= 1e12 {
        (amount / 1e12, "T")
    } else if abs >= 1e9 {
        (amount / 1e9, "B")
    } else if abs >= 1e6 {
        (amount / 1e6, "M")
    } else if abs >= 1e3 {
        (amount / 1e3, "K")
    } else {
        return display(amount);
    };
    format!("{}{}", display_with_decimals(scaled, 2), suffix)
}

/// Signed percent string for 24h change badges: `+5.24%` / `-0.31%`.
pub fn percent(value: f64) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{}{:.2}%", sign, value)
}

fn auto_decimals(value: f64) -> usize {
    let abs = value.abs();
    if abs >= 100.0 {
        0
    } else if abs >= 1.0 || abs == 0.0 {
        2
    } else {
        // One significant-digit window below the leading zeros, capped.
        let exponent = abs.log10().floor().abs() as usize;
        (exponent + 2).min(8)
    }
}

fn group_thousands(int_part: &str) -> String {
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}{}", sign, grouped)
}
