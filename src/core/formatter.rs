/// Returns "$1,234" style whole-dollar currency.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(rounded.abs() as u64))
}

/// Returns "1,234,567".
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Returns "2.59B", "12.00M", "3.50K" or the plain integer below 1,000.
pub fn format_count(value: f64) -> String {
    if value >= 1_000_000_000_000.0 {
        format!("{:.2}T", value / 1_000_000_000_000.0)
    } else if value >= 1_000_000_000.0 {
        format!("{:.2}B", value / 1_000_000_000.0)
    } else if value >= 1_000_000.0 {
        format!("{:.2}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.2}K", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    }
}

/// Returns "10.00K/sec".
pub fn format_rate(per_second: f64) -> String {
    format!("{}/sec", format_count(per_second))
}

/// Returns "8.04 GB" below 10 GB, whole gigabytes above.
pub fn format_gb(gb: f64) -> String {
    if gb < 10.0 {
        format!("{:.2} GB", gb)
    } else {
        format!("{} GB", group_thousands(gb.round() as u64))
    }
}

/// Returns "100x" with thousands grouping.
pub fn format_multiplier(multiplier: f64) -> String {
    if multiplier.is_finite() && multiplier < u64::MAX as f64 {
        format!("{}x", group_thousands(multiplier.round() as u64))
    } else {
        format!("{:e}x", multiplier)
    }
}

/// Returns "[██████░░░░░░]" filled in proportion to `value / max`.
pub fn format_cost_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 {
        (value / max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
