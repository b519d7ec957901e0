use chrono::NaiveDate;

/// `1234567` -> `"1,234,567"`.
pub fn format_volume(volume: u64) -> String {
    let digits = volume.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

/// Signed percentage, e.g. `+4.21%` / `-3.05%`.
pub fn format_change(change: f64) -> String {
    format!("{:+.2}%", change)
}

/// `2024-03-01` -> `Mar 01`; anything that is not an ISO date is returned as-is.
pub fn short_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%b %d").to_string(),
        Err(_) => raw.to_string(),
    }
}
