use chrono::NaiveDate;

/// Join items for speech: "A", "A and B", "A, B and C".
/// Exactly one "and " before the final item, no comma preceding it.
pub fn join_spoken<S: AsRef<str>>(items: &[S]) -> String {
    match items.split_last() {
        None => String::new(),
        Some((last, [])) => last.as_ref().to_string(),
        Some((last, rest)) => {
            let head = rest
                .iter()
                .map(|s| s.as_ref())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} and {}", head, last.as_ref())
        }
    }
}

/// Render an `activeuntil` value as a spoken date, e.g. "Thursday 5 May 2011".
/// Unparseable input is spoken as-is rather than dropped.
pub fn human_date(raw: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%A %-d %B %Y").to_string();
    }
    // Some API rows carry a timestamp suffix.
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return date.format("%A %-d %B %Y").to_string();
    }
    raw.to_string()
}
