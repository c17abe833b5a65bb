//! Display formatting for the dates and times the backend sends.
//!
//! Dates arrive as `YYYY-MM-DD` and times as `HH:MM` (seconds optional).
//! Anything unparseable is shown as received.

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn parse_month(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|m| (1..=12).contains(m))
}

/// Format `2026-05-20` as "May 20, 2026".
pub fn format_date_human(date_str: &str) -> String {
    let (Some(year), Some(month), Some(day)) =
        (date_str.get(..4), date_str.get(5..7), date_str.get(8..10))
    else {
        return date_str.to_string();
    };

    match (parse_month(month), day.parse::<u32>()) {
        (Some(m), Ok(d)) => format!("{} {}, {}", MONTH_NAMES[m - 1], d, year),
        _ => date_str.to_string(),
    }
}

/// Format `14:05` or `14:05:00` as "2:05 PM".
pub fn format_time_human(time_str: &str) -> String {
    let (Some(hour_str), Some(min_str)) = (time_str.get(..2), time_str.get(3..5)) else {
        return time_str.to_string();
    };

    let hour: u32 = match hour_str.parse() {
        Ok(h) if h < 24 => h,
        _ => return time_str.to_string(),
    };

    let (display_hour, ampm) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };

    format!("{}:{} {}", display_hour, min_str, ampm)
}

/// "May 20, 2026 at 2:05 PM".
pub fn format_slot(date: &str, time: &str) -> String {
    format!("{} at {}", format_date_human(date), format_time_human(time))
}

/// Convert an upper-case wire constant to Title Case (e.g. "BOOKED" → "Booked").
pub fn format_constant_title(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + &chars.as_str().to_lowercase(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
