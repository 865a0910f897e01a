use chrono::{DateTime, Local, NaiveDate};
use std::cmp::Ordering;

/// Key for a calendar day's live timer entry (`YYYY-MM-DD`).
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's day key from the local wall clock.
pub fn today_key() -> String {
    day_key(Local::now().date_naive())
}

/// Key for one archival event (`YYYY-MM-DD_HHMMSS`). Two archivals within
/// the same second would collide; that is accepted, not defended against.
pub fn archive_key(now: DateTime<Local>) -> String {
    now.format("%Y-%m-%d_%H%M%S").to_string()
}

/// The day portion of a day or archive key.
pub fn date_part(key: &str) -> &str {
    key.split('_').next().unwrap_or(key)
}

fn parse_date(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_part(key), "%Y-%m-%d").ok()
}

/// Sort bucket keys for display: most recent date first, same-date ties
/// broken by full-key descending comparison (later time-of-day first).
/// Keys with an unparsable date portion fall through to the tie-break.
pub fn sort_bucket_keys(keys: &mut [String]) {
    keys.sort_by(|a, b| {
        let by_date = match (parse_date(b), parse_date(a)) {
            (Some(db), Some(da)) => db.cmp(&da),
            _ => Ordering::Equal,
        };
        by_date.then_with(|| b.cmp(a))
    });
}

/// Human-readable form of a key: "January 15, 2024" for a day key,
/// "January 15, 2024 14:03:05" for an archive key.
pub fn display_key(key: &str) -> String {
    let date = match parse_date(key) {
        Some(d) => d.format("%B %-d, %Y").to_string(),
        None => date_part(key).to_string(),
    };
    match key.split_once('_') {
        Some((_, suffix)) if suffix.len() == 6 && suffix.chars().all(|c| c.is_ascii_digit()) => {
            format!(
                "{} {}:{}:{}",
                date,
                &suffix[0..2],
                &suffix[2..4],
                &suffix[4..6]
            )
        }
        _ => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_key_formats() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(day_key(date), "2024-01-05");

        let moment = Local.with_ymd_and_hms(2024, 1, 5, 9, 3, 7).unwrap();
        assert_eq!(archive_key(moment), "2024-01-05_090307");
    }

    #[test]
    fn test_date_part() {
        assert_eq!(date_part("2024-01-05_090307"), "2024-01-05");
        assert_eq!(date_part("2024-01-05"), "2024-01-05");
    }

    #[test]
    fn test_sort_most_recent_date_first() {
        let mut keys = vec![
            "2024-01-05_090307".to_string(),
            "2024-03-01".to_string(),
            "2023-12-31_235959".to_string(),
        ];
        sort_bucket_keys(&mut keys);
        assert_eq!(keys, vec!["2024-03-01", "2024-01-05_090307", "2023-12-31_235959"]);
    }

    #[test]
    fn test_sort_same_date_later_time_first() {
        let mut keys = vec![
            "2024-01-05_090307".to_string(),
            "2024-01-05_174500".to_string(),
            "2024-01-05_120000".to_string(),
        ];
        sort_bucket_keys(&mut keys);
        assert_eq!(
            keys,
            vec!["2024-01-05_174500", "2024-01-05_120000", "2024-01-05_090307"]
        );
    }

    #[test]
    fn test_sort_unparsable_dates_fall_to_string_order() {
        let mut keys = vec!["junk_a".to_string(), "junk_b".to_string()];
        sort_bucket_keys(&mut keys);
        assert_eq!(keys, vec!["junk_b", "junk_a"]);
    }

    #[test]
    fn test_display_key() {
        assert_eq!(display_key("2024-01-05"), "January 5, 2024");
        assert_eq!(display_key("2024-01-05_090307"), "January 5, 2024 09:03:07");
        // malformed suffix is dropped rather than garbled
        assert_eq!(display_key("2024-01-05_09"), "January 5, 2024");
    }
}
