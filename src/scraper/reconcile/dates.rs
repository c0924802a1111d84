use chrono::NaiveDate;

use crate::scraper::types::AiringRange;

/// Catalog sentinel for titles with no airing information at all.
const NOT_AVAILABLE: &str = "Not available";

/// Parse the catalog's free-text airing field into a date range.
///
/// The catalog emits dates in three precisions ("Apr 3, 2022",
/// "Apr 2022", "2022"), as a single date or as an "A to B" range where
/// either half may be "?". Anything unparseable degrades to `None`; this
/// never fails.
pub fn parse_airing_range(text: &str) -> AiringRange {
    if text == NOT_AVAILABLE {
        return AiringRange::default();
    }

    match text.split_once(" to ") {
        None => {
            let date = parse_single(text);
            AiringRange {
                start: date,
                end: date,
            }
        }
        Some((first, second)) => {
            let start = parse_half(first);
            let mut end = parse_half(second);

            // A garbled range must still satisfy end >= start.
            if let (Some(s), Some(e)) = (start, end) {
                end = Some(s.max(e));
            }

            AiringRange { start, end }
        }
    }
}

fn parse_half(text: &str) -> Option<NaiveDate> {
    if text.contains('?') {
        return None;
    }
    parse_single(text)
}

/// Fallback ladder over the three catalog date formats, first hit wins.
fn parse_single(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    if let Ok(date) = NaiveDate::parse_from_str(text, "%b %d, %Y") {
        return Some(date);
    }

    // "Apr 2022" carries no day; resolve to the first of the month.
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{text} 1"), "%b %Y %d") {
        return Some(date);
    }

    // A bare year resolves to January 1st.
    if text.len() == 4
        && let Ok(year) = text.parse::<i32>()
    {
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_not_available_sentinel() {
        let range = parse_airing_range("Not available");
        assert_eq!(range.start, None);
        assert_eq!(range.end, None);
    }

    #[test]
    fn test_full_range() {
        let range = parse_airing_range("Apr 3, 2022 to Sep 18, 2022");
        assert_eq!(range.start, Some(date(2022, 4, 3)));
        assert_eq!(range.end, Some(date(2022, 9, 18)));
    }

    #[test]
    fn test_open_ended_range() {
        let range = parse_airing_range("Apr 3, 2022 to ?");
        assert_eq!(range.start, Some(date(2022, 4, 3)));
        assert_eq!(range.end, None);
    }

    #[test]
    fn test_unknown_start() {
        let range = parse_airing_range("? to Sep 18, 2022");
        assert_eq!(range.start, None);
        assert_eq!(range.end, Some(date(2022, 9, 18)));
    }

    #[test]
    fn test_single_full_date() {
        let range = parse_airing_range("Apr 3, 2022");
        assert_eq!(range.start, Some(date(2022, 4, 3)));
        assert_eq!(range.end, Some(date(2022, 4, 3)));
    }

    #[test]
    fn test_month_precision_resolves_to_first() {
        let range = parse_airing_range("Apr 2022");
        assert_eq!(range.start, Some(date(2022, 4, 1)));
        assert_eq!(range.end, Some(date(2022, 4, 1)));
    }

    #[test]
    fn test_year_precision_resolves_to_january() {
        let range = parse_airing_range("2022");
        assert_eq!(range.start, Some(date(2022, 1, 1)));
        assert_eq!(range.end, Some(date(2022, 1, 1)));
    }

    #[test]
    fn test_mixed_precision_range() {
        let range = parse_airing_range("Apr 2022 to 2023");
        assert_eq!(range.start, Some(date(2022, 4, 1)));
        assert_eq!(range.end, Some(date(2023, 1, 1)));
    }

    #[test]
    fn test_garbage_degrades_to_none() {
        let range = parse_airing_range("sometime soon");
        assert_eq!(range.start, None);
        assert_eq!(range.end, None);
    }

    #[test]
    fn test_garbage_half_degrades_independently() {
        let range = parse_airing_range("Apr 3, 2022 to gibberish");
        assert_eq!(range.start, Some(date(2022, 4, 3)));
        assert_eq!(range.end, None);
    }

    #[test]
    fn test_reversed_range_is_clamped() {
        let range = parse_airing_range("Sep 18, 2022 to Apr 3, 2022");
        assert_eq!(range.start, Some(date(2022, 9, 18)));
        assert_eq!(range.end, Some(date(2022, 9, 18)));
    }
}
