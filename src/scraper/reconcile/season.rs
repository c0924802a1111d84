use chrono::{Datelike, NaiveDate};

use crate::scraper::types::Season;

/// Classify a calendar date into its broadcast season and year.
///
/// Quarter boundaries fall on Mar 20, Jun 21, Sep 22 and Dec 21,
/// evaluated on (month, day) alone; dates from Dec 21 onward belong to
/// the following year's winter season.
pub fn date_to_season(date: NaiveDate) -> (Season, i32) {
    let year = date.year();
    let month_day = (date.month(), date.day());

    if month_day < (3, 20) {
        (Season::Winter, year)
    } else if month_day < (6, 21) {
        (Season::Spring, year)
    } else if month_day < (9, 22) {
        (Season::Summer, year)
    } else if month_day < (12, 21) {
        (Season::Fall, year)
    } else {
        (Season::Winter, year + 1)
    }
}
