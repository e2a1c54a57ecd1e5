//! Upcoming birthday planning
//!
//! A birthday is upcoming when its next anniversary falls between today and
//! `window_days` days from now, both ends included. Congratulations that
//! would land on a weekend move to the following Monday.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use contactbook_types::{BIRTHDAY_FORMAT, Record};
use std::fmt;

/// Default look-ahead for the `birthdays` command
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Who to congratulate, and when
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub name: String,
    pub date: NaiveDate,
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.date.format(BIRTHDAY_FORMAT))
    }
}

/// Collect greetings for `records`, ordered by congratulation date
///
/// Records with the same date keep their relative order.
pub fn upcoming<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    today: NaiveDate,
    window_days: i64,
) -> Vec<Greeting> {
    let mut greetings: Vec<Greeting> = records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday?;
            let this_year = birthday.in_year(today.year())?;
            let next = if this_year < today {
                birthday.in_year(today.year() + 1)?
            } else {
                this_year
            };
            let days_until = (next - today).num_days();
            if !(0..=window_days).contains(&days_until) {
                return None;
            }
            Some(Greeting {
                name: record.name.to_string(),
                date: congratulation_date(next),
            })
        })
        .collect();

    greetings.sort_by_key(|g| g.date);
    log::debug!(
        "{} upcoming birthday(s) within {} day(s) of {}",
        greetings.len(),
        window_days,
        today
    );
    greetings
}

/// Shift weekend dates to the following Monday
pub fn congratulation_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}
