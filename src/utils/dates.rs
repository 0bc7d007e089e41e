use chrono::{Local, NaiveDate};

use crate::config::Config;

/// Returns true if `release_date` falls inside the new-release window ending at `today`.
///
/// Dates in the future count as new.
pub fn is_new_shoe_at(release_date: NaiveDate, today: NaiveDate) -> bool {
    (today - release_date).num_days() < Config::NEW_RELEASE_WINDOW_DAYS
}

/// Same as [`is_new_shoe_at`], measured from the local calendar date.
pub fn is_new_shoe(release_date: NaiveDate) -> bool {
    is_new_shoe_at(release_date, Local::now().date_naive())
}
