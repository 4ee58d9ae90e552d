use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Business days (Mon-Fri) in `[start, end]`, inclusive at both ends.
/// Reversed ranges yield an empty calendar.
pub fn business_days(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        if !matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
            days.push(current);
        }
        match current.checked_add_days(Days::new(1)) {
            Some(next) => current = next,
            None => break,
        }
    }
    days
}

/// Indices of the last calendar entry in each (year, month) group, in order.
/// This is the resample-to-month-end step of the monthly heatmap.
pub fn month_end_indices(calendar: &[NaiveDate]) -> Vec<usize> {
    let mut indices = Vec::new();
    for (i, date) in calendar.iter().enumerate() {
        let is_last_of_month = match calendar.get(i + 1) {
            Some(next) => (next.year(), next.month()) != (date.year(), date.month()),
            None => true,
        };
        if is_last_of_month {
            indices.push(i);
        }
    }
    indices
}
