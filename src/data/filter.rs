use std::fmt;

use chrono::Weekday;

use super::model::{weekday_name, City, Month, TripRecord, TripTable};

// ---------------------------------------------------------------------------
// Filter predicate: at most one time dimension restricts the rows
// ---------------------------------------------------------------------------

/// Which single time dimension restricts the loaded rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFilter {
    #[default]
    None,
    Month(Month),
    Day(Weekday),
}

impl TimeFilter {
    /// Whether a trip passes this filter.
    ///
    /// * `None`     → every trip passes
    /// * `Month(m)` → derived month equals `m`'s 1-based number
    /// * `Day(d)`   → derived day name equals `d`'s name, ignoring case
    pub fn matches(&self, trip: &TripRecord) -> bool {
        match self {
            TimeFilter::None => true,
            TimeFilter::Month(month) => trip.month() == month.number(),
            TimeFilter::Day(day) => trip.day_of_week().eq_ignore_ascii_case(weekday_name(*day)),
        }
    }
}

/// Everything the user chose for one session pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filters {
    pub city: City,
    pub time: TimeFilter,
}

impl Filters {
    /// Lower-case month name, or `all` when no month filter is active.
    pub fn month_label(&self) -> &'static str {
        match self.time {
            TimeFilter::Month(m) => m.name(),
            _ => "all",
        }
    }

    /// Title-cased day name, or `all` when no day filter is active.
    pub fn day_label(&self) -> &'static str {
        match self.time {
            TimeFilter::Day(d) => weekday_name(d),
            _ => "all",
        }
    }
}

impl fmt::Display for Filters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "city={}, month={}, day={}",
            self.city,
            self.month_label(),
            self.day_label()
        )
    }
}

/// Keep only the trips passing `filter`, preserving file order.
pub fn apply(table: TripTable, filter: TimeFilter) -> TripTable {
    if filter == TimeFilter::None {
        return table;
    }
    TripTable {
        trips: table
            .trips
            .into_iter()
            .filter(|trip| filter.matches(trip))
            .collect(),
        ..table
    }
}
