use std::io::{self, Write};

use super::{mode, section, NO_TRIPS};
use crate::data::model::{month_title, TripTable};

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelTimes {
    pub month: u32,
    pub day_of_week: &'static str,
    pub hour: u32,
}

pub fn time_stats(table: &TripTable) -> Option<TravelTimes> {
    Some(TravelTimes {
        month: mode(table.trips.iter().map(|t| t.month()))?,
        day_of_week: mode(table.trips.iter().map(|t| t.day_of_week()))?,
        hour: mode(table.trips.iter().map(|t| t.hour()))?,
    })
}

pub fn print_time_stats<W: Write>(table: &TripTable, out: &mut W) -> io::Result<()> {
    section(out, "Calculating The Most Frequent Times of Travel...", |out| {
        let Some(stats) = time_stats(table) else {
            return writeln!(out, "{NO_TRIPS}");
        };
        writeln!(
            out,
            "The most common month is: {} ({})",
            stats.month,
            month_title(stats.month)
        )?;
        writeln!(out, "The most common day of week is: {}", stats.day_of_week)?;
        writeln!(out, "The most common start hour is: {}", stats.hour)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::test_support::{table, trip};

    #[test]
    fn picks_most_common_month_day_and_hour() {
        let t = table(vec![
            trip("2017-01-02 08:10:00", "A", "B", 100.0), // Monday
            trip("2017-03-06 08:45:00", "A", "B", 100.0), // Monday
            trip("2017-03-03 17:00:00", "A", "B", 100.0), // Friday
        ]);
        let stats = time_stats(&t).unwrap();
        assert_eq!(
            stats,
            TravelTimes {
                month: 3,
                day_of_week: "Monday",
                hour: 8,
            }
        );

        let mut out = Vec::new();
        print_time_stats(&t, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("The most common month is: 3 (March)"));
        assert!(text.contains("The most common day of week is: Monday"));
        assert!(text.contains("The most common start hour is: 8"));
    }

    #[test]
    fn empty_table_prints_notice() {
        let t = table(Vec::new());
        assert_eq!(time_stats(&t), None);
        let mut out = Vec::new();
        print_time_stats(&t, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains(NO_TRIPS));
    }
}
