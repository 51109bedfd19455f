use std::io::{self, Write};

use super::{section, NO_TRIPS};
use crate::data::model::TripTable;

/// Total and mean trip duration, in the file's unit (seconds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total: f64,
    pub mean: f64,
}

pub fn duration_stats(table: &TripTable) -> Option<DurationStats> {
    if table.is_empty() {
        return None;
    }
    let total: f64 = table.trips.iter().map(|t| t.trip_duration).sum();
    Some(DurationStats {
        total,
        mean: total / table.len() as f64,
    })
}

pub fn print_duration_stats<W: Write>(table: &TripTable, out: &mut W) -> io::Result<()> {
    section(out, "Calculating Trip Duration...", |out| {
        let Some(stats) = duration_stats(table) else {
            return writeln!(out, "{NO_TRIPS}");
        };
        writeln!(out, "Total travel time is {} seconds", stats.total)?;
        writeln!(out, "Mean travel time is {} seconds", stats.mean)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::test_support::{table, trip};

    #[test]
    fn sum_and_mean_cover_every_row() {
        let t = table(vec![
            trip("2017-01-02 08:00:00", "A", "B", 321.0),
            trip("2017-01-02 09:00:00", "A", "B", 1610.0),
            trip("2017-01-02 10:00:00", "A", "B", 416.0),
            trip("2017-01-02 11:00:00", "A", "B", 353.0),
        ]);
        let stats = duration_stats(&t).unwrap();
        assert_eq!(stats.total, 2700.0);
        assert_eq!(stats.mean, 675.0);

        let mut out = Vec::new();
        print_duration_stats(&t, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total travel time is 2700 seconds"));
        assert!(text.contains("Mean travel time is 675 seconds"));
    }

    #[test]
    fn fractional_durations_pass_through() {
        let t = table(vec![
            trip("2017-01-02 08:00:00", "A", "B", 0.5),
            trip("2017-01-02 08:00:00", "A", "B", 0.25),
        ]);
        let stats = duration_stats(&t).unwrap();
        assert_eq!(stats.total, 0.75);
        assert_eq!(stats.mean, 0.375);
    }

    #[test]
    fn empty_table_has_no_mean() {
        assert_eq!(duration_stats(&table(Vec::new())), None);
    }
}
