/// Statistics reporters over a loaded trip table.
///
/// Each reporter has a pure `*_stats` function returning the numbers and a
/// `print_*` function that wraps it in a timed, titled section.

pub mod duration;
pub mod station;
pub mod time;
pub mod user;

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::time::Instant;

use crate::prompt::SEPARATOR_WIDTH;

pub const NO_TRIPS: &str = "No trips match the selected filters.";

/// Most frequent value. Ties resolve to the smallest value.
pub fn mode<T: Ord>(values: impl IntoIterator<Item = T>) -> Option<T> {
    let mut best: Option<(T, usize)> = None;
    for (value, count) in tally(values) {
        if best.as_ref().map_or(true, |(_, n)| count > *n) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Count of each distinct value, largest count first, ties in value order.
pub fn value_counts<T: Ord>(values: impl IntoIterator<Item = T>) -> Vec<(T, usize)> {
    let mut counts: Vec<(T, usize)> = tally(values).into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn tally<T: Ord>(values: impl IntoIterator<Item = T>) -> BTreeMap<T, usize> {
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Print `title`, run `body`, then the elapsed time and a separator.
fn section<W: Write>(
    out: &mut W,
    title: &str,
    body: impl FnOnce(&mut W) -> io::Result<()>,
) -> io::Result<()> {
    writeln!(out, "\n{title}\n")?;
    let started = Instant::now();
    body(out)?;
    writeln!(out, "\nThis took {} seconds.", started.elapsed().as_secs_f64())?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))
}

fn write_counts<W: Write>(out: &mut W, counts: &[(String, usize)]) -> io::Result<()> {
    let width = counts.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, count) in counts {
        writeln!(out, "{name:<width$}    {count}")?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDateTime;

    use crate::data::model::{TripRecord, TripTable};

    pub fn trip(start: &str, from: &str, to: &str, duration: f64) -> TripRecord {
        TripRecord {
            row: 0,
            start_time: NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S").unwrap(),
            end_time: None,
            trip_duration: duration,
            start_station: from.to_string(),
            end_station: to.to_string(),
            user_type: Some("Subscriber".to_string()),
            gender: None,
            birth_year: None,
        }
    }

    /// Table without demographic columns; rows are renumbered in order.
    pub fn table(mut trips: Vec<TripRecord>) -> TripTable {
        for (row, trip) in trips.iter_mut().enumerate() {
            trip.row = row;
        }
        TripTable {
            trips,
            has_gender: false,
            has_birth_year: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_picks_most_frequent() {
        assert_eq!(mode([3, 1, 3, 2, 3, 1]), Some(3));
        assert_eq!(mode(Vec::<u32>::new()), None);
    }

    #[test]
    fn mode_ties_resolve_to_smallest() {
        assert_eq!(mode(["Tuesday", "Monday", "Tuesday", "Monday"]), Some("Monday"));
        assert_eq!(mode([9, 7, 8]), Some(7));
    }

    #[test]
    fn value_counts_sorted_by_count_then_value() {
        let counts = value_counts(["b", "a", "c", "c", "b", "c"]);
        assert_eq!(counts, vec![("c", 3), ("b", 2), ("a", 1)]);

        let tied = value_counts(["y", "x"]);
        assert_eq!(tied, vec![("x", 1), ("y", 1)]);
    }

    #[test]
    fn section_frames_the_body() {
        let mut out = Vec::new();
        section(&mut out, "Calculating...", |out| writeln!(out, "body")).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\nCalculating...\n\nbody\n\nThis took "));
        assert!(text.ends_with(&format!(" seconds.\n{}\n", "-".repeat(SEPARATOR_WIDTH))));
    }
}
