use std::io::{self, BufRead, Write};
use std::ops::Range;

use crate::data::model::{TripRecord, TripTable};
use crate::prompt::Prompt;

pub const WINDOW: usize = 5;

/// Show raw rows five at a time while the user keeps answering `yes`.
///
/// A window is only shown while `start + WINDOW < len`, so the final window
/// is skipped once fewer than six rows remain, and a table of five rows or
/// fewer shows nothing. Returns the number of windows printed.
pub fn display_raw_data<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    table: &TripTable,
) -> io::Result<usize> {
    let mut start = 0;
    let mut shown = 0;
    let mut wants_more =
        prompt.confirm("\nWould you like to view 5 rows of raw data? Enter yes or no.\n")?;

    while wants_more && start + WINDOW < table.len() {
        write_rows(prompt.out(), table, start..start + WINDOW)?;
        start += WINDOW;
        shown += 1;
        wants_more =
            prompt.confirm("Would you like to view 5 more rows of raw data? Enter yes or no.\n")?;
    }
    Ok(shown)
}

/// Print `rows` as an aligned table headed by the column names.
fn write_rows<W: Write>(out: &mut W, table: &TripTable, rows: Range<usize>) -> io::Result<()> {
    let mut header = vec![
        "",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if table.has_gender {
        header.push("Gender");
    }
    if table.has_birth_year {
        header.push("Birth Year");
    }
    header.extend(["month", "day_of_week", "hour"]);

    let mut lines: Vec<Vec<String>> = vec![header.into_iter().map(str::to_string).collect()];
    lines.extend(table.trips[rows].iter().map(|trip| cells(table, trip)));

    let mut widths = vec![0; lines[0].len()];
    for line in &lines {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }
    for line in &lines {
        let padded: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:>width$}"))
            .collect();
        writeln!(out, "{}", padded.join("  "))?;
    }
    Ok(())
}

fn cells(table: &TripTable, trip: &TripRecord) -> Vec<String> {
    fn or_blank(value: Option<&str>) -> String {
        value.unwrap_or("-").to_string()
    }

    let mut cells = vec![
        trip.row.to_string(),
        trip.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
        or_blank(trip.end_time.as_deref()),
        trip.trip_duration.to_string(),
        trip.start_station.clone(),
        trip.end_station.clone(),
        or_blank(trip.user_type.as_deref()),
    ];
    if table.has_gender {
        cells.push(or_blank(trip.gender.as_deref()));
    }
    if table.has_birth_year {
        cells.push(trip.birth_year.map_or_else(|| "-".to_string(), |y| y.to_string()));
    }
    cells.extend([
        trip.month().to_string(),
        trip.day_of_week().to_string(),
        trip.hour().to_string(),
    ]);
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::test_support::{table, trip};
    use std::io::Cursor;

    fn table_of(n: usize) -> TripTable {
        table(
            (0..n)
                .map(|i| trip("2017-02-01 07:30:00", &format!("Station{i:02}"), "Dock", 60.0))
                .collect(),
        )
    }

    fn run(rows: usize, answers: &str) -> (usize, String) {
        let mut prompt = Prompt::new(Cursor::new(answers.as_bytes().to_vec()), Vec::new());
        let shown = display_raw_data(&mut prompt, &table_of(rows)).unwrap();
        (shown, String::from_utf8(prompt.into_output()).unwrap())
    }

    fn printed_rows(out: &str, n: usize) -> Vec<usize> {
        (0..n)
            .filter(|i| out.contains(&format!("Station{i:02}")))
            .collect()
    }

    #[test]
    fn twelve_rows_show_two_full_windows() {
        let (shown, out) = run(12, "yes\nyes\nyes\nyes\n");
        assert_eq!(shown, 2);
        assert_eq!(printed_rows(&out, 12), (0..10).collect::<Vec<_>>());
        // The third "yes" is never asked for.
        assert_eq!(out.matches("5 more rows").count(), 2);
    }

    #[test]
    fn seven_rows_show_only_the_first_window() {
        let (shown, out) = run(7, "yes\nyes\n");
        assert_eq!(shown, 1);
        assert_eq!(printed_rows(&out, 7), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn five_rows_show_nothing() {
        let (shown, out) = run(5, "yes\n");
        assert_eq!(shown, 0);
        assert!(printed_rows(&out, 5).is_empty());
        assert!(!out.contains("5 more rows"));
    }

    #[test]
    fn no_stops_after_current_window() {
        let (shown, out) = run(20, "yes\nno\nyes\n");
        assert_eq!(shown, 1);
        assert_eq!(printed_rows(&out, 20), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn declining_shows_nothing() {
        let (shown, _) = run(20, "no\n");
        assert_eq!(shown, 0);
    }

    #[test]
    fn rows_include_derived_columns() {
        let (_, out) = run(6, "yes\nno\n");
        let header = out.lines().find(|l| l.contains("Start Time")).unwrap();
        assert!(header.contains("day_of_week"));
        assert!(!header.contains("Gender"));
        let first = out.lines().find(|l| l.contains("Station00")).unwrap();
        assert!(first.contains("Wednesday"));
        assert!(first.contains("2017-02-01 07:30:00"));
    }
}
