use std::io::{self, Write};

use super::{mode, section, value_counts, write_counts, NO_TRIPS};
use crate::data::model::TripTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    /// Present only when the source file has both `Gender` and `Birth Year`.
    pub demographics: Option<Demographics>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demographics {
    pub genders: Vec<(String, usize)>,
    /// `None` when every birth year cell in the table is blank.
    pub birth_years: Option<BirthYears>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYears {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

pub fn user_stats(table: &TripTable) -> UserStats {
    let trips = &table.trips;
    let user_types = value_counts(trips.iter().filter_map(|t| t.user_type.clone()));

    let demographics = table.has_demographics().then(|| {
        let years = || trips.iter().filter_map(|t| t.birth_year);
        let birth_years = match (years().min(), years().max(), mode(years())) {
            (Some(earliest), Some(most_recent), Some(most_common)) => Some(BirthYears {
                earliest,
                most_recent,
                most_common,
            }),
            _ => None,
        };
        Demographics {
            genders: value_counts(trips.iter().filter_map(|t| t.gender.clone())),
            birth_years,
        }
    });

    UserStats {
        user_types,
        demographics,
    }
}

pub fn print_user_stats<W: Write>(table: &TripTable, out: &mut W) -> io::Result<()> {
    section(out, "Calculating User Stats...", |out| {
        if table.is_empty() {
            return writeln!(out, "{NO_TRIPS}");
        }
        let stats = user_stats(table);

        writeln!(out, "User Type Count:")?;
        write_counts(out, &stats.user_types)?;

        let Some(demographics) = stats.demographics else {
            return Ok(());
        };
        writeln!(out, "Gender Count:")?;
        write_counts(out, &demographics.genders)?;
        match demographics.birth_years {
            Some(years) => {
                writeln!(out, "Earliest Birth Year: {}", years.earliest)?;
                writeln!(out, "Most Recent Birth Year: {}", years.most_recent)?;
                writeln!(out, "Most Common Birth Year: {}", years.most_common)
            }
            None => writeln!(out, "No birth year data for these trips."),
        }
    })
}
