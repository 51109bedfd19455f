use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use super::filter::{self, TimeFilter};
use super::model::{City, TripRecord, TripTable};

/// Columns every city file must carry.
const REQUIRED_COLUMNS: [&str; 5] = [
    "Start Time",
    "Start Station",
    "End Station",
    "Trip Duration",
    "User Type",
];

/// Formats seen in the published datasets, most common first.
const TIMESTAMP_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("opening {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{}: missing required column '{column}'", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
    #[error("{}: row {row} is malformed", .path.display())]
    Row {
        path: PathBuf,
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error("{}: row {row}: cannot parse start time '{value}'", .path.display())]
    Timestamp {
        path: PathBuf,
        row: usize,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a city's trips from `data_dir` and apply the time filter.
pub fn load_data(data_dir: &Path, city: City, time: TimeFilter) -> Result<TripTable, LoadError> {
    let path = city.path_in(data_dir);
    let table = load_csv(&path)?;
    let total = table.len();
    let table = filter::apply(table, time);
    info!(
        "loaded {} of {total} trips for {city} from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// One CSV row keyed by header name. Unknown columns (the unnamed leading
/// id column, for instance) are ignored.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    /// Stored as a float (`1989.0`) in files where blanks occur.
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// Read every row of a city file. The file is closed when the reader drops.
pub fn load_csv(path: &Path) -> Result<TripTable, LoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let headers = reader
        .headers()
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    if let Some(column) = REQUIRED_COLUMNS
        .into_iter()
        .find(|col| !headers.iter().any(|h| h == *col))
    {
        return Err(LoadError::MissingColumn {
            path: path.to_path_buf(),
            column,
        });
    }
    let has_gender = headers.iter().any(|h| h == "Gender");
    let has_birth_year = headers.iter().any(|h| h == "Birth Year");
    debug!(
        "{}: columns {:?} (gender: {has_gender}, birth year: {has_birth_year})",
        path.display(),
        headers
    );

    let mut trips = Vec::new();
    for (row, result) in reader.deserialize::<RawTrip>().enumerate() {
        let raw = result.map_err(|source| LoadError::Row {
            path: path.to_path_buf(),
            row,
            source,
        })?;
        let start_time = parse_timestamp(&raw.start_time).ok_or_else(|| LoadError::Timestamp {
            path: path.to_path_buf(),
            row,
            value: raw.start_time.clone(),
        })?;

        trips.push(TripRecord {
            row,
            start_time,
            end_time: raw.end_time,
            trip_duration: raw.trip_duration,
            start_station: raw.start_station,
            end_station: raw.end_station,
            user_type: non_blank(raw.user_type),
            gender: non_blank(raw.gender),
            birth_year: raw.birth_year.filter(|y| y.is_finite()).map(|y| y as i32),
        });
    }

    Ok(TripTable {
        trips,
        has_gender,
        has_birth_year,
    })
}

fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
