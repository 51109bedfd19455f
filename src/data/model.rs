use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

// ---------------------------------------------------------------------------
// City – which source file to read
// ---------------------------------------------------------------------------

/// One of the three cities with published trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

/// Lower-case prompt name → CSV file name.
const CITY_DATA: [(City, &str, &str); 3] = [
    (City::Chicago, "chicago", "chicago.csv"),
    (City::NewYorkCity, "new york city", "new_york_city.csv"),
    (City::Washington, "washington", "washington.csv"),
];

impl City {
    /// Match an already lower-cased answer against the city names.
    pub fn from_name(name: &str) -> Option<City> {
        CITY_DATA
            .iter()
            .find(|(_, n, _)| *n == name)
            .map(|(city, _, _)| *city)
    }

    pub fn name(self) -> &'static str {
        self.entry().1
    }

    pub fn file_name(self) -> &'static str {
        self.entry().2
    }

    /// Location of this city's CSV inside `data_dir`.
    pub fn path_in(self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }

    fn entry(self) -> &'static (City, &'static str, &'static str) {
        // CITY_DATA lists every variant, so the index is always in range.
        &CITY_DATA[self as usize]
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Month – the six months covered by the datasets
// ---------------------------------------------------------------------------

/// The datasets only span January to June, so only those can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    pub fn from_name(name: &str) -> Option<Month> {
        Month::ALL.into_iter().find(|m| m.name() == name)
    }

    /// 1-based position in the January..June list, which is also the
    /// calendar month number.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
        }
    }
}

/// Title-cased English name for any calendar month number.
pub fn month_title(number: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ];
    number
        .checked_sub(1)
        .and_then(|i| NAMES.get(i as usize))
        .copied()
        .unwrap_or("Unknown")
}

// ---------------------------------------------------------------------------
// Weekday names
// ---------------------------------------------------------------------------

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full title-cased day name, e.g. `Monday`.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Case-insensitive lookup of a full day name.
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    WEEKDAYS
        .into_iter()
        .find(|d| weekday_name(*d).eq_ignore_ascii_case(name))
}

// ---------------------------------------------------------------------------
// TripRecord – one row of a city file
// ---------------------------------------------------------------------------

/// A single trip with its derived time fields.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Zero-based position in the source file, kept through filtering.
    pub row: usize,
    pub start_time: NaiveDateTime,
    pub end_time: Option<String>,
    /// Seconds, exactly as stored in the file.
    pub trip_duration: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl TripRecord {
    pub fn month(&self) -> u32 {
        self.start_time.month()
    }

    pub fn day_of_week(&self) -> &'static str {
        weekday_name(self.start_time.weekday())
    }

    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }
}

// ---------------------------------------------------------------------------
// TripTable – the loaded (and possibly filtered) city data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct TripTable {
    pub trips: Vec<TripRecord>,
    /// Whether the source header carried a `Gender` column.
    pub has_gender: bool,
    /// Whether the source header carried a `Birth Year` column.
    pub has_birth_year: bool,
}

impl TripTable {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Demographic columns are only reported when both are present.
    pub fn has_demographics(&self) -> bool {
        self.has_gender && self.has_birth_year
    }
}
