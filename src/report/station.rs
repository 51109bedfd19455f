use std::io::{self, Write};

use super::{mode, section, NO_TRIPS};
use crate::data::model::TripTable;

/// Most popular stations and trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats<'a> {
    pub start_station: &'a str,
    pub end_station: &'a str,
    /// Largest (start, end) group.
    pub trip: (&'a str, &'a str),
}

pub fn station_stats(table: &TripTable) -> Option<StationStats<'_>> {
    let trips = &table.trips;
    Some(StationStats {
        start_station: mode(trips.iter().map(|t| t.start_station.as_str()))?,
        end_station: mode(trips.iter().map(|t| t.end_station.as_str()))?,
        trip: mode(
            trips
                .iter()
                .map(|t| (t.start_station.as_str(), t.end_station.as_str())),
        )?,
    })
}

pub fn print_station_stats<W: Write>(table: &TripTable, out: &mut W) -> io::Result<()> {
    section(out, "Calculating The Most Popular Stations and Trip...", |out| {
        let Some(stats) = station_stats(table) else {
            return writeln!(out, "{NO_TRIPS}");
        };
        writeln!(out, "The most commonly used Start Station is: {}", stats.start_station)?;
        writeln!(out, "The most commonly used End Station is: {}", stats.end_station)?;
        writeln!(
            out,
            "The most frequent combination is: {} to {}",
            stats.trip.0, stats.trip.1
        )
    })
}
