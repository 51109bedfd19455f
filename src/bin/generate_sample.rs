use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

const FMT: &str = "%Y-%m-%d %H:%M:%S";
const TRIPS_PER_CITY: usize = 2_000;
/// January 1 through June 30.
const DAYS: i64 = 181;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_f64() * n as f64) as usize % n
    }

    /// Skewed pick: earlier entries come up more often, so the reports
    /// have clear winners.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let u = self.next_f64();
        &items[(u * u * items.len() as f64) as usize % items.len()]
    }
}

#[derive(Serialize)]
struct DemographicTrip<'a> {
    #[serde(rename = "")]
    id: u64,
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: u32,
    #[serde(rename = "Start Station")]
    start_station: &'a str,
    #[serde(rename = "End Station")]
    end_station: &'a str,
    #[serde(rename = "User Type")]
    user_type: &'a str,
    #[serde(rename = "Gender")]
    gender: Option<&'a str>,
    #[serde(rename = "Birth Year")]
    birth_year: Option<f64>,
}

#[derive(Serialize)]
struct PlainTrip<'a> {
    #[serde(rename = "")]
    id: u64,
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: &'a str,
    #[serde(rename = "End Station")]
    end_station: &'a str,
    #[serde(rename = "User Type")]
    user_type: &'a str,
}

/// Start, end and duration in seconds of one synthetic ride.
fn ride(rng: &mut SimpleRng, epoch: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime, f64) {
    // Daytime rides only, 07:00 to 18:59.
    let day = rng.below(DAYS as usize) as i64;
    let hour = 7 + rng.below(12) as i64;
    let second = rng.below(3600) as i64;
    let start = epoch + Duration::days(day) + Duration::hours(hour) + Duration::seconds(second);
    let seconds = 60.0 + rng.next_f64() * rng.next_f64() * 3600.0;
    let end = start + Duration::milliseconds((seconds * 1000.0) as i64);
    (start, end, seconds)
}

fn write_demographic_city(
    path: &Path,
    stations: &[&str],
    seed: u64,
    epoch: NaiveDateTime,
) -> Result<()> {
    let mut rng = SimpleRng::new(seed);
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    for id in 0..TRIPS_PER_CITY as u64 {
        let (start, end, seconds) = ride(&mut rng, epoch);
        let subscriber = rng.next_f64() < 0.8;
        // Casual riders rarely fill in their profile.
        let (gender, birth_year) = if subscriber {
            let gender = *rng.pick(&["Male", "Female"][..]);
            let year = 1950 + rng.below(50) as i32;
            (Some(gender), Some(f64::from(year)))
        } else {
            (None, None)
        };
        writer.serialize(DemographicTrip {
            id: 1_000_000 + id * 17,
            start_time: start.format(FMT).to_string(),
            end_time: end.format(FMT).to_string(),
            trip_duration: seconds as u32,
            start_station: *rng.pick(stations),
            end_station: *rng.pick(stations),
            user_type: if subscriber { "Subscriber" } else { "Customer" },
            gender,
            birth_year,
        })?;
    }
    writer.flush()?;
    Ok(())
}

fn write_plain_city(path: &Path, stations: &[&str], seed: u64, epoch: NaiveDateTime) -> Result<()> {
    let mut rng = SimpleRng::new(seed);
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    for id in 0..TRIPS_PER_CITY as u64 {
        let (start, end, seconds) = ride(&mut rng, epoch);
        let subscriber = rng.next_f64() < 0.75;
        writer.serialize(PlainTrip {
            id: 2_000_000 + id * 13,
            start_time: start.format(FMT).to_string(),
            end_time: end.format(FMT).to_string(),
            trip_duration: (seconds * 1000.0).round() / 1000.0,
            start_station: *rng.pick(stations),
            end_station: *rng.pick(stations),
            user_type: if subscriber { "Subscriber" } else { "Customer" },
        })?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let epoch = NaiveDate::from_ymd_opt(2017, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .context("building epoch")?;

    let chicago = [
        "Streeter Dr & Grand Ave",
        "Lake Shore Dr & Monroe St",
        "Theater on the Lake",
        "Clinton St & Washington Blvd",
        "Canal St & Adams St",
        "Michigan Ave & Oak St",
    ];
    let new_york = [
        "Pershing Square North",
        "E 17 St & Broadway",
        "W 21 St & 6 Ave",
        "West St & Chambers St",
        "Broadway & E 22 St",
        "8 Ave & W 31 St",
    ];
    let washington = [
        "Columbus Circle / Union Station",
        "Lincoln Memorial",
        "Jefferson Dr & 14th St SW",
        "Massachusetts Ave & Dupont Circle NW",
        "15th & P St NW",
        "Eastern Market Metro / Pennsylvania Ave & 7th St SE",
    ];

    write_demographic_city(&out_dir.join("chicago.csv"), &chicago, 42, epoch)?;
    write_demographic_city(&out_dir.join("new_york_city.csv"), &new_york, 7, epoch)?;
    write_plain_city(&out_dir.join("washington.csv"), &washington, 99, epoch)?;

    println!(
        "Wrote {TRIPS_PER_CITY} trips per city to {}",
        out_dir.display()
    );
    Ok(())
}
