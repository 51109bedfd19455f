/// Data layer: trip types, loading, and time filtering.
///
/// Architecture:
/// ```text
///  chicago.csv / new_york_city.csv / washington.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows → TripTable (month/day/hour derived)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  keep one month, one weekday, or everything
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
