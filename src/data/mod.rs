/// Data layer: core types, loading, and summary statistics.
///
/// Architecture:
/// ```text
///  powermeasure.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse selected channel columns → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Record>, derived power column
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary   │  preview + mean + max → PowerSummary
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod summary;
