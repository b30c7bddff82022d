/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → RawRecord rows → drop incomplete / pre-2000
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ GameDataset │  Vec<GameRecord>, filter domains
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  genre / rating / year predicates → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  query    │  per-platform yearly counts, score points, title count
///   └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod query;
