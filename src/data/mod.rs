/// Data layer: core types, loading, filtering and the grid adapter.
///
/// Architecture:
/// ```text
///      players.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + normalize → PlayerTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  case-insensitive name equality → subset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ adapter   │  PlayerTableModel: read-only TableModel for the grid
///   └──────────┘
/// ```

pub mod adapter;
pub mod filter;
pub mod loader;
pub mod model;
