/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  pokemondashtrue2.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset  │  Vec<PokemonRecord> + raw rows, shared as Arc
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter  │  type tag → names, type1 → counts
///   └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;

pub use error::DatasetError;
