//! SeaORM entity models
//!
//! Database-shaped models generated in the SeaORM style. Conversions to the
//! domain entities live next to the repository adapters.

pub mod fabrics;
pub mod users;
