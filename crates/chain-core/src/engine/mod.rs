//! Driver de cadenas.
//!
//! - `run`: fold secuencial de `Bundle::combine` sobre una lista de términos.
//! - `Chain`: builder reutilizable con config y sink de eventos opcionales.
//! - `Piped`: azúcar `seed | stage | stage` sobre el mismo `combine`.

pub mod driver;
pub mod piped;

pub use driver::{run, Chain};
pub use piped::Piped;
