//! Modelo neutral: el bundle de argumentos y su merge de keywords.

pub mod bundle;
pub mod merge;

pub use bundle::{Bundle, Keywords};
pub use merge::merge_keywords;
