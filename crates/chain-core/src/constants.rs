//! Constantes del core.

/// Versión lógica del formato de bundle. Forma parte del input de
/// `Bundle::fingerprint`, de modo que un cambio incompatible en la
/// representación invalida los fingerprints previos.
pub const BUNDLE_FORMAT_VERSION: &str = "B1.0";
