//! Configuración central.
//! Carga variables de entorno (.env) una sola vez y expone una estructura
//! inmutable (`CONFIG`) que usan `chain` y `signature`.
use chain_core::ChainConfig;
use once_cell::sync::Lazy;

/// Configuración global, evaluada perezosamente la primera vez que se usa.
///
/// Variables reconocidas (ver `chain_core::config`):
/// - `ARGCHAIN_STRICT_ARITY` (default `true`)
/// - `ARGCHAIN_LOG_PAYLOADS` (default `false`)
/// - `ARGCHAIN_RECORD_FINGERPRINTS` (default `true`)
pub static CONFIG: Lazy<ChainConfig> = Lazy::new(|| {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            log::warn!("config: could not read .env: {e}");
        }
    }
    ChainConfig::from_env()
});
