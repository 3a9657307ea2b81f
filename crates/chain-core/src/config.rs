//! Configuración del driver.
//!
//! `ChainConfig` es un valor plano; el crate raíz la carga una sola vez desde
//! el entorno. Aquí sólo vive el parseo, para poder probarlo sin tocar
//! variables de proceso.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::stage::Signature;

pub const ENV_STRICT_ARITY: &str = "ARGCHAIN_STRICT_ARITY";
pub const ENV_LOG_PAYLOADS: &str = "ARGCHAIN_LOG_PAYLOADS";
pub const ENV_RECORD_FINGERPRINTS: &str = "ARGCHAIN_RECORD_FINGERPRINTS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Posicionales sobrantes son error (`true`) o se descartan con un warn.
    pub strict_arity: bool,
    /// Incluir los valores (no sólo tamaños) en los logs de debug.
    pub log_payloads: bool,
    /// Calcular fingerprints de bundles para los eventos.
    pub record_fingerprints: bool,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self { strict_arity: true,
               log_payloads: false,
               record_fingerprints: true }
    }
}

impl ChainConfig {
    /// Construye la config consultando `lookup` por cada variable. Valores
    /// ausentes o ilegibles dejan el default.
    pub fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        let d = Self::default();
        Self { strict_arity: parse_flag(ENV_STRICT_ARITY, lookup(ENV_STRICT_ARITY), d.strict_arity),
               log_payloads: parse_flag(ENV_LOG_PAYLOADS, lookup(ENV_LOG_PAYLOADS), d.log_payloads),
               record_fingerprints: parse_flag(ENV_RECORD_FINGERPRINTS,
                                               lookup(ENV_RECORD_FINGERPRINTS),
                                               d.record_fingerprints) }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Firma vacía cuya aridad sigue `strict_arity`.
    pub fn signature(&self) -> Signature {
        Signature::new().strict(self.strict_arity)
    }
}

fn parse_flag(key: &str, raw: Option<String>, default: bool) -> bool {
    let Some(raw) = raw else { return default };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        other => {
            warn!("config: {key}={other:?} is not a boolean, using {default}");
            default
        }
    }
}
