//! Merge de keywords entre bundles.
//!
//! Semántica shallow: las claves de `b` reemplazan a las de `a`. Los valores
//! anidados no se fusionan, se sustituyen completos.

use super::Keywords;

/// Copia `a` y sobreescribe clave a clave con `b`. Ninguno de los dos mapas
/// queda compartido con el resultado.
pub fn merge_keywords(a: &Keywords, b: &Keywords) -> Keywords {
    let mut out = a.clone();
    for (k, v) in b.iter() {
        out.insert(k.clone(), v.clone());
    }
    out
}
