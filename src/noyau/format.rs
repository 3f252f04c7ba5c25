// src/noyau/format.rs

use num_traits::ToPrimitive;

/// Affichage du résultat : entier si pas de partie fractionnaire (et s’il tient
/// dans un i64), sinon la représentation décimale complète.
pub fn format_resultat(v: f64) -> String {
    if v.fract() == 0.0 {
        if let Some(n) = v.to_i64() {
            return format!("{n}");
        }
    }
    format!("{v}")
}
