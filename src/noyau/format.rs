// src/noyau/format.rs

/// Au-delà de 17 décimales un f64 n’a plus rien à dire.
pub const DIGITS_MAX: usize = 17;

/// Affichage d’une valeur.
/// - `None` : forme la plus courte qui relit la même valeur (6 -> "6", 0.1 -> "0.1")
/// - `Some(n)` : arrondi à n décimales (n borné à DIGITS_MAX), zéros finaux retirés ("0.3333", "2")
/// - ∞ / NaN : "∞", "-∞", "NaN"
pub fn format_resultat(x: f64, digits: Option<usize>) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "∞".into() } else { "-∞".into() };
    }

    let brut = match digits {
        None => format!("{x}"),
        Some(n) => {
            let n = n.min(DIGITS_MAX);
            let s = format!("{x:.n$}");
            if s.contains('.') {
                s.trim_end_matches('0').trim_end_matches('.').to_string()
            } else {
                s
            }
        }
    };

    // "-0" n’apporte rien à l’écran
    if brut == "-0" {
        "0".to_string()
    } else {
        brut
    }
}
