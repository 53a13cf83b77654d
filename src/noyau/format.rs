// src/noyau/format.rs
//
// Affichage du résultat : forme générale à 10 chiffres significatifs
// (équivalent du format C "%.10g") — couche présentation, le noyau
// retourne toujours le f64 précis.

/// Chiffres significatifs affichés.
const CHIFFRES_SIGNIFICATIFS: usize = 10;

/// Formate un résultat pour l'affichage.
/// - forme fixe quand l'exposant décimal est dans [-4, 10)
/// - forme exposant sinon (ex: 1.234567891e12)
/// - zéros de queue retirés dans les deux formes
///
/// NaN/±∞ ne passent pas par ici en pratique (l'affichage les intercepte
/// avant), mais on les rend tels quels par sûreté.
pub fn format_resultat(x: f64) -> String {
    format_general(x, CHIFFRES_SIGNIFICATIFS)
}

fn format_general(x: f64, sig: usize) -> String {
    if !x.is_finite() {
        return x.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    // Passage par la forme scientifique pour connaître l'exposant APRÈS
    // arrondi à `sig` chiffres (0.99999999999 doit devenir "1").
    let science = format!("{:.*e}", sig - 1, x);
    let (mantisse, exp_txt) = match science.split_once('e') {
        Some(parts) => parts,
        None => (science.as_str(), "0"),
    };
    let exposant: i32 = exp_txt.parse().unwrap_or(0);

    if exposant < -4 || exposant >= sig as i32 {
        let m = coupe_zeros(mantisse);
        format!("{m}e{exposant}")
    } else {
        let decimales = (sig as i32 - 1 - exposant).max(0) as usize;
        let fixe = format!("{:.*}", decimales, x);
        coupe_zeros(&fixe).to_string()
    }
}

/// Retire les zéros de queue (et le point s'il devient final).
fn coupe_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
