// src/noyau/nombre.rs
//
// Nombre <-> texte pour l’affichage ET pour la forme canonique.
//
// Contrat : même rendu que l’affichage standard d’une calculatrice web
// (le serveur compare des chaînes exactes, ex: "11-89") :
// - entier sans ".0"            : 10
// - décimal le plus court exact : 0.1, 0.30000000000000004
// - non finis                   : Infinity, -Infinity, NaN
// - zéro négatif                : 0
// - notation exposant hors [1e-6, 1e21) : 1e+21, 1.5e-7
//
// Aucune normalisation supplémentaire (pas de décimales fixes).

/// Bornes de la notation décimale “simple”.
const EXPOSANT_MIN: f64 = 1e-6;
const EXPOSANT_MAX: f64 = 1e21;

/// f64 -> texte (affichage + forme canonique).
pub fn format_nombre(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if x == 0.0 {
        // couvre aussi -0.0
        return "0".to_string();
    }

    let abs = x.abs();
    if (EXPOSANT_MIN..EXPOSANT_MAX).contains(&abs) {
        // Display de f64 : plus court aller-retour, jamais d’exposant.
        return format!("{x}");
    }

    // "1.5e-7" tel quel ; "1e21" -> "1e+21"
    let s = format!("{x:e}");
    match s.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => s,
    }
}

/// Texte affiché -> f64.
/// Tout ce qui ne se lit pas donne NaN (jamais d’erreur : l’affichage reste utilisable).
pub fn lire_affichage(s: &str) -> f64 {
    let t = s.trim();
    match t {
        "Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ => t.parse::<f64>().unwrap_or(f64::NAN),
    }
}

/// Vrai si le texte affiché est un nombre fini “éditable” (chiffres, signe, point).
pub fn est_editable(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '-')
}
