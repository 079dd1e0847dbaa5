// src/noyau/format.rs

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};
use std::fmt::Display;

/* ------------------------ Montants ------------------------ */

/// Regroupe les chiffres d’une partie entière par milliers ("1234567" -> "1 234 567").
fn grouper_milliers(entier: &str) -> String {
    let n = entier.len();
    let mut out = String::with_capacity(n + n / 3);
    for (i, c) in entier.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Montant : deux décimales + séparateur de milliers.
/// - 1234567.5 -> "1 234 567.50"
/// - -12 -> "-12.00"
/// - non fini -> "-"
pub fn format_montant(x: f64) -> String {
    if !x.is_finite() {
        return "-".to_string();
    }

    let brut = format!("{:.2}", x.abs());
    let (entier, decimales) = brut.split_once('.').unwrap_or((brut.as_str(), "00"));
    let corps = format!("{}.{decimales}", grouper_milliers(entier));

    // -0.001 arrondi à 0.00 : pas de signe
    if x < 0.0 && brut != "0.00" {
        format!("-{corps}")
    } else {
        corps
    }
}

/* ------------------------ Dates / heures ------------------------ */

/// jj/mm/aaaa
pub fn format_date(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}

/// hh:mm (24h)
pub fn format_heure(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// "jj/mm/aaaa hh:mm" dans le fuseau de `dt`.
pub fn format_date_heure<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{} {}",
        format_date(dt.date_naive()),
        format_heure(dt.time())
    )
}

/// Compte à rebours du bandeau ("3 s"), arrondi au supérieur, jamais négatif.
pub fn format_duree_restante(secondes: f64) -> String {
    let s = if secondes.is_finite() && secondes > 0.0 {
        secondes.ceil() as u64
    } else {
        0
    };
    format!("{s} s")
}
