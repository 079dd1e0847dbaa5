//! Noyau (pur, sans I/O)
//!
//! Organisation interne :
//! - operation.rs    : + - * / % (arithmétique f64, jamais de panique)
//! - nombre.rs       : nombre <-> texte (affichage + forme canonique "11-89")
//! - calculatrice.rs : pavé + porte PIN (machine à états)
//! - bandeau.rs      : messages transitoires (horloge injectée)
//! - format.rs       : montants, dates, heures

pub mod bandeau;
pub mod calculatrice;
pub mod format;
pub mod nombre;
pub mod operation;

#[cfg(test)]
mod tests_calculatrice;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use calculatrice::{Calculatrice, Identifiants, Phase};
pub use operation::Operateur;
