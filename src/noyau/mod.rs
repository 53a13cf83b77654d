//! Noyau scientifique f64
//!
//! Organisation interne :
//! - jetons.rs    : tokenisation (nombres, constantes, identificateurs, opérateurs)
//! - fonctions.rs : table des fonctions unaires + mode d'angle (DEG/RAD)
//! - eval.rs      : machine à deux piles (shunting-yard, évaluation au vol)
//! - erreurs.rs   : erreurs typées (syntaxe / domaine)
//! - format.rs    : affichage du résultat (10 chiffres significatifs)
//!
//! Aucun état partagé : chaque appel à `evaluer` alloue ses propres piles,
//! le mode d'angle est un paramètre explicite (réentrant entre threads).

pub mod erreurs;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod jetons;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreurs::{ErreurEval, ErreurSyntaxe};
pub use eval::evaluer;
pub use fonctions::{Fonction, ModeAngle};
pub use format::format_resultat;
pub use jetons::tokenize;
