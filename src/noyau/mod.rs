//! Noyau de la calculatrice à touches
//!
//! Organisation interne :
//! - jetons.rs   : vocabulaire fermé (symboles, unités du tampon, jetons postfixes)
//! - mode.rs     : basique / scientifique
//! - saisie.rs   : règles d’insertion incrémentale dans le tampon
//! - rpn.rs      : shunting-yard paresseux -> postfixe
//! - arbre.rs    : postfixe -> arbre binaire
//! - eval.rs     : arbre -> f64 -> Nombre (pipeline complet)
//! - erreur.rs   : rejets de saisie + erreurs de calcul
//! - moteur.rs   : façade (soumettre / evaluer / effacer / rendus)

pub mod arbre;
pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod mode;
pub mod moteur;
pub mod rpn;
pub mod saisie;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale (Nombre et Insertion : retours de la façade)
#[cfg_attr(not(test), allow(unused_imports))]
pub use eval::Nombre;
pub use jetons::{Fonction, Operateur, Symbole};
pub use mode::Mode;
pub use moteur::Calculatrice;
#[cfg_attr(not(test), allow(unused_imports))]
pub use saisie::Insertion;
