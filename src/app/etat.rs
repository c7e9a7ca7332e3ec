//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le moteur et les deux textes affichés (expression + résultat),
//! et rafraîchir l’affichage après chaque touche.
//!
//! Contrats :
//! - Aucune règle de saisie ni de calcul ici : tout passe par `Calculatrice`.
//! - Après chaque touche (y compris C et DEL), le résultat est recalculé en direct.
//! - Un événement à la fois (egui sérialise déjà les entrées).

use crate::noyau::{Calculatrice, Mode, Symbole};
use crate::reglages::Reglages;

#[derive(Clone, Debug)]
pub struct AppCalc {
    calc: Calculatrice,

    // --- sorties ---
    pub expression: String,
    pub resultat: String,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::depuis_calculatrice(Calculatrice::default())
    }
}

impl AppCalc {
    pub fn new(reglages: &Reglages) -> Self {
        Self::depuis_calculatrice(Calculatrice::new(
            reglages.separateur_decimal,
            reglages.mode_initial,
        ))
    }

    fn depuis_calculatrice(calc: Calculatrice) -> Self {
        let resultat = calc.rendu_resultat();
        Self {
            calc,
            expression: String::new(),
            resultat,
        }
    }

    pub fn mode(&self) -> Mode {
        self.calc.mode()
    }

    pub fn separateur(&self) -> char {
        self.calc.separateur()
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    /// Toute touche du clavier (chiffres, opérateurs, fonctions, C, DEL, mode).
    pub fn appuyer(&mut self, symbole: Symbole) {
        self.calc.soumettre(symbole);
        self.rafraichir();
    }

    /// "=" : évalue et affiche.
    pub fn egal(&mut self) {
        self.rafraichir();
    }

    fn rafraichir(&mut self) {
        self.expression = self.calc.rendu_expression();
        self.resultat = self.calc.evaluer().rendu(self.calc.separateur());
    }
}
