// src/noyau/moteur.rs
//
// Façade du noyau (seule surface vue par l’UI)
// --------------------------------------------
// - soumettre(symbole)  : tampon et/ou mode modifiés, ou rejet journalisé
// - retour_arriere / effacer / basculer_mode
// - rendu_expression / rendu_resultat : les deux textes affichés
// - evaluer()           : ne remonte jamais d’erreur ; en cas d’échec,
//                         journalise et rend le dernier résultat valide
//
// Mono-thread, synchrone : l’UI sérialise les événements.

use tracing::{debug, info, warn};

use super::eval::{evaluer_expression, Nombre};
use super::jetons::{Symbole, Unite};
use super::mode::Mode;
use super::saisie::{Insertion, Saisie};

/// Séparateur décimal par défaut.
pub const SEPARATEUR_DEFAUT: char = ',';

#[derive(Clone, Debug)]
pub struct Calculatrice {
    saisie: Saisie,
    mode: Mode,
    dernier: Nombre,
    separateur: char,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::new(SEPARATEUR_DEFAUT, Mode::Basique)
    }
}

impl Calculatrice {
    pub fn new(separateur: char, mode: Mode) -> Self {
        Self {
            saisie: Saisie::new(),
            mode,
            dernier: Nombre::default(),
            separateur,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn separateur(&self) -> char {
        self.separateur
    }

    pub fn unites(&self) -> &[Unite] {
        self.saisie.unites()
    }

    /// Envoie une touche. Les actions pures (mode, C, DEL) passent aussi par ici.
    pub fn soumettre(&mut self, symbole: Symbole) -> Insertion {
        if symbole == Symbole::BasculeMode {
            self.basculer_mode();
            return Insertion::Acceptee;
        }
        let issue = self.saisie.inserer(symbole, self.mode);
        if issue.est_acceptee() {
            debug!(%symbole, tampon = %self.rendu_expression(), "symbole accepté");
        }
        issue
    }

    pub fn retour_arriere(&mut self) {
        self.saisie.retour_arriere();
    }

    /// Vide le tampon ; le mode est conservé.
    pub fn effacer(&mut self) {
        self.saisie.effacer();
    }

    pub fn basculer_mode(&mut self) {
        self.mode = self.mode.bascule();
        info!(mode = self.mode.libelle(), "mode basculé");
    }

    pub fn rendu_expression(&self) -> String {
        self.saisie.rendu(self.separateur)
    }

    pub fn dernier_resultat(&self) -> Nombre {
        self.dernier
    }

    pub fn rendu_resultat(&self) -> String {
        self.dernier.rendu(self.separateur)
    }

    /// Tampon vide => 0. Échec => dernier résultat valide, inchangé.
    pub fn evaluer(&mut self) -> Nombre {
        match evaluer_expression(self.saisie.unites(), self.mode) {
            Ok(n) => {
                debug!(expression = %self.rendu_expression(), resultat = %n, "évaluation");
                self.dernier = n;
            }
            Err(e) => {
                warn!(
                    expression = %self.rendu_expression(),
                    cause = %e,
                    "impossible de calculer le résultat : expression mal formée"
                );
            }
        }
        self.dernier
    }
}
