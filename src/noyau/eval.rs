//! Noyau — évaluation (pipeline réel)
//!
//! tampon -> postfixe (paresseux) -> arbre -> f64 -> Nombre
//!
//! Remarques :
//! - sin/cos/tan prennent des degrés
//! - division par zéro, hors domaine (√ négatif, log/ln ≤ 0) et résultat non fini
//!   sont des erreurs, jamais un ∞ ou un NaN silencieux
//! - l’arbre ne connaît pas le mode : le parseur a déjà filtré

use std::fmt;

use tracing::debug;

use super::arbre::{construire, Appel, Feuille, Noeud};
use super::erreur::ErreurCalcul;
use super::jetons::{format_jetons, Fonction, Operateur, Unite};
use super::mode::Mode;
use super::rpn::vers_postfixe;

/// Résultat normalisé pour l’affichage (la précision interne reste f64).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nombre {
    Entier(i64),
    Reel(f64),
}

impl Default for Nombre {
    fn default() -> Self {
        Nombre::Entier(0)
    }
}

// 2^63 : au-delà, i64 ne représente plus la valeur
const BORNE_ENTIER: f64 = 9_223_372_036_854_775_808.0;

impl Nombre {
    /// Entier si la valeur n’a pas de partie fractionnaire (et tient dans i64).
    pub fn depuis_f64(v: f64) -> Nombre {
        if v.is_finite() && v.fract() == 0.0 && v.abs() < BORNE_ENTIER {
            Nombre::Entier(v as i64)
        } else {
            Nombre::Reel(v)
        }
    }

    pub fn valeur(self) -> f64 {
        match self {
            Nombre::Entier(n) => n as f64,
            Nombre::Reel(v) => v,
        }
    }

    /// Texte affiché, avec le séparateur décimal configuré.
    pub fn rendu(self, separateur: char) -> String {
        let brut = self.to_string();
        if separateur == '.' {
            brut
        } else {
            brut.replace('.', &separateur.to_string())
        }
    }
}

impl fmt::Display for Nombre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Nombre::Entier(n) => write!(f, "{n}"),
            Nombre::Reel(v) if v != 0.0 && (v.abs() >= 1e16 || v.abs() < 1e-9) => {
                write!(f, "{v:e}")
            }
            Nombre::Reel(v) => write!(f, "{v}"),
        }
    }
}

/// Pipeline complet sur un tampon. Tampon vide => 0.
pub fn evaluer_expression(unites: &[Unite], mode: Mode) -> Result<Nombre, ErreurCalcul> {
    if unites.is_empty() {
        return Ok(Nombre::Entier(0));
    }

    // Postfixe relevé au fil de la consommation (l’itérateur reste paresseux).
    let mut lus = Vec::new();
    let arbre = construire(vers_postfixe(unites, mode).inspect(|jeton| {
        if let Ok(jeton) = jeton {
            lus.push(jeton.clone());
        }
    }));
    debug!(postfixe = %format_jetons(&lus), "postfixe lu");

    let arbre = arbre?;
    debug!(arbre = %arbre, "arbre construit");

    evaluer_noeud(&arbre).map(Nombre::depuis_f64)
}

/// Réduction récursive : feuille / unaire / binaire.
pub fn evaluer_noeud(noeud: &Noeud) -> Result<f64, ErreurCalcul> {
    let v = match noeud {
        Noeud::Feuille(Feuille::Pi) => std::f64::consts::PI,
        Noeud::Feuille(Feuille::Nombre(n)) => n
            .parse::<f64>()
            .map_err(|_| ErreurCalcul::LitteralInvalide(n.clone()))?,

        Noeud::Unaire(appel, x) => appliquer(*appel, evaluer_noeud(x)?)?,

        Noeud::Binaire(op, a, b) => {
            let gauche = evaluer_noeud(a)?;
            let droit = evaluer_noeud(b)?;
            operer(*op, gauche, droit)?
        }
    };

    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurCalcul::ResultatNonFini(noeud.to_string()))
    }
}

fn appliquer(appel: Appel, x: f64) -> Result<f64, ErreurCalcul> {
    let fonction = match appel {
        Appel::Oppose => return Ok(-x),
        Appel::Fonction(f) => f,
    };

    let hors_domaine = || ErreurCalcul::HorsDomaine {
        fonction: fonction.texte(),
        valeur: x,
    };

    let v = match fonction {
        Fonction::Sin => x.to_radians().sin(),
        Fonction::Cos => x.to_radians().cos(),
        Fonction::Tan => x.to_radians().tan(),
        Fonction::Racine if x < 0.0 => return Err(hors_domaine()),
        Fonction::Racine => x.sqrt(),
        Fonction::Log | Fonction::Ln if x <= 0.0 => return Err(hors_domaine()),
        Fonction::Log => x.log10(),
        Fonction::Ln => x.ln(),
        Fonction::Exp => x.exp(),
    };
    Ok(v)
}

fn operer(op: Operateur, gauche: f64, droit: f64) -> Result<f64, ErreurCalcul> {
    let v = match op {
        Operateur::Plus => gauche + droit,
        Operateur::Moins => gauche - droit,
        Operateur::Fois => gauche * droit,
        Operateur::Divise if droit == 0.0 => return Err(ErreurCalcul::DivisionParZero),
        Operateur::Divise => gauche / droit,
        Operateur::Puissance => gauche.powf(droit),
    };
    Ok(v)
}
