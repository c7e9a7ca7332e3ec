// src/noyau/arbre.rs
//
// Postfixe -> arbre binaire d’expression
// --------------------------------------
// - Feuille  : littéral numérique ou π (aucun enfant)
// - Unaire   : fonction ou moins unaire, un seul enfant (le “droit”)
// - Binaire  : opérateur, enfants gauche/droit dans l’ordre du texte source
//
// Enfants possédés par le parent (Box) : pas de partage, pas de cycle.
// L’arbre est reconstruit à chaque évaluation puis jeté.
// Profondeur bornée (PROFONDEUR_MAX) : évaluation et affichage sont récursifs.

use std::fmt;

use super::erreur::ErreurCalcul;
use super::jetons::{Fonction, Jeton, Operateur};

#[derive(Clone, Debug, PartialEq)]
pub enum Feuille {
    /// Radix '.' (déjà normalisé par le parseur).
    Nombre(String),
    Pi,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Appel {
    Fonction(Fonction),
    Oppose,
}

impl Appel {
    pub fn texte(self) -> &'static str {
        match self {
            Appel::Fonction(f) => f.texte(),
            Appel::Oppose => "-",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Noeud {
    Feuille(Feuille),
    Unaire(Appel, Box<Noeud>),
    Binaire(Operateur, Box<Noeud>, Box<Noeud>),
}

impl Noeud {
    pub fn arite(&self) -> usize {
        match self {
            Noeud::Feuille(_) => 0,
            Noeud::Unaire(..) => 1,
            Noeud::Binaire(..) => 2,
        }
    }
}

/// Forme infixe entièrement parenthésée (journal / tests).
impl fmt::Display for Noeud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Noeud::Feuille(Feuille::Nombre(n)) => f.write_str(n),
            Noeud::Feuille(Feuille::Pi) => f.write_str("π"),
            Noeud::Unaire(appel, x) => write!(f, "{}({x})", appel.texte()),
            Noeud::Binaire(op, a, b) => write!(f, "({a} {} {b})", op.texte()),
        }
    }
}

/// Profondeur maximale d’un arbre (feuille = 1).
///
/// Atteignable à la main : chaque "+/-" ajoute un niveau ("(-(-(-3").
pub const PROFONDEUR_MAX: usize = 256;

/// Construit l’arbre en consommant le postfixe (pile explicite).
///
/// Pour `a b op`, le premier dépilé est `b` (opérande droit), le second `a` :
/// le noeud vaut `a op b`.
pub fn construire<I>(postfixe: I) -> Result<Noeud, ErreurCalcul>
where
    I: IntoIterator<Item = Result<Jeton, ErreurCalcul>>,
{
    // (noeud, profondeur)
    let mut pile: Vec<(Noeud, usize)> = Vec::new();

    for jeton in postfixe {
        let (noeud, profondeur) = match jeton? {
            Jeton::Nombre(n) => (Noeud::Feuille(Feuille::Nombre(n)), 1),
            Jeton::Pi => (Noeud::Feuille(Feuille::Pi), 1),

            Jeton::Fonction(fun) => {
                let (x, p) = pile
                    .pop()
                    .ok_or_else(|| ErreurCalcul::operande_manquant(fun.texte()))?;
                (Noeud::Unaire(Appel::Fonction(fun), Box::new(x)), p + 1)
            }

            Jeton::Oppose => {
                let (x, p) = pile
                    .pop()
                    .ok_or_else(|| ErreurCalcul::operande_manquant("-"))?;
                (Noeud::Unaire(Appel::Oppose, Box::new(x)), p + 1)
            }

            Jeton::Operateur(op) => {
                let (droit, pd) = pile
                    .pop()
                    .ok_or_else(|| ErreurCalcul::operande_manquant(op.texte()))?;
                let (gauche, pg) = pile
                    .pop()
                    .ok_or_else(|| ErreurCalcul::operande_manquant(op.texte()))?;
                (
                    Noeud::Binaire(op, Box::new(gauche), Box::new(droit)),
                    pg.max(pd) + 1,
                )
            }
        };

        if profondeur > PROFONDEUR_MAX {
            return Err(ErreurCalcul::TropImbriquee(PROFONDEUR_MAX));
        }
        pile.push((noeud, profondeur));
    }

    match pile.len() {
        0 => Err(ErreurCalcul::ExpressionVide),
        1 => pile
            .pop()
            .map(|(noeud, _)| noeud)
            .ok_or(ErreurCalcul::ExpressionVide),
        n => Err(ErreurCalcul::RacinesMultiples(n)),
    }
}
