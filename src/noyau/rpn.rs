// src/noyau/rpn.rs
//
// Shunting-yard paresseux : unités du tampon -> jetons postfixes
// -------------------------------------------------------------
// Priorités :
//   + -      : 1
//   * /      : 2
//   ^        : 3 (mode scientifique)
//   f / neg  : 4 (empilées directement, jamais comparées à l’entrée)
//
// Associativité :
// - tout opérateur dépile tant que prio(entrant) <= prio(sommet)
// - "-" dépile seulement tant que prio(entrant) < prio(sommet)
//   => "^" se regroupe de gauche à droite, "a-b-c" se lit a-(b-c)
//
// Autres règles :
// - chiffres et séparateurs contigus => un seul littéral (radix '.')
// - "-" en tête, après "(" ou après un opérateur => moins unaire (Oppose)
// - ")" sans "(" => erreur ; "(" restées ouvertes en fin => fermées implicitement
// - en mode basique, ^ / fonctions / π => erreur (pas de repli silencieux)

use std::collections::VecDeque;
use std::iter::Peekable;
use std::slice;

use super::erreur::ErreurCalcul;
use super::jetons::{Fonction, Jeton, Operateur, Unite};
use super::mode::Mode;

/// Élément de la pile d’opérateurs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Empile {
    Ouvrante,
    Operateur(Operateur),
    Fonction(Fonction),
    Oppose,
}

impl Empile {
    fn priorite(self) -> u8 {
        match self {
            Empile::Ouvrante => 0,
            Empile::Operateur(op) => priorite_operateur(op),
            Empile::Fonction(_) | Empile::Oppose => 4,
        }
    }

    fn en_jeton(self) -> Option<Jeton> {
        match self {
            Empile::Ouvrante => None,
            Empile::Operateur(op) => Some(Jeton::Operateur(op)),
            Empile::Fonction(f) => Some(Jeton::Fonction(f)),
            Empile::Oppose => Some(Jeton::Oppose),
        }
    }
}

fn priorite_operateur(op: Operateur) -> u8 {
    match op {
        Operateur::Plus | Operateur::Moins => 1,
        Operateur::Fois | Operateur::Divise => 2,
        Operateur::Puissance => 3,
    }
}

/// Vrai si l’opérateur au sommet doit sortir avant d’empiler `entrant`.
fn doit_depiler(entrant: Operateur, sommet: Empile) -> bool {
    let (p_in, p_top) = (priorite_operateur(entrant), sommet.priorite());
    if entrant == Operateur::Moins {
        p_in < p_top
    } else {
        p_in <= p_top
    }
}

/// Convertit le tampon en postfixe, à la demande.
///
/// Exemple :
///   tampon  : 2 + 3 * 4
///   postfix : 2 3 4 * +
///
/// Tampon vide => séquence vide. Après la première erreur, l’itérateur s’arrête.
pub fn vers_postfixe(unites: &[Unite], mode: Mode) -> Postfixe<'_> {
    Postfixe {
        entree: unites.iter().peekable(),
        mode,
        pile: Vec::new(),
        pret: VecDeque::new(),
        attend_operande: true,
        fini: false,
    }
}

pub struct Postfixe<'a> {
    entree: Peekable<slice::Iter<'a, Unite>>,
    mode: Mode,
    pile: Vec<Empile>,
    pret: VecDeque<Jeton>,
    // vrai en tête, après "(" et après un opérateur : un "-" y est unaire
    attend_operande: bool,
    fini: bool,
}

impl Postfixe<'_> {
    fn exige_scientifique(&self, texte: &str) -> Result<(), ErreurCalcul> {
        if self.mode.est_scientifique() {
            Ok(())
        } else {
            Err(ErreurCalcul::ModeScientifiqueRequis(texte.to_string()))
        }
    }

    fn litteral(&mut self, premiere: Unite) -> Jeton {
        let mut texte = String::new();
        let mut u = Some(premiere);
        while let Some(unite) = u {
            match unite {
                Unite::Chiffre(d) => texte.push(char::from(b'0' + d)),
                Unite::Separateur => texte.push('.'),
                _ => break,
            }
            u = self.entree.next_if(|suiv| suiv.est_numerique()).copied();
        }
        Jeton::Nombre(texte)
    }

    fn consommer(&mut self, unite: Unite) -> Result<(), ErreurCalcul> {
        match unite {
            Unite::Chiffre(_) | Unite::Separateur => {
                let j = self.litteral(unite);
                self.pret.push_back(j);
                self.attend_operande = false;
            }

            Unite::Pi => {
                self.exige_scientifique("π")?;
                self.pret.push_back(Jeton::Pi);
                self.attend_operande = false;
            }

            Unite::Fonction(f) => {
                self.exige_scientifique(f.texte())?;
                self.pile.push(Empile::Fonction(f));
                self.attend_operande = true;
            }

            Unite::Ouvrante => {
                self.pile.push(Empile::Ouvrante);
                self.attend_operande = true;
            }

            Unite::Fermante => {
                loop {
                    match self.pile.pop() {
                        Some(Empile::Ouvrante) => break,
                        Some(e) => self.pret.extend(e.en_jeton()),
                        None => return Err(ErreurCalcul::ParentheseOrpheline),
                    }
                }
                self.attend_operande = false;
            }

            Unite::Operateur(Operateur::Moins) if self.attend_operande => {
                self.pile.push(Empile::Oppose);
            }

            Unite::Operateur(op) => {
                if op.est_scientifique() {
                    self.exige_scientifique(op.texte())?;
                }
                while let Some(&sommet) = self.pile.last() {
                    if sommet == Empile::Ouvrante || !doit_depiler(op, sommet) {
                        break;
                    }
                    self.pile.pop();
                    self.pret.extend(sommet.en_jeton());
                }
                self.pile.push(Empile::Operateur(op));
                self.attend_operande = true;
            }
        }
        Ok(())
    }

    fn vider_pile(&mut self) {
        while let Some(e) = self.pile.pop() {
            // "(" non refermée : fermeture implicite
            self.pret.extend(e.en_jeton());
        }
    }
}

impl Iterator for Postfixe<'_> {
    type Item = Result<Jeton, ErreurCalcul>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(j) = self.pret.pop_front() {
                return Some(Ok(j));
            }
            if self.fini {
                return None;
            }
            match self.entree.next() {
                Some(&unite) => {
                    if let Err(e) = self.consommer(unite) {
                        self.fini = true;
                        self.pret.clear();
                        return Some(Err(e));
                    }
                }
                None => {
                    self.vider_pile();
                    self.fini = true;
                }
            }
        }
    }
}
