// src/noyau/saisie.rs
//
// Saisie incrémentale (tampon d’expression)
// -----------------------------------------
// Règles d’insertion, par symbole entrant, selon la dernière unité du tampon :
// - ( )   : "(" si rien / non-chiffre ; "*(" après un chiffre sans "(" ouverte ;
//           ")" après un chiffre s’il reste une "(" ouverte
// - π     : "*π" après ")" ou chiffre, sinon "π"
// - f     : "*f(" après ")" ou chiffre, sinon "f("
// - +/-   : après un chiffre, "-(" glissé devant le nombre courant (jamais refermé) ;
//           "-" après "(" ; "(-" sinon
// - ,     : refusé si le nombre courant a déjà un séparateur ; "0," si pas de chiffre
//           avant (le tampon repart de "0,")
// - 0..9  : "*d" après ")", sinon "d"
// - op    : refusé en tête ou après "(" ; remplace un opérateur final ; sinon ajouté
//
// Invariant : le tampon est toujours le préfixe d’une expression bien formée
// (les parenthèses peuvent rester ouvertes pendant l’édition).

use tracing::warn;

use super::erreur::Rejet;
use super::jetons::{rendre, Operateur, Symbole, Unite};
use super::mode::Mode;

/// Issue d’une insertion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Insertion {
    Acceptee,
    Rejetee(Rejet),
}

impl Insertion {
    pub fn est_acceptee(&self) -> bool {
        matches!(self, Insertion::Acceptee)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Saisie {
    unites: Vec<Unite>,
}

impl Saisie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unites(&self) -> &[Unite] {
        &self.unites
    }

    pub fn est_vide(&self) -> bool {
        self.unites.is_empty()
    }

    pub fn rendu(&self, separateur: char) -> String {
        rendre(&self.unites, separateur)
    }

    pub fn effacer(&mut self) {
        self.unites.clear();
    }

    pub fn retour_arriere(&mut self) {
        self.unites.pop();
    }

    fn derniere(&self) -> Option<Unite> {
        self.unites.last().copied()
    }

    /// Nombre de "(" moins nombre de ")" sur tout le tampon.
    fn parentheses_ouvertes(&self) -> isize {
        self.unites.iter().fold(0, |n, u| match u {
            Unite::Ouvrante => n + 1,
            Unite::Fermante => n - 1,
            _ => n,
        })
    }

    /// Indice du début de la série finale de chiffres/séparateurs.
    fn debut_nombre(&self) -> usize {
        self.unites
            .iter()
            .rposition(|u| !u.est_numerique())
            .map_or(0, |i| i + 1)
    }

    fn nombre_a_separateur(&self) -> bool {
        self.unites[self.debut_nombre()..]
            .iter()
            .any(|u| matches!(u, Unite::Separateur))
    }

    fn ajouter(&mut self, unites: &[Unite]) {
        self.unites.extend_from_slice(unites);
    }

    /// Applique un symbole au tampon. Ne panique jamais :
    /// une insertion invalide est journalisée et le tampon reste intact.
    /// L’acceptation est journalisée par la façade (elle connaît le séparateur).
    pub fn inserer(&mut self, symbole: Symbole, mode: Mode) -> Insertion {
        match self.appliquer(symbole, mode) {
            Ok(()) => Insertion::Acceptee,
            Err(rejet) => {
                warn!(%symbole, cause = %rejet, "saisie rejetée : l’expression deviendrait invalide");
                Insertion::Rejetee(rejet)
            }
        }
    }

    fn appliquer(&mut self, symbole: Symbole, mode: Mode) -> Result<(), Rejet> {
        if symbole.est_scientifique() && !mode.est_scientifique() {
            return Err(Rejet::ModeBasique(symbole.to_string()));
        }

        let derniere = self.derniere();
        let apres_valeur = matches!(derniere, Some(Unite::Chiffre(_) | Unite::Fermante));

        match symbole {
            Symbole::Parenthese => match derniere {
                Some(Unite::Chiffre(_)) if self.parentheses_ouvertes() > 0 => {
                    self.ajouter(&[Unite::Fermante])
                }
                Some(Unite::Chiffre(_)) => {
                    self.ajouter(&[Unite::Operateur(Operateur::Fois), Unite::Ouvrante])
                }
                _ => self.ajouter(&[Unite::Ouvrante]),
            },

            Symbole::Pi => {
                if apres_valeur {
                    self.ajouter(&[Unite::Operateur(Operateur::Fois), Unite::Pi]);
                } else {
                    self.ajouter(&[Unite::Pi]);
                }
            }

            Symbole::Fonction(f) => {
                if apres_valeur {
                    self.ajouter(&[Unite::Operateur(Operateur::Fois)]);
                }
                self.ajouter(&[Unite::Fonction(f), Unite::Ouvrante]);
            }

            Symbole::Negation => match derniere {
                Some(Unite::Chiffre(_)) => {
                    let debut = self.debut_nombre();
                    self.unites.insert(debut, Unite::Ouvrante);
                    self.unites.insert(debut, Unite::Operateur(Operateur::Moins));
                }
                Some(Unite::Ouvrante) => self.ajouter(&[Unite::Operateur(Operateur::Moins)]),
                _ => self.ajouter(&[Unite::Ouvrante, Unite::Operateur(Operateur::Moins)]),
            },

            Symbole::Separateur => match derniere {
                Some(Unite::Chiffre(_)) if self.nombre_a_separateur() => {
                    return Err(Rejet::SeparateurEnDouble);
                }
                Some(Unite::Chiffre(_)) => self.ajouter(&[Unite::Separateur]),
                _ => {
                    self.unites.clear();
                    self.ajouter(&[Unite::Chiffre(0), Unite::Separateur]);
                }
            },

            Symbole::Chiffre(d) => {
                if d > 9 {
                    return Err(Rejet::ChiffreInvalide(d));
                }
                if derniere == Some(Unite::Fermante) {
                    self.ajouter(&[Unite::Operateur(Operateur::Fois)]);
                }
                self.ajouter(&[Unite::Chiffre(d)]);
            }

            Symbole::Operateur(op) => match derniere {
                None | Some(Unite::Ouvrante) => return Err(Rejet::OperateurSansOperande),
                Some(Unite::Operateur(_)) => {
                    if let Some(fin) = self.unites.last_mut() {
                        *fin = Unite::Operateur(op);
                    }
                }
                Some(_) => self.ajouter(&[Unite::Operateur(op)]),
            },

            Symbole::Effacer => self.effacer(),
            Symbole::RetourArriere => self.retour_arriere(),

            // Le mode appartient au moteur : rien à faire sur le tampon.
            Symbole::BasculeMode => {}
        }

        Ok(())
    }
}
