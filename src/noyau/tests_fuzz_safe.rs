//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler la saisie et le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur / profondeur bornées
//! - budget temps global
//! - invariant clé : evaluer() rend soit le nouveau résultat, soit l’ancien intact

use std::time::{Duration, Instant};

use super::eval::evaluer_expression;
use super::jetons::unites_depuis;
use super::{Calculatrice, Fonction, Mode, Nombre, Operateur, Symbole};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Touches aléatoires ------------------------ */

fn touche(rng: &mut Rng) -> Symbole {
    match rng.pick(16) {
        0..=5 => Symbole::Chiffre(rng.pick(10) as u8),
        6 => Symbole::Operateur(Operateur::Plus),
        7 => Symbole::Operateur(Operateur::Moins),
        8 => Symbole::Operateur(Operateur::Fois),
        9 => Symbole::Operateur(Operateur::Divise),
        10 => Symbole::Operateur(Operateur::Puissance),
        11 => Symbole::Parenthese,
        12 => Symbole::Negation,
        13 => Symbole::Separateur,
        14 => match rng.pick(4) {
            0 => Symbole::Pi,
            1 => Symbole::BasculeMode,
            2 => Symbole::RetourArriere,
            _ => Symbole::Effacer,
        },
        _ => {
            let i = rng.pick(Fonction::TOUTES.len() as u32) as usize;
            Symbole::Fonction(Fonction::TOUTES[i])
        }
    }
}

#[test]
fn fuzz_touches_jamais_de_panique() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0x5eed_ca1c);

    for _ in 0..400 {
        budget(start, max);

        let mut c = Calculatrice::default();
        let n = 1 + rng.pick(40);

        for _ in 0..n {
            c.soumettre(touche(&mut rng));

            if rng.coin() {
                let texte = c.rendu_expression();
                let avant = c.dernier_resultat();
                let attendu = evaluer_expression(c.unites(), c.mode());

                let r = c.evaluer();

                assert_eq!(c.rendu_expression(), texte, "evaluer() a modifié le tampon");
                assert!(r.valeur().is_finite(), "{texte:?} => {r:?}");
                match attendu {
                    Ok(v) => assert_eq!(r, v, "{texte:?}"),
                    Err(_) => assert_eq!(r, avant, "{texte:?}"),
                }
            }
        }
    }
}

#[test]
fn fuzz_determinisme() {
    let jouer = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut c = Calculatrice::new(',', Mode::Scientifique);
        let mut trace = Vec::new();
        for _ in 0..200 {
            c.soumettre(touche(&mut rng));
            trace.push((c.rendu_expression(), c.evaluer()));
        }
        trace
    };
    assert_eq!(jouer(42), jouer(42));
}

/* ------------------------ Aller-retour infixe -> valeur ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let entier = rng.pick(100);
    match rng.pick(4) {
        0 => format!("{entier},5"),
        1 => format!("{entier},25"),
        _ => format!("{entier}"),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 || rng.pick(4) == 0 {
        return gen_nombre(rng);
    }
    match rng.pick(6) {
        0 => format!("({})", gen_expr(rng, depth - 1)),
        k => {
            let op = ["+", "-", "*", "/", "-"][(k - 1) as usize];
            format!(
                "{}{op}{}",
                gen_expr(rng, depth - 1),
                gen_expr(rng, depth - 1)
            )
        }
    }
}

/// Évaluateur de référence (descente récursive, indépendant du shunting-yard).
///
/// Grammaire (même regroupement que la calculatrice) :
///   somme   := chaine ('+' chaine)*          (gauche à droite)
///   chaine  := produit ('-' chaine)?         (a-b-c = a-(b-c))
///   produit := atome (('*' | '/') atome)*    (gauche à droite)
///   atome   := nombre | '(' somme ')'
/// `None` si une division par zéro est rencontrée.
struct Reference<'a> {
    s: &'a [u8],
    i: usize,
}

impl Reference<'_> {
    fn evaluer(texte: &str) -> Option<f64> {
        let mut r = Reference {
            s: texte.as_bytes(),
            i: 0,
        };
        let v = r.somme()?;
        assert_eq!(r.i, r.s.len(), "référence: reste non lu dans {texte:?}");
        Some(v)
    }

    fn voir(&self) -> Option<u8> {
        self.s.get(self.i).copied()
    }

    fn somme(&mut self) -> Option<f64> {
        let mut v = self.chaine()?;
        while self.voir() == Some(b'+') {
            self.i += 1;
            v += self.chaine()?;
        }
        Some(v)
    }

    fn chaine(&mut self) -> Option<f64> {
        let a = self.produit()?;
        if self.voir() == Some(b'-') {
            self.i += 1;
            let b = self.chaine()?;
            return Some(a - b);
        }
        Some(a)
    }

    fn produit(&mut self) -> Option<f64> {
        let mut v = self.atome()?;
        loop {
            match self.voir() {
                Some(b'*') => {
                    self.i += 1;
                    v *= self.atome()?;
                }
                Some(b'/') => {
                    self.i += 1;
                    let d = self.atome()?;
                    if d == 0.0 {
                        return None;
                    }
                    v /= d;
                }
                _ => return Some(v),
            }
        }
    }

    fn atome(&mut self) -> Option<f64> {
        if self.voir() == Some(b'(') {
            self.i += 1;
            let v = self.somme()?;
            assert_eq!(self.voir(), Some(b')'));
            self.i += 1;
            return Some(v);
        }
        let debut = self.i;
        while matches!(self.voir(), Some(b'0'..=b'9' | b',')) {
            self.i += 1;
        }
        let texte = std::str::from_utf8(&self.s[debut..self.i])
            .unwrap_or_default()
            .replace(',', ".");
        Some(texte.parse().unwrap_or_else(|_| panic!("référence: nombre {texte:?}")))
    }
}

#[test]
fn fuzz_aller_retour_contre_reference() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(20240611);

    let mut verifies = 0;
    for _ in 0..1500 {
        budget(start, max);

        let texte = gen_expr(&mut rng, 4);
        let unites = unites_depuis(&texte);
        let obtenu = evaluer_expression(&unites, Mode::Basique);

        match Reference::evaluer(&texte) {
            Some(v) => {
                assert_eq!(obtenu, Ok(Nombre::depuis_f64(v)), "expr={texte:?}");
                verifies += 1;
            }
            None => assert!(obtenu.is_err(), "expr={texte:?} devait échouer"),
        }
    }
    assert!(verifies > 1000, "trop peu de cas vérifiés: {verifies}");
}

#[test]
fn reference_sanity() {
    assert_eq!(Reference::evaluer("2+3*4"), Some(14.0));
    assert_eq!(Reference::evaluer("(2+3)*4"), Some(20.0));
    assert_eq!(Reference::evaluer("10-4-1"), Some(7.0));
    assert_eq!(Reference::evaluer("1+2-3-4"), Some(1.0 + (2.0 - (3.0 - 4.0))));
    assert_eq!(Reference::evaluer("1/0"), None);
}
