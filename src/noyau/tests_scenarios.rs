//! Scénarios de bout en bout : uniquement via la façade (touches -> textes affichés).
//!
//! Chaque test rejoue une suite de touches telle qu’un utilisateur la taperait,
//! puis vérifie le texte de l’expression et/ou le résultat.

use super::erreur::Rejet;
use super::{Calculatrice, Fonction, Insertion, Mode, Nombre, Operateur, Symbole};

const PLUS: Symbole = Symbole::Operateur(Operateur::Plus);
const MOINS: Symbole = Symbole::Operateur(Operateur::Moins);
const FOIS: Symbole = Symbole::Operateur(Operateur::Fois);
const DIVISE: Symbole = Symbole::Operateur(Operateur::Divise);

fn d(n: u8) -> Symbole {
    Symbole::Chiffre(n)
}

fn taper(c: &mut Calculatrice, touches: &[Symbole]) {
    for &t in touches {
        c.soumettre(t);
    }
}

fn calc(touches: &[Symbole]) -> Calculatrice {
    let mut c = Calculatrice::default();
    taper(&mut c, touches);
    c
}

fn scientifique(touches: &[Symbole]) -> Calculatrice {
    let mut c = Calculatrice::new(',', Mode::Scientifique);
    taper(&mut c, touches);
    c
}

/* ------------------------ Scénarios concrets ------------------------ */

#[test]
fn scenario_priorite_multiplication() {
    let mut c = calc(&[d(2), PLUS, d(3), FOIS, d(4)]);
    assert_eq!(c.rendu_expression(), "2+3*4");
    assert_eq!(c.evaluer(), Nombre::Entier(14));
}

#[test]
fn scenario_parentheses_par_action() {
    let p = Symbole::Parenthese;
    let mut c = calc(&[p, d(2), PLUS, d(3), p, FOIS, d(4)]);
    assert_eq!(c.rendu_expression(), "(2+3)*4");
    assert_eq!(c.evaluer(), Nombre::Entier(20));
}

#[test]
fn scenario_decimal_entier() {
    let mut c = calc(&[d(5), Symbole::Separateur, d(0)]);
    assert_eq!(c.rendu_expression(), "5,0");
    assert_eq!(c.evaluer(), Nombre::Entier(5));
    assert_eq!(c.rendu_resultat(), "5");
}

#[test]
fn scenario_division_par_zero_rend_le_precedent() {
    let mut c = calc(&[d(4), DIVISE, d(0)]);
    assert_eq!(c.evaluer(), Nombre::Entier(0));
}

#[test]
fn scenario_sinus_en_degres() {
    let mut c = scientifique(&[
        Symbole::Fonction(Fonction::Sin),
        d(9),
        d(0),
        Symbole::Parenthese,
    ]);
    assert_eq!(c.rendu_expression(), "sin(90)");
    assert!((c.evaluer().valeur() - 1.0).abs() < 1e-12);
}

#[test]
fn scenario_bascule_sans_toucher_au_tampon() {
    let mut c = scientifique(&[d(2), FOIS, Symbole::Pi, PLUS, d(1)]);
    let avant = c.rendu_expression();
    c.soumettre(Symbole::BasculeMode);
    assert_eq!(c.rendu_expression(), avant);
    c.basculer_mode();
    assert_eq!(c.rendu_expression(), avant);
}

/* ------------------------ Propriétés ------------------------ */

#[test]
fn chiffres_seuls_concatenes() {
    let suites: [&[u8]; 4] = [&[0], &[1, 2, 3], &[9, 0, 0, 9, 1], &[0, 0, 7]];
    for suite in suites {
        let touches: Vec<Symbole> = suite.iter().map(|&n| d(n)).collect();
        let attendu: String = suite.iter().map(|n| n.to_string()).collect();
        assert_eq!(calc(&touches).rendu_expression(), attendu);
    }
}

#[test]
fn operateur_apres_operateur_remplace() {
    for (premier, second) in [(PLUS, MOINS), (MOINS, FOIS), (FOIS, DIVISE), (DIVISE, PLUS)] {
        let mut c = calc(&[d(8), premier]);
        let longueur = c.unites().len();
        assert!(c.soumettre(second).est_acceptee());
        assert_eq!(c.unites().len(), longueur);
        assert_eq!(c.rendu_expression(), format!("8{second}"));
    }
}

#[test]
fn chiffre_apres_fermante_toujours_multiplie() {
    let p = Symbole::Parenthese;
    for n in 0..=9 {
        let c = calc(&[p, d(1), PLUS, d(1), p, d(n)]);
        assert_eq!(c.rendu_expression(), format!("(1+1)*{n}"));
    }
}

#[test]
fn evaluer_sur_tampon_vide() {
    assert_eq!(Calculatrice::default().evaluer(), Nombre::Entier(0));
}

#[test]
fn separateur_deux_fois_dans_un_litteral() {
    let mut c = calc(&[d(3), Symbole::Separateur, d(1), d(4)]);
    assert_eq!(
        c.soumettre(Symbole::Separateur),
        Insertion::Rejetee(Rejet::SeparateurEnDouble)
    );
    assert_eq!(c.rendu_expression(), "3,14");
}

/* ------------------------ Négation (parenthèse jamais refermée) ------------------------ */

#[test]
fn negation_laisse_la_parenthese_ouverte() {
    let mut c = calc(&[d(3), PLUS, d(4), Symbole::Negation]);
    assert_eq!(c.rendu_expression(), "3+-(4");
    // la "(" ouverte est fermée implicitement à l’évaluation
    assert_eq!(c.evaluer(), Nombre::Entier(-1));

    // une action parenthèse referme la négation
    c.soumettre(Symbole::Parenthese);
    assert_eq!(c.rendu_expression(), "3+-(4)");
    assert_eq!(c.evaluer(), Nombre::Entier(-1));
}

#[test]
fn negation_puis_suite_de_l_expression() {
    // tout ce qui suit reste sous le "-(" : 5*-(2+1 = 5*-(3)
    let mut c = calc(&[d(5), FOIS, d(2), Symbole::Negation, PLUS, d(1)]);
    assert_eq!(c.rendu_expression(), "5*-(2+1");
    assert_eq!(c.evaluer(), Nombre::Entier(-15));
}

#[test]
fn negation_sur_tampon_vide() {
    let mut c = calc(&[Symbole::Negation, d(8)]);
    assert_eq!(c.rendu_expression(), "(-8");
    assert_eq!(c.evaluer(), Nombre::Entier(-8));
}

/* ------------------------ Divers ------------------------ */

#[test]
fn separateur_sans_chiffre_repart_de_zero_virgule() {
    let mut c = calc(&[d(7), PLUS, Symbole::Separateur, d(5)]);
    assert_eq!(c.rendu_expression(), "0,5");
    assert_eq!(c.evaluer(), Nombre::Reel(0.5));
    assert_eq!(c.rendu_resultat(), "0,5");
}

#[test]
fn expression_incomplete_garde_le_precedent() {
    let mut c = calc(&[d(1), d(2), PLUS, d(3)]);
    assert_eq!(c.evaluer(), Nombre::Entier(15));
    c.soumettre(FOIS);
    assert_eq!(c.evaluer(), Nombre::Entier(15));
    c.soumettre(d(2));
    assert_eq!(c.evaluer(), Nombre::Entier(18));
}

#[test]
fn soustractions_enchainees() {
    // groupement a-(b-c) conservé
    let mut c = calc(&[d(9), MOINS, d(5), MOINS, d(2)]);
    assert_eq!(c.evaluer(), Nombre::Entier(6));
}

#[test]
fn puissance_enchainee_gauche_a_droite() {
    let pow = Symbole::Operateur(Operateur::Puissance);
    let mut c = scientifique(&[d(2), pow, d(2), pow, d(3)]);
    assert_eq!(c.evaluer(), Nombre::Entier(64));
}

#[test]
fn multiplication_implicite_fonctions_et_pi() {
    let mut c = scientifique(&[d(2), Symbole::Pi]);
    assert_eq!(c.rendu_expression(), "2*π");
    assert!((c.evaluer().valeur() - std::f64::consts::TAU).abs() < 1e-12);

    let mut c = scientifique(&[
        d(3),
        Symbole::Fonction(Fonction::Racine),
        d(1),
        d(6),
        Symbole::Parenthese,
    ]);
    assert_eq!(c.rendu_expression(), "3*√(16)");
    assert_eq!(c.evaluer(), Nombre::Entier(12));
}

#[test]
fn retour_arriere_puis_reevaluation() {
    let mut c = calc(&[d(4), d(2), DIVISE, d(0)]);
    assert_eq!(c.evaluer(), Nombre::Entier(0));
    c.retour_arriere();
    c.soumettre(d(6));
    assert_eq!(c.evaluer(), Nombre::Entier(7));
}
