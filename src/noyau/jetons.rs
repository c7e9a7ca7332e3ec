// src/noyau/jetons.rs
//
// Vocabulaire fermé de la calculatrice
// ------------------------------------
// - Symbole : ce que l’utilisateur envoie (touche du clavier)
// - Unite   : ce qui reste réellement dans le tampon d’expression
// - Jeton   : ce que le parseur produit en postfixe (nombres regroupés)
//
// Les actions (parenthèse, +/-, mode, C, DEL) ne laissent jamais de trace
// littérale : elles réécrivent le tampon en unités.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance, // mode scientifique seulement
}

impl Operateur {
    pub fn texte(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "*",
            Operateur::Divise => "/",
            Operateur::Puissance => "^",
        }
    }

    pub fn est_scientifique(self) -> bool {
        matches!(self, Operateur::Puissance)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Racine,
    Log,
    Ln,
    Exp,
}

impl Fonction {
    /// Ordre d’affichage sur la rangée scientifique.
    pub const TOUTES: [Fonction; 7] = [
        Fonction::Sin,
        Fonction::Cos,
        Fonction::Tan,
        Fonction::Racine,
        Fonction::Log,
        Fonction::Ln,
        Fonction::Exp,
    ];

    /// Texte inséré dans le tampon (suivi de "(").
    pub fn texte(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Racine => "√",
            Fonction::Log => "log",
            Fonction::Ln => "ln",
            Fonction::Exp => "exp",
        }
    }

    /// Libellé de touche (peut différer du texte inséré).
    pub fn libelle(self) -> &'static str {
        match self {
            Fonction::Exp => "e^x",
            autre => autre.texte(),
        }
    }
}

/// Touche envoyée au moteur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbole {
    Chiffre(u8),
    Operateur(Operateur),
    Separateur,
    Parenthese,
    Negation,
    Fonction(Fonction),
    Pi,
    BasculeMode,
    Effacer,
    RetourArriere,
}

impl Symbole {
    /// Vrai pour le jeu étendu (^, fonctions, π) : refusé en mode basique.
    pub fn est_scientifique(self) -> bool {
        match self {
            Symbole::Operateur(op) => op.est_scientifique(),
            Symbole::Fonction(_) | Symbole::Pi => true,
            _ => false,
        }
    }

    /// Clavier physique -> symbole.
    /// `.` est toujours accepté en plus du séparateur configuré.
    pub fn depuis_touche(c: char, separateur: char) -> Option<Symbole> {
        let s = match c {
            '0'..='9' => Symbole::Chiffre(c as u8 - b'0'),
            '+' => Symbole::Operateur(Operateur::Plus),
            '-' => Symbole::Operateur(Operateur::Moins),
            '*' => Symbole::Operateur(Operateur::Fois),
            '/' => Symbole::Operateur(Operateur::Divise),
            '^' => Symbole::Operateur(Operateur::Puissance),
            '(' | ')' => Symbole::Parenthese,
            'π' => Symbole::Pi,
            c if c == separateur || c == '.' => Symbole::Separateur,
            _ => return None,
        };
        Some(s)
    }
}

impl fmt::Display for Symbole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbole::Chiffre(d) => write!(f, "{d}"),
            Symbole::Operateur(op) => f.write_str(op.texte()),
            Symbole::Separateur => f.write_str(","),
            Symbole::Parenthese => f.write_str("( )"),
            Symbole::Negation => f.write_str("+/-"),
            Symbole::Fonction(fun) => f.write_str(fun.libelle()),
            Symbole::Pi => f.write_str("π"),
            Symbole::BasculeMode => f.write_str("Sci"),
            Symbole::Effacer => f.write_str("C"),
            Symbole::RetourArriere => f.write_str("DEL"),
        }
    }
}

/// Unité atomique du tampon d’expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unite {
    Chiffre(u8),
    Separateur,
    Operateur(Operateur),
    Ouvrante,
    Fermante,
    Fonction(Fonction),
    Pi,
}

impl Unite {
    /// Chiffre ou séparateur : fait partie d’un littéral numérique.
    pub fn est_numerique(self) -> bool {
        matches!(self, Unite::Chiffre(_) | Unite::Separateur)
    }

    fn ecrire(self, separateur: char, out: &mut String) {
        match self {
            Unite::Chiffre(d) => out.push(char::from(b'0' + d)),
            Unite::Separateur => out.push(separateur),
            Unite::Operateur(op) => out.push_str(op.texte()),
            Unite::Ouvrante => out.push('('),
            Unite::Fermante => out.push(')'),
            Unite::Fonction(f) => out.push_str(f.texte()),
            Unite::Pi => out.push('π'),
        }
    }
}

/// Concaténation des unités, dans l’ordre d’insertion.
pub fn rendre(unites: &[Unite], separateur: char) -> String {
    let mut out = String::with_capacity(unites.len());
    for u in unites {
        u.ecrire(separateur, &mut out);
    }
    out
}

/// Jeton postfixe (sortie du parseur, entrée du constructeur d’arbre).
#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    /// Littéral regroupé, radix déjà normalisé en '.'.
    Nombre(String),
    Pi,
    Operateur(Operateur),
    Fonction(Fonction),
    /// Moins unaire réécrit (ex: "(-5" ou "-(3").
    Oppose,
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Nombre(n) => f.write_str(n),
            Jeton::Pi => f.write_str("π"),
            Jeton::Operateur(op) => f.write_str(op.texte()),
            Jeton::Fonction(fun) => f.write_str(fun.texte()),
            Jeton::Oppose => f.write_str("neg"),
        }
    }
}

/// Postfixe lisible (journal, tests) : jetons séparés par des espaces.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Mini-lecteur de tampon pour les tests ("sin" / "√" / "π" reconnus).
#[cfg(test)]
pub(crate) fn unites_depuis(s: &str) -> Vec<Unite> {
    let mut out = Vec::new();
    let mut reste = s;
    while let Some(c) = reste.chars().next() {
        if let Some(f) = Fonction::TOUTES.iter().find(|f| reste.starts_with(f.texte())) {
            out.push(Unite::Fonction(*f));
            reste = &reste[f.texte().len()..];
            continue;
        }
        out.push(match c {
            '0'..='9' => Unite::Chiffre(c as u8 - b'0'),
            ',' => Unite::Separateur,
            '+' => Unite::Operateur(Operateur::Plus),
            '-' => Unite::Operateur(Operateur::Moins),
            '*' => Unite::Operateur(Operateur::Fois),
            '/' => Unite::Operateur(Operateur::Divise),
            '^' => Unite::Operateur(Operateur::Puissance),
            '(' => Unite::Ouvrante,
            ')' => Unite::Fermante,
            'π' => Unite::Pi,
            autre => panic!("caractère de test inattendu: {autre:?}"),
        });
        reste = &reste[c.len_utf8()..];
    }
    out
}
