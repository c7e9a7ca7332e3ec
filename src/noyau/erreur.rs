//! Erreurs du noyau.
//!
//! - `Rejet` : insertion refusée par la saisie (tampon inchangé).
//! - `ErreurCalcul` : expression mal formée ou faute arithmétique à l’évaluation.
//!
//! Aucune des deux n’est fatale : la saisie journalise et continue,
//! le moteur journalise et garde le dernier résultat valide.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejet {
    #[error("un opérateur ne peut pas ouvrir l’expression ni suivre « ( »")]
    OperateurSansOperande,

    #[error("le nombre contient déjà un séparateur décimal")]
    SeparateurEnDouble,

    #[error("« {0} » n’est disponible qu’en mode scientifique")]
    ModeBasique(String),

    #[error("chiffre invalide: {0}")]
    ChiffreInvalide(u8),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalcul {
    #[error("expression vide")]
    ExpressionVide,

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseOrpheline,

    #[error("opérande manquant pour « {0} »")]
    OperandeManquant(String),

    #[error("{0} valeurs sans opérateur pour les relier")]
    RacinesMultiples(usize),

    #[error("littéral numérique invalide: {0:?}")]
    LitteralInvalide(String),

    #[error("division par zéro")]
    DivisionParZero,

    #[error("{fonction} hors domaine pour {valeur}")]
    HorsDomaine { fonction: &'static str, valeur: f64 },

    #[error("résultat non fini pour « {0} »")]
    ResultatNonFini(String),

    #[error("« {0} » demande le mode scientifique")]
    ModeScientifiqueRequis(String),

    #[error("expression trop imbriquée (profondeur > {0})")]
    TropImbriquee(usize),
}

impl ErreurCalcul {
    pub fn operande_manquant(symbole: impl Into<String>) -> Self {
        Self::OperandeManquant(symbole.into())
    }
}
