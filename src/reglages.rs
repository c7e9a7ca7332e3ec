//! Réglages de la calculatrice
//!
//! Priorité (de la plus faible à la plus forte) :
//! 1. valeurs par défaut
//! 2. fichier `calculatrice.toml` du répertoire courant (optionnel)
//! 3. variables d’environnement `CALC_*` (ex: `CALC_SEPARATEUR_DECIMAL=.`)

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::noyau::moteur::SEPARATEUR_DEFAUT;
use crate::noyau::Mode;

/// Fichier de réglages optionnel.
pub const FICHIER: &str = "calculatrice.toml";

/// Préfixe des variables d’environnement.
pub const PREFIXE_ENV: &str = "CALC_";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Reglages {
    /// Unique séparateur décimal (tampon + résultat).
    pub separateur_decimal: char,
    pub mode_initial: Mode,
    /// Filtre par défaut du journal (RUST_LOG reste prioritaire).
    pub niveau_journal: String,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            separateur_decimal: SEPARATEUR_DEFAUT,
            mode_initial: Mode::Basique,
            niveau_journal: "info".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ErreurReglages {
    #[error("lecture des réglages impossible: {0}")]
    Chargement(#[from] Box<figment::Error>),

    #[error("séparateur décimal {0:?} ambigu (chiffre, opérateur ou parenthèse)")]
    Separateur(char),
}

impl Reglages {
    /// Charge défauts -> calculatrice.toml -> CALC_*.
    pub fn charger() -> Result<Self, ErreurReglages> {
        Self::depuis(
            Figment::from(Serialized::defaults(Reglages::default()))
                .merge(Toml::file(FICHIER))
                .merge(Env::prefixed(PREFIXE_ENV)),
        )
    }

    /// Extraction + validation depuis une source déjà composée.
    pub fn depuis(figment: Figment) -> Result<Self, ErreurReglages> {
        let reglages: Reglages = figment.extract().map_err(Box::new)?;
        reglages.valider()
    }

    fn valider(self) -> Result<Self, ErreurReglages> {
        let c = self.separateur_decimal;
        if c.is_ascii_digit() || "+-*/^()π".contains(c) || c.is_whitespace() {
            return Err(ErreurReglages::Separateur(c));
        }
        Ok(self)
    }
}
