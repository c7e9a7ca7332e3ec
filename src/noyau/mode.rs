// src/noyau/mode.rs
//
// Mode basique / scientifique.
// Consulté par la saisie et le parseur ; l’arbre une fois construit n’en dépend plus.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Basique,
    Scientifique,
}

impl Mode {
    /// Transition sans garde, dans les deux sens.
    pub fn bascule(self) -> Mode {
        match self {
            Mode::Basique => Mode::Scientifique,
            Mode::Scientifique => Mode::Basique,
        }
    }

    pub fn est_scientifique(self) -> bool {
        self == Mode::Scientifique
    }

    pub fn libelle(self) -> &'static str {
        match self {
            Mode::Basique => "basique",
            Mode::Scientifique => "scientifique",
        }
    }
}
