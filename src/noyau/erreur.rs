// src/noyau/erreur.rs
//
// Erreurs du noyau.
// - ErreurCalcul : la seule erreur arithmétique (division par zéro).
//   Son texte EST l’affichage d’erreur : ne pas le traduire.
// - ErreurTouche : libellé / caractère refusé à la frontière des commandes.

use thiserror::Error;

/// Texte fixe affiché après une division par zéro.
#[cfg(test)]
pub const TEXTE_DIVISION_PAR_ZERO: &str = "Error: Cannot divide by zero";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("Error: Cannot divide by zero")]
    DivisionParZero,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurTouche {
    #[error("touche inconnue: {0:?}")]
    Inconnue(String),

    #[error("pas un chiffre: {0:?}")]
    PasUnChiffre(char),

    #[error("pas un opérateur: {0:?}")]
    PasUnOperateur(char),
}
