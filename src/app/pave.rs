//! src/app/pave.rs
//!
//! Pavé (données seulement, sans egui).
//!
//! Grille 5 lignes × 4 colonnes :
//!
//! ```text
//! | Clear     | ÷ | × |
//! | 7 | 8 | 9 | - |
//! | 4 | 5 | 6 | + |
//! | 1 | 2 | 3 | = |
//! | 0     | . |   |   <- "=" occupe 2 lignes
//! ```
//!
//! Chaque touche porte son libellé ; la commande est relue depuis le libellé
//! (même chemin que toute autre source de libellés).

use crate::noyau::{Commande, ErreurTouche};

pub const LIGNES: usize = 5;
pub const COLONNES: usize = 4;

/// Famille visuelle d’une touche.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variante {
    Nombre,
    Operateur,
    Egal,
    Effacer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Touche {
    pub libelle: &'static str,
    pub variante: Variante,
    pub ligne: usize,
    pub colonne: usize,
    pub largeur: usize,
    pub hauteur: usize,
}

impl Touche {
    const fn new(libelle: &'static str, variante: Variante, ligne: usize, colonne: usize) -> Self {
        Self {
            libelle,
            variante,
            ligne,
            colonne,
            largeur: 1,
            hauteur: 1,
        }
    }

    const fn large(mut self, largeur: usize) -> Self {
        self.largeur = largeur;
        self
    }

    const fn haute(mut self, hauteur: usize) -> Self {
        self.hauteur = hauteur;
        self
    }

    pub fn commande(&self) -> Result<Commande, ErreurTouche> {
        self.libelle.parse()
    }
}

use Variante::{Effacer, Egal, Nombre, Operateur};

pub const PAVE: [Touche; 17] = [
    Touche::new("Clear", Effacer, 0, 0).large(2),
    Touche::new("÷", Operateur, 0, 2),
    Touche::new("×", Operateur, 0, 3),
    Touche::new("7", Nombre, 1, 0),
    Touche::new("8", Nombre, 1, 1),
    Touche::new("9", Nombre, 1, 2),
    Touche::new("-", Operateur, 1, 3),
    Touche::new("4", Nombre, 2, 0),
    Touche::new("5", Nombre, 2, 1),
    Touche::new("6", Nombre, 2, 2),
    Touche::new("+", Operateur, 2, 3),
    Touche::new("1", Nombre, 3, 0),
    Touche::new("2", Nombre, 3, 1),
    Touche::new("3", Nombre, 3, 2),
    Touche::new("=", Egal, 3, 3).haute(2),
    Touche::new("0", Nombre, 4, 0).large(2),
    Touche::new(".", Nombre, 4, 2),
];
