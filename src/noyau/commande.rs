// src/noyau/commande.rs
//
// Valeurs de commande (ce que le pavé envoie à la machine).
// Règles:
// - Chiffre : 0..=9 seulement (construction contrôlée)
// - Operateur : ensemble fermé {+, -, ×, ÷}
// - Commande : une seule valeur structurée par appui de touche

use std::fmt;
use std::str::FromStr;

use super::erreur::ErreurTouche;

/// Un chiffre décimal (0..=9).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Chiffre(u8);

impl Chiffre {
    pub const fn new(valeur: u8) -> Option<Self> {
        if valeur <= 9 {
            Some(Self(valeur))
        } else {
            None
        }
    }

    #[cfg(test)]
    pub const fn valeur(self) -> u8 {
        self.0
    }

    pub fn caractere(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Chiffre {
    type Error = ErreurTouche;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .and_then(|d| Chiffre::new(d as u8))
            .ok_or(ErreurTouche::PasUnChiffre(c))
    }
}

impl fmt::Display for Chiffre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    #[cfg(test)]
    pub const TOUS: [Operateur; 4] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
    ];

    /// Symbole affiché sur le pavé.
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
        }
    }
}

impl TryFrom<char> for Operateur {
    type Error = ErreurTouche;

    /// Accepte les symboles du pavé + alias ASCII (`*`, `/`).
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Operateur::Plus),
            '-' => Ok(Operateur::Moins),
            '×' | '*' => Ok(Operateur::Fois),
            '÷' | '/' => Ok(Operateur::Divise),
            _ => Err(ErreurTouche::PasUnOperateur(c)),
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

/// Commande envoyée par la présentation (un appui = une commande).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Chiffre(Chiffre),
    Virgule,
    Operateur(Operateur),
    Egal,
    Effacer,
}

impl FromStr for Commande {
    type Err = ErreurTouche;

    /// Libellé de touche -> commande.
    ///
    /// Exemple: "7" -> Chiffre(7), "÷" -> Operateur(Divise), "Clear" -> Effacer
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "." => return Ok(Commande::Virgule),
            "=" => return Ok(Commande::Egal),
            "Clear" | "C" => return Ok(Commande::Effacer),
            _ => {}
        }

        // un seul caractère : chiffre ou opérateur
        let mut it = s.chars();
        match (it.next(), it.next()) {
            (Some(c), None) if c.is_ascii_digit() => Chiffre::try_from(c).map(Commande::Chiffre),
            (Some(c), None) => Operateur::try_from(c)
                .map(Commande::Operateur)
                .map_err(|_| ErreurTouche::Inconnue(s.to_string())),
            _ => Err(ErreurTouche::Inconnue(s.to_string())),
        }
    }
}
