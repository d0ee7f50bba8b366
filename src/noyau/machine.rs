//! Machine de saisie arithmétique (le cœur de la calculette).
//!
//! État explicite :
//! - `Repos`        : aucune opération en attente
//! - `Accumulation` : opérande gauche + opérateur en attente du second opérande
//! - `Erreur`       : l’écran affiche un message d’erreur
//!
//! `attente_saisie` est orthogonal : vrai juste après un opérateur ou "=",
//! le prochain chiffre REMPLACE l’écran au lieu de s’y ajouter.
//!
//! Pas de priorité d’opérateurs : enchaîner `3 + 4 ×` replie `3+4` tout de suite
//! (gauche à droite).
//!
//! Reprise après erreur : départ à neuf. L’opération périmée est abandonnée,
//! un chiffre (ou la virgule) démarre un nouveau nombre, "=" et les opérateurs
//! sont ignorés tant que l’écran affiche l’erreur.

use super::commande::{Chiffre, Commande, Operateur};
use super::erreur::ErreurCalcul;
use super::format::{formater_nombre, lire_nombre};

#[derive(Clone, Debug, PartialEq)]
pub enum Etat {
    Repos,
    Accumulation { precedent: f64, operateur: Operateur },
    Erreur(ErreurCalcul),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Machine {
    affichage: String,
    etat: Etat,
    attente_saisie: bool,
}

impl Default for Machine {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            etat: Etat::Repos,
            attente_saisie: false,
        }
    }
}

/// Applique un opérateur binaire.
///
/// `÷` par zéro (0 ou -0) => `Err(DivisionParZero)` ; l’appelant passe en erreur.
pub fn appliquer(op: Operateur, a: f64, b: f64) -> Result<f64, ErreurCalcul> {
    match op {
        Operateur::Plus => Ok(a + b),
        Operateur::Moins => Ok(a - b),
        Operateur::Fois => Ok(a * b),
        Operateur::Divise if b == 0.0 => Err(ErreurCalcul::DivisionParZero),
        Operateur::Divise => Ok(a / b),
    }
}

impl Machine {
    /* ------------------------ Lecture ------------------------ */

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    #[cfg(test)]
    pub fn etat(&self) -> &Etat {
        &self.etat
    }

    pub fn attente_saisie(&self) -> bool {
        self.attente_saisie
    }

    /// Opérande gauche en attente (absent hors `Accumulation`).
    pub fn precedent(&self) -> Option<f64> {
        match self.etat {
            Etat::Accumulation { precedent, .. } => Some(precedent),
            _ => None,
        }
    }

    /// Opérateur en attente (absent hors `Accumulation`).
    pub fn operateur(&self) -> Option<Operateur> {
        match self.etat {
            Etat::Accumulation { operateur, .. } => Some(operateur),
            _ => None,
        }
    }

    pub fn en_erreur(&self) -> bool {
        matches!(self.etat, Etat::Erreur(_))
    }

    /* ------------------------ Dispatch ------------------------ */

    /// Point d’entrée unique : une commande = une transition.
    pub fn executer(&mut self, commande: Commande) {
        match commande {
            Commande::Chiffre(d) => self.saisir_chiffre(d),
            Commande::Virgule => self.saisir_virgule(),
            Commande::Operateur(op) => self.choisir_operateur(op),
            Commande::Egal => self.egal(),
            Commande::Effacer => self.effacer(),
        }
    }

    /* ------------------------ Commandes ------------------------ */

    pub fn saisir_chiffre(&mut self, d: Chiffre) {
        self.quitter_erreur();

        if self.attente_saisie {
            self.affichage = d.to_string();
            self.attente_saisie = false;
        } else if self.affichage == "0" {
            self.affichage = d.to_string();
        } else {
            self.affichage.push(d.caractere());
        }
    }

    pub fn saisir_virgule(&mut self) {
        self.quitter_erreur();

        if self.attente_saisie {
            self.affichage = "0.".to_string();
            self.attente_saisie = false;
        } else if !self.affichage.contains('.') {
            self.affichage.push('.');
        }
    }

    pub fn choisir_operateur(&mut self, op: Operateur) {
        let entree = match self.etat {
            Etat::Erreur(_) => {
                tracing::debug!(%op, "opérateur ignoré: écran en erreur");
                return;
            }
            Etat::Repos => lire_nombre(&self.affichage),
            Etat::Accumulation {
                precedent,
                operateur,
            } => {
                // repli gauche -> droite
                let entree = lire_nombre(&self.affichage);
                let Some(resultat) = self.calculer(operateur, precedent, entree) else {
                    return;
                };
                self.affichage = formater_nombre(resultat);
                resultat
            }
        };

        self.etat = Etat::Accumulation {
            precedent: entree,
            operateur: op,
        };
        self.attente_saisie = true;
    }

    pub fn egal(&mut self) {
        let Etat::Accumulation {
            precedent,
            operateur,
        } = self.etat
        else {
            return;
        };

        let entree = lire_nombre(&self.affichage);
        let Some(resultat) = self.calculer(operateur, precedent, entree) else {
            return;
        };

        self.affichage = formater_nombre(resultat);
        self.etat = Etat::Repos;
        self.attente_saisie = true;
    }

    /// Remise à zéro totale (état initial exact).
    pub fn effacer(&mut self) {
        *self = Self::default();
    }

    /* ------------------------ Interne ------------------------ */

    /// `appliquer` + passage en erreur. `None` => la machine est en `Erreur`.
    fn calculer(&mut self, op: Operateur, a: f64, b: f64) -> Option<f64> {
        match appliquer(op, a, b) {
            Ok(x) => Some(x),
            Err(e) => {
                tracing::warn!(a, %op, b, "division par zéro");
                self.affichage = e.to_string();
                self.etat = Etat::Erreur(e);
                self.attente_saisie = true;
                None
            }
        }
    }

    /// Départ à neuf après une erreur (l’opération périmée est abandonnée).
    fn quitter_erreur(&mut self) {
        if self.en_erreur() {
            self.etat = Etat::Repos;
        }
    }
}
