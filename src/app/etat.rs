//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder la machine de saisie et recevoir les appuis du pavé.
//! Toute la logique de calcul vit dans le noyau ; ici on ne fait que
//! transmettre une commande et journaliser la transition.

use crate::noyau::{Commande, Machine};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub machine: Machine,
}

impl AppCalc {
    /// Texte de l’écran (nombre en cours, résultat ou erreur).
    pub fn affichage(&self) -> &str {
        self.machine.affichage()
    }

    /// Un appui de touche = une commande.
    pub fn appuyer(&mut self, commande: Commande) {
        self.machine.executer(commande);

        tracing::debug!(
            ?commande,
            affichage = self.machine.affichage(),
            precedent = ?self.machine.precedent(),
            operateur = ?self.machine.operateur(),
            en_erreur = self.machine.en_erreur(),
            attente_saisie = self.machine.attente_saisie(),
            "commande appliquée"
        );
    }
}
