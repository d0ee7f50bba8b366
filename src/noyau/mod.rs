//! Noyau de la calculette (sans vue, sans egui)
//!
//! Organisation interne :
//! - commande.rs : Chiffre, Operateur, Commande (+ lecture des libellés du pavé)
//! - erreur.rs   : division par zéro, touches refusées
//! - format.rs   : f64 <-> texte de l’écran
//! - machine.rs  : machine de saisie (état explicite + dispatch)

pub mod commande;
pub mod erreur;
pub mod format;
pub mod machine;


#[cfg(test)]
mod tests_proprietes;

// API publique minimale (ce que app/ utilise)
pub use commande::Commande;
pub use erreur::ErreurTouche;
pub use machine::Machine;
