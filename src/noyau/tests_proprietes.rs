//! Tests de propriétés : suites de commandes aléatoires (proptest).
//!
//! Invariants vérifiés après CHAQUE commande :
//! - jamais deux virgules à l’écran
//! - l’écran est soit le texte d’erreur, soit un nombre relisible
//! - opérande/opérateur en attente présents ensemble ou absents ensemble
//! - "Clear" ramène exactement à l’état initial

use proptest::prelude::*;

use super::commande::{Chiffre, Commande, Operateur};
use super::erreur::TEXTE_DIVISION_PAR_ZERO;
use super::format::lire_nombre;
use super::machine::Machine;

fn chiffre_strategy() -> impl Strategy<Value = Chiffre> {
    (0u8..=9u8).prop_filter_map("chiffre", Chiffre::new)
}

fn operateur_strategy() -> impl Strategy<Value = Operateur> {
    prop::sample::select(Operateur::TOUS.to_vec())
}

fn commande_strategy() -> impl Strategy<Value = Commande> {
    prop_oneof![
        4 => chiffre_strategy().prop_map(Commande::Chiffre),
        1 => Just(Commande::Virgule),
        2 => operateur_strategy().prop_map(Commande::Operateur),
        1 => Just(Commande::Egal),
        1 => Just(Commande::Effacer),
    ]
}

fn check_invariants(m: &Machine) -> Result<(), TestCaseError> {
    let a = m.affichage();
    prop_assert!(a.matches('.').count() <= 1, "deux virgules: {a:?}");
    prop_assert_eq!(m.precedent().is_some(), m.operateur().is_some());

    if m.en_erreur() {
        prop_assert_eq!(a, TEXTE_DIVISION_PAR_ZERO);
        prop_assert!(m.attente_saisie());
    } else {
        prop_assert_ne!(a, TEXTE_DIVISION_PAR_ZERO);
        let x = lire_nombre(a);
        // NaN possible seulement via Infinity - Infinity (affiché "NaN")
        prop_assert!(!x.is_nan() || a == "NaN", "illisible: {a:?}");
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_invariants_apres_chaque_commande(cmds in prop::collection::vec(commande_strategy(), 0..60)) {
        let mut m = Machine::default();
        for c in cmds {
            m.executer(c);
            check_invariants(&m)?;
        }
    }

    #[test]
    fn prop_effacer_remet_a_l_etat_initial(cmds in prop::collection::vec(commande_strategy(), 0..60)) {
        let mut m = Machine::default();
        for c in cmds {
            m.executer(c);
        }
        m.executer(Commande::Effacer);
        prop_assert_eq!(m, Machine::default());
    }

    #[test]
    fn prop_chiffre_apres_operateur_remplace(
        cmds in prop::collection::vec(commande_strategy(), 0..30),
        op in operateur_strategy(),
        d in chiffre_strategy(),
    ) {
        let mut m = Machine::default();
        for c in cmds {
            m.executer(c);
        }
        m.executer(Commande::Operateur(op));
        m.executer(Commande::Chiffre(d));
        // un chiffre quitte toujours l’erreur
        prop_assert!(!m.en_erreur());
        prop_assert_eq!(m.affichage(), d.to_string());
    }

    #[test]
    fn prop_addition_entiers(a in 0u32..100_000, b in 0u32..100_000) {
        let mut m = Machine::default();
        for c in a.to_string().chars().chain(['+']).chain(b.to_string().chars()).chain(['=']) {
            let cmd: Commande = c.to_string().parse().map_err(|e| TestCaseError::fail(format!("{e}")))?;
            m.executer(cmd);
        }
        prop_assert_eq!(m.affichage(), (u64::from(a) + u64::from(b)).to_string());
    }
}
