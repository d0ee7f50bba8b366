// src/noyau/format.rs
//
// Affichage des nombres (f64 <-> texte de l’écran).
//
// Règles d’affichage (mêmes que Number -> String côté web) :
// - chiffres : représentation la plus courte qui se relit à l’identique
// - notation simple si 1e-7 <= |x| < 1e21, sinon d.ddde±x
// - -0 s’affiche "0"
// - non finis : "Infinity", "-Infinity", "NaN"
//
// L’erreur de représentation flottante est acceptée (0.1 + 0.2).

/// Formate un résultat pour l’écran.
pub fn formater_nombre(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        // couvre aussi -0
        return "0".to_string();
    }

    let signe = if x < 0.0 { "-" } else { "" };

    // `{:e}` donne déjà les chiffres les plus courts : "1.2345e-7", "7e0"
    let sci = format!("{:e}", x.abs());
    let Some((mantisse, exposant)) = sci.split_once('e') else {
        return format!("{signe}{sci}");
    };
    let Ok(exposant) = exposant.parse::<i32>() else {
        return format!("{signe}{sci}");
    };

    let chiffres: String = mantisse.chars().filter(|c| *c != '.').collect();
    let k = chiffres.len() as i32;
    // x = 0.chiffres × 10^n
    let n = exposant + 1;

    let corps = if k <= n && n <= 21 {
        // entier : chiffres suivis de zéros
        format!("{chiffres}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (entier, frac) = chiffres.split_at(n as usize);
        format!("{entier}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{chiffres}", "0".repeat((-n) as usize))
    } else {
        let e = n - 1;
        let signe_e = if e < 0 { '-' } else { '+' };
        let (tete, reste) = chiffres.split_at(1);
        if reste.is_empty() {
            format!("{tete}e{signe_e}{}", e.abs())
        } else {
            format!("{tete}.{reste}e{signe_e}{}", e.abs())
        }
    };

    format!("{signe}{corps}")
}

/// Relit le texte de l’écran.
///
/// Accepte tout ce que la machine produit : "12", "0.", "-3.5", "1e+21",
/// "Infinity", "NaN". Texte illisible => NaN (jamais de panique).
pub fn lire_nombre(affichage: &str) -> f64 {
    let s = affichage.trim();
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        "NaN" => return f64::NAN,
        _ => {}
    }

    match s.parse::<f64>() {
        Ok(x) => x,
        Err(e) => {
            tracing::warn!(affichage = s, erreur = %e, "affichage illisible, lu comme NaN");
            f64::NAN
        }
    }
}
