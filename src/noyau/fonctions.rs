// src/noyau/fonctions.rs
//
// Table des fonctions unaires + mode d'angle
// ------------------------------------------
// - Fonction : enum fermée, dispatch par match exhaustif (pas de table de
//   callables dynamique : la table NOMS ne porte que le lien nom -> variante)
// - Genre : classe sémantique ; seules Trig et TrigInverse consultent le mode
// - ModeAngle : paramètre explicite, jamais d'état ambiant

use super::erreurs::ErreurEval;

/// Interprétation des angles pour la trig directe/inverse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    #[default]
    Degres,
    Radians,
}

impl ModeAngle {
    /// Entrée trig directe : degrés -> radians sauf en mode radians.
    pub fn en_radians(self, x: f64) -> f64 {
        match self {
            ModeAngle::Radians => x,
            ModeAngle::Degres => x.to_radians(),
        }
    }

    /// Sortie trig inverse : radians -> degrés sauf en mode radians.
    pub fn depuis_radians(self, x: f64) -> f64 {
        match self {
            ModeAngle::Radians => x,
            ModeAngle::Degres => x.to_degrees(),
        }
    }

    pub fn bascule(self) -> Self {
        match self {
            ModeAngle::Degres => ModeAngle::Radians,
            ModeAngle::Radians => ModeAngle::Degres,
        }
    }

    /// Étiquette d'affichage ("DEG" / "RAD").
    pub fn etiquette(self) -> &'static str {
        match self {
            ModeAngle::Degres => "DEG",
            ModeAngle::Radians => "RAD",
        }
    }
}

/// Classe sémantique d'une fonction (arité 1 pour toutes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Genre {
    Trig,
    TrigInverse,
    Hyperbolique,
    HyperboliqueInverse,
    Logarithmique,
    Algebrique,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
    Ln,
    Log, // base 10
    Racine,
    Factorielle,
    Exp,
}

/// Table nom -> fonction (x² et x⁻¹ n'y figurent pas : réécrits en ^ par le
/// tokenizer).
pub const NOMS: &[(&str, Fonction)] = &[
    ("sin", Fonction::Sin),
    ("cos", Fonction::Cos),
    ("tan", Fonction::Tan),
    ("asin", Fonction::Asin),
    ("acos", Fonction::Acos),
    ("atan", Fonction::Atan),
    ("sinh", Fonction::Sinh),
    ("cosh", Fonction::Cosh),
    ("tanh", Fonction::Tanh),
    ("asinh", Fonction::Asinh),
    ("acosh", Fonction::Acosh),
    ("atanh", Fonction::Atanh),
    ("ln", Fonction::Ln),
    ("log", Fonction::Log),
    ("√", Fonction::Racine),
    ("!", Fonction::Factorielle),
    ("exp", Fonction::Exp),
];

impl Fonction {
    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        NOMS.iter().find(|(n, _)| *n == nom).map(|(_, f)| *f)
    }

    pub fn genre(self) -> Genre {
        match self {
            Fonction::Sin | Fonction::Cos | Fonction::Tan => Genre::Trig,
            Fonction::Asin | Fonction::Acos | Fonction::Atan => Genre::TrigInverse,
            Fonction::Sinh | Fonction::Cosh | Fonction::Tanh => Genre::Hyperbolique,
            Fonction::Asinh | Fonction::Acosh | Fonction::Atanh => Genre::HyperboliqueInverse,
            Fonction::Ln | Fonction::Log => Genre::Logarithmique,
            Fonction::Racine | Fonction::Factorielle | Fonction::Exp => Genre::Algebrique,
        }
    }

    /// Applique la fonction à son unique argument.
    ///
    /// Le mode d'angle n'intervient que selon le genre :
    /// - Trig        : l'entrée est convertie en radians
    /// - TrigInverse : la sortie (radians natifs) est reconvertie
    /// Les hyperboliques sont insensibles au mode (arguments sans dimension).
    ///
    /// Domaines : ln/log/√/acosh/atanh… hors domaine produisent NaN/∞ IEEE,
    /// filtrés à l'affichage. Seule la factorielle a une erreur de domaine
    /// typée (pas de NaN silencieux pour un négatif ou un non-entier).
    pub fn applique(self, x: f64, mode: ModeAngle) -> Result<f64, ErreurEval> {
        let x = match self.genre() {
            Genre::Trig => mode.en_radians(x),
            _ => x,
        };

        let v = match self {
            Fonction::Sin => x.sin(),
            Fonction::Cos => x.cos(),
            Fonction::Tan => x.tan(),
            Fonction::Asin => x.asin(),
            Fonction::Acos => x.acos(),
            Fonction::Atan => x.atan(),
            Fonction::Sinh => x.sinh(),
            Fonction::Cosh => x.cosh(),
            Fonction::Tanh => x.tanh(),
            Fonction::Asinh => x.asinh(),
            Fonction::Acosh => x.acosh(),
            Fonction::Atanh => x.atanh(),
            Fonction::Ln => x.ln(),
            Fonction::Log => x.log10(),
            Fonction::Racine => x.sqrt(),
            Fonction::Factorielle => factorielle(x)?,
            Fonction::Exp => x.exp(),
        };

        let v = match self.genre() {
            Genre::TrigInverse => mode.depuis_radians(v),
            _ => v,
        };

        Ok(v)
    }
}

/// Factorielle sur f64 : définie pour les entiers >= 0 seulement.
/// Au-delà de 170!, le f64 déborde : +∞ (erreur mathématique à l'affichage).
fn factorielle(x: f64) -> Result<f64, ErreurEval> {
    if !x.is_finite() || x < 0.0 || x.fract() != 0.0 {
        return Err(ErreurEval::Domaine(format!(
            "factorielle définie pour les entiers >= 0 (reçu {x})"
        )));
    }
    if x > 170.0 {
        return Ok(f64::INFINITY);
    }

    let n = x as u64;
    let mut acc = 1.0_f64;
    for k in 2..=n {
        acc *= k as f64;
    }
    Ok(acc)
}
