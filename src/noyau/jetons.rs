// src/noyau/jetons.rs

use super::erreurs::ErreurSyntaxe;

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),

    // Constantes nommées (π, e) : résolues en f64 à l'évaluation.
    Constante(Constante),

    // Fonctions (tout ce qui n'est pas constante / opérateur / nombre).
    // NOTE: c'est l'évaluateur qui valide le nom contre la table des fonctions.
    Ident(String),

    Op(Op),

    ParG,
    ParD,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    pub fn valeur(self) -> f64 {
        match self {
            Constante::Pi => std::f64::consts::PI,
            Constante::E => std::f64::consts::E,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Division,
    Modulo,
    Puissance, // ^
}

impl Op {
    /// Table de précédence : + - (1), * / % (2), ^ (3).
    /// Tous associatifs à gauche.
    pub fn precedence(self) -> u8 {
        match self {
            Op::Plus | Op::Moins => 1,
            Op::Fois | Op::Division | Op::Modulo => 2,
            Op::Puissance => 3,
        }
    }

    pub fn depuis_car(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Moins),
            '*' => Some(Op::Fois),
            '/' => Some(Op::Division),
            '%' => Some(Op::Modulo),
            '^' => Some(Op::Puissance),
            _ => None,
        }
    }

    /// Applique l'opérateur binaire.
    /// Division/modulo par zéro : pas de garde ici, l'IEEE 754 propage
    /// ±∞/NaN et l'affichage les traite en erreur mathématique.
    pub fn applique(self, gauche: f64, droite: f64) -> f64 {
        match self {
            Op::Plus => gauche + droite,
            Op::Moins => gauche - droite,
            Op::Fois => gauche * droite,
            Op::Division => gauche / droite,
            Op::Modulo => gauche % droite,
            Op::Puissance => gauche.powf(droite),
        }
    }
}

/// Raccourcis postfixes : réécrits AVANT le scan en puissance parenthésée,
/// l'opérateur ^ général fait le reste.
///   3x²  => 3^(2)
///   4x⁻¹ => 4^(-1)   (le moins unaire est géré à l'évaluation)
fn reecrit_postfixes(s: &str) -> String {
    s.replace("x²", "^(2)").replace("x⁻¹", "^(-1)")
}

/// Caractères admis dans un identificateur de fonction :
/// lettres ASCII + glyphes spéciaux (√, !, exposants).
fn est_car_ident(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '√' | '!' | '²' | '⁻' | '¹')
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - littéraux numériques chiffres(.chiffres)? — sans signe
/// - opérateurs + - * / % ^ et parenthèses ( )
/// - π ou pi (insensible à la casse), e
/// - identificateurs de fonctions (sin, asinh, ln, √, !, …), normalisés en minuscules
/// - raccourcis x² et x⁻¹ (réécrits en ^(2) / ^(-1) avant le scan)
///
/// Les classes sont essayées du match le plus long au plus court ; tout
/// caractère hors classe coupe court avec `CaractereInattendu` (position =
/// index de caractère, comptée après réécriture des raccourcis).
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurSyntaxe> {
    let source = reecrit_postfixes(s);
    let chars: Vec<char> = source.chars().collect();

    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Littéral numérique : chiffres(.chiffres)?
        if c.is_ascii_digit() {
            let debut = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            let texte: String = chars[debut..i].iter().collect();
            let v = texte
                .parse::<f64>()
                .map_err(|_| ErreurSyntaxe::NombreInvalide { position: debut })?;
            out.push(Jeton::Nombre(v));
            continue;
        }

        // Constante π (glyphe)
        if c == 'π' {
            out.push(Jeton::Constante(Constante::Pi));
            i += 1;
            continue;
        }

        // Identificateurs : une passe gourmande, puis "pi"/"e" deviennent
        // des constantes (le match le plus long gagne : "exp" reste "exp").
        if est_car_ident(c) {
            let debut = i;
            i += 1;
            while i < chars.len() && est_car_ident(chars[i]) {
                i += 1;
            }
            let mot: String = chars[debut..i].iter().collect();
            let w = mot.to_lowercase();

            match w.as_str() {
                "pi" => out.push(Jeton::Constante(Constante::Pi)),
                "e" => out.push(Jeton::Constante(Constante::E)),
                _ => out.push(Jeton::Ident(w)),
            }
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Jeton::ParG);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Jeton::ParD);
            i += 1;
            continue;
        }

        // Opérateurs
        if let Some(op) = Op::depuis_car(c) {
            out.push(Jeton::Op(op));
            i += 1;
            continue;
        }

        return Err(ErreurSyntaxe::CaractereInattendu { car: c, position: i });
    }

    Ok(out)
}
