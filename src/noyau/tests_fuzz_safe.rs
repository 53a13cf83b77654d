//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé 1 : aucun panic, quel que soit l'octet d'entrée
//! - invariant clé 2 : une expression bien formée ne produit JAMAIS
//!   d'erreur de syntaxe (au pire : erreur de domaine ou non-fini)
//! - invariant clé 3 : deux appels identiques rendent le même f64 au bit près

use std::time::{Duration, Instant};

use super::eval::evaluer;
use super::erreurs::ErreurEval;
use super::fonctions::ModeAngle;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

const FONCTIONS_SURES: &[&str] = &[
    "sin", "cos", "tan", "sinh", "cosh", "tanh", "atan", "asinh", "exp", "√",
];

fn gen_atome(rng: &mut Rng, profondeur: u32) -> String {
    if profondeur == 0 || rng.pick(3) == 0 {
        return match rng.pick(6) {
            0 => "0".to_string(),
            1 => "1".to_string(),
            2 => "2.5".to_string(),
            3 => "7".to_string(),
            4 => "π".to_string(),
            _ => "e".to_string(),
        };
    }

    if rng.coin() {
        let f = FONCTIONS_SURES[rng.pick(FONCTIONS_SURES.len() as u32) as usize];
        format!("{f}({})", gen_expr(rng, profondeur - 1))
    } else {
        format!("({})", gen_expr(rng, profondeur - 1))
    }
}

fn gen_expr(rng: &mut Rng, profondeur: u32) -> String {
    let mut s = String::new();
    if rng.pick(5) == 0 {
        s.push('-'); // moins unaire en tête, bien formé
    }
    s.push_str(&gen_atome(rng, profondeur));

    let termes = rng.pick(3);
    for _ in 0..termes {
        let op = match rng.pick(6) {
            0 => "+",
            1 => "-",
            2 => "*",
            3 => "/",
            4 => "%",
            _ => "^",
        };
        s.push_str(op);
        s.push_str(&gen_atome(rng, profondeur));
    }
    s
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_bien_forme_jamais_erreur_de_syntaxe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..400 {
        let expr = gen_expr(&mut rng, 3);
        let mode = if rng.coin() {
            ModeAngle::Degres
        } else {
            ModeAngle::Radians
        };

        match evaluer(&expr, mode) {
            Ok(_) => {}
            // le générateur n'émet pas de factorielle ; on ne vérifie ici
            // que l'absence d'erreur de syntaxe
            Err(ErreurEval::Domaine(_)) => {}
            Err(ErreurEval::Syntaxe(e)) => {
                panic!("expression bien formée {expr:?} -> erreur de syntaxe {e}")
            }
        }
        budget(t0, max);
    }
}

#[test]
fn fuzz_determinisme_au_bit_pres() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);
    let mut rng = Rng::new(42);

    for _ in 0..200 {
        let expr = gen_expr(&mut rng, 3);
        for mode in [ModeAngle::Degres, ModeAngle::Radians] {
            let a = evaluer(&expr, mode);
            let b = evaluer(&expr, mode);
            match (a, b) {
                (Ok(x), Ok(y)) => {
                    assert_eq!(x.to_bits(), y.to_bits(), "expr={expr:?}");
                }
                (Err(ea), Err(eb)) => assert_eq!(ea, eb, "expr={expr:?}"),
                (a, b) => panic!("expr={expr:?} non déterministe: {a:?} vs {b:?}"),
            }
        }
        budget(t0, max);
    }
}

#[test]
fn fuzz_soupe_de_caracteres_sans_panic() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);
    let mut rng = Rng::new(7);

    // soupe volontairement hostile : opérateurs orphelins, parenthèses
    // déséquilibrées, caractères hors classe
    const SOUPE: &[char] = &[
        '0', '1', '9', '.', '+', '-', '*', '/', '%', '^', '(', ')', 's', 'i',
        'n', 'q', 'π', 'e', '√', '!', '&', '@', '#', ' ',
    ];

    for _ in 0..600 {
        let longueur = 1 + rng.pick(24) as usize;
        let expr: String = (0..longueur)
            .map(|_| SOUPE[rng.pick(SOUPE.len() as u32) as usize])
            .collect();

        // l'hôte ne doit jamais tomber : Ok ou erreur typée, rien d'autre
        let _ = evaluer(&expr, ModeAngle::Degres);
        let _ = evaluer(&expr, ModeAngle::Radians);
        budget(t0, max);
    }
}

#[test]
fn fuzz_profondeur_parentheses_bornee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // imbrication profonde mais bornée : pas de récursion dans le noyau,
    // seulement des piles — ça doit passer sans broncher
    let mut expr = "1".to_string();
    for _ in 0..200 {
        expr = format!("({expr})");
    }
    expr.push_str("+1");

    let v = evaluer(&expr, ModeAngle::Degres).unwrap();
    assert_eq!(v, 2.0);
    budget(t0, max);
}
