//! Noyau — évaluation (machine à deux piles)
//!
//! Shunting-yard classique, évalué au vol (pas d'AST) :
//! - pile `valeurs` (f64) + pile `ops` (opérateurs, fonctions, marqueurs '(')
//! - nombre/constante -> empile la valeur
//! - '(' -> empile ; ')' -> dépile-applique jusqu'à '(' (')' orpheline = no-op)
//! - fonction -> empile (appliquée à sa ')' fermante ou en fin d'entrée)
//! - opérateur -> dépile-applique tant que le sommet est un opérateur de
//!   précédence >=, puis empile
//! - fin d'entrée -> vide la pile ops
//!
//! Invariant : à tout instant, `valeurs` contient exactement les opérandes
//! qu'attendent les opérateurs/fonctions encore empilés ; à la fin il reste
//! une seule valeur (pile vide => 0, convention documentée).
//!
//! Moins unaire : un '-' qui arrive sans valeur à sa gauche reçoit un 0
//! implicite et est empilé sans dépiler (ainsi 2^-3 lie comme 2^(-3)).

use super::erreurs::{ErreurEval, ErreurSyntaxe};
use super::fonctions::{Fonction, ModeAngle};
use super::jetons::{tokenize, Jeton, Op};

/// Élément de la pile d'opérateurs.
#[derive(Clone, Copy, Debug)]
enum ElemPile {
    Op(Op),
    Fonction(Fonction),
    ParG,
}

/// API publique : évalue une expression complète.
///
/// Tokenize puis déroule la machine à piles. Le résultat peut être non fini
/// (NaN/±∞, ex: division par zéro) : il est retourné tel quel, jamais
/// remplacé par une valeur par défaut — c'est l'affichage qui tranche.
pub fn evaluer(expr_str: &str, mode: ModeAngle) -> Result<f64, ErreurEval> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurSyntaxe::EntreeVide.into());
    }

    let jetons = tokenize(s)?;
    evaluer_jetons(&jetons, mode)
}

/// Déroule la machine à piles sur une suite de jetons déjà produite.
pub fn evaluer_jetons(jetons: &[Jeton], mode: ModeAngle) -> Result<f64, ErreurEval> {
    let mut valeurs: Vec<f64> = Vec::new();
    let mut ops: Vec<ElemPile> = Vec::new();

    // "valeur" = un atome ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_etait_valeur = false;

    for jeton in jetons {
        match jeton {
            Jeton::Nombre(v) => {
                valeurs.push(*v);
                prev_etait_valeur = true;
            }

            Jeton::Constante(c) => {
                valeurs.push(c.valeur());
                prev_etait_valeur = true;
            }

            Jeton::ParG => {
                ops.push(ElemPile::ParG);
                prev_etait_valeur = false;
            }

            Jeton::ParD => {
                // dépile-applique jusqu'à '(' ; si la pile s'épuise avant,
                // la ')' orpheline est un no-op (gracieux, pas d'erreur)
                while let Some(elem) = ops.pop() {
                    if matches!(elem, ElemPile::ParG) {
                        // une fonction juste sous la '(' s'applique maintenant
                        if matches!(ops.last(), Some(ElemPile::Fonction(_))) {
                            let f = ops.pop().unwrap();
                            applique(f, &mut valeurs, mode)?;
                        }
                        break;
                    }
                    applique(elem, &mut valeurs, mode)?;
                }
                prev_etait_valeur = true;
            }

            Jeton::Ident(nom) => {
                let f = Fonction::depuis_nom(nom)
                    .ok_or_else(|| ErreurSyntaxe::FonctionInconnue(nom.clone()))?;
                ops.push(ElemPile::Fonction(f));
                prev_etait_valeur = false;
            }

            Jeton::Op(op) => {
                if *op == Op::Moins && !prev_etait_valeur {
                    // moins unaire : 0 implicite à gauche, empilé sans dépiler
                    valeurs.push(0.0);
                    ops.push(ElemPile::Op(Op::Moins));
                    prev_etait_valeur = false;
                    continue;
                }

                // dépile tant que le sommet est un opérateur (pas '(' ni
                // fonction) de précédence >= (associativité gauche)
                loop {
                    match ops.last() {
                        Some(ElemPile::Op(haut)) if haut.precedence() >= op.precedence() => {}
                        _ => break,
                    }
                    let elem = ops.pop().unwrap();
                    applique(elem, &mut valeurs, mode)?;
                }

                ops.push(ElemPile::Op(*op));
                prev_etait_valeur = false;
            }
        }
    }

    // vide la pile ops
    while let Some(elem) = ops.pop() {
        if matches!(elem, ElemPile::ParG) {
            return Err(ErreurSyntaxe::ParentheseNonFermee.into());
        }
        applique(elem, &mut valeurs, mode)?;
    }

    // convention : pile vide => 0 ; sinon le fond de pile est le résultat
    Ok(valeurs.first().copied().unwrap_or(0.0))
}

/// Dépile-applique un élément (jamais '(' : filtrée par les appelants).
/// - fonction : consomme UNE valeur (le mode d'angle est passé pour la trig)
/// - opérateur : consomme DEUX valeurs — premier pop = opérande droite
fn applique(elem: ElemPile, valeurs: &mut Vec<f64>, mode: ModeAngle) -> Result<(), ErreurEval> {
    match elem {
        ElemPile::Fonction(f) => {
            let x = valeurs.pop().ok_or(ErreurSyntaxe::OperandeManquante)?;
            valeurs.push(f.applique(x, mode)?);
        }

        ElemPile::Op(op) => {
            let droite = valeurs.pop().ok_or(ErreurSyntaxe::OperandeManquante)?;
            let gauche = valeurs.pop().ok_or(ErreurSyntaxe::OperandeManquante)?;
            valeurs.push(op.applique(gauche, droite));
        }

        ElemPile::ParG => {}
    }
    Ok(())
}
