// src/noyau/erreurs.rs
//
// Erreurs typées du noyau.
//
// Deux familles, distinguées pour l'affichage :
// - ErreurSyntaxe        => "Erreur de syntaxe" (lexique ou expression mal formée)
// - ErreurEval::Domaine  => "Erreur mathématique" (argument hors domaine)
//
// Un résultat non fini (NaN/∞) n'est PAS une erreur ici : le noyau le retourne
// tel quel, et c'est l'affichage qui le traite comme erreur mathématique.

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ErreurSyntaxe {
    #[error("caractère inattendu: '{car}' (position {position})")]
    CaractereInattendu { car: char, position: usize },

    #[error("nombre invalide (position {position})")]
    NombreInvalide { position: usize },

    /// Opérateur ou fonction dépilé sans assez d'opérandes
    /// (ex: opérateur en tête d'expression).
    #[error("opérande manquante")]
    OperandeManquante,

    #[error("parenthèse ouvrante non fermée")]
    ParentheseNonFermee,

    #[error("fonction inconnue: '{0}'")]
    FonctionInconnue(String),

    #[error("entrée vide")]
    EntreeVide,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ErreurEval {
    #[error(transparent)]
    Syntaxe(#[from] ErreurSyntaxe),

    /// Argument hors domaine (ex: factorielle d'un négatif ou d'un non-entier).
    #[error("erreur de domaine: {0}")]
    Domaine(String),
}
