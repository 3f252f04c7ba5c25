// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs du noyau. Toutes sont locales à un appel d’évaluation.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ErreurEval {
    #[error("caractère inattendu: '{0}'")]
    InvalidCharacter(char),

    #[error("nombre invalide: \"{0}\"")]
    MalformedNumber(String),

    #[error("parenthèses non appariées")]
    MismatchedParenthesis,

    #[error("opérande manquant")]
    StackUnderflow,

    #[error("expression vide")]
    EmptyExpression,

    #[error("division par zéro")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, ErreurEval>;
