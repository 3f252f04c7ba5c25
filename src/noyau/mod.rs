//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - erreur.rs   : ErreurEval (taxonomie des échecs)
//! - jetons.rs   : tokenisation (+ moins unaire replié dans les nombres)
//! - rpn.rs      : shunting-yard (infixe -> postfixe)
//! - eval.rs     : pile de valeurs + pipeline complet
//! - format.rs   : affichage du résultat

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::ErreurEval;
pub use eval::{eval_postfix, evaluate, evaluate_detaille, DemarcheNoyau};
pub use format::format_resultat;
pub use jetons::{tokenize, Associativite, Operateur, Tok};
pub use rpn::to_postfix;
