//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile de valeurs -> f64
//!
//! Chaque appel est indépendant : jetons, pile d’opérateurs et pile de valeurs
//! sont alloués pour l’appel, aucun état partagé.

use tracing::debug;

use super::erreur::{ErreurEval, Result};
use super::jetons::{format_tokens, tokenize, Operateur, Tok};
use super::rpn::to_postfix;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
}

/// Applique `a op b`. Division et reste par zéro sont refusés (les deux).
fn applique(op: Operateur, a: f64, b: f64) -> Result<f64> {
    let v = match op {
        Operateur::Plus => a + b,
        Operateur::Moins => a - b,
        Operateur::Fois => a * b,
        Operateur::Div => {
            if b == 0.0 {
                return Err(ErreurEval::DivisionByZero);
            }
            a / b
        }
        Operateur::Modulo => {
            if b == 0.0 {
                return Err(ErreurEval::DivisionByZero);
            }
            // signe du dividende (reste natif de f64)
            a % b
        }
        Operateur::Puissance => a.powf(b),
    };
    Ok(v)
}

/// Évalue une suite RPN avec une pile de valeurs.
///
/// Le premier dépilé est l’opérande de droite.
pub fn eval_postfix(rpn: &[Tok]) -> Result<f64> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for &tok in rpn {
        match tok {
            Tok::Num(v) => st.push(v),
            Tok::Op(op) => {
                let b = st.pop().ok_or(ErreurEval::StackUnderflow)?;
                let a = st.pop().ok_or(ErreurEval::StackUnderflow)?;
                st.push(applique(op, a, b)?);
            }
            Tok::LPar | Tok::RPar => return Err(ErreurEval::MismatchedParenthesis),
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurEval::EmptyExpression),
    }
}

/// API publique : évalue une expression infixe.
pub fn evaluate(expression: &str) -> Result<f64> {
    evaluate_detaille(expression).map(|(v, _)| v)
}

/// Comme `evaluate`, mais retourne aussi la démarche (jetons + RPN en texte).
pub fn evaluate_detaille(expression: &str) -> Result<(f64, DemarcheNoyau)> {
    // 1) Jetons
    let jetons = tokenize(expression)?;
    let jetons_txt = format_tokens(&jetons);
    debug!(jetons = %jetons_txt, "tokenisation");

    // 2) RPN
    let rpn = to_postfix(&jetons)?;
    let rpn_txt = format_tokens(&rpn);
    debug!(rpn = %rpn_txt, "conversion postfixe");

    // 3) Valeur
    let valeur = eval_postfix(&rpn)?;
    debug!(valeur, "évaluation");

    let d = DemarcheNoyau {
        jetons: jetons_txt,
        rpn: rpn_txt,
    };
    Ok((valeur, d))
}
