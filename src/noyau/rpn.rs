// src/noyau/rpn.rs
//
// Shunting-yard : infixe -> RPN (postfixe)
//
// Règles:
// - Num : sortie directe
// - Op o1 : dépile o2 tant que
//     (o1 gauche et prec(o1) <= prec(o2)) ou (o1 droite et prec(o1) < prec(o2))
//   puis empile o1
// - '(' : empile ; ')' : dépile jusqu’à '(' (qui est jetée)
// - Fin : vide la pile ; une '(' restante est une erreur
//
// Le moins unaire est déjà replié dans les nombres par jetons.rs.

use tracing::trace;

use super::erreur::{ErreurEval, Result};
use super::jetons::{Associativite, Operateur, Tok};

fn doit_depiler(o1: Operateur, o2: Operateur) -> bool {
    match o1.associativite() {
        Associativite::Gauche => o1.precedence() <= o2.precedence(),
        Associativite::Droite => o1.precedence() < o2.precedence(),
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Op(+), Num(3), Op(*), Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Op(*), Op(+)]
pub fn to_postfix(tokens: &[Tok]) -> Result<Vec<Tok>> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for &tok in tokens {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::Op(o1) => {
                while let Some(&Tok::Op(o2)) = ops.last() {
                    if !doit_depiler(o1, o2) {
                        break;
                    }
                    out.push(Tok::Op(o2));
                    ops.pop();
                }
                ops.push(tok);
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => loop {
                match ops.pop() {
                    Some(Tok::LPar) => break,
                    Some(top) => out.push(top),
                    None => {
                        trace!("')' sans '(' correspondante");
                        return Err(ErreurEval::MismatchedParenthesis);
                    }
                }
            },
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            trace!("'(' non fermée");
            return Err(ErreurEval::MismatchedParenthesis);
        }
        out.push(op);
    }

    Ok(out)
}
