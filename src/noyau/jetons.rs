// src/noyau/jetons.rs

use super::erreur::{ErreurEval, Result};
use super::format::format_resultat;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

/// Opérateurs binaires. Précédence et associativité sont portées par l’opérateur
/// lui-même (table fixe), jamais relues depuis le caractère.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Div,
    Modulo,
    Puissance, // ^
}

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Div),
            '%' => Some(Self::Modulo),
            '^' => Some(Self::Puissance),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Div => '/',
            Self::Modulo => '%',
            Self::Puissance => '^',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Moins => 1,
            Self::Fois | Self::Div | Self::Modulo => 2,
            Self::Puissance => 3,
        }
    }

    pub fn associativite(self) -> Associativite {
        match self {
            Self::Puissance => Associativite::Droite,
            _ => Associativite::Gauche,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Operateur),
    LPar,
    RPar,
}

fn est_chiffre(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Moins unaire possible : début de flux, ou juste après un opérateur / '('.
fn attend_operande(out: &[Tok]) -> bool {
    matches!(out.last(), None | Some(Tok::Op(_)) | Some(Tok::LPar))
}

fn parse_nombre(txt: &str) -> Result<f64> {
    txt.parse::<f64>()
        .map_err(|_| ErreurEval::MalformedNumber(txt.to_string()))
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5)
/// - opérateurs + - * / % ^
/// - parenthèses ( )
/// - moins unaire collé au nombre qui suit (ex: "-5+3", "5*-3", "(-2)")
///
/// Pas de plus unaire, pas de multiplication implicite : "2(3)" reste 2 puis (3).
pub fn tokenize(s: &str) -> Result<Vec<Tok>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Nombre : suite de chiffres et de points (validé au parse)
        if est_chiffre(c) {
            let start = i;
            while i < chars.len() && est_chiffre(chars[i]) {
                i += 1;
            }
            let txt: String = chars[start..i].iter().collect();
            out.push(Tok::Num(parse_nombre(&txt)?));
            continue;
        }

        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        if let Some(op) = Operateur::depuis_char(c) {
            // nombre négatif : le '-' doit être immédiatement suivi d’un chiffre
            if op == Operateur::Moins
                && attend_operande(&out)
                && i + 1 < chars.len()
                && est_chiffre(chars[i + 1])
            {
                let start = i;
                i += 1;
                while i < chars.len() && est_chiffre(chars[i]) {
                    i += 1;
                }
                let txt: String = chars[start..i].iter().collect();
                out.push(Tok::Num(parse_nombre(&txt)?));
                continue;
            }

            out.push(Tok::Op(op));
            i += 1;
            continue;
        }

        return Err(ErreurEval::InvalidCharacter(c));
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format_resultat(*v),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
