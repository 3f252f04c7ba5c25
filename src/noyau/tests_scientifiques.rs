//! Tests scientifiques (campagne) : propriétés du pipeline complet.
//!
//! - précédence / associativité / parenthèses
//! - moins unaire (règle exacte du tokenizer)
//! - taxonomie des erreurs
//! - idempotence (aucun état caché entre deux appels)
//! - stress borné (budget temps)

use std::time::{Duration, Instant};

use super::{evaluate, format_resultat, ErreurEval};

fn eval_ok(expr: &str) -> f64 {
    evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_val(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert!(
        (v - attendu).abs() < 1e-9,
        "expr={expr:?} obtenu={v} attendu={attendu}"
    );
}

fn assert_err(expr: &str, attendu: ErreurEval) {
    assert_eq!(evaluate(expr), Err(attendu), "expr={expr:?}");
}

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Précédence + associativité ------------------------ */

#[test]
fn sci_precedence() {
    assert_val("2+3*4", 14.0);
    assert_val("2*3+4", 10.0);
    assert_val("10-4/2", 8.0);
    assert_val("1+7%4", 4.0);
    assert_val("2*3^2", 18.0);
}

#[test]
fn sci_associativite() {
    // ^ groupe à droite : 2^(3^2)
    assert_val("2^3^2", 512.0);
    // les autres groupent à gauche
    assert_val("8-3-2", 3.0);
    assert_val("16/4/2", 2.0);
    assert_val("100%7%3", 2.0);
}

#[test]
fn sci_parentheses() {
    assert_val("(2+3)*4", 20.0);
    assert_val("(2^3)^2", 64.0);
    assert_val("2*(3+4)*(5-1)", 56.0);
}

#[test]
fn sci_parentheses_redondantes() {
    let paires = [
        ("(2+3)", "2+3"),
        ("((2+3))", "2+3"),
        ("2+(3*4)", "2+3*4"),
        ("(2*3)+4", "2*3+4"),
        ("2^(3^2)", "2^3^2"),
        ("(8-3)-2", "8-3-2"),
        ("(1.5)*(-2)", "1.5*-2"),
    ];
    for (avec, sans) in paires {
        assert_eq!(evaluate(avec), evaluate(sans), "{avec} vs {sans}");
    }
    assert_val("(2+3)", 5.0);
}

/* ------------------------ Moins unaire ------------------------ */

#[test]
fn sci_moins_unaire() {
    assert_val("-5+3", -2.0);
    assert_val("5-3", 2.0);
    assert_val("5*-3", -15.0);
    assert_val("5--3", 8.0);
    assert_val("(-2)*3", -6.0);
    assert_val("2^-2", 0.25);
    // le nombre négatif est un seul jeton : (-2)^2
    assert_val("-2^2", 4.0);
    assert_val(" -1 - -1 ", 0.0);
}

#[test]
fn sci_moins_unaire_non_replie() {
    // '-' non suivi d’un chiffre : opérateur binaire sans opérande gauche
    assert_err("-(3)", ErreurEval::StackUnderflow);
    assert_err("- 5", ErreurEval::StackUnderflow);
    assert_err("2*-(1)", ErreurEval::StackUnderflow);
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_erreurs() {
    assert_err("(1+2", ErreurEval::MismatchedParenthesis);
    assert_err("1+2)", ErreurEval::MismatchedParenthesis);
    assert_err("", ErreurEval::EmptyExpression);
    assert_err("   ", ErreurEval::EmptyExpression);
    assert_err("()", ErreurEval::EmptyExpression);
    assert_err("+", ErreurEval::StackUnderflow);
    assert_err("2+", ErreurEval::StackUnderflow);
    assert_err("2**3", ErreurEval::StackUnderflow);
    assert_err("1.2.3", ErreurEval::MalformedNumber("1.2.3".into()));
    assert_err("2$3", ErreurEval::InvalidCharacter('$'));
    // pas de multiplication implicite
    assert_err("2(3+4)", ErreurEval::EmptyExpression);
    // pas de plus unaire
    assert_err("+5", ErreurEval::StackUnderflow);
}

#[test]
fn sci_division_par_zero_coherente() {
    assert_err("2/0", ErreurEval::DivisionByZero);
    assert_err("2%0", ErreurEval::DivisionByZero);
    assert_err("2/-0", ErreurEval::DivisionByZero);
    assert_err("5%(2-2)", ErreurEval::DivisionByZero);
}

/* ------------------------ Idempotence ------------------------ */

#[test]
fn sci_idempotence() {
    for expr in ["2+3*4", "2^3^2", "(1+2", "", "0.1+0.2", "7%-3", "2/0"] {
        assert_eq!(evaluate(expr), evaluate(expr), "expr={expr:?}");
    }
}

/* ------------------------ Affichage ------------------------ */

#[test]
fn sci_affichage_bout_en_bout() {
    assert_eq!(format_resultat(eval_ok("2+3*4")), "14");
    assert_eq!(format_resultat(eval_ok("5/2")), "2.5");
    assert_eq!(format_resultat(eval_ok("-5+3")), "-2");
    assert_eq!(format_resultat(eval_ok("10/4*2")), "5");
}

/* ------------------------ Stress borné ------------------------ */

#[test]
fn sci_stress_somme_longue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut expr = String::new();
    for k in 0..2000 {
        if k > 0 {
            expr.push_str(" + ");
        }
        expr.push_str("0.5");
    }
    budget(t0, max);

    assert_val(&expr, 1000.0);
    budget(t0, max);
}

#[test]
fn sci_stress_parentheses_profondes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // pipeline itératif : pas de récursion, donc pas de risque de pile
    let n = 5000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_val(&expr, 1.0);

    let expr = format!("{}1+1{}", "(".repeat(n), ")".repeat(n - 1));
    assert_err(&expr, ErreurEval::MismatchedParenthesis);

    budget(t0, max);
}
