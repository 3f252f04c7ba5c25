//! Calculatrice RPN : noyau d’évaluation (`noyau`) + coquille eframe (`app`).
//!
//! Le noyau est pur : `noyau::evaluate("2+3*4") == Ok(14.0)`.

pub mod app;
pub mod noyau;
