//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, démarche)
//! et offrir les actions des touches (C / DEL / = / saisie).
//!
//! Contrats :
//! - Le noyau ne garde aucun état : le tampon d’entrée vit ici.
//! - Une seule porte vers le noyau : `evalue()`.
//! - Toute erreur d’évaluation s’affiche "Error", quel que soit son type.

use tracing::{debug, warn};

use crate::noyau::{evaluate_detaille, format_resultat};

/// Affiché à la place du résultat quand l’évaluation échoue.
pub const TEXTE_ERREUR: &str = "Error";

/// Affiché quand on évalue une entrée vide.
const RESULTAT_VIDE: &str = "0";

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // valeur formatée, "Error", ou vide
    pub erreur: String,   // détail (démarche seulement, jamais à la place du résultat)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Touches ------------------------ */

    /// Dispatch d’une touche du pavé.
    pub fn appuie(&mut self, touche: &str) {
        match touche {
            "C" => self.clear_tout(),
            "DEL" => self.backspace(),
            "=" => self.evalue(),
            "×" => self.ajoute("*"),
            "÷" => self.ajoute("/"),
            autre => self.ajoute(autre),
        }
    }

    /// Saisie. Un chiffre tapé pendant qu’un résultat est affiché démarre un
    /// nouveau calcul ; un opérateur prolonge l’expression courante.
    pub fn ajoute(&mut self, txt: &str) {
        if !self.resultat.is_empty() {
            if txt.chars().next().is_some_and(|c| c.is_ascii_digit()) {
                self.entree.clear();
            }
            self.clear_resultats();
        }
        self.entree.push_str(txt);
        self.focus_entree = true;
    }

    /// C : remise à zéro totale (entrée + résultat + démarche).
    pub fn clear_tout(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.focus_entree = true;
    }

    fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
    }

    /// DEL : retire le dernier caractère de l’entrée.
    pub fn backspace(&mut self) {
        self.entree.pop();
        self.focus_entree = true;
    }

    /* ------------------------ Évaluation ------------------------ */

    /// = : évalue l’entrée via le noyau et dépose le résultat dans l’état.
    pub fn evalue(&mut self) {
        if self.entree.trim().is_empty() {
            self.clear_resultats();
            self.resultat = RESULTAT_VIDE.to_string();
            self.focus_entree = true;
            return;
        }

        match evaluate_detaille(&self.entree) {
            Ok((valeur, d)) => {
                debug!(expression = %self.entree, valeur, "évaluation réussie");
                self.erreur.clear();
                self.resultat = format_resultat(valeur);
                self.demarche = Demarche {
                    jetons: d.jetons,
                    rpn: d.rpn,
                };
            }
            Err(e) => {
                warn!(expression = %self.entree, erreur = %e, "évaluation impossible");
                self.resultat = TEXTE_ERREUR.to_string();
                self.erreur = e.to_string();
                // pipeline invalide => on efface la démarche
                self.demarche = Demarche::default();
            }
        }

        self.focus_entree = true;
    }
}
