// src/main.rs
//
// Calculatrice RPN — point d’entrée NATIF + WEB (WASM)
// ----------------------------------------------------
// - NATIF : ligne de commande (clap) ; sans expression => fenêtre eframe
// - WEB   : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use calculatrice_rpn::app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice RPN";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::io::BufRead;
    use std::process::ExitCode;

    use calculatrice_rpn::app::etat::TEXTE_ERREUR;
    use calculatrice_rpn::noyau::{evaluate_detaille, format_resultat};
    use clap::Parser;
    use eframe::egui;
    use tracing::{error, info, warn};
    use tracing_subscriber::EnvFilter;

    use super::{AppCalc, TITRE_APP};

    /// Évalue des expressions arithmétiques (+ - * / % ^, parenthèses, moins unaire).
    /// Sans expression ni --no-gui, ouvre la calculatrice.
    #[derive(Parser, Debug)]
    #[command(version, about, long_about = None)]
    pub struct Args {
        /// Affiche aussi les jetons et la RPN avant le résultat.
        #[arg(short, long)]
        demarche: bool,

        /// Lit une expression par ligne sur l’entrée standard au lieu d’ouvrir la fenêtre.
        #[arg(long)]
        no_gui: bool,

        /// Expression à évaluer une fois (ex: "2+3*4").
        expression: Option<String>,
    }

    fn init_traces() {
        let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filtre)
            .with_writer(std::io::stderr)
            .init();
    }

    /// Affiche le résultat d’une expression. Retourne false si l’évaluation échoue.
    fn imprime(expression: &str, demarche: bool) -> bool {
        match evaluate_detaille(expression) {
            Ok((valeur, d)) => {
                if demarche {
                    println!("jetons : {}", d.jetons);
                    println!("rpn    : {}", d.rpn);
                }
                println!("{}", format_resultat(valeur));
                true
            }
            Err(e) => {
                warn!(expression, erreur = %e, "évaluation impossible");
                println!("{TEXTE_ERREUR}");
                false
            }
        }
    }

    fn lot_stdin(demarche: bool) -> ExitCode {
        let stdin = std::io::stdin();
        for ligne in stdin.lock().lines() {
            let ligne = match ligne {
                Ok(l) => l,
                Err(e) => {
                    error!(erreur = %e, "lecture de l’entrée standard");
                    return ExitCode::FAILURE;
                }
            };
            if ligne.trim().is_empty() {
                continue;
            }
            imprime(&ligne, demarche);
        }
        ExitCode::SUCCESS
    }

    fn fenetre() -> eframe::Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(TITRE_APP)
                .with_inner_size([360.0, 620.0])
                .with_min_inner_size([320.0, 560.0]),
            ..Default::default()
        };

        eframe::run_native(
            TITRE_APP,
            options,
            Box::new(|_cc| Ok(Box::<AppCalc>::default())),
        )
    }

    pub fn main() -> ExitCode {
        let args = Args::parse();
        init_traces();

        if let Some(expression) = args.expression.as_deref() {
            return if imprime(expression, args.demarche) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }

        if args.no_gui {
            return lot_stdin(args.demarche);
        }

        info!("ouverture de la fenêtre");
        match fenetre() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!(erreur = %e, "eframe");
                ExitCode::FAILURE
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    natif::main()
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
