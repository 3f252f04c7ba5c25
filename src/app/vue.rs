// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ a le focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)

use eframe::egui;

use super::etat::{AppCalc, TEXTE_ERREUR};

/// Pavé : 4 colonnes, la dernière rangée n’a que "^" et "=".
const PAVE: [&[&str]; 6] = [
    &["C", "(", ")", "DEL"],
    &["7", "8", "9", "÷"],
    &["4", "5", "6", "×"],
    &["1", "2", "3", "-"],
    &["%", "0", ".", "+"],
    &["^", "="],
];

const TAILLE_TOUCHE: [f32; 2] = [72.0, 56.0];

fn est_accentuee(touche: &str) -> bool {
    matches!(touche, "=" | "+" | "-" | "×" | "÷")
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_ecran(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("0")
                .font(egui::TextStyle::Heading)
                .horizontal_align(egui::Align::RIGHT)
                .id_source("entree_edit"),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Une frappe clavier après un résultat suit la même règle que le pavé.
        if resp.changed() && !self.resultat.is_empty() {
            self.resultat.clear();
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.lost_focus() && enter {
            self.evalue();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let texte = egui::RichText::new(&self.resultat).size(28.0);
            if self.resultat == TEXTE_ERREUR {
                ui.colored_label(ui.visuals().error_fg_color, texte);
            } else {
                ui.label(texte.color(ui.visuals().hyperlink_color));
            }
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for &touche in rangee {
                        self.bouton(ui, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: &str) {
        let mut texte = egui::RichText::new(touche).size(22.0);
        if est_accentuee(touche) {
            texte = texte.strong();
        }

        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(texte));
        if resp.clicked() {
            self.appuie(touche);
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", &self.demarche.rpn);
                if !self.erreur.is_empty() {
                    ui.add_space(4.0);
                    ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
                }
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.monospace(contenu);
            });
    }
}
