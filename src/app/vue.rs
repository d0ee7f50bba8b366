// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : texte aligné à droite, gros monospace
// - Pavé  : placement manuel (touches sur 2 colonnes / 2 lignes)
// - Un clic = une commande envoyée à AppCalc::appuyer
//
// Pas de raccourcis clavier : souris / tactile seulement.

use eframe::egui;

use super::etat::AppCalc;
use super::pave::{Touche, Variante, COLONNES, LIGNES, PAVE};

/// Taille d’une cellule de la grille du pavé.
const CELLULE: egui::Vec2 = egui::vec2(72.0, 60.0);

/// Espace entre les touches.
const ESPACE: f32 = 10.0;

const TAILLE_ECRAN: f32 = 32.0;
const TAILLE_TOUCHE: f32 = 20.0;

const FOND_NOMBRE: egui::Color32 = egui::Color32::from_rgb(58, 62, 74);
const FOND_OPERATEUR: egui::Color32 = egui::Color32::from_rgb(92, 84, 222);
const FOND_EGAL: egui::Color32 = egui::Color32::from_rgb(46, 170, 120);
const FOND_EFFACER: egui::Color32 = egui::Color32::from_rgb(214, 72, 86);

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);

        ui.vertical_centered(|ui| {
            ui.add_space(ESPACE);
            self.ui_ecran(ui);
            ui.add_space(ESPACE);
            self.ui_pave(ui);
        });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let marge: i8 = 16;

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .inner_margin(egui::Margin::same(marge))
            .show(ui, |ui| {
                ui.set_width(taille_pave().x - 2.0 * f32::from(marge));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(self.affichage())
                                .monospace()
                                .size(TAILLE_ECRAN),
                        )
                        .truncate(),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let (zone, _) = ui.allocate_exact_size(taille_pave(), egui::Sense::hover());

        for touche in PAVE {
            let texte = egui::RichText::new(touche.libelle)
                .size(TAILLE_TOUCHE)
                .strong()
                .color(egui::Color32::WHITE);
            let bouton = egui::Button::new(texte).fill(fond(touche.variante));

            if !ui.put(rect_touche(zone.min, &touche), bouton).clicked() {
                continue;
            }

            match touche.commande() {
                Ok(c) => self.appuyer(c),
                Err(e) => tracing::warn!(libelle = touche.libelle, erreur = %e, "touche ignorée"),
            }
        }
    }
}

fn fond(variante: Variante) -> egui::Color32 {
    match variante {
        Variante::Nombre => FOND_NOMBRE,
        Variante::Operateur => FOND_OPERATEUR,
        Variante::Egal => FOND_EGAL,
        Variante::Effacer => FOND_EFFACER,
    }
}

/// n cellules + (n - 1) espaces.
fn etendue(n: usize, cellule: f32) -> f32 {
    n as f32 * cellule + n.saturating_sub(1) as f32 * ESPACE
}

fn taille_pave() -> egui::Vec2 {
    egui::vec2(etendue(COLONNES, CELLULE.x), etendue(LIGNES, CELLULE.y))
}

fn rect_touche(origine: egui::Pos2, t: &Touche) -> egui::Rect {
    let min = origine
        + egui::vec2(
            t.colonne as f32 * (CELLULE.x + ESPACE),
            t.ligne as f32 * (CELLULE.y + ESPACE),
        );
    let taille = egui::vec2(etendue(t.largeur, CELLULE.x), etendue(t.hauteur, CELLULE.y));
    egui::Rect::from_min_size(min, taille)
}
