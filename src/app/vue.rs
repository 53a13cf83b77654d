// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Grille scientifique : SHIFT (fonctions inverses), hyp (hyperboliques),
//   bascule DEG/RAD, Ans, DEL/AC
// - L'évaluation passe par le noyau ; l'affichage tranche :
//   erreur typée de syntaxe  -> "Erreur de syntaxe"
//   domaine OU résultat non fini -> "Erreur mathématique"

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{evaluer, format_resultat, ErreurEval, Fonction};

/// Grille (étiquette normale, étiquette SHIFT), ligne par ligne.
const GRILLE: &[&[(&str, &str)]] = &[
    &[
        ("SHIFT", "SHIFT"),
        ("hyp", "hyp"),
        ("x²", "x²"),
        ("xʸ", "√"),
        ("x⁻¹", "x⁻¹"),
    ],
    &[
        ("sin", "asin"),
        ("cos", "acos"),
        ("tan", "atan"),
        ("DEL", "AC"),
        ("Ans", "Ans"),
    ],
    &[("log", "exp"), ("ln", "!"), ("(", "("), (")", ")"), ("%", "%")],
    &[("7", "7"), ("8", "8"), ("9", "9"), ("/", "/"), ("*", "*")],
    &[("4", "4"), ("5", "5"), ("6", "6"), ("-", "-"), ("+", "+")],
    &[("1", "1"), ("2", "2"), ("3", "3"), ("e", "e"), ("π", "π")],
    &[("0", "0"), (".", "."), ("=", "=")],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_indicateurs(ui);
        self.ui_entree(ui);
        self.ui_affichage(ui);

        ui.add_space(6.0);
        self.ui_grille(ui);
    }

    /* ------------------------ Bandeaux ------------------------ */

    fn ui_indicateurs(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // DEG/RAD : cliquable, comme l'indicateur d'une vraie calculatrice
            let mode = ui
                .add_sized(
                    [56.0, 24.0],
                    egui::Button::new(self.mode_angle.etiquette()),
                )
                .on_hover_text("Bascule degrés / radians");
            if mode.clicked() {
                self.bascule_mode_angle();
            }

            let mut etat = String::new();
            if self.shift {
                etat.push_str("SHIFT ");
            }
            if self.hyp {
                etat.push_str("HYP");
            }
            ui.label(etat.trim().to_string());
        });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.expression)
                .desired_width(ui.available_width())
                .hint_text("Ex: sin(30)+2^3, √(2), 5x²")
                .id_source("entree_calc")
                .code_editor(),
        );

        // Si on a cliqué un bouton, on redonne le focus au champ
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter évalue (seulement si le champ est focus, pour éviter les
        // déclenchements globaux)
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.calcule();
            self.focus_entree = true;
        }
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.affichage)
                            .monospace()
                            .size(26.0),
                    );
                });
            });
    }

    /* ------------------------ Grille de touches ------------------------ */

    fn ui_grille(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("grille_sci")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in GRILLE {
                    for touche in *ligne {
                        let etiquette = self.etiquette_effective(touche);
                        let resp = ui.add_sized([52.0, 30.0], egui::Button::new(&etiquette));
                        if resp.clicked() {
                            self.touche_pressee(&etiquette);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    /// Étiquette affichée selon SHIFT puis hyp (sin -> asin -> asinh).
    fn etiquette_effective(&self, touche: &(&str, &str)) -> String {
        let base = if self.shift { touche.1 } else { touche.0 };
        if self.hyp
            && matches!(base, "sin" | "cos" | "tan" | "asin" | "acos" | "atan")
        {
            return format!("{base}h");
        }
        base.to_string()
    }

    fn touche_pressee(&mut self, etiquette: &str) {
        match etiquette {
            "SHIFT" => {
                self.bascule_shift();
                return; // les bascules ne se font pas retomber elles-mêmes
            }
            "hyp" => {
                self.bascule_hyp();
                return;
            }
            "AC" => self.reset_total(),
            "DEL" => self.efface_dernier(),
            "=" => self.calcule(),
            "Ans" => self.ajoute_ans(),
            _ => {
                let fragment = Self::fragment_pour(etiquette);
                self.ajoute(&fragment);
            }
        }
        self.retombe_bascules();
    }

    /// Texte réellement inséré pour une touche.
    /// - xʸ est l'opérateur ^
    /// - une fonction ouvre sa parenthèse ("sin(") ; "!" est postfixe
    /// - x², x⁻¹, π, e, chiffres et opérateurs s'insèrent tels quels
    fn fragment_pour(etiquette: &str) -> String {
        if etiquette == "xʸ" {
            return "^".to_string();
        }
        if etiquette == "!" {
            return "!".to_string();
        }
        match Fonction::depuis_nom(etiquette) {
            Some(_) => format!("{etiquette}("),
            None => etiquette.to_string(),
        }
    }

    /* ------------------------ Évaluation ------------------------ */

    /// Évalue l'expression via le noyau et dépose le verdict dans l'état.
    fn calcule(&mut self) {
        let expr = self.expression.trim().to_string();
        if expr.is_empty() {
            return;
        }

        match evaluer(&expr, self.mode_angle) {
            Ok(v) if !v.is_finite() => {
                tracing::warn!(expression = %expr, valeur = %v, "résultat non fini");
                self.set_erreur("Erreur mathématique");
            }
            Ok(v) => {
                self.set_resultat(format_resultat(v));
            }
            Err(ErreurEval::Domaine(raison)) => {
                tracing::warn!(expression = %expr, %raison, "erreur de domaine");
                self.set_erreur("Erreur mathématique");
            }
            Err(e) => {
                tracing::warn!(expression = %expr, erreur = %e, "expression invalide");
                self.set_erreur("Erreur de syntaxe");
            }
        }
    }
}
