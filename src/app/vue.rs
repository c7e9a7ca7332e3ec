// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : expression (petit) + résultat (grand), alignés à droite
// - Pavé 5×4 : C DEL ( ) /  |  7 8 9 *  |  4 5 6 -  |  1 2 3 +  |  +/- 0 , =
// - Mode scientifique : rangée sin cos tan √ log ln e^x π ^
// - Bouton de mode toujours visible

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Fonction, Operateur, Symbole};

const TAILLE_EXPRESSION: f32 = 16.0;
const TAILLE_RESULTAT: f32 = 32.0;
const TOUCHE: [f32; 2] = [72.0, 44.0];

/// Une case du pavé : un symbole, ou "=".
#[derive(Clone, Copy, Debug)]
enum Touche {
    Symbole(Symbole),
    Egal,
}

const fn s(symbole: Symbole) -> Touche {
    Touche::Symbole(symbole)
}

const fn op(o: Operateur) -> Touche {
    Touche::Symbole(Symbole::Operateur(o))
}

const fn d(n: u8) -> Touche {
    Touche::Symbole(Symbole::Chiffre(n))
}

const PAVE: [[Touche; 4]; 5] = [
    [
        s(Symbole::Effacer),
        s(Symbole::RetourArriere),
        s(Symbole::Parenthese),
        op(Operateur::Divise),
    ],
    [d(7), d(8), d(9), op(Operateur::Fois)],
    [d(4), d(5), d(6), op(Operateur::Moins)],
    [d(1), d(2), d(3), op(Operateur::Plus)],
    [s(Symbole::Negation), d(0), s(Symbole::Separateur), Touche::Egal],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let libelle = if self.mode().est_scientifique() {
                "Base"
            } else {
                "Sci"
            };
            if ui
                .add_sized(TOUCHE, egui::Button::new(libelle))
                .on_hover_text("Basculer mode basique / scientifique")
                .clicked()
            {
                self.appuyer(Symbole::BasculeMode);
            }
            ui.label(format!("mode {}", self.mode().libelle()));
        });

        if self.mode().est_scientifique() {
            self.ui_scientifique(ui);
        }

        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(egui::RichText::new(&self.expression).size(TAILLE_EXPRESSION));
                    ui.label(
                        egui::RichText::new(&self.resultat)
                            .size(TAILLE_RESULTAT)
                            .strong(),
                    );
                });
            });
    }

    fn ui_scientifique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for f in Fonction::TOUTES {
                self.bouton(ui, Touche::Symbole(Symbole::Fonction(f)));
            }
            self.bouton(ui, s(Symbole::Pi));
            self.bouton(ui, op(Operateur::Puissance));
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for touche in rangee {
                        self.bouton(ui, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn libelle(&self, touche: Touche) -> String {
        match touche {
            Touche::Egal => "=".to_string(),
            Touche::Symbole(Symbole::Separateur) => self.separateur().to_string(),
            Touche::Symbole(sym) => sym.to_string(),
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche) {
        let mut texte = egui::RichText::new(self.libelle(touche));
        match touche {
            Touche::Symbole(Symbole::Effacer) => texte = texte.color(egui::Color32::RED),
            Touche::Egal => texte = texte.color(egui::Color32::LIGHT_BLUE),
            _ => {}
        }

        if ui.add_sized(TOUCHE, egui::Button::new(texte)).clicked() {
            match touche {
                Touche::Symbole(sym) => self.appuyer(sym),
                Touche::Egal => self.egal(),
            }
        }
    }

    /// Clavier physique : caractères tapés + Enter / Backspace / Escape.
    pub fn clavier(&mut self, ctx: &egui::Context) {
        let separateur = self.separateur();
        let (symboles, egal): (Vec<Symbole>, bool) = ctx.input(|i| {
            let mut symboles: Vec<Symbole> = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.as_str()),
                    _ => None,
                })
                .flat_map(str::chars)
                .filter_map(|c| Symbole::depuis_touche(c, separateur))
                .collect();

            if i.key_pressed(egui::Key::Backspace) {
                symboles.push(Symbole::RetourArriere);
            }
            if i.key_pressed(egui::Key::Escape) {
                symboles.push(Symbole::Effacer);
            }
            (symboles, i.key_pressed(egui::Key::Enter))
        });

        for sym in symboles {
            self.appuyer(sym);
        }
        if egal {
            self.egal();
        }
    }
}
