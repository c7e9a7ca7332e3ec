// src/main.rs
//
// Calculatrice à touches — point d’entrée NATIF + WEB (WASM)
// ----------------------------------------------------------
// - NATIF (Linux/Windows/macOS) : réglages (figment) + journal (tracing) + eframe::run_native
// - WEB  (wasm32)              : eframe::WebRunner + <canvas>, réglages par défaut
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod journal;
mod noyau;
mod reglages;

use app::AppCalc;
use reglages::Reglages;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    // Réglages d’abord (ils portent le niveau du journal), erreur journalisée ensuite.
    let charge = Reglages::charger();
    let reglages = charge.as_ref().cloned().unwrap_or_default();

    if let Err(e) = journal::init(&reglages.niveau_journal) {
        eprintln!("journal indisponible: {e}");
    }
    if let Err(e) = charge {
        tracing::warn!(cause = %e, "réglages ignorés, valeurs par défaut utilisées");
    }
    tracing::info!(
        separateur = %reglages.separateur_decimal,
        mode = reglages.mode_initial.libelle(),
        "démarrage"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([360.0, 520.0])
            .with_min_inner_size([320.0, 460.0]),
        ..Default::default()
    };

    let app = AppCalc::new(&reglages);
    let resultat = eframe::run_native(TITRE_APP, options, Box::new(|_cc| Ok(Box::new(app))));

    if let Err(e) = &resultat {
        tracing::error!(cause = %e, "arrêt sur erreur fatale");
    }
    resultat
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, Reglages, TITRE_APP};

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

        // Pas de fichier ni d’environnement côté navigateur : réglages par défaut.
        let app = AppCalc::new(&Reglages::default());

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::new(app))),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
