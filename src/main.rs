// src/main.rs
//
// Portail Tirage — point d’entrée NATIF + WEB (WASM)
// --------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS/mobile) : eframe::run_native + NativeOptions
// - WEB  (wasm32)                      : eframe::WebRunner + WebOptions + <canvas>
// - Config : portail.yaml + variables d’environnement (natif), défauts (web)
// - Session : restaurée depuis le stockage eframe
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod api;
mod app;
mod config;
mod noyau;
mod session;

use app::etat::CLE_SESSION;
use app::AppPortail;
use config::Config;
use session::SessionStore;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Portail Tirage";

/// Construit l’app au premier contexte egui (config + session persistée).
fn creer_app(
    cc: &eframe::CreationContext<'_>,
    config: Config,
) -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
    let mut app = AppPortail::new(config).map_err(|e| {
        log::error!("Initialisation impossible: {e:#}");
        format!("Initialisation impossible: {e:#}")
    })?;

    let store = cc
        .storage
        .and_then(|s| eframe::get_value::<SessionStore>(s, CLE_SESSION));
    app.restaurer_session(store);

    Ok(Box::new(app))
}

/* ------------------------ Entrée NATIF ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Démarrage de {TITRE_APP}");

    let config = Config::charger()?;
    log::info!(
        "Serveur {} (rôle {})",
        config.api_base_url,
        config.role
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([380.0, 640.0])
            .with_min_inner_size([320.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |cc| creer_app(cc, config)),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{creer_app, Config, TITRE_APP};

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

        let config = Config::charger().map_err(|e| js_err(&e.to_string()))?;
        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| creer_app(cc, config)),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
