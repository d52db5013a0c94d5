// src/main.rs
//
// Calculatrice shunting-yard — point d’entrée NATIF + WEB (WASM)
// --------------------------------------------------------------
// But:
// - NATIF : une expression en argument, ou --console (une ligne sur stdin),
//           sinon fenêtre eframe::run_native
// - WEB (wasm32) : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
#[cfg(not(target_arch = "wasm32"))]
mod console;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice shunting-yard";

/* ------------------------ Ligne de commande (natif) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use clap::Parser;

    /// Calculatrice shunting-yard : jetons -> postfix -> pile
    #[derive(Parser, Debug)]
    #[command(name = "calculatrice")]
    #[command(about = "Évalue une expression arithmétique (+ - * / % ^, sin, cos)", long_about = None)]
    pub struct Args {
        /// Mode console : bannière, une ligne lue sur stdin, résultat imprimé
        #[arg(long)]
        pub console: bool,

        /// Affiche aussi la démarche (jetons, postfix, pile)
        #[arg(long)]
        pub demarche: bool,

        /// Décimales affichées (par défaut : forme la plus courte)
        #[arg(long, value_name = "N")]
        pub chiffres: Option<usize>,

        /// Expression à évaluer (sinon : --console ou fenêtre)
        pub expression: Option<String>,
    }
}

/* ------------------------ Journal (natif) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn init_journal() {
    use tracing_subscriber::{fmt, EnvFilter};

    // CALC_LOG, puis RUST_LOG, sinon "warn". stderr : stdout reste pour le résultat.
    let filter = EnvFilter::try_from_env("CALC_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use clap::Parser;
    use std::process::ExitCode;

    init_journal();

    let args = cli::Args::parse();
    let reglages = console::Reglages {
        chiffres: args.chiffres,
        demarche: args.demarche,
    };

    if let Some(expr) = args.expression.as_deref() {
        return console::terminer(console::rapport(expr, &reglages));
    }

    if args.console {
        let stdin = std::io::stdin();
        let res = console::session(&mut stdin.lock(), &mut std::io::stdout(), &reglages);
        return console::terminer(res);
    }

    match lancer_fenetre() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(erreur = %e, "fenêtre impossible");
            eprintln!("Erreur : {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn lancer_fenetre() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([480.0, 700.0])
            .with_min_inner_size([400.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
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
