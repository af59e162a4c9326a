#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use quiz_master::QuizApp;

// Escritorio: ventana nativa de eframe
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "🎯 Quiz Master",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new()))),
    )
}

// Web: la misma app montada sobre un canvas vía WebRunner
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirige los mensajes de `log` a console.log
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");

        let canvas = document
            .get_element_by_id("quiz_canvas")
            .expect("no se encontró el canvas quiz_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("quiz_canvas no es un HtmlCanvasElement");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::new(QuizApp::new()))),
            )
            .await
            .expect("no se pudo arrancar eframe");
    });
}
