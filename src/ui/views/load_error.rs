use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Color32, Context, RichText};

/// Error fatal: sin banco de preguntas el quiz no puede empezar.
pub fn ui_load_error(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 220.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("❌ Could not start the quiz").color(Color32::RED));
            ui.add_space(10.0);
            if let Some(error) = &app.load_error {
                ui.label(error);
            }
            ui.add_space(6.0);
            ui.label("Place a valid questions.json next to the executable and restart.");
            ui.add_space(18.0);

            if ui.add_sized([180.0, 36.0], Button::new("❌ Quit")).clicked() {
                app.salir_app();
            }
        });
    });
}
