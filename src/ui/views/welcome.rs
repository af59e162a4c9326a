use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Context};

pub fn ui_welcome(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 320.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🎯 Quiz Master");
            ui.add_space(10.0);
            ui.label("Welcome to the Ultimate Python Quiz!");
            ui.add_space(10.0);
            ui.label(
                "• Multiple choice and True/False questions\n\
                 • 15 seconds per question\n\
                 • Instant feedback\n\
                 • Detailed results at the end",
            );
            ui.add_space(6.0);
            ui.label("Test your Python knowledge and see how you score!");
            ui.add_space(18.0);

            let btn_w = (ui.available_width() * 0.9).clamp(120.0, 400.0);
            let btn_h = 40.0;

            let empezar = ui.add_sized([btn_w, btn_h], Button::new("▶ Start Quiz"));
            ui.add_space(5.0);
            let salir = ui.add_sized([btn_w, btn_h], Button::new("❌ Quit"));

            if empezar.clicked() {
                let now = ctx.input(|i| i.time);
                app.empezar_quiz(now);
            }
            if salir.clicked() {
                app.salir_app();
            }

            if !app.message.is_empty() {
                ui.add_space(10.0);
                ui.label(&app.message);
            }
        });
    });
}
