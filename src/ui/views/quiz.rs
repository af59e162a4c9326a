use crate::QuizApp;
use crate::session::WARNING_SECS;
use crate::ui::layout::centered_panel;
use egui::{Button, Color32, Context, RichText, ScrollArea};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    // Clonamos la pregunta para no pelear con el borrow del selected
    let Some(question) = app.current_question().cloned() else {
        return;
    };
    let total = app.total_questions();
    let number = app.session.current_index + 1;

    centered_panel(ctx, 420.0, 600.0, |ui| {
        let panel_width = ui.available_width();

        // Cabecera: progreso, contador y puntuación
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("Question {number}/{total}")).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(format!("Score: {}/{total}", app.session.score)).strong());
                ui.add_space(20.0);
                let countdown = app.session.countdown;
                let time_text = RichText::new(format!("Time: {countdown}s")).strong();
                // En rojo cuando quedan 5 segundos o menos
                let time_text = if countdown <= WARNING_SECS {
                    time_text.color(Color32::RED)
                } else {
                    time_text
                };
                ui.label(time_text);
            });
        });

        ui.separator();
        ui.add_space(10.0);

        ui.vertical_centered(|ui| {
            let prompt_max_height = 150.0;
            ScrollArea::vertical()
                .max_height(prompt_max_height)
                .show(ui, |ui| {
                    ui.label(RichText::new(&question.prompt).heading());
                });
        });

        ui.add_space(16.0);

        // Una opción por radio button; la selección habilita el envío
        for option in &question.options {
            ui.radio_value(&mut app.session.selected, Some(option.clone()), option.as_str());
            ui.add_space(4.0);
        }

        ui.add_space(12.0);

        ui.vertical_centered(|ui| {
            let enviar = ui.add_enabled(
                app.session.selected.is_some(),
                Button::new("Submit Answer").min_size(egui::vec2(panel_width * 0.5, 36.0)),
            );
            if enviar.clicked() {
                let now = ctx.input(|i| i.time);
                app.procesar_respuesta(now);
            }
        });

        ui.add_space(8.0);
        if !app.message.is_empty() {
            ui.vertical_centered(|ui| {
                ui.label(&app.message);
            });
        }
    });
}
