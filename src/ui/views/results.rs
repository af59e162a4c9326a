use crate::QuizApp;
use crate::model::NO_ANSWER;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Button, Color32, Context, Frame, RichText, ScrollArea};

fn score_tier(percentage: f64) -> (&'static str, &'static str) {
    if percentage >= 80.0 {
        ("🎉", "Excellent! You're a Python expert!")
    } else if percentage >= 60.0 {
        ("👍", "Good job! You know your Python!")
    } else {
        ("📚", "Keep learning! You'll get better!")
    }
}

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let total = app.total_questions();
    let percentage = app.session.percentage(total);
    let (emoji, mensaje) = score_tier(percentage);

    centered_panel(ctx, 560.0, 600.0, |ui| {
        let panel_width = ui.available_width();

        ui.vertical_centered(|ui| {
            ui.heading(format!(
                "{emoji} Final Score: {}",
                app.session.score_line(total)
            ));
            ui.add_space(8.0);
            ui.label(mensaje);
        });

        ui.add_space(12.0);

        // Repaso pregunta a pregunta
        let max_height = 300.0;
        ScrollArea::vertical()
            .max_height(max_height)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for (i, answer) in app.session.answers.iter().enumerate() {
                    Frame::default()
                        .fill(ui.visuals().faint_bg_color)
                        .inner_margin(egui::Margin::symmetric(8, 6))
                        .show(ui, |ui| {
                            ui.set_width(panel_width - 16.0);
                            ui.label(
                                RichText::new(format!("{}. {}", i + 1, answer.prompt)).strong(),
                            );

                            let (icon, color) = if answer.is_correct {
                                ("✅", Color32::GREEN)
                            } else {
                                ("❌", Color32::RED)
                            };
                            let chosen = if answer.chosen == NO_ANSWER {
                                format!("⏰ {NO_ANSWER}")
                            } else {
                                answer.chosen.clone()
                            };
                            ui.label(
                                RichText::new(format!("Your answer: {chosen} {icon}")).color(color),
                            );
                            if !answer.is_correct {
                                ui.label(format!("Correct answer: {}", answer.correct_answer));
                            }
                        });
                    ui.add_space(5.0);
                }
            });

        ui.add_space(16.0);

        // Botones de acción
        let (reintentar, guardar) = two_button_row(ui, panel_width, "🔄 Try Again", "💾 Save Results");
        if reintentar {
            let now = ctx.input(|i| i.time);
            app.reintentar(now);
        }
        if guardar {
            guardar_resultados(app);
        }

        ui.add_space(5.0);
        ui.vertical_centered(|ui| {
            if ui
                .add_sized([(panel_width - 8.0) / 2.0, 36.0], Button::new("❌ Quit"))
                .clicked()
            {
                app.salir_app();
            }
        });

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(&app.message);
            });
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn guardar_resultados(app: &mut QuizApp) {
    app.guardar_resultados();
}

// En la web no hay fichero de resultados donde escribir
#[cfg(target_arch = "wasm32")]
fn guardar_resultados(app: &mut QuizApp) {
    app.message = "Saving results is only available in the desktop app.".into();
}
