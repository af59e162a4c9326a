pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::bottom_panel;
use std::time::Duration;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Temporizador: un plazo por pregunta comparado contra el reloj
        // monótono de egui, avanzando el estado de forma síncrona.
        if self.state == AppState::Quiz {
            let now = ctx.input(|i| i.time);
            self.poll_timer(now);
            // Repintar aunque el usuario no toque nada, para que el contador baje
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado a las vistas
        match self.state {
            AppState::Welcome => views::welcome::ui_welcome(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Results => views::results::ui_results(self, ctx),
            AppState::LoadError => views::load_error::ui_load_error(self, ctx),
        }
    }
}
