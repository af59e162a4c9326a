use super::*;

impl QuizApp {
    /// Empieza (o reinicia) la partida desde la primera pregunta.
    pub fn empezar_quiz(&mut self, now: f64) {
        self.session.start(now);
        self.message.clear();
        // Banco vacío: no hay nada que preguntar, directo al resumen
        if self.questions.is_empty() {
            self.state = AppState::Results;
        } else {
            self.state = AppState::Quiz;
        }
    }

    /// Envío manual. Exige una opción seleccionada; el temporizador se
    /// cancela en el acto y la partida avanza a la siguiente pregunta
    /// o al resumen si era la última.
    pub fn procesar_respuesta(&mut self, now: f64) {
        let Some(chosen) = self.session.selected.take() else {
            self.message = "⚠ Select an option before submitting.".into();
            return;
        };
        let Some(question) = self.current_question() else {
            return;
        };

        let correct_answer = question.correct_answer.clone();
        let question = question.clone();
        if self.session.record_answer(&question, &chosen) {
            self.message = "✅ Well done! That's correct!".into();
        } else {
            self.message = format!("❌ Wrong answer! The correct answer was: {correct_answer}");
        }
        self.advance(now);
    }

    /// Comprueba el plazo de la pregunta en curso. Al llegar a cero se
    /// fuerza el envío con el centinela "sin respuesta" y se avanza
    /// exactamente igual que con un envío manual.
    pub fn poll_timer(&mut self, now: f64) {
        if self.state != AppState::Quiz {
            return;
        }
        if !self.session.tick(now) {
            return;
        }
        let Some(question) = self.current_question().cloned() else {
            return;
        };
        self.session.record_timeout(&question);
        self.message = "⏰ Time ran out for this question!".into();
        self.advance(now);
    }

    fn advance(&mut self, now: f64) {
        if self.session.is_finished(self.total_questions()) {
            self.state = AppState::Results;
        } else {
            self.session.arm_timer(now);
        }
    }

    /// "Try again" desde el resumen: puntuación a cero, respuestas vacías
    /// y vuelta a la primera pregunta.
    pub fn reintentar(&mut self, now: f64) {
        self.empezar_quiz(now);
    }

    /// Añade el resumen de la sesión al registro CSV y deja el resultado
    /// (éxito o error) en el mensaje de la vista.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn guardar_resultados(&mut self) {
        use crate::results::{RESULTS_FILE, ResultSummary, append_result};

        let total = self.total_questions();
        let summary = ResultSummary::new(self.session.score, total, self.session.percentage(total));
        match append_result(std::path::Path::new(RESULTS_FILE), &summary) {
            Ok(()) => self.message = "📊 Results saved successfully!".into(),
            Err(e) => {
                log::warn!("no se pudo guardar el resultado: {e:#}");
                self.message = format!("❌ Failed to save results: {e:#}");
            }
        }
    }

    pub fn salir_app(&mut self) {
        #[cfg(not(target_arch = "wasm32"))]
        std::process::exit(0);
        #[cfg(target_arch = "wasm32")]
        {
            self.message = "Close the browser tab to quit.".into();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> QuizApp {
        QuizApp::with_questions(vec![
            Question {
                prompt: "What keyword defines a function in Python?".into(),
                options: vec!["def".into(), "fn".into(), "func".into()],
                correct_answer: "def".into(),
            },
            Question {
                prompt: "Is Python dynamically typed?".into(),
                options: vec!["True".into(), "False".into()],
                correct_answer: "True".into(),
            },
        ])
    }

    #[test]
    fn starting_the_quiz_enters_the_first_question() {
        let mut app = app();
        app.empezar_quiz(0.0);
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.session.current_index, 0);
        assert_eq!(app.current_question().unwrap().correct_answer, "def");
    }

    #[test]
    fn submitting_without_a_selection_does_not_advance() {
        let mut app = app();
        app.empezar_quiz(0.0);
        app.procesar_respuesta(1.0);
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.session.current_index, 0);
        assert!(app.session.answers.is_empty());
        assert!(!app.message.is_empty());
    }

    #[test]
    fn last_submission_moves_to_results_exactly_once() {
        let mut app = app();
        app.empezar_quiz(0.0);

        app.session.selected = Some("def".into());
        app.procesar_respuesta(1.0);
        assert_eq!(app.state, AppState::Quiz);

        app.session.selected = Some("False".into());
        app.procesar_respuesta(2.0);
        assert_eq!(app.state, AppState::Results);
        assert_eq!(app.session.score, 1);

        // Sin reintento explícito nunca se vuelve a entrar en la partida
        app.poll_timer(500.0);
        assert_eq!(app.state, AppState::Results);
        assert_eq!(app.session.answers.len(), 2);
    }

    #[test]
    fn timer_expiry_forces_a_no_answer_submission() {
        let mut app = app();
        app.empezar_quiz(0.0);

        app.poll_timer(10.0);
        assert_eq!(app.session.current_index, 0);

        app.poll_timer(15.0);
        assert_eq!(app.session.current_index, 1);
        assert_eq!(app.session.answers[0].chosen, crate::model::NO_ANSWER);
        assert!(!app.session.answers[0].is_correct);
        assert_eq!(app.state, AppState::Quiz);

        // La segunda pregunta arma su propio plazo de 15s desde el vencimiento
        app.poll_timer(29.0);
        assert_eq!(app.session.current_index, 1);
        app.poll_timer(30.0);
        assert_eq!(app.state, AppState::Results);
        assert_eq!(app.session.score, 0);
    }

    #[test]
    fn timeout_and_manual_submission_advance_identically() {
        let mut timed_out = app();
        timed_out.empezar_quiz(0.0);
        timed_out.poll_timer(15.0);

        let mut manual = app();
        manual.empezar_quiz(0.0);
        manual.session.selected = Some("fn".into());
        manual.procesar_respuesta(3.0);

        assert_eq!(timed_out.session.current_index, manual.session.current_index);
        assert_eq!(timed_out.session.score, manual.session.score);
        assert_eq!(timed_out.state, manual.state);
    }

    #[test]
    fn retry_resets_the_session() {
        let mut app = app();
        app.empezar_quiz(0.0);
        app.session.selected = Some("def".into());
        app.procesar_respuesta(1.0);
        app.poll_timer(16.0);
        assert_eq!(app.state, AppState::Results);

        app.reintentar(20.0);
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.session.score, 0);
        assert!(app.session.answers.is_empty());
        assert_eq!(app.session.current_index, 0);
    }

    #[test]
    fn empty_bank_goes_straight_to_results() {
        let mut app = QuizApp::with_questions(Vec::new());
        app.empezar_quiz(0.0);
        assert_eq!(app.state, AppState::Results);
        assert_eq!(app.session.score_line(0), "0/0 (0.0%)");
    }
}
