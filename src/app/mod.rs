use crate::data::{read_questions, validate_questions};
use crate::model::{AppState, Question};
use crate::session::QuizSession;

// Submódulos
pub mod actions;

pub struct QuizApp {
    pub questions: Vec<Question>,
    pub session: QuizSession,
    pub state: AppState,
    pub message: String,
    pub load_error: Option<String>,
}

impl QuizApp {
    /// Carga el banco de preguntas y arranca en la pantalla de bienvenida.
    /// Si el banco falta o no es válido, el quiz no puede empezar y se
    /// muestra el error al usuario.
    pub fn new() -> Self {
        match read_questions().and_then(|qs| {
            validate_questions(&qs)?;
            Ok(qs)
        }) {
            Ok(questions) => Self::with_questions(questions),
            Err(e) => {
                log::error!("no se pudo cargar el banco de preguntas: {e:#}");
                Self {
                    questions: Vec::new(),
                    session: QuizSession::new(),
                    state: AppState::LoadError,
                    message: String::new(),
                    load_error: Some(format!("{e:#}")),
                }
            }
        }
    }

    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions,
            session: QuizSession::new(),
            state: AppState::Welcome,
            message: String::new(),
            load_error: None,
        }
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Pregunta en curso, si la partida sigue en marcha.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.session.current_index)
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}
