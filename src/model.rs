use serde::{Deserialize, Serialize};

/// Valor registrado cuando el temporizador expira sin opción elegida.
pub const NO_ANSWER: &str = "No answer";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    #[serde(rename = "question")]
    pub prompt: String, // Pregunta
    pub options: Vec<String>, // Opciones en orden
    pub correct_answer: String, // Debe coincidir exactamente con una opción
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub prompt: String,
    pub chosen: String, // Opción elegida o NO_ANSWER
    pub correct_answer: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Results,
    LoadError,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Welcome
    }
}
