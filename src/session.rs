use crate::model::{AnswerRecord, NO_ANSWER, Question};

/// Segundos por pregunta.
pub const QUESTION_SECS: u32 = 15;
/// Por debajo de este valor el contador se pinta en rojo.
pub const WARNING_SECS: u32 = 5;

/// Estado de una partida: índice actual, puntuación, respuestas registradas
/// y el temporizador de la pregunta en curso.
///
/// El temporizador es un plazo absoluto comparado contra un reloj monótono
/// (`now`, en segundos) que inyecta quien llama; aquí no hay callbacks ni
/// estado global, así que toda la máquina de estados se prueba sin UI.
pub struct QuizSession {
    pub current_index: usize,
    pub score: u32,
    pub answers: Vec<AnswerRecord>,
    pub selected: Option<String>,
    pub countdown: u32,
    deadline: Option<f64>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            current_index: 0,
            score: 0,
            answers: Vec::new(),
            selected: None,
            countdown: QUESTION_SECS,
            deadline: None,
        }
    }

    /// Reinicia la partida y arma el temporizador de la primera pregunta.
    pub fn start(&mut self, now: f64) {
        *self = Self::new();
        self.arm_timer(now);
    }

    /// Arma el plazo de la pregunta actual: `now + 15s`.
    pub fn arm_timer(&mut self, now: f64) {
        self.deadline = Some(now + QUESTION_SECS as f64);
        self.countdown = QUESTION_SECS;
    }

    fn cancel_timer(&mut self) {
        self.deadline = None;
    }

    /// Segundos enteros que quedan, siempre dentro de [0, 15].
    pub fn remaining(&self, now: f64) -> u32 {
        match self.deadline {
            Some(deadline) => (deadline - now).ceil().clamp(0.0, QUESTION_SECS as f64) as u32,
            None => QUESTION_SECS,
        }
    }

    /// Actualiza el contador y devuelve `true` si el plazo ha vencido.
    /// No avanza la pregunta: eso lo decide quien llama (ver `QuizApp`).
    pub fn tick(&mut self, now: f64) -> bool {
        if self.deadline.is_none() {
            return false;
        }
        self.countdown = self.remaining(now);
        self.countdown == 0
    }

    /// Puntúa una respuesta enviada manualmente: comparación exacta y
    /// sensible a mayúsculas contra la respuesta correcta almacenada.
    /// Registra el resultado, cancela el temporizador y avanza el índice.
    pub fn record_answer(&mut self, question: &Question, chosen: &str) -> bool {
        let is_correct = chosen == question.correct_answer;
        self.push_record(question, chosen.to_owned(), is_correct);
        is_correct
    }

    /// Registra el centinela "sin respuesta" al expirar el temporizador.
    /// Siempre cuenta como fallo y avanza igual que un envío manual.
    pub fn record_timeout(&mut self, question: &Question) {
        self.push_record(question, NO_ANSWER.to_owned(), false);
    }

    fn push_record(&mut self, question: &Question, chosen: String, is_correct: bool) {
        if is_correct {
            self.score += 1;
        }
        self.answers.push(AnswerRecord {
            prompt: question.prompt.clone(),
            chosen,
            correct_answer: question.correct_answer.clone(),
            is_correct,
        });
        self.current_index += 1;
        self.selected = None;
        self.cancel_timer();
    }

    pub fn is_finished(&self, total: usize) -> bool {
        self.current_index >= total
    }

    pub fn percentage(&self, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        (self.score as f64 / total as f64) * 100.0
    }

    /// Línea de puntuación final, p. ej. "2/2 (100.0%)".
    pub fn score_line(&self, total: usize) -> String {
        format!("{}/{} ({:.1}%)", self.score, total, self.percentage(total))
    }
}
