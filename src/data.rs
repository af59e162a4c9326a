// src/data.rs

use crate::model::Question;
use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Fichero externo con el banco de preguntas.
pub const QUESTIONS_FILE: &str = "questions.json";

#[derive(Deserialize)]
struct QuestionBank {
    questions: Vec<Question>,
}

fn parse_questions(json: &str) -> Result<Vec<Question>> {
    let bank: QuestionBank =
        serde_json::from_str(json).context("el banco de preguntas no es JSON válido")?;
    Ok(bank.questions)
}

/// Carga el banco de preguntas desde `questions.json` en el directorio actual.
/// Si falta el fichero el quiz no puede empezar (error fatal para el usuario).
#[cfg(not(target_arch = "wasm32"))]
pub fn read_questions() -> Result<Vec<Question>> {
    let json = std::fs::read_to_string(QUESTIONS_FILE)
        .with_context(|| format!("no se pudo leer {QUESTIONS_FILE}"))?;
    let questions = parse_questions(&json)?;
    log::info!("cargadas {} preguntas de {QUESTIONS_FILE}", questions.len());
    Ok(questions)
}

/// En la web no hay directorio de trabajo: el banco va embebido en el binario.
#[cfg(target_arch = "wasm32")]
pub fn read_questions() -> Result<Vec<Question>> {
    let json = include_str!("../questions.json");
    parse_questions(json)
}

/// Valida que cada pregunta tenga opciones y que la respuesta correcta
/// sea exactamente una de ellas.
pub fn validate_questions(questions: &[Question]) -> Result<()> {
    for (i, q) in questions.iter().enumerate() {
        if q.options.is_empty() {
            bail!("la pregunta {} no tiene opciones", i + 1);
        }
        if !q.options.contains(&q.correct_answer) {
            bail!(
                "la respuesta correcta de la pregunta {} no está entre sus opciones",
                i + 1
            );
        }
    }
    Ok(())
}
