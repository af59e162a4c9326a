// src/results.rs

use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::Path;

/// Registro acumulativo de resultados, una fila por sesión guardada.
pub const RESULTS_FILE: &str = "results.csv";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResultSummary {
    pub timestamp: String,
    pub score: u32,
    pub total_questions: usize,
    pub percentage: f64,
}

impl ResultSummary {
    pub fn new(score: u32, total_questions: usize, percentage: f64) -> Self {
        Self {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            score,
            total_questions,
            percentage,
        }
    }
}

/// Añade una fila al registro. Si el fichero no existe todavía se crea
/// con la cabecera y esta sesión como única fila; si existe, sólo se
/// añade la fila (sin duplicar cabecera). Sin deduplicación: un usuario,
/// un proceso.
pub fn append_result(path: &Path, summary: &ResultSummary) -> Result<()> {
    let write_headers = !path.exists();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("no se pudo abrir {}", path.display()))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(write_headers)
        .from_writer(file);
    writer
        .serialize(summary)
        .context("no se pudo escribir la fila de resultados")?;
    writer.flush()?;

    log::info!("resultado guardado en {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    struct TempCsv(PathBuf);

    impl TempCsv {
        fn new(name: &str) -> Self {
            let path = std::env::temp_dir().join(format!("{name}_{}.csv", std::process::id()));
            let _ = fs::remove_file(&path);
            Self(path)
        }
    }

    impl Drop for TempCsv {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    fn read_back(path: &Path) -> (Vec<String>, Vec<ResultSummary>) {
        let mut reader = csv::Reader::from_path(path).expect("log should open");
        let headers = reader
            .headers()
            .expect("log should have headers")
            .iter()
            .map(str::to_owned)
            .collect();
        let rows = reader
            .deserialize()
            .collect::<Result<Vec<ResultSummary>, _>>()
            .expect("rows should deserialize");
        (headers, rows)
    }

    #[test]
    fn first_save_creates_the_log_with_headers() {
        let tmp = TempCsv::new("quiz_master_first_save");
        let summary = ResultSummary {
            timestamp: "2025-08-25 12:00:00".into(),
            score: 2,
            total_questions: 2,
            percentage: 100.0,
        };

        append_result(&tmp.0, &summary).expect("append should succeed");

        let (headers, rows) = read_back(&tmp.0);
        assert_eq!(
            headers,
            ["timestamp", "score", "total_questions", "percentage"]
        );
        assert_eq!(rows, vec![summary]);
    }

    #[test]
    fn second_save_appends_without_duplicating_headers() {
        let tmp = TempCsv::new("quiz_master_second_save");
        let first = ResultSummary {
            timestamp: "2025-08-25 12:00:00".into(),
            score: 1,
            total_questions: 2,
            percentage: 50.0,
        };
        let second = ResultSummary {
            timestamp: "2025-08-25 12:05:00".into(),
            score: 2,
            total_questions: 2,
            percentage: 100.0,
        };

        append_result(&tmp.0, &first).expect("first append should succeed");
        append_result(&tmp.0, &second).expect("second append should succeed");

        let (_, rows) = read_back(&tmp.0);
        assert_eq!(rows, vec![first, second]);

        let raw = fs::read_to_string(&tmp.0).expect("log should read");
        assert_eq!(raw.matches("timestamp").count(), 1);
    }

    #[test]
    fn summary_timestamp_has_the_expected_shape() {
        let summary = ResultSummary::new(3, 4, 75.0);
        // "%Y-%m-%d %H:%M:%S"
        assert_eq!(summary.timestamp.len(), 19);
        assert_eq!(&summary.timestamp[4..5], "-");
        assert_eq!(&summary.timestamp[10..11], " ");
        assert_eq!(summary.score, 3);
        assert_eq!(summary.total_questions, 4);
    }
}
