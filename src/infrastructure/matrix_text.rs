use crate::domain::graph::Matrix;
use anyhow::{Context, Result};
use thiserror::Error;
use tokio::fs;

/// Failures while turning matrix text into a square matrix. Raised before any
/// graph exists.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("invalid integer {token:?} on line {line}")]
    InvalidToken { line: usize, token: String },

    #[error("negative entry {value} at row {row}, column {column}")]
    NegativeEntry { row: usize, column: usize, value: i64 },

    #[error("adjacency matrix must be square: found {rows} rows, but row {row} has {len} entries")]
    NotSquare { rows: usize, row: usize, len: usize },
}

/// Parses one matrix row per line.
///
/// `#` starts a comment, brackets/parentheses are ignored and commas separate
/// values like whitespace does. Lines with no values are skipped, so a matrix
/// written as a multi-line JSON array parses too.
pub fn parse_matrix(text: &str) -> Result<Matrix, MatrixError> {
    let mut matrix: Matrix = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.split_once('#').map_or(raw, |(head, _)| head);
        let cleaned: String = line
            .chars()
            .map(|c| match c {
                '[' | ']' | '(' | ')' | ',' => ' ',
                other => other,
            })
            .collect();

        let mut row = Vec::new();
        for token in cleaned.split_whitespace() {
            let value: i64 = token.parse().map_err(|_| MatrixError::InvalidToken {
                line: idx + 1,
                token: token.to_string(),
            })?;
            let cell = u64::try_from(value).map_err(|_| MatrixError::NegativeEntry {
                row: matrix.len(),
                column: row.len(),
                value,
            })?;
            row.push(cell);
        }

        if !row.is_empty() {
            matrix.push(row);
        }
    }

    let rows = matrix.len();
    if let Some((row, r)) = matrix.iter().enumerate().find(|(_, r)| r.len() != rows) {
        return Err(MatrixError::NotSquare {
            rows,
            row,
            len: r.len(),
        });
    }

    Ok(matrix)
}

pub async fn read_matrix_file(path: &str) -> Result<Matrix> {
    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("reading matrix file: {path}"))?;
    let matrix = parse_matrix(&raw).with_context(|| format!("parsing matrix file: {path}"))?;
    Ok(matrix)
}
