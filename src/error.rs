//! Structured error types for the ResQ engine.
//!
//! The classification/filter core is total and never errors; these variants
//! cover the CLI stream layer (malformed JSON lines, stdin failures).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("json: {0}")]
  Json(#[from] serde_json::Error),

  #[error("io: {0}")]
  Io(#[from] std::io::Error),
}
