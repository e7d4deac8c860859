use thiserror::Error;

/// Engine-level error type.
///
/// Only upstream failures are fatal: the engine refuses to run on empty
/// input, since that means the extraction collaborator produced nothing.
/// Sections that fail to parse are never errors; they become salvage blocks
/// on the record instead.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("input text is empty; upstream extraction produced no content")]
    EmptyInput,
}
