//! Build errors for the engine builder.

use crate::engine::EngineError;
use thiserror::Error;

/// Errors that can occur when building an engine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Engine configuration could not be parsed: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Engine could not be built: {0}")]
    Engine(#[from] EngineError),

    #[error("Initial transition {index} could not be registered: {source}")]
    Registration {
        index: usize,
        #[source]
        source: EngineError,
    },
}
