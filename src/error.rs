use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Fatal, run-level failures. Per-file failures never reach this type; they
/// are folded into [`FileOutcome::Failed`](crate::batch::FileOutcome) and an
/// error artifact so the batch can continue.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("no input CSV files found in '{}'", dir.display())]
    NoInputs { dir: PathBuf },

    #[error(transparent)]
    Predictor(#[from] PredictorError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Failure of a single call into the external prediction tool. The batch loop
/// treats every variant the same way: write an error artifact and move on to
/// the next input file.
#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("prediction command `{command}` is not available: {reason}")]
    Unavailable { command: String, reason: String },

    #[error("{entry_point} failed ({status}): {stderr}")]
    Failed {
        entry_point: &'static str,
        status: ExitStatus,
        stderr: String,
    },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
