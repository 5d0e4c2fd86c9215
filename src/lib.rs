//! Batch runner around the external SolProp prediction tool.
//!
//! The crate does no chemistry of its own: it discovers CSV files in an input
//! directory and, for each one, drives two entry points of the external tool
//! (solubility calculation and property prediction), naming the timestamped
//! artifacts they write. A failure while processing one file is captured into
//! an error file and the batch moves on to the next input; only an empty
//! input directory or an unresolvable prediction command abort the run.

pub mod artifact;
pub mod batch;
pub mod config;
pub mod error;
pub mod predictor;
pub mod report;

pub use batch::{discover_inputs, process_file, run, FileOutcome};
pub use config::{Config, PropertyFlags};
pub use error::{PredictorError, RunError};
pub use predictor::{CommandPredictor, Predictor, PropertyJob, SolubilityJob};
pub use report::{RunReport, Summary};
