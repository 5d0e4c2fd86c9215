use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::RunError;

/// The property groups requested from the prediction tool, one flag per group.
/// Both original entry points default to predicting everything.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct PropertyFlags {
    /// Solvation free energy.
    pub gsolv: bool,

    /// Solvation enthalpy.
    pub hsolv: bool,

    /// Aqueous solubility.
    pub saq: bool,

    /// Abraham solute parameters.
    pub solute_parameters: bool,
}

impl Default for PropertyFlags {
    fn default() -> Self {
        Self {
            gsolv: true,
            hsolv: true,
            saq: true,
            solute_parameters: true,
        }
    }
}

/// Everything one batch run needs, passed explicitly instead of read from
/// ambient process state. Loadable from TOML; command-line flags override
/// individual fields.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The directory scanned (non-recursively) for input CSV files. Each file
    /// needs a `solute` column (SMILES or InChI) and may carry optional
    /// `solvent` and `temperature` columns.
    pub input_dir: PathBuf,

    /// The directory where all output artifacts are written. Created if
    /// absent; existing files in it are never read, modified, or deleted.
    pub output_dir: PathBuf,

    /// The external prediction command to invoke, resolved through `PATH` or
    /// given as an absolute path.
    pub predictor: String,

    /// Whether to ask the prediction tool to validate SMILES/InChI input.
    pub validate_smiles: bool,

    /// Whether to write a human-readable summary file for each successfully
    /// processed input.
    pub write_summary: bool,

    /// Which property groups to request from the prediction tool.
    pub properties: PropertyFlags,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
            predictor: "solprop".to_owned(),
            validate_smiles: true,
            write_summary: true,
            properties: PropertyFlags::default(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RunError> {
        Ok(toml::from_str(&read_to_string(path)?)?)
    }
}
