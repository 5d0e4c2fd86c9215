use std::path::Path;
use std::process::Command;

use log::{debug, info};

use crate::config::PropertyFlags;
use crate::error::PredictorError;

/// Everything the external tool needs for one solubility calculation: the
/// input CSV and the three files it writes as side effects.
pub struct SolubilityJob<'a> {
    pub input: &'a Path,
    pub validate_smiles: bool,
    pub results: &'a Path,
    pub detailed: &'a Path,
    pub log: &'a Path,
}

/// One property-prediction call: the input CSV, the requested property
/// groups, and the single CSV it writes.
pub struct PropertyJob<'a> {
    pub input: &'a Path,
    pub validate_smiles: bool,
    pub flags: PropertyFlags,
    pub properties: &'a Path,
}

/// The seam to the external prediction tool. Both entry points are opaque,
/// synchronous, and potentially failing; callers only care about the files
/// they leave behind and the errors they return. There is no timeout: a hang
/// inside the tool blocks the whole batch.
pub trait Predictor {
    /// Resolve the tool before any input file is touched. A failure here is
    /// fatal to the whole run.
    fn check(&self) -> Result<(), PredictorError>;

    fn calculate_solubility(&self, job: &SolubilityJob) -> Result<(), PredictorError>;

    fn predict_property(&self, job: &PropertyJob) -> Result<(), PredictorError>;
}

/// Production [`Predictor`] that shells out to the SolProp command-line tool,
/// one subcommand per entry point.
pub struct CommandPredictor {
    command: String,
}

impl CommandPredictor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    fn run(&self, entry_point: &'static str, mut cmd: Command) -> Result<(), PredictorError> {
        debug!("invoking `{}` for {entry_point}", self.command);
        let output = cmd.output()?;
        if output.status.success() {
            Ok(())
        } else {
            Err(PredictorError::Failed {
                entry_point,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            })
        }
    }
}

impl Predictor for CommandPredictor {
    fn check(&self) -> Result<(), PredictorError> {
        let unavailable = |reason: String| PredictorError::Unavailable {
            command: self.command.clone(),
            reason,
        };
        let output = Command::new(&self.command)
            .arg("--version")
            .output()
            .map_err(|e| unavailable(e.to_string()))?;
        if !output.status.success() {
            return Err(unavailable(format!("`--version` exited with {}", output.status)));
        }
        info!("resolved prediction command `{}`", self.command);
        Ok(())
    }

    fn calculate_solubility(&self, job: &SolubilityJob) -> Result<(), PredictorError> {
        let mut cmd = Command::new(&self.command);
        cmd.arg("solubility")
            .arg("--input")
            .arg(job.input)
            .arg("--results")
            .arg(job.results)
            .arg("--detailed")
            .arg(job.detailed)
            .arg("--log")
            .arg(job.log);
        if job.validate_smiles {
            cmd.arg("--validate-smiles");
        }
        self.run("calculate_solubility", cmd)
    }

    fn predict_property(&self, job: &PropertyJob) -> Result<(), PredictorError> {
        let mut cmd = Command::new(&self.command);
        cmd.arg("properties")
            .arg("--input")
            .arg(job.input)
            .arg("--output")
            .arg(job.properties);
        if job.flags.gsolv {
            cmd.arg("--gsolv");
        }
        if job.flags.hsolv {
            cmd.arg("--hsolv");
        }
        if job.flags.saq {
            cmd.arg("--saq");
        }
        if job.flags.solute_parameters {
            cmd.arg("--solute-parameters");
        }
        if job.validate_smiles {
            cmd.arg("--validate-smiles");
        }
        self.run("predict_property", cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job<'a>(input: &'a Path, out: &'a Path) -> SolubilityJob<'a> {
        SolubilityJob {
            input,
            validate_smiles: true,
            results: out,
            detailed: out,
            log: out,
        }
    }

    #[test]
    fn missing_command_is_unavailable() {
        let p = CommandPredictor::new("solprop-definitely-not-installed");
        match p.check() {
            Err(PredictorError::Unavailable { command, .. }) => {
                assert_eq!(command, "solprop-definitely-not-installed");
            }
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }

    #[test]
    fn zero_exit_is_ok() {
        // `true` ignores its arguments and exits 0
        let p = CommandPredictor::new("true");
        p.check().unwrap();
        let out = Path::new("/dev/null");
        p.calculate_solubility(&job(Path::new("sample.csv"), out)).unwrap();
    }

    #[test]
    fn nonzero_exit_maps_to_failed() {
        let p = CommandPredictor::new("false");
        let out = Path::new("/dev/null");
        match p.calculate_solubility(&job(Path::new("sample.csv"), out)) {
            Err(PredictorError::Failed { entry_point, status, .. }) => {
                assert_eq!(entry_point, "calculate_solubility");
                assert!(!status.success());
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }
}
