use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use solprop_batch::{run, CommandPredictor, Config, RunError};

/// Batch runner for SolProp solubility and solvation-property predictions.
///
/// Scans the input directory for CSV files and, for each one, runs the
/// external prediction tool twice (solubility calculation and property
/// prediction), writing timestamped result, log, and summary files to the
/// output directory. One file's failure never stops the batch.
#[derive(Parser)]
struct Cli {
    /// The directory to scan for input CSV files. Defaults to `input`.
    #[arg(short, long)]
    input_dir: Option<PathBuf>,

    /// The directory where output artifacts are written, created if absent.
    /// Defaults to `output`.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Optional TOML config file. Command-line flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// The external prediction command to invoke. Defaults to `solprop`.
    #[arg(short, long)]
    predictor: Option<String>,

    /// Skip SMILES/InChI validation in the prediction tool.
    #[arg(long)]
    no_validate: bool,

    /// Skip writing the per-file summary text file.
    #[arg(long)]
    no_summary: bool,

    /// Skip the solvation free energy prediction.
    #[arg(long)]
    no_gsolv: bool,

    /// Skip the solvation enthalpy prediction.
    #[arg(long)]
    no_hsolv: bool,

    /// Skip the aqueous solubility prediction.
    #[arg(long)]
    no_saq: bool,

    /// Skip the Abraham solute parameter prediction.
    #[arg(long)]
    no_solute_parameters: bool,
}

impl Cli {
    fn into_config(self) -> Result<Config, RunError> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(dir) = self.input_dir {
            config.input_dir = dir;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(predictor) = self.predictor {
            config.predictor = predictor;
        }
        if self.no_validate {
            config.validate_smiles = false;
        }
        if self.no_summary {
            config.write_summary = false;
        }
        if self.no_gsolv {
            config.properties.gsolv = false;
        }
        if self.no_hsolv {
            config.properties.hsolv = false;
        }
        if self.no_saq {
            config.properties.saq = false;
        }
        if self.no_solute_parameters {
            config.properties.solute_parameters = false;
        }
        Ok(config)
    }
}


fn main() -> ExitCode {
    env_logger::init();

    let config = match Cli::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", "=".repeat(60));
    println!("SolProp ML - Solubility Prediction");
    println!("{}", "=".repeat(60));
    println!();

    let predictor = CommandPredictor::new(config.predictor.as_str());
    match run(&config, &predictor) {
        Ok(report) => {
            report.print_banner(&config.output_dir);
            ExitCode::SUCCESS
        }
        Err(e @ RunError::NoInputs { .. }) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("Please add a CSV file with the following columns:");
            eprintln!("  - solute (required): SMILES or InChI of solute");
            eprintln!("  - solvent (optional): SMILES or InChI of solvent");
            eprintln!("  - temperature (optional): Temperature in Kelvin");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
