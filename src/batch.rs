use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::{info, warn};

use crate::artifact::{display_name, timestamp_now, ArtifactSet};
use crate::config::Config;
use crate::error::{PredictorError, RunError};
use crate::predictor::{Predictor, PropertyJob, SolubilityJob};
use crate::report::{RunReport, Summary};

/// Terminal state of one input file. There are no retries and no cleanup:
/// whatever artifacts were written before a failure stay on disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileOutcome {
    Success,
    Failed,
}

/// List the CSV files in `dir`, non-recursively, sorted by path so the batch
/// order is deterministic. An empty result is fatal to the run.
pub fn discover_inputs(dir: &Path) -> Result<Vec<PathBuf>, RunError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    if files.is_empty() {
        return Err(RunError::NoInputs {
            dir: dir.to_path_buf(),
        });
    }
    Ok(files)
}

fn run_predictions(
    config: &Config,
    predictor: &dyn Predictor,
    input: &Path,
    artifacts: &ArtifactSet,
) -> Result<(), PredictorError> {
    println!("  Running solubility calculations...");
    predictor.calculate_solubility(&SolubilityJob {
        input,
        validate_smiles: config.validate_smiles,
        results: &artifacts.results,
        detailed: &artifacts.detailed,
        log: &artifacts.log,
    })?;
    println!("    results:  {}", display_name(&artifacts.results));
    println!("    detailed: {}", display_name(&artifacts.detailed));
    println!("    log:      {}", display_name(&artifacts.log));

    println!("  Running property predictions...");
    predictor.predict_property(&PropertyJob {
        input,
        validate_smiles: config.validate_smiles,
        flags: config.properties,
        properties: &artifacts.properties,
    })?;
    println!("    properties: {}", display_name(&artifacts.properties));

    if config.write_summary {
        let completed = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Summary {
            input_name: &display_name(input),
            completed: &completed,
            artifacts,
        }
        .generate(&artifacts.summary)?;
        println!("    summary: {}", display_name(&artifacts.summary));
    }
    Ok(())
}

fn render_error(input_name: &str, timestamp: &str, err: &PredictorError) -> String {
    let mut body = String::new();
    writeln!(body, "Error processing {input_name}").unwrap();
    writeln!(body, "Timestamp: {timestamp}").unwrap();
    writeln!(body, "Error: {err}").unwrap();
    // the closest thing we have to the upstream traceback
    let mut source = err.source();
    if source.is_some() {
        writeln!(body, "\nCaused by:").unwrap();
    }
    while let Some(cause) = source {
        writeln!(body, "  {cause}").unwrap();
        source = cause.source();
    }
    body
}

/// Run both prediction calls for one input file. A failure of either call is
/// captured into an error artifact and reported in the return value; it is
/// never propagated, so the caller can move on to the next file.
pub fn process_file(
    config: &Config,
    predictor: &dyn Predictor,
    input: &Path,
    timestamp: &str,
) -> FileOutcome {
    let base = match input.file_stem() {
        Some(stem) => stem.to_string_lossy().into_owned(),
        None => display_name(input).into_owned(),
    };
    let artifacts = ArtifactSet::new(&config.output_dir, &base, timestamp);
    match run_predictions(config, predictor, input, &artifacts) {
        Ok(()) => {
            info!("processed {}", input.display());
            println!("  Successfully processed {}", display_name(input));
            FileOutcome::Success
        }
        Err(e) => {
            let input_name = display_name(input);
            println!("  Error processing {input_name}: {e}");
            let body = render_error(&input_name, timestamp, &e);
            if let Err(e) = fs::write(&artifacts.error, body) {
                warn!("failed to write error file {}: {e}", artifacts.error.display());
            } else {
                println!("  Error details saved to: {}", display_name(&artifacts.error));
            }
            FileOutcome::Failed
        }
    }
}

/// The whole batch: resolve the predictor, discover the inputs, process each
/// one sequentially, and aggregate the outcomes. Only an empty input
/// directory or an unresolvable predictor abort the run; per-file failures
/// are recorded and skipped over.
pub fn run(config: &Config, predictor: &dyn Predictor) -> Result<RunReport, RunError> {
    let inputs = discover_inputs(&config.input_dir)?;
    println!("Found {} input file(s)", inputs.len());

    predictor.check()?;
    fs::create_dir_all(&config.output_dir)?;

    let mut report = RunReport::default();
    for input in &inputs {
        println!("\n{}", "=".repeat(60));
        println!("Processing: {}", display_name(input));
        println!("{}", "=".repeat(60));
        let timestamp = timestamp_now();
        match process_file(config, predictor, input, &timestamp) {
            FileOutcome::Success => report.succeeded += 1,
            FileOutcome::Failed => report.failed += 1,
        }
    }
    Ok(report)
}
