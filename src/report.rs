use std::io::{self, Write};
use std::path::Path;

use crate::artifact::{display_name, ArtifactSet};

/// Human-readable per-file summary, written next to the other artifacts once
/// both prediction calls have succeeded.
pub struct Summary<'a> {
    pub input_name: &'a str,
    /// Completion time in human format, e.g. `2024-01-31 09:15:00`.
    pub completed: &'a str,
    pub artifacts: &'a ArtifactSet,
}

impl Summary<'_> {
    pub fn generate(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut out = std::fs::File::create(path)?;
        let mut s = String::new();
        self.write(&mut s).unwrap();
        out.write_all(s.as_bytes())?;
        Ok(())
    }

    pub fn write(&self, mut out: impl std::fmt::Write) -> std::fmt::Result {
        writeln!(out, "SolProp ML - Prediction Summary")?;
        writeln!(out, "{}", "=".repeat(60))?;
        writeln!(out)?;
        writeln!(out, "Input file: {}", self.input_name)?;
        writeln!(out, "Timestamp: {}", self.completed)?;
        writeln!(out)?;
        writeln!(out, "Output files:")?;
        for artifact in self.artifacts.produced() {
            writeln!(out, "  - {}", display_name(artifact))?;
        }
        writeln!(out)?;
        writeln!(out, "Status: SUCCESS")?;
        Ok(())
    }
}

/// Aggregate outcome of one batch run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub succeeded: usize,
    pub failed: usize,
}

impl RunReport {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    pub fn all_ok(&self) -> bool {
        self.failed == 0
    }

    /// Final banner printed after the last file, distinguishing a clean run
    /// from a partial failure.
    pub fn print_banner(&self, output_dir: &Path) {
        println!("\n{}", "=".repeat(60));
        if self.all_ok() {
            println!("All {} file(s) processed successfully", self.total());
        } else {
            println!(
                "{} of {} file(s) had errors; check the error files",
                self.failed,
                self.total()
            );
        }
        println!("{}", "=".repeat(60));
        println!("\nResults available in '{}/'", output_dir.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_body() {
        let artifacts = ArtifactSet::new(Path::new("output"), "sample", "20240131_091500");
        let summary = Summary {
            input_name: "sample.csv",
            completed: "2024-01-31 09:15:00",
            artifacts: &artifacts,
        };
        let mut s = String::new();
        summary.write(&mut s).unwrap();
        assert!(s.starts_with("SolProp ML - Prediction Summary\n"));
        assert!(s.contains("Input file: sample.csv"));
        assert!(s.contains("Timestamp: 2024-01-31 09:15:00"));
        assert!(s.contains("  - sample_results_20240131_091500.csv"));
        assert!(s.contains("  - sample_detailed_20240131_091500.csv"));
        assert!(s.contains("  - sample_properties_20240131_091500.csv"));
        assert!(s.contains("  - sample_log_20240131_091500.log"));
        assert!(s.ends_with("Status: SUCCESS\n"));
        // the summary lists what was produced, never itself or an error file
        assert!(!s.contains("summary_"));
        assert!(!s.contains("error_"));
    }

    #[test]
    fn report_counts() {
        let report = RunReport {
            succeeded: 2,
            failed: 0,
        };
        assert!(report.all_ok());
        assert_eq!(report.total(), 2);
        let report = RunReport {
            succeeded: 1,
            failed: 1,
        };
        assert!(!report.all_ok());
    }
}
