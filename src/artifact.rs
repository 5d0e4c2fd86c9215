use std::borrow::Cow;
use std::path::{Path, PathBuf};

use chrono::Local;

/// The file name as printable text, falling back to the whole path for paths
/// without one.
pub fn display_name(path: &Path) -> Cow<'_, str> {
    path.file_name().unwrap_or(path.as_os_str()).to_string_lossy()
}

/// Current local time at second resolution, as embedded in artifact names.
/// Two files processed within the same second share a timestamp; their base
/// names keep the artifact sets apart.
pub fn timestamp_now() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// The fixed set of output paths for one input file, following the naming
/// convention `{base}_{kind}_{YYYYMMDD_HHMMSS}.{ext}`. All six paths share one
/// base name and one timestamp; only the ones a run actually produces end up
/// on disk (results, detailed, properties, log, and optionally summary on
/// success; error on failure).
#[derive(Debug)]
pub struct ArtifactSet {
    pub results: PathBuf,
    pub detailed: PathBuf,
    pub properties: PathBuf,
    pub log: PathBuf,
    pub summary: PathBuf,
    pub error: PathBuf,
}

impl ArtifactSet {
    pub fn new(output_dir: &Path, base_name: &str, timestamp: &str) -> Self {
        let name = |kind: &str, ext: &str| {
            output_dir.join(format!("{base_name}_{kind}_{timestamp}.{ext}"))
        };
        Self {
            results: name("results", "csv"),
            detailed: name("detailed", "csv"),
            properties: name("properties", "csv"),
            log: name("log", "log"),
            summary: name("summary", "txt"),
            error: name("error", "txt"),
        }
    }

    /// The artifacts a fully successful file produces, in the order they are
    /// listed in the summary file.
    pub fn produced(&self) -> [&Path; 4] {
        [&self.results, &self.detailed, &self.properties, &self.log]
    }
}
