//! Discovery of Swift sources and naming of their generated counterparts.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Suffix that replaces `.swift` in generated file names.
pub const GENERATED_SUFFIX: &str = "+JsonGen.swift";

/// The hand-written support library. It is compiled with the sources but
/// never gets a generated file of its own.
pub const SUPPORT_LIBRARY: &str = "JsonGen.swift";

/// A Swift source file and where its generated decoders go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File name without directory (e.g. `Point.swift`).
    pub filename: String,
    /// Full path of the source.
    pub path: PathBuf,
    /// File name of the generated output (e.g. `Point+JsonGen.swift`).
    pub output_name: String,
    /// Full path of the generated output, next to the source.
    pub output_path: PathBuf,
}

impl SourceFile {
    /// Describe the source at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let output_name = output_name(&filename);
        let output_path = path.with_file_name(&output_name);
        Self {
            filename,
            path,
            output_name,
            output_path,
        }
    }

    /// Whether this is the support library rather than user declarations.
    pub fn is_support_library(&self) -> bool {
        self.filename == SUPPORT_LIBRARY
    }

    /// Where the output goes when redirected into `dir`.
    pub fn output_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.output_name)
    }

    fn is_candidate(&self) -> bool {
        self.filename.ends_with(".swift") && !self.filename.contains(GENERATED_SUFFIX)
    }
}

/// Output file name for a source file name: `Foo.swift` → `Foo+JsonGen.swift`.
pub fn output_name(filename: &str) -> String {
    match filename.strip_suffix(".swift") {
        Some(stem) => format!("{}{}", stem, GENERATED_SUFFIX),
        None => format!("{}{}", filename, GENERATED_SUFFIX),
    }
}

/// Collect the Swift sources named by `inputs`.
///
/// Each input is either a file or a directory. Directories contribute their
/// direct entries in name order. Generated files are skipped; the support
/// library is kept so callers can hand it to the compiler.
pub fn discover<P: AsRef<Path>>(inputs: &[P]) -> Result<Vec<SourceFile>> {
    let mut files = Vec::new();

    for input in inputs {
        let input = input.as_ref();
        let meta = std::fs::metadata(input)
            .wrap_err_with(|| format!("failed to read '{}'", input.display()))?;

        if meta.is_dir() {
            let mut entries = std::fs::read_dir(input)
                .wrap_err_with(|| format!("failed to list '{}'", input.display()))?
                .map(|entry| entry.map(|e| e.path()))
                .collect::<std::io::Result<Vec<_>>>()?;
            entries.sort();
            files.extend(entries.into_iter().map(SourceFile::new));
        } else {
            files.push(SourceFile::new(input));
        }
    }

    files.retain(SourceFile::is_candidate);
    tracing::debug!(count = files.len(), "discovered swift sources");
    Ok(files)
}
