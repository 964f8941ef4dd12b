//! Sources operation - which Swift files get generated decoders.

use std::path::{Path, PathBuf};

use eyre::Result;
use jsongen_core::discover;

use crate::reports::{SourceEntry, SourcesReport};

/// Execute the sources operation.
pub fn sources(inputs: &[PathBuf], output_dir: Option<&Path>) -> Result<SourcesReport> {
    let entries = discover(inputs)?
        .into_iter()
        .map(|source| SourceEntry {
            output: if source.is_support_library() {
                None
            } else {
                Some(match output_dir {
                    Some(dir) => source.output_in(dir),
                    None => source.output_path.clone(),
                })
            },
            source: source.path,
        })
        .collect();

    Ok(SourcesReport { entries })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_support_library_has_no_output() {
        let dir = TempDir::new().unwrap();
        for name in ["JsonGen.swift", "Point.swift", "Point+JsonGen.swift"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let report = sources(&[dir.path().to_path_buf()], Some(Path::new("gen"))).unwrap();

        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].output, None);
        assert_eq!(
            report.entries[1].output,
            Some(PathBuf::from("gen/Point+JsonGen.swift"))
        );
    }
}
