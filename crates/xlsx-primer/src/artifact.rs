use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PrimerError;

/// Where generated workbooks land.
///
/// The defaults anchor at the crate's `target/` directory, so artifacts are
/// writable in any checkout and `cargo clean` sweeps them away.
#[derive(Clone, Debug)]
pub struct ArtifactConfig {
    /// Base directory the output folder is created under.
    pub root: PathBuf,
    /// Name of the output folder itself.
    pub subdir: String,
    /// Extension appended when a file name carries none.
    pub default_ext: String,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            root: Path::new(env!("CARGO_MANIFEST_DIR")).join("target"),
            subdir: "excels".to_string(),
            default_ext: "xlsx".to_string(),
        }
    }
}

impl ArtifactConfig {
    /// Resolve the artifact path for `name` inside `fixture`, creating the
    /// output directory if it does not exist yet.
    ///
    /// The fixture prefix is unconditional so that identically-named tests
    /// in different fixtures never collide. If `name` already contains a
    /// `.` it is kept verbatim; otherwise [`Self::default_ext`] is appended.
    pub fn resolve(&self, fixture: &str, name: &str) -> Result<PathBuf, PrimerError> {
        let dir = self.root.join(&self.subdir);
        fs::create_dir_all(&dir)?;

        let mut file = format!("{fixture}-{name}");
        if !file.contains('.') {
            file.push('.');
            file.push_str(&self.default_ext);
        }
        let path = dir.join(file);
        tracing::debug!(path = %path.display(), "resolved artifact path");
        Ok(path)
    }
}

/// Resolve an artifact path under the default configuration.
///
/// Callers pass their own identity explicitly; nothing is inferred from the
/// call stack or the test harness.
pub fn workbook_path(fixture: &str, name: &str) -> Result<PathBuf, PrimerError> {
    ArtifactConfig::default().resolve(fixture, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(root: &Path) -> ArtifactConfig {
        ArtifactConfig {
            root: root.to_path_buf(),
            ..ArtifactConfig::default()
        }
    }

    #[test]
    fn appends_default_extension_when_name_has_none() {
        let tmp = tempfile::tempdir().unwrap();
        let path = config_in(tmp.path()).resolve("demo", "basic_usage").unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "demo-basic_usage.xlsx"
        );
    }

    #[test]
    fn keeps_explicit_extension_verbatim() {
        let tmp = tempfile::tempdir().unwrap();
        let path = config_in(tmp.path()).resolve("demo", "trace.txt").unwrap();
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), "demo-trace.txt");
    }

    #[test]
    fn prefixes_the_fixture_name() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = config_in(tmp.path());
        let a = cfg.resolve("fixture_a", "same_test").unwrap();
        let b = cfg.resolve("fixture_b", "same_test").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn creates_the_output_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = config_in(tmp.path());
        assert!(!tmp.path().join("excels").exists());
        cfg.resolve("demo", "anything").unwrap();
        assert!(tmp.path().join("excels").is_dir());
    }

    #[test]
    fn resolution_is_deterministic() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = config_in(tmp.path());
        let first = cfg.resolve("demo", "again").unwrap();
        let second = cfg.resolve("demo", "again").unwrap();
        assert_eq!(first, second);
    }
}
