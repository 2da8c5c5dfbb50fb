//! Study configuration management.
//!
//! This module provides configuration loading, global verbose flag
//! management, and the study configuration types. The parameter lists the
//! sweeps run over are plain data handed to the harness, so studies are
//! testable without touching the loader or any interactive input.

mod defaults;

pub use defaults::StudyDefaults;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Once, OnceLock};

use serde::Deserialize;

// Global verbose flag for controlling debug output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag. When true, debug messages will be printed.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Canonical list of candidate config file names we search for on disk.
const CONFIG_FILENAMES: &[&str] = &["degrade.yml", "degrade.yaml"];

/// Public handle that stores the loaded configuration, its source path, and warnings.
pub struct StudyConfigHandle {
    pub config: StudyConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl StudyConfigHandle {
    fn with_config(config: StudyConfig, source: Option<PathBuf>, warnings: Vec<String>) -> Self {
        Self {
            config,
            source,
            warnings,
        }
    }
}

/// Complete configuration file structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StudyConfig {
    pub defaults: StudyDefaults,
}

impl StudyConfig {
    fn sanitize(mut self) -> Self {
        self.defaults.sanitize();
        self
    }
}

/// Load configuration from disk, optionally forcing a specific path.
pub fn load_study_config(custom_path: Option<&Path>) -> StudyConfigHandle {
    let mut warnings = Vec::new();
    let candidates = get_config_candidates(custom_path);

    for candidate in candidates {
        if !candidate.exists() || !candidate.is_file() {
            continue;
        }

        match fs::read_to_string(&candidate) {
            Ok(contents) => match serde_yaml::from_str::<StudyConfig>(&contents) {
                Ok(config) => {
                    let sanitized = config.sanitize();
                    let source = fs::canonicalize(&candidate).unwrap_or(candidate);
                    return StudyConfigHandle::with_config(sanitized, Some(source), warnings);
                }
                Err(err) => warnings.push(format!(
                    "Failed to parse study config {}: {}",
                    candidate.display(),
                    err
                )),
            },
            Err(err) => warnings.push(format!(
                "Failed to read study config {}: {}",
                candidate.display(),
                err
            )),
        }
    }

    warnings.push("No study config found; using built-in defaults.".to_string());
    StudyConfigHandle::with_config(StudyConfig::default(), None, warnings)
}

/// Get list of config file candidates to try
fn get_config_candidates(custom_path: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = custom_path {
        candidates.push(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var("DEGRADE_CONFIG") {
        candidates.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(cwd.join("config").join(name));
            candidates.push(cwd.join(name));
        }
    }

    if let Some(home_dir) = dirs::home_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(home_dir.join("degrade").join(name));
        }
    }

    candidates
}

static STUDY_CONFIG_HANDLE: OnceLock<StudyConfigHandle> = OnceLock::new();
static PRINT_CONFIG_ONCE: Once = Once::new();

/// Access the global study configuration (loaded once per process).
pub fn study_config_handle() -> &'static StudyConfigHandle {
    STUDY_CONFIG_HANDLE.get_or_init(|| load_study_config(None))
}

/// Print config source and warnings the first time it is requested (only in verbose mode).
pub fn log_config_usage() {
    PRINT_CONFIG_ONCE.call_once(|| {
        if !is_verbose() {
            return;
        }
        let handle = study_config_handle();
        if let Some(source) = &handle.source {
            eprintln!("[degrade] Loaded study config from {}", source.display());
        } else {
            eprintln!("[degrade] Using built-in study defaults");
        }

        for warning in &handle.warnings {
            eprintln!("[degrade] Config warning: {}", warning);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BlockPolicy;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = StudyConfig::default();
        assert_eq!(config.defaults.bit_depths, vec![1, 2, 4, 6]);
        assert_eq!(config.defaults.reduction_factors, vec![2, 4, 8]);
        assert_eq!(config.defaults.quantization_repetitions, 1000);
        assert_eq!(config.defaults.spatial_repetitions, 100);
        assert_eq!(config.defaults.block_policy, BlockPolicy::Mean);
    }

    #[test]
    fn test_load_from_explicit_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("degrade.yml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "defaults:\n  bit_depths: [3, 5]\n  reduction_factors: [16]\n  block_policy: TopLeft"
        )
        .unwrap();

        let handle = load_study_config(Some(&path));
        assert!(handle.source.is_some());
        assert_eq!(handle.config.defaults.bit_depths, vec![3, 5]);
        assert_eq!(handle.config.defaults.reduction_factors, vec![16]);
        assert_eq!(handle.config.defaults.block_policy, BlockPolicy::TopLeft);
        // Unspecified fields keep their defaults
        assert_eq!(handle.config.defaults.quantization_repetitions, 1000);
    }

    #[test]
    fn test_load_missing_path_falls_back_to_defaults() {
        let handle = load_study_config(Some(Path::new("/nonexistent/degrade.yml")));
        assert!(handle.source.is_none());
        assert_eq!(handle.config.defaults.bit_depths, vec![1, 2, 4, 6]);
        assert!(handle
            .warnings
            .iter()
            .any(|w| w.contains("No study config found")));
    }

    #[test]
    fn test_malformed_config_produces_warning() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("degrade.yml");
        std::fs::write(&path, "defaults: [this, is, not, a, mapping]").unwrap();

        let handle = load_study_config(Some(&path));
        assert!(handle.source.is_none());
        assert!(handle
            .warnings
            .iter()
            .any(|w| w.contains("Failed to parse")));
    }

    #[test]
    fn test_sanitize_filters_bad_parameter_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("degrade.yml");
        std::fs::write(
            &path,
            "defaults:\n  bit_depths: [0, 2, 9, 2, 4]\n  reduction_factors: [0, 3, 3]\n  quantization_repetitions: 0\n",
        )
        .unwrap();

        let handle = load_study_config(Some(&path));
        let defaults = &handle.config.defaults;
        // Out-of-range and duplicate entries dropped, order preserved
        assert_eq!(defaults.bit_depths, vec![2, 4]);
        assert_eq!(defaults.reduction_factors, vec![3]);
        assert_eq!(defaults.quantization_repetitions, 1);
    }

    #[test]
    fn test_sanitize_restores_defaults_for_empty_lists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("degrade.yml");
        std::fs::write(&path, "defaults:\n  bit_depths: [0, 42]\n").unwrap();

        let handle = load_study_config(Some(&path));
        assert_eq!(handle.config.defaults.bit_depths, vec![1, 2, 4, 6]);
    }
}
