//! Environment variable utilities for the CEC2009 tools
//!
//! This module resolves the `CEC2009_DIR` variable that points to the project
//! root and derives the output directories the binaries write into.

use crate::constants::{CEC2009_DIR, DATA_GENERATED, PLOTS};
use std::env;
use std::path::{Path, PathBuf};

/// Error type for environment variable issues
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error(
        "CEC2009_DIR environment variable is not set. Please set it to the project root directory (e.g., export CEC2009_DIR=/path/to/cec2009)"
    )]
    Cec2009DirNotSet,

    #[error("CEC2009_DIR points to a non-existent directory: {0}")]
    Cec2009DirNotFound(PathBuf),

    #[error("Failed to create output directory {0}: {1}")]
    DirectoryCreationFailed(PathBuf, std::io::Error),
}

/// Validate a raw `CEC2009_DIR` value
///
/// Split out of [`get_cec2009_dir`] so the checks can be exercised without
/// touching the process environment.
pub fn resolve_cec2009_dir(value: Option<String>) -> Result<PathBuf, EnvError> {
    let path = PathBuf::from(value.ok_or(EnvError::Cec2009DirNotSet)?);

    if !path.exists() {
        return Err(EnvError::Cec2009DirNotFound(path));
    }

    Ok(path)
}

/// Get the CEC2009_DIR environment variable and validate it exists
///
/// # Errors
///
/// Returns an error if:
/// - CEC2009_DIR is not set
/// - CEC2009_DIR points to a non-existent directory
///
/// # Example
///
/// ```no_run
/// use cec2009_env::env_utils::get_cec2009_dir;
///
/// let root = get_cec2009_dir()?;
/// println!("CEC2009 directory: {}", root.display());
/// # Ok::<(), cec2009_env::env_utils::EnvError>(())
/// ```
pub fn get_cec2009_dir() -> Result<PathBuf, EnvError> {
    resolve_cec2009_dir(env::var(CEC2009_DIR).ok())
}

fn ensure_dir(path: PathBuf) -> Result<PathBuf, EnvError> {
    if !path.exists() {
        std::fs::create_dir_all(&path)
            .map_err(|e| EnvError::DirectoryCreationFailed(path.clone(), e))?;
        log::debug!("created {}", path.display());
    }
    Ok(path)
}

/// `<root>/data_generated`, created if necessary
pub fn data_generated_dir_in(root: &Path) -> Result<PathBuf, EnvError> {
    ensure_dir(root.join(DATA_GENERATED))
}

/// `<root>/data_generated/plots`, created if necessary
pub fn plots_dir_in(root: &Path) -> Result<PathBuf, EnvError> {
    ensure_dir(data_generated_dir_in(root)?.join(PLOTS))
}

/// Get the path to the data_generated directory, creating it if necessary
///
/// # Errors
///
/// Returns an error if CEC2009_DIR is not set or invalid, or if the
/// directory cannot be created.
pub fn get_data_generated_dir() -> Result<PathBuf, EnvError> {
    data_generated_dir_in(&get_cec2009_dir()?)
}

/// Get the path to the plots subdirectory within data_generated
pub fn get_plots_dir() -> Result<PathBuf, EnvError> {
    plots_dir_in(&get_cec2009_dir()?)
}

/// Pick the output directory for a binary
///
/// An explicit directory wins (and is created); otherwise the plots
/// directory below `CEC2009_DIR` is used.
pub fn output_dir_or_default(explicit: Option<&Path>) -> Result<PathBuf, EnvError> {
    match explicit {
        Some(dir) => ensure_dir(dir.to_path_buf()),
        None => get_plots_dir(),
    }
}
