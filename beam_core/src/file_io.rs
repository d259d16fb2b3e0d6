//! # File I/O Module
//!
//! Reading analysis inputs and writing artifacts:
//! - **Load sets** and **settings** are JSON files
//! - **Atomic writes**: write to `.tmp`, sync, rename, so a diagram or report
//!   on disk is never half-written
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::calculations::analyze;
//! use beam_core::file_io::{load_load_set, write_atomic};
//! use beam_core::render::{DiagramRenderer, SvgRenderer};
//! use std::path::Path;
//!
//! let loads = load_load_set(Path::new("beam.json"))?;
//! let samples = analyze(&loads)?;
//! let svg = SvgRenderer::default().render(&samples)?;
//! write_atomic(Path::new("beam.svg"), svg.as_bytes())?;
//! # Ok::<(), beam_core::errors::BeamError>(())
//! ```

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{BeamError, BeamResult};
use crate::loads::LoadSet;
use crate::settings::AnalysisSettings;

/// Load and validate a load set from a JSON file.
///
/// # Returns
///
/// * `Ok(LoadSet)` - parsed and validated
/// * `Err(BeamError::InvalidInput | DegenerateGeometry)` - JSON is well formed but the loads are not
/// * `Err(BeamError::SerializationError)` - invalid JSON
/// * `Err(BeamError::FileError)` - I/O error
pub fn load_load_set(path: &Path) -> BeamResult<LoadSet> {
    let contents = read_to_string(path)?;
    LoadSet::from_json(&contents).map_err(|e| match e {
        BeamError::SerializationError { reason } => BeamError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), reason),
        },
        other => other,
    })
}

/// Load and validate analysis settings from a JSON file.
///
/// Fields missing from the file keep their defaults.
pub fn load_settings(path: &Path) -> BeamResult<AnalysisSettings> {
    let contents = read_to_string(path)?;
    let settings: AnalysisSettings =
        serde_json::from_str(&contents).map_err(|e| BeamError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;
    settings.validate()?;
    Ok(settings)
}

/// Write `bytes` to `path` with atomic semantics.
///
/// 1. Write to `<path>.tmp`
/// 2. Sync to disk (fsync)
/// 3. Rename over `path` (atomic on most filesystems)
pub fn write_atomic(path: &Path, bytes: &[u8]) -> BeamResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        BeamError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(bytes).map_err(|e| {
        BeamError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        BeamError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(&tmp_path);
        BeamError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

fn read_to_string(path: &Path) -> BeamResult<String> {
    fs::read_to_string(path)
        .map_err(|e| BeamError::file_error("read", path.display().to_string(), e.to_string()))
}

/// `diagram.svg` -> `diagram.svg.tmp`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
