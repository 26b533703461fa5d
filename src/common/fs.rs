//! Common file system operations with unified error handling

use std::fs::{self, File, FileTimes};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, fs as fs_error};

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| fs_error::write_error(parent, &e))?;
    }
    Ok(())
}

/// Copy `source` to `target`, overwriting `target`
pub fn copy_file(source: &Path, target: &Path) -> Result<()> {
    fs::copy(source, target)
        .map(|_| ())
        .map_err(|e| fs_error::write_error(target, &e))
}

/// Access and modification times of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamps {
    pub accessed: std::time::SystemTime,
    pub modified: std::time::SystemTime,
}

impl Timestamps {
    /// Read the current timestamps of `path`
    pub fn of(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path).map_err(|e| fs_error::read_error(path, &e))?;
        Ok(Self {
            accessed: metadata
                .accessed()
                .map_err(|e| fs_error::read_error(path, &e))?,
            modified: metadata
                .modified()
                .map_err(|e| fs_error::read_error(path, &e))?,
        })
    }

    /// Set `path` back to these timestamps
    pub fn restore(&self, path: &Path) -> Result<()> {
        let times = FileTimes::new()
            .set_accessed(self.accessed)
            .set_modified(self.modified);
        File::options()
            .write(true)
            .open(path)
            .and_then(|file| file.set_times(times))
            .map_err(|e| fs_error::write_error(path, &e))
    }

    /// Best-effort [`restore`](Self::restore) when `path` no longer carries these timestamps
    pub fn restore_if_changed(&self, path: &Path) {
        if Timestamps::of(path).ok().as_ref() == Some(self) {
            return;
        }
        if let Err(e) = self.restore(path) {
            log::debug!("could not restore timestamps of {}: {e}", path.display());
        }
    }
}

/// Write `content` to `path`, keeping the timestamps `path` had before
pub fn write_preserving_times(path: &Path, content: &[u8], times: Timestamps) -> Result<()> {
    fs::write(path, content).map_err(|e| fs_error::write_error(path, &e))?;
    times.restore(path)
}

/// List the files directly inside `dir` with the given extension, sorted by name
///
/// A missing directory yields an empty list.
pub fn files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| fs_error::read_failed(dir.display().to_string(), e.to_string()))?;
        if entry.file_type().is_file()
            && entry.path().extension().and_then(|e| e.to_str()) == Some(extension)
        {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
