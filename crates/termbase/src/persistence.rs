//! Persistence for termbase documents - save/load JSON files.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::error::{Result, TermbaseError};
use crate::termbase::Termbase;

impl Termbase {
    /// Save the document to a JSON file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use termbase::Termbase;
    /// # fn example(base: &Termbase) -> termbase::Result<()> {
    /// base.save("termbase.json")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    TermbaseError::Persistence(format!(
                        "Failed to create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let file = File::create(path).map_err(|e| {
            TermbaseError::Persistence(format!(
                "Failed to create file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self).map_err(|e| {
            TermbaseError::Persistence(format!("Failed to serialize termbase: {}", e))
        })?;

        Ok(())
    }

    /// Load a document from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| {
            TermbaseError::Persistence(format!(
                "Failed to open file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let reader = BufReader::new(file);
        let base: Termbase = serde_json::from_reader(reader).map_err(|e| {
            TermbaseError::Persistence(format!(
                "Failed to parse termbase '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(base)
    }

    /// Save with version history.
    ///
    /// Creates a timestamped backup in a `.history` sibling directory before
    /// overwriting the current file.
    pub fn save_with_history(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if path.exists() {
            self.save_to_history(path)?;
        }

        self.save(path)
    }

    fn save_to_history(&self, path: &Path) -> Result<()> {
        let history_dir = history_directory(path);

        if !history_dir.exists() {
            fs::create_dir_all(&history_dir).map_err(|e| {
                TermbaseError::Persistence(format!(
                    "Failed to create history directory '{}': {}",
                    history_dir.display(),
                    e
                ))
            })?;
        }

        let existing = Self::load(path)?;

        let timestamp = existing.updated_at.format("%Y-%m-%dT%H-%M-%S").to_string();
        let history_file = history_dir.join(format!("{}.json", timestamp));

        existing.save(&history_file)
    }

    /// List all historical versions of a document.
    ///
    /// Returns paths sorted by timestamp (newest first).
    pub fn list_history(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let path = path.as_ref();
        let history_dir = history_directory(path);

        if !history_dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries: Vec<PathBuf> = fs::read_dir(&history_dir)
            .map_err(|e| {
                TermbaseError::Persistence(format!(
                    "Failed to read history directory '{}': {}",
                    history_dir.display(),
                    e
                ))
            })?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();

        entries.sort_by(|a, b| b.cmp(a));

        Ok(entries)
    }

    /// Load a specific historical version (0 = most recent backup).
    pub fn load_history(path: impl AsRef<Path>, index: usize) -> Result<Self> {
        let history = Self::list_history(&path)?;

        let history_path = history.get(index).ok_or_else(|| {
            TermbaseError::Persistence(format!(
                "History version {} not found (only {} versions available)",
                index,
                history.len()
            ))
        })?;

        Self::load(history_path)
    }
}

/// Get the history directory for a termbase file.
fn history_directory(path: &Path) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let parent = path.parent().unwrap_or(Path::new("."));

    parent.join(format!("{}.history", stem))
}

/// Canonical document path inside a data directory.
///
/// # Example
///
/// ```
/// use termbase::persistence::termbase_path;
///
/// let path = termbase_path("data");
/// assert_eq!(path.to_string_lossy(), "data/termbase.json");
/// ```
pub fn termbase_path(dir: impl AsRef<Path>) -> PathBuf {
    dir.as_ref().join("termbase.json")
}
