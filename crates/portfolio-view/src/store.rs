//! Dataset file storage with XDG path support.
//!
//! The dataset is stored as JSON at `~/.local/share/pl/dataset.json` on Linux
//! (the platform data directory elsewhere). Callers can point the store at
//! any other file with [`DatasetStore::with_path`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::debug;

use crate::Dataset;

/// Default dataset filename.
const DATASET_FILENAME: &str = "dataset.json";

/// Application qualifier (for XDG paths).
const QUALIFIER: &str = "";

/// Application organization (for XDG paths).
const ORGANIZATION: &str = "";

/// Application name (for XDG paths).
const APPLICATION: &str = "pl";

/// Errors that can occur during dataset storage operations.
#[derive(Debug, Error)]
pub enum DatasetStoreError {
    /// Failed to determine XDG data directory.
    #[error("failed to determine data directory: no valid home directory found")]
    NoDataDir,

    /// I/O error during file read.
    #[error("failed to read dataset file '{path}': {source}")]
    ReadError {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during file write.
    #[error("failed to write dataset file '{path}': {source}")]
    WriteError {
        /// The path that failed to write.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during directory creation.
    #[error("failed to create data directory '{path}': {source}")]
    CreateDirError {
        /// The directory path that failed to create.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DatasetStoreError {
    /// Returns true if the error means the dataset file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DatasetStoreError::ReadError { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }
}

/// Result type for dataset store operations.
pub type StoreResult<T> = std::result::Result<T, DatasetStoreError>;

/// Persistent storage for the dataset snapshot.
///
/// # Example
///
/// ```no_run
/// use portfolio_view::{Dataset, DatasetStore};
///
/// let store = DatasetStore::new()?;
///
/// // Load the dataset, or start empty when no file exists yet
/// let dataset = store.load_or_default()?;
///
/// store.save(&dataset)?;
/// # Ok::<(), portfolio_view::DatasetStoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DatasetStore {
    /// Path to the dataset file.
    path: PathBuf,
}

impl DatasetStore {
    /// Creates a new `DatasetStore` with the default XDG data path.
    ///
    /// # Errors
    ///
    /// Returns `DatasetStoreError::NoDataDir` if the home directory cannot be determined.
    pub fn new() -> StoreResult<Self> {
        let path = Self::default_path()?;
        Ok(Self { path })
    }

    /// Creates a new `DatasetStore` reading from a custom path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default XDG path for the dataset file.
    ///
    /// On Unix: `~/.local/share/pl/dataset.json`
    /// On macOS: `~/Library/Application Support/pl/dataset.json`
    /// On Windows: `C:\Users\<User>\AppData\Roaming\pl\data\dataset.json`
    ///
    /// # Errors
    ///
    /// Returns `DatasetStoreError::NoDataDir` if the home directory cannot be determined.
    pub fn default_path() -> StoreResult<PathBuf> {
        let project_dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .ok_or(DatasetStoreError::NoDataDir)?;

        Ok(project_dirs.data_dir().join(DATASET_FILENAME))
    }

    /// Returns the path to the dataset file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the dataset from disk.
    ///
    /// # Errors
    ///
    /// - Returns `DatasetStoreError::ReadError` if the file cannot be read.
    /// - Returns `DatasetStoreError::Json` if the file is not a valid dataset.
    pub fn load(&self) -> StoreResult<Dataset> {
        let contents = fs::read_to_string(&self.path).map_err(|e| DatasetStoreError::ReadError {
            path: self.path.clone(),
            source: e,
        })?;
        let dataset: Dataset = serde_json::from_str(&contents)?;
        debug!(
            path = %self.path.display(),
            projects = dataset.projects.len(),
            departments = dataset.departments.len(),
            personnel = dataset.personnel.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Loads the dataset from disk, returning an empty dataset if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// - Returns `DatasetStoreError::ReadError` for I/O errors other than "file not found".
    /// - Returns `DatasetStoreError::Json` if the file is not a valid dataset.
    pub fn load_or_default(&self) -> StoreResult<Dataset> {
        match self.load() {
            Ok(dataset) => Ok(dataset),
            Err(e) if e.is_not_found() => {
                debug!(path = %self.path.display(), "no dataset file, starting empty");
                Ok(Dataset::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Saves the dataset to disk atomically.
    ///
    /// Creates the parent directory if it doesn't exist. Writes to a sibling
    /// `.tmp` file and renames it over the target.
    ///
    /// # Errors
    ///
    /// - Returns `DatasetStoreError::CreateDirError` if the directory cannot be created.
    /// - Returns `DatasetStoreError::WriteError` if the file cannot be written.
    /// - Returns `DatasetStoreError::Json` if serialization fails.
    pub fn save(&self, dataset: &Dataset) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| DatasetStoreError::CreateDirError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(dataset)?;

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, &json).map_err(|e| DatasetStoreError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;
        fs::rename(&temp_path, &self.path).map_err(|e| DatasetStoreError::WriteError {
            path: self.path.clone(),
            source: e,
        })?;

        debug!(path = %self.path.display(), "saved dataset");
        Ok(())
    }

    /// Returns true if the dataset file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
