//! Run configuration.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

pub const MAPPING_FILE_NAME: &str = "omniclass_mapping.txt";
pub const CATALOG_FILE_NAME: &str = "company_data.csv";

/// Resource locations and limits for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub mapping_path: PathBuf,
    pub catalog_path: PathBuf,
    /// Directory the report is written to.
    pub output_dir: PathBuf,
    /// Upper bound on concurrent element tasks.
    pub workers: usize,
}

impl RunConfig {
    /// Configuration with both resources and the report inside `resource_dir`.
    #[must_use]
    pub fn from_resource_dir<P: AsRef<Path>>(resource_dir: P) -> Self {
        let dir = resource_dir.as_ref();
        Self {
            mapping_path: dir.join(MAPPING_FILE_NAME),
            catalog_path: dir.join(CATALOG_FILE_NAME),
            output_dir: dir.to_path_buf(),
            workers: default_workers(),
        }
    }

    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }
}

/// Directory holding the running executable, falling back to the working directory.
#[must_use]
pub fn default_resource_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[must_use]
pub fn default_workers() -> usize {
    std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
}
