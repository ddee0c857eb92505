use serde::{Serialize, de::DeserializeOwned};
use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Output directory for data files
pub const DEFAULT_OUTPUT_DIR: &str = "./data/output";

#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl FileError {
    fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn json(path: &Path) -> impl FnOnce(serde_json::Error) -> Self + '_ {
        move |source| Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Ensures a directory exists, creating it if necessary
///
/// # Arguments
/// * `dir_path` - Path to the directory
pub fn ensure_dir(dir_path: &Path) -> Result<(), FileError> {
    if !dir_path.exists() {
        fs::create_dir_all(dir_path).map_err(FileError::io(dir_path))?;
    }

    Ok(())
}

/// Reads a JSON document from a file
///
/// # Arguments
/// * `path` - The file to read
///
/// # Returns
/// The deserialized document
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, FileError> {
    let file = File::open(path).map_err(FileError::io(path))?;
    serde_json::from_reader(BufReader::new(file)).map_err(FileError::json(path))
}

/// Writes a JSON document to a file, creating its parent directory
///
/// # Arguments
/// * `path` - The file to write
/// * `value` - The document to serialize
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), FileError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    let file = File::create(path).map_err(FileError::io(path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, value).map_err(FileError::json(path))?;
    writer.flush().map_err(FileError::io(path))
}
