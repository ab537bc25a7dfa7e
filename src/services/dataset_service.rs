//! Loading of plain-text observation columns

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::models::Dataset;

/// Errors from loading observation files
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: io::Error,
    },
    #[error("invalid number '{token}' at {}:{line}", .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        token: String,
    },
}

/// Load one column of real numbers from a text file.
///
/// One value per line; lines holding several whitespace-delimited values are
/// accepted too, and blank lines are skipped.
pub fn load_column(path: &Path) -> Result<Vec<f64>, DatasetError> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DatasetError::NotFound(path.to_path_buf()),
        _ => DatasetError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let mut values = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        for token in line.split_whitespace() {
            let value = token.parse::<f64>().map_err(|_| DatasetError::Malformed {
                path: path.to_path_buf(),
                line: idx + 1,
                token: token.to_string(),
            })?;
            values.push(value);
        }
    }

    debug!("loaded {} values from {}", values.len(), path.display());
    Ok(values)
}

/// Load the x and y observation columns for a regression run
pub fn load_xy(x_path: &Path, y_path: &Path) -> Result<Dataset, DatasetError> {
    let x = load_column(x_path)?;
    let y = load_column(y_path)?;
    Ok(Dataset { x, y })
}
