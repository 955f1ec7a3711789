use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

use super::status::SharedStatus;
use crate::config::FileConfig;

pub const STATUS_LOADING: &str = "Loading file";
pub const STATUS_LOADED: &str = "File loaded";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{path:?} is not one of {filter}")]
    Rejected { path: PathBuf, filter: String },
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("load task aborted: {0}")]
    Task(String),
}

/// File chooser filter: only files with the configured extension
pub fn accepts(config: &FileConfig, path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(&config.extension))
        .unwrap_or(false)
}

/// Reads and parses `path` as JSON. Any well-formed document is accepted.
pub fn load_file(path: &Path) -> Result<Value, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses `path` off the async runtime and reports progress on `status`.
/// The parsed document is handed back to the caller; nothing is mapped into the model.
pub fn spawn_load(path: PathBuf, status: SharedStatus) -> JoinHandle<Result<Value, LoadError>> {
    {
        let mut bar = status.lock();
        bar.set_label(STATUS_LOADING);
        bar.set_progress(0.0, 1.0);
    }

    tokio::spawn(async move {
        let worker_path = path.clone();
        let result = tokio::task::spawn_blocking(move || load_file(&worker_path))
            .await
            .unwrap_or_else(|e| Err(LoadError::Task(e.to_string())));

        let mut bar = status.lock();
        bar.set_progress(1.0, 1.0);
        match &result {
            Ok(value) => {
                info!("Loaded {:?} ({})", path, describe(value));
                bar.set_label(STATUS_LOADED);
            }
            Err(e) => {
                error!("Load failed: {}", e);
                bar.set_label(format!("Load failed: {}", e));
            }
        }

        result
    })
}

fn describe(value: &Value) -> String {
    match value {
        Value::Array(items) => format!("array of {}", items.len()),
        Value::Object(map) => format!("object with {} keys", map.len()),
        _ => "scalar".to_string(),
    }
}
