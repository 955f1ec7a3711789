use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::model::ServerList;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to encode server list: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes `list` as pretty JSON. The parent directory must already exist.
pub fn save(list: &ServerList, path: &Path) -> Result<(), SaveError> {
    let mut bytes = serde_json::to_vec_pretty(list)?;
    bytes.push(b'\n');

    fs::write(path, &bytes).map_err(|source| SaveError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Saved {} servers to {:?}", list.servers.len(), path);
    Ok(())
}
