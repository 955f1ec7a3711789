pub mod command;
pub mod config;
pub mod dashboard;
pub mod dispatcher;
pub mod file;
pub mod model;
pub mod tree;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::file::{LoadError, SaveError, SharedStatus, StatusBar};
use crate::model::{sample_server_list, ServerList};
use crate::tree::{
    actions, build_tree_snapshot, children, resolve_path, ChildSummary, MenuAction, MenuError,
    NodeKind, TreeError, TreeNode, TreeNodeSnapshot,
};

// ========================================
// ENGINE
// ========================================

/// Everything the window shows: the server tree, the status bar and the settings.
/// Cheap to clone (all fields are Arcs).
#[derive(Clone)]
pub struct BrokerMe {
    pub config: Arc<Config>,
    pub servers: Arc<RwLock<ServerList>>,
    pub status: SharedStatus,
    /// Target of Save; starts in the data directory, moved by Save As
    pub current_path: Arc<RwLock<PathBuf>>,
}

impl BrokerMe {
    /// Starts with the compiled-in sample servers
    pub fn new(config: &Config) -> Self {
        Self::with_server_list(config, sample_server_list())
    }

    pub fn with_server_list(config: &Config, list: ServerList) -> Self {
        let current_path = config.file.data_dir.join(&list.file_name);
        Self {
            config: Arc::new(config.clone()),
            servers: Arc::new(RwLock::new(list)),
            status: StatusBar::shared(),
            current_path: Arc::new(RwLock::new(current_path)),
        }
    }

    pub fn title(&self) -> String {
        self.config.app.title.clone()
    }

    // ---------- Tree ----------

    pub fn snapshot(&self) -> TreeNodeSnapshot {
        build_tree_snapshot(&self.servers.read(), &TreeNode::Root)
    }

    pub fn expand(&self, path: &str) -> Result<Vec<ChildSummary>, TreeError> {
        let list = self.servers.read();
        let node = resolve_path(&list, path)?;
        Ok(children(&list, &node)
            .iter()
            .map(|child| ChildSummary::of(&list, child))
            .collect())
    }

    pub fn menu(&self, path: &str) -> Result<(NodeKind, &'static [MenuAction]), TreeError> {
        let list = self.servers.read();
        let kind = resolve_path(&list, path)?.kind(&list);
        Ok((kind, actions(kind)))
    }

    pub fn invoke(&self, path: &str, action: MenuAction) -> Result<(), MenuError> {
        let (kind, _) = self.menu(path)?;
        tree::menu::invoke(kind, action)
    }

    // ---------- File menu ----------

    /// Starts a background load of `path`. The server tree is left as it is.
    pub fn open(&self, path: &Path) -> Result<JoinHandle<Result<Value, LoadError>>, LoadError> {
        if !file::accepts(&self.config.file, path) {
            return Err(LoadError::Rejected {
                path: path.to_path_buf(),
                filter: format!("{} ({})", self.config.file.filter_name, self.config.file.pattern()),
            });
        }
        tracing::info!("Opening {:?}", path);
        Ok(file::spawn_load(path.to_path_buf(), self.status.clone()))
    }

    /// Writes to the file last saved to (the data directory until the first Save As)
    pub fn save(&self) -> Result<PathBuf, SaveError> {
        let list = self.servers.read();
        let path = self.current_path.read().clone();
        file::save(&list, &path)?;
        Ok(path)
    }

    /// Writes to `path`, adopts its file name and makes it the target of later Saves
    pub fn save_as(&self, path: &Path) -> Result<(), SaveError> {
        let mut list = self.servers.write();
        let mut current_path = self.current_path.write();
        let mut renamed = list.clone();
        if let Some(name) = path.file_name() {
            renamed.file_name = name.to_string_lossy().into_owned();
        }

        file::save(&renamed, path)?;
        *list = renamed;
        *current_path = path.to_path_buf();
        Ok(())
    }

    pub fn status(&self) -> StatusBar {
        self.status.lock().clone()
    }
}
