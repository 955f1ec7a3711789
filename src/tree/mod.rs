//! Tree projection: flattens a ServerList into a browsable four-level hierarchy
//!
//! Root
//!   Server ("name (url)")
//!     Queues
//!       "name QUEUE"
//!     Topics
//!       "name TOPIC"
//!
//! Nodes are plain index values, so expanding a node never touches any UI state.

use serde::Serialize;
use thiserror::Error;

use crate::model::{Endpoint, EndpointKind, Server, ServerList};

pub mod menu;
pub mod snapshot;

pub use menu::{actions, MenuAction, MenuError};
pub use snapshot::{build_tree_snapshot, ChildSummary, TreeNodeSnapshot};

pub const ROOT_LABEL: &str = "Servers";

// ---------- Group ----------

/// Synthetic folder under every server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Group {
    Queues,
    Topics,
}

impl Group {
    pub const ALL: [Group; 2] = [Group::Queues, Group::Topics];

    pub fn label(&self) -> &'static str {
        match self {
            Group::Queues => "Queues",
            Group::Topics => "Topics",
        }
    }

    pub fn endpoints<'a>(&self, server: &'a Server) -> &'a [Endpoint] {
        match self {
            Group::Queues => &server.queues,
            Group::Topics => &server.topics,
        }
    }

    fn position(&self) -> usize {
        match self {
            Group::Queues => 0,
            Group::Topics => 1,
        }
    }

    fn endpoint_kind(&self) -> EndpointKind {
        match self {
            Group::Queues => EndpointKind::Queue,
            Group::Topics => EndpointKind::Topic,
        }
    }
}

// ---------- NodeKind ----------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Root,
    Server,
    QueueGroup,
    TopicGroup,
    Queue,
    Topic,
}

// ---------- TreeNode ----------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeNode {
    Root,
    Server { server: usize },
    Group { server: usize, group: Group },
    Endpoint { server: usize, group: Group, index: usize },
}

impl TreeNode {
    pub fn kind(&self, list: &ServerList) -> NodeKind {
        match *self {
            TreeNode::Root => NodeKind::Root,
            TreeNode::Server { .. } => NodeKind::Server,
            TreeNode::Group { group: Group::Queues, .. } => NodeKind::QueueGroup,
            TreeNode::Group { group: Group::Topics, .. } => NodeKind::TopicGroup,
            TreeNode::Endpoint { group, .. } => {
                // The endpoint's own tag wins over the folder it sits in
                let kind = self.endpoint(list).map(|e| e.kind).unwrap_or(group.endpoint_kind());
                match kind {
                    EndpointKind::Queue => NodeKind::Queue,
                    EndpointKind::Topic => NodeKind::Topic,
                }
            }
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Endpoint { .. })
    }

    /// Child indices from the root, joined by '/'. The root is the empty path.
    pub fn path(&self) -> String {
        match *self {
            TreeNode::Root => String::new(),
            TreeNode::Server { server } => format!("{}", server),
            TreeNode::Group { server, group } => format!("{}/{}", server, group.position()),
            TreeNode::Endpoint { server, group, index } => {
                format!("{}/{}/{}", server, group.position(), index)
            }
        }
    }

    fn endpoint<'a>(&self, list: &'a ServerList) -> Option<&'a Endpoint> {
        match *self {
            TreeNode::Endpoint { server, group, index } => {
                list.server(server).and_then(|s| group.endpoints(s).get(index))
            }
            _ => None,
        }
    }
}

// ---------- Projection ----------

/// Ordered children of `node`. Leaves and nodes that do not resolve in `list` have none.
pub fn children(list: &ServerList, node: &TreeNode) -> Vec<TreeNode> {
    match *node {
        TreeNode::Root => (0..list.servers.len())
            .map(|server| TreeNode::Server { server })
            .collect(),

        // Both groups are always present, even when empty
        TreeNode::Server { server } => {
            if list.server(server).is_none() {
                return Vec::new();
            }
            Group::ALL
                .iter()
                .map(|&group| TreeNode::Group { server, group })
                .collect()
        }

        TreeNode::Group { server, group } => match list.server(server) {
            Some(s) => (0..group.endpoints(s).len())
                .map(|index| TreeNode::Endpoint { server, group, index })
                .collect(),
            None => Vec::new(),
        },

        TreeNode::Endpoint { .. } => Vec::new(),
    }
}

/// Display text of `node`, or None when it does not resolve in `list`.
pub fn label(list: &ServerList, node: &TreeNode) -> Option<String> {
    match *node {
        TreeNode::Root => Some(format!("{} - {}", ROOT_LABEL, list.file_name)),
        TreeNode::Server { server } => list
            .server(server)
            .map(|s| format!("{} ({})", s.name, s.url)),
        TreeNode::Group { server, group } => list.server(server).map(|_| group.label().to_string()),
        TreeNode::Endpoint { .. } => node
            .endpoint(list)
            .map(|e| format!("{} {}", e.name, e.kind.tag())),
    }
}

// ---------- Paths ----------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("invalid path segment '{0}'")]
    BadPath(String),
    #[error("node '{parent}' has no child {index}")]
    NoSuchChild { parent: String, index: usize },
}

/// Walks child indices ("0/1/2") from the root. Empty path is the root.
pub fn resolve_path(list: &ServerList, path: &str) -> Result<TreeNode, TreeError> {
    let mut node = TreeNode::Root;

    for segment in path.split('/').map(str::trim).filter(|s| !s.is_empty()) {
        let index: usize = segment
            .parse()
            .map_err(|_| TreeError::BadPath(segment.to_string()))?;

        node = children(list, &node)
            .get(index)
            .copied()
            .ok_or_else(|| TreeError::NoSuchChild { parent: node.path(), index })?;
    }

    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_server_list;

    #[test]
    fn path_is_inverse_of_resolve() {
        let list = sample_server_list();
        let node = TreeNode::Endpoint { server: 1, group: Group::Queues, index: 3 };
        assert_eq!(node.path(), "1/0/3");
        assert_eq!(resolve_path(&list, &node.path()), Ok(node));
    }

    #[test]
    fn resolve_rejects_garbage() {
        let list = sample_server_list();
        assert_eq!(resolve_path(&list, "x"), Err(TreeError::BadPath("x".to_string())));
        assert_eq!(
            resolve_path(&list, "0/2"),
            Err(TreeError::NoSuchChild { parent: "0".to_string(), index: 2 })
        );
    }

    #[test]
    fn empty_path_is_root() {
        let list = sample_server_list();
        assert_eq!(resolve_path(&list, ""), Ok(TreeNode::Root));
        assert_eq!(resolve_path(&list, " / "), Ok(TreeNode::Root));
    }

    #[test]
    fn unresolved_server_has_no_children() {
        let list = sample_server_list();
        assert!(children(&list, &TreeNode::Server { server: 9 }).is_empty());
        assert_eq!(label(&list, &TreeNode::Server { server: 9 }), None);
    }
}
