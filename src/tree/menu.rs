//! Context menu entries per node kind. None of them has a handler yet.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::{NodeKind, TreeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MenuAction {
    AddServer,
    AddQueue,
    AddTopic,
    Browse,
    Subscribe,
    Rename,
    Delete,
}

impl MenuAction {
    pub const ALL: [MenuAction; 7] = [
        MenuAction::AddServer,
        MenuAction::AddQueue,
        MenuAction::AddTopic,
        MenuAction::Browse,
        MenuAction::Subscribe,
        MenuAction::Rename,
        MenuAction::Delete,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::AddServer => "Add Server",
            MenuAction::AddQueue => "Add Queue",
            MenuAction::AddTopic => "Add Topic",
            MenuAction::Browse => "Browse",
            MenuAction::Subscribe => "Subscribe",
            MenuAction::Rename => "Rename",
            MenuAction::Delete => "Delete",
        }
    }

    /// Accepts the menu label with or without separators: "Add Server", "add-server", "ADDSERVER"
    pub fn parse(input: &str) -> Option<Self> {
        let wanted = normalize(input);
        Self::ALL
            .iter()
            .copied()
            .find(|action| normalize(action.label()) == wanted)
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

pub fn actions(kind: NodeKind) -> &'static [MenuAction] {
    match kind {
        NodeKind::Root => &[MenuAction::AddServer],
        NodeKind::Server => &[MenuAction::Rename, MenuAction::Delete],
        NodeKind::QueueGroup => &[MenuAction::AddQueue],
        NodeKind::TopicGroup => &[MenuAction::AddTopic],
        NodeKind::Queue => &[MenuAction::Browse, MenuAction::Rename, MenuAction::Delete],
        NodeKind::Topic => &[MenuAction::Subscribe, MenuAction::Rename, MenuAction::Delete],
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("'{action}' is not offered on a {kind:?} node")]
    NotOffered { action: MenuAction, kind: NodeKind },
    #[error("'{0}' is not implemented")]
    NotImplemented(MenuAction),
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Runs a context action. Every offered action is still inert.
pub fn invoke(kind: NodeKind, action: MenuAction) -> Result<(), MenuError> {
    if !actions(kind).contains(&action) {
        return Err(MenuError::NotOffered { action, kind });
    }
    tracing::debug!("Menu action '{}' on {:?} has no handler", action, kind);
    Err(MenuError::NotImplemented(action))
}
