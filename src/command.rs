//! Command parsing and validation
//!
//! Every menu entry of the window is reachable as a namespaced command:
//! `FILE.OPEN servers.json`, `TREE.EXPAND 0/1`, `TREE.INVOKE 0 rename`, ...

use std::path::PathBuf;

use crate::tree::MenuAction;

/// Represents all commands supported by the shell
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // Meta commands
    Status,
    Help,

    // File menu
    FileOpen {
        path: PathBuf,
    },
    FileSave,
    FileSaveAs {
        path: PathBuf,
    },
    FileExit,

    // Tree view
    TreeShow,
    TreeExpand {
        path: String,
    },
    TreeMenu {
        path: String,
    },
    TreeInvoke {
        path: String,
        action: MenuAction,
    },
}

pub const HELP: &str = "\
STATUS                       show the status bar
FILE.OPEN <file.json>        load a file in the background
FILE.SAVE                    write the servers to the current file
FILE.SAVEAS <file.json>      write the servers to another file
FILE.EXIT                    quit
TREE.SHOW                    print the whole tree
TREE.EXPAND [path]           list the children of a node (0/1/2 style path)
TREE.MENU [path]             list the context actions of a node
TREE.INVOKE <path> <action>  run a context action";

impl Command {
    /// Parse command from whitespace separated args (validates arguments)
    pub fn from_args(args: Vec<String>) -> Result<Self, String> {
        if args.is_empty() {
            return Err("Empty command".to_string());
        }

        let command = args[0].to_uppercase();

        // Commands without namespace
        match command.as_str() {
            "STATUS" => return Ok(Command::Status),
            "HELP" => return Ok(Command::Help),
            "EXIT" | "QUIT" => return Ok(Command::FileExit),
            _ => {}
        }

        // Split namespace from action
        let parts: Vec<&str> = command.splitn(2, '.').collect();

        if parts.len() != 2 {
            return Err(format!("Invalid command format: {}", command));
        }

        let namespace = parts[0];
        let action = parts[1];

        match (namespace, action) {
            // ===== File Commands =====
            ("FILE", "OPEN") => {
                if args.len() != 2 {
                    return Err("FILE.OPEN requires exactly 1 argument: path".to_string());
                }
                Ok(Command::FileOpen {
                    path: PathBuf::from(&args[1]),
                })
            }

            ("FILE", "SAVE") => {
                if args.len() != 1 {
                    return Err("FILE.SAVE takes no arguments".to_string());
                }
                Ok(Command::FileSave)
            }

            ("FILE", "SAVEAS") => {
                if args.len() != 2 {
                    return Err("FILE.SAVEAS requires exactly 1 argument: path".to_string());
                }
                Ok(Command::FileSaveAs {
                    path: PathBuf::from(&args[1]),
                })
            }

            ("FILE", "EXIT") => Ok(Command::FileExit),

            // ===== Tree Commands =====
            ("TREE", "SHOW") => Ok(Command::TreeShow),

            ("TREE", "EXPAND") => Ok(Command::TreeExpand {
                path: optional_path(&args)?,
            }),

            ("TREE", "MENU") => Ok(Command::TreeMenu {
                path: optional_path(&args)?,
            }),

            ("TREE", "INVOKE") => {
                if args.len() < 3 {
                    return Err("TREE.INVOKE requires 2 arguments: path action".to_string());
                }
                // Labels may contain spaces ("Add Server")
                let label = args[2..].join(" ");
                let action = MenuAction::parse(&label)
                    .ok_or_else(|| format!("Unknown action: {}", label))?;
                Ok(Command::TreeInvoke {
                    path: args[1].clone(),
                    action,
                })
            }

            _ => Err(format!("Unknown command: {}.{}", namespace, action)),
        }
    }
}

fn optional_path(args: &[String]) -> Result<String, String> {
    match args.len() {
        1 => Ok(String::new()),
        2 => Ok(args[1].clone()),
        _ => Err(format!("{} takes at most 1 argument: path", args[0].to_uppercase())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn parses_file_menu() {
        assert_eq!(
            Command::from_args(args("file.open servers.json")),
            Ok(Command::FileOpen { path: PathBuf::from("servers.json") })
        );
        assert_eq!(Command::from_args(args("FILE.SAVE")), Ok(Command::FileSave));
        assert_eq!(Command::from_args(args("quit")), Ok(Command::FileExit));
    }

    #[test]
    fn expand_defaults_to_root() {
        assert_eq!(
            Command::from_args(args("TREE.EXPAND")),
            Ok(Command::TreeExpand { path: String::new() })
        );
        assert_eq!(
            Command::from_args(args("TREE.EXPAND 0/1")),
            Ok(Command::TreeExpand { path: "0/1".to_string() })
        );
    }

    #[test]
    fn invoke_accepts_multi_word_label() {
        assert_eq!(
            Command::from_args(args("TREE.INVOKE / Add Server")),
            Ok(Command::TreeInvoke { path: "/".to_string(), action: MenuAction::AddServer })
        );
    }

    #[test]
    fn rejects_malformed_commands() {
        assert!(Command::from_args(vec![]).is_err());
        assert!(Command::from_args(args("OPEN")).is_err());
        assert!(Command::from_args(args("FILE.OPEN")).is_err());
        assert!(Command::from_args(args("FILE.DELETE x")).is_err());
        assert!(Command::from_args(args("TREE.INVOKE 0 purge")).is_err());
        assert!(Command::from_args(args("TREE.EXPAND 0 1")).is_err());
    }
}
