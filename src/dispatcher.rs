//! Dispatcher: Routes shell commands to the engine

use tracing::debug;

use crate::command::{Command, HELP};
use crate::BrokerMe;

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Text(String),
    Exit,
}

/// Dispatch parsed command to the engine.
/// `FILE.OPEN` only starts the load; its outcome shows up in `STATUS`.
pub fn dispatch(args: Vec<String>, app: &BrokerMe) -> Result<Response, String> {
    // Parse and validate command
    let command = Command::from_args(args)?;
    debug!("[Dispatcher] {:?}", command);

    match command {
        // ===== Meta Commands =====
        Command::Status => {
            let status = app.status();
            Ok(Response::Text(format!(
                "{} [{:.0}%]",
                status.label,
                status.progress * 100.0
            )))
        }

        Command::Help => Ok(Response::Text(HELP.to_string())),

        // ===== File Commands =====
        Command::FileOpen { path } => {
            app.open(&path).map_err(|e| e.to_string())?;
            Ok(Response::Text(crate::file::loader::STATUS_LOADING.to_string()))
        }

        Command::FileSave => {
            let path = app.save().map_err(|e| e.to_string())?;
            Ok(Response::Text(format!("Saved to {}", path.display())))
        }

        Command::FileSaveAs { path } => {
            app.save_as(&path).map_err(|e| e.to_string())?;
            Ok(Response::Text(format!("Saved to {}", path.display())))
        }

        Command::FileExit => Ok(Response::Exit),

        // ===== Tree Commands =====
        Command::TreeShow => Ok(Response::Text(app.snapshot().render())),

        Command::TreeExpand { path } => {
            let rows = app.expand(&path).map_err(|e| e.to_string())?;
            let lines: Vec<String> = rows
                .iter()
                .map(|row| format!("[{}] {}", row.path, row.label))
                .collect();
            Ok(Response::Text(lines.join("\n")))
        }

        Command::TreeMenu { path } => {
            let (_, actions) = app.menu(&path).map_err(|e| e.to_string())?;
            let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
            Ok(Response::Text(labels.join("\n")))
        }

        Command::TreeInvoke { path, action } => {
            // Reached once an action gets a handler
            app.invoke(&path, action).map_err(|e| e.to_string())?;
            Ok(Response::Text(format!("{} done", action)))
        }
    }
}
