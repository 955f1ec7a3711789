use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;

pub type SharedStatus = Arc<Mutex<StatusBar>>;

/// Label and progress bar at the bottom of the window
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatusBar {
    pub label: String,
    pub progress: f64, // 0.0 ..= 1.0
}

impl StatusBar {
    pub fn shared() -> SharedStatus {
        Arc::new(Mutex::new(StatusBar::default()))
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_progress(&mut self, done: f64, total: f64) {
        self.progress = if total > 0.0 { (done / total).clamp(0.0, 1.0) } else { 0.0 };
    }
}
