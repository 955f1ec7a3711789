//! File menu plumbing: JSON loading (Open), JSON writing (Save / Save As), status bar
pub mod loader;
pub mod status;
pub mod writer;

pub use loader::{accepts, load_file, spawn_load, LoadError};
pub use status::{SharedStatus, StatusBar};
pub use writer::{save, SaveError};
