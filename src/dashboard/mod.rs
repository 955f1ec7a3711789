pub mod server;

pub use server::{router, start_dashboard_server};
