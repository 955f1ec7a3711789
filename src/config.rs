use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;

static CONFIG: OnceLock<Config> = OnceLock::new();

// --- CONFIG AGGREGATOR ---

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub file: FileConfig,
    pub dashboard: DashboardConfig,
}

impl Config {
    pub fn global() -> &'static Config {
        CONFIG.get_or_init(Self::load)
    }

    fn load() -> Self {
        dotenv::dotenv().ok();
        Self::load_from(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    pub fn load_from<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            app: AppConfig::load(&lookup),
            file: FileConfig::load(&lookup),
            dashboard: DashboardConfig::load(&lookup),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load_from(|_| None)
    }
}

// --- MODULES ---

// APP
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub log_level: String,
}

impl AppConfig {
    fn load(lookup: &dyn Fn(&str) -> Option<String>) -> Self {
        Self {
            title:     get_env(lookup, "BROKERME_TITLE", "Broker Me"),
            width:     get_env(lookup, "BROKERME_WIDTH", "1024"),
            height:    get_env(lookup, "BROKERME_HEIGHT", "768"),
            log_level: get_env(lookup, "BROKERME_LOG", "info"),
        }
    }
}

// FILE
#[derive(Debug, Clone)]
pub struct FileConfig {
    pub filter_name: String,
    pub extension: String,
    pub data_dir: PathBuf,
}

impl FileConfig {
    fn load(lookup: &dyn Fn(&str) -> Option<String>) -> Self {
        Self {
            filter_name: get_env(lookup, "BROKERME_FILTER_NAME", "Broker Me Files"),
            extension:   get_env(lookup, "BROKERME_FILE_EXTENSION", "json"),
            data_dir:    get_env(lookup, "BROKERME_DATA_DIR", "."),
        }
    }

    /// Chooser pattern, e.g. "*.json"
    pub fn pattern(&self) -> String {
        format!("*.{}", self.extension)
    }
}

// DASHBOARD
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub host: String,
    pub port: u16, // 0 = disabled
}

impl DashboardConfig {
    fn load(lookup: &dyn Fn(&str) -> Option<String>) -> Self {
        Self {
            host: get_env(lookup, "BROKERME_DASHBOARD_HOST", "127.0.0.1"),
            port: get_env(lookup, "BROKERME_DASHBOARD_PORT", "0"),
        }
    }

    pub fn enabled(&self) -> bool {
        self.port != 0
    }
}

// --- PRIVATE HELPER ---

fn get_env<T: std::str::FromStr>(lookup: &dyn Fn(&str) -> Option<String>, key: &str, default: &str) -> T {
    let raw = lookup(key).unwrap_or_else(|| default.to_string());
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!("Config error: {} must be valid (got '{}'), using {}", key, raw, default);
            default
                .parse()
                .unwrap_or_else(|_| panic!("Config default for {} must parse", key))
        }
    }
}
