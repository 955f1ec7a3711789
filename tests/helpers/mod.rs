#![allow(dead_code)]

use std::path::PathBuf;

use brokerme::config::Config;
use brokerme::BrokerMe;
use tempfile::TempDir;

/// Engine over the sample servers, saving into a fresh temp directory
pub fn setup_app() -> (BrokerMe, TempDir) {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().to_string_lossy().into_owned();
    let config = Config::load_from(move |key| match key {
        "BROKERME_DATA_DIR" => Some(data_dir.clone()),
        _ => None,
    });
    (BrokerMe::new(&config), temp_dir)
}

pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

pub fn args(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}
