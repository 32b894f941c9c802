use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub(crate) struct Config {
    /// File snapshots into the archive subfolder after cloning.
    #[serde(default = "default_archive")]
    pub(crate) archive: bool,
    /// Name of the archive subfolder created next to the timeline.
    #[serde(default = "default_archive_folder")]
    pub(crate) archive_folder: String,
    #[serde(default)]
    pub(crate) verbose: bool,
    #[serde(default)]
    pub(crate) quiet: bool,
}

fn default_archive() -> bool {
    true
}

fn default_archive_folder() -> String {
    "@Snapshots".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            archive: default_archive(),
            archive_folder: default_archive_folder(),
            verbose: false,
            quiet: false,
        }
    }
}

impl Config {
    pub(crate) fn load() -> Self {
        for path in Self::get_config_paths() {
            if path.exists()
                && let Some(config) = Self::load_path(&path)
            {
                return config;
            }
        }
        Self::default()
    }

    fn load_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        match toml::from_str::<Config>(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/resnap/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("resnap").join("config.toml"));
        }

        // 2. Platform config dir (~/Library/Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("resnap").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.resnap.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".resnap.toml"));
        }

        paths
    }
}
