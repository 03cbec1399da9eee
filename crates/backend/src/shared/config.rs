use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub dataset: DatasetConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[dataset]
path = "data/sales_data_sample.csv"

[server]
port = 3000
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Get the dataset file path from configuration
pub fn get_dataset_path(config: &Config) -> anyhow::Result<PathBuf> {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf));
    Ok(resolve_dataset_path(&config.dataset.path, exe_dir.as_deref()))
}

/// Absolute paths are used as given. Relative paths resolve next to the
/// executable when the build script has staged the file there, otherwise
/// against the current directory (e.g. `cargo run` from the workspace root).
fn resolve_dataset_path(configured: &str, exe_dir: Option<&Path>) -> PathBuf {
    let dataset_path = Path::new(configured);

    if dataset_path.is_absolute() {
        return dataset_path.to_path_buf();
    }

    if let Some(dir) = exe_dir {
        let staged = dir.join(dataset_path);
        if staged.exists() {
            return staged;
        }
    }

    PathBuf::from(configured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.dataset.path, "data/sales_data_sample.csv");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_dataset_path_prefers_staged_copy() {
        let exe_dir = std::env::temp_dir().join("d100-config-staged-test");
        let data_dir = exe_dir.join("data");
        std::fs::create_dir_all(&data_dir).unwrap();
        let staged = data_dir.join("sales_data_sample.csv");
        std::fs::write(&staged, "ORDERNUMBER\n").unwrap();

        let resolved = resolve_dataset_path("data/sales_data_sample.csv", Some(&exe_dir));
        assert_eq!(resolved, staged);

        std::fs::remove_dir_all(&exe_dir).unwrap();
    }

    #[test]
    fn test_dataset_path_falls_back_to_working_dir() {
        let exe_dir = std::env::temp_dir().join("d100-config-fallback-test");
        std::fs::create_dir_all(&exe_dir).unwrap();

        // Nothing staged next to the executable: resolve relative to cwd
        let resolved = resolve_dataset_path("data/sales_data_sample.csv", Some(&exe_dir));
        assert_eq!(resolved, PathBuf::from("data/sales_data_sample.csv"));

        std::fs::remove_dir_all(&exe_dir).unwrap();
    }

    #[test]
    fn test_absolute_dataset_path_is_used_verbatim() {
        let resolved = resolve_dataset_path("/srv/sales/orders.csv", None);
        assert_eq!(resolved, PathBuf::from("/srv/sales/orders.csv"));
    }
}
