use drawtick_core::StoreConfig;
use drawtick_lottery::CoordinatorConfig;
use std::path::{Path, PathBuf};

pub const DATABASE_FILE: &str = "drawtick.db";
pub const DATABASE_PATH_ENV: &str = "DATABASE_PATH";

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub database_path: PathBuf,
    pub store: StoreConfig,
    pub coordinator: CoordinatorConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        let data_dir = default_data_dir();
        Self {
            database_path: data_dir.join(DATABASE_FILE),
            data_dir,
            store: StoreConfig::default(),
            coordinator: CoordinatorConfig::default(),
        }
    }
}

impl CliConfig {
    /// `DATABASE_PATH` wins over `--data-dir`, which wins over the
    /// platform data directory.
    pub fn resolve(data_dir: Option<PathBuf>, database_env: Option<PathBuf>) -> Self {
        let data_dir = data_dir.unwrap_or_else(default_data_dir);
        let database_path = database_env.unwrap_or_else(|| data_dir.join(DATABASE_FILE));

        Self {
            data_dir,
            database_path,
            ..Self::default()
        }
    }

    pub fn from_env(data_dir: Option<PathBuf>) -> Self {
        let database_env = std::env::var_os(DATABASE_PATH_ENV).map(PathBuf::from);
        Self::resolve(data_dir, database_env)
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("drawtick")
}
