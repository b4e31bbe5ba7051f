use crate::api::PriceListApi;
use crate::config::PriceListConfig;
use crate::error::{PriceListError, Result};
use crate::store::fs::FileBackend;
use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

/// Overrides the config directory. Used by tests and by anyone who wants a
/// self-contained setup.
pub const HOME_ENV: &str = "PRICELIST_HOME";

pub struct PriceListContext {
    pub api: PriceListApi<FileBackend>,
    pub config: PriceListConfig,
    pub config_dir: PathBuf,
}

/// `$PRICELIST_HOME` if set, otherwise the platform config directory.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(home) = env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "pricelist", "pricelist")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PriceListError::Config("Could not determine config dir".to_string()))
}

/// Resolves the data file (`file_override`, then config, then the default)
/// and wires up an API over it. Nothing is loaded yet.
pub fn initialize(file_override: Option<PathBuf>) -> Result<PriceListContext> {
    initialize_in(config_dir()?, file_override)
}

pub fn initialize_in(
    config_dir: PathBuf,
    file_override: Option<PathBuf>,
) -> Result<PriceListContext> {
    let config = PriceListConfig::load(&config_dir)?;
    let data_file = file_override.unwrap_or_else(|| config.data_file.clone());

    let api = PriceListApi::new(FileBackend::new(data_file));
    Ok(PriceListContext {
        api,
        config,
        config_dir,
    })
}
