use crate::commands::{CmdMessage, CmdResult};
use crate::config::PriceListConfig;
use crate::error::Result;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let config = PriceListConfig::load(config_dir)?;
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => Ok(message(match config.get(&key) {
            Some(value) => CmdMessage::info(value),
            None => CmdMessage::error(format!("Unknown config key: {}", key)),
        })),
        ConfigAction::Set(key, value) => set(config_dir, config, &key, &value),
    }
}

/// Stores a new value. A rejected key or value leaves `config.json` untouched.
fn set(
    config_dir: &Path,
    mut config: PriceListConfig,
    key: &str,
    value: &str,
) -> Result<CmdResult> {
    if let Err(reason) = config.set(key, value) {
        return Ok(message(CmdMessage::error(reason)));
    }
    config.save(config_dir)?;
    debug!(key, value, "Updated config");

    let data_file = config.data_file.clone();
    let mut result = message(CmdMessage::success(format!(
        "Data file set to {}",
        data_file.display()
    )));
    // Relative paths resolve against the working directory of each run.
    if !data_file.is_file() {
        result.add_message(CmdMessage::info(format!(
            "{} does not exist yet; `pricelist add` creates it",
            data_file.display()
        )));
    }
    Ok(result.with_config(config))
}

fn message(message: CmdMessage) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(message);
    result
}
