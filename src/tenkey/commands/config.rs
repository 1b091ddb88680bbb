use crate::commands::{CmdMessage, CmdResult};
use crate::config::TenkeyConfig;
use crate::error::{Result, TenkeyError};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or updates the config in `config_dir`.
///
/// Bad keys and values come back as error messages rather than `Err`, so the caller
/// can print them next to the rest of the output.
pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = TenkeyConfig::load_or_default(config_dir);
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => return Ok(result.with_config(config)),
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(val) => result.add_message(CmdMessage::info(val)),
            None => result.add_message(CmdMessage::error(format!("Unknown config key: {}", key))),
        },
        ConfigAction::Set(key, value) => match config.set(&key, &value) {
            Ok(()) => {
                config.save(config_dir)?;
                let shown = config.get(&key).unwrap_or(value);
                result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
                result = result.with_config(config);
            }
            Err(TenkeyError::Config(reason)) => result.add_message(CmdMessage::error(reason)),
            Err(e) => return Err(e),
        },
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn set_persists_and_show_key_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("history-limit".into(), "30".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);

        let shown = run(dir.path(), ConfigAction::ShowKey("history-limit".into())).unwrap();
        assert_eq!(shown.messages[0].content, "30");
    }

    #[test]
    fn invalid_set_reports_error_without_saving() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("year-min".into(), "3000".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn show_all_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(TenkeyConfig::default()));
    }

    #[test]
    fn set_repairs_inconsistent_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.json"),
            r#"{"year-min": 2000, "year-max": 1990}"#,
        )
        .unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("year-min".into(), "1980".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        let saved = TenkeyConfig::load(dir.path()).unwrap();
        assert_eq!((saved.year_min, saved.year_max), (1980, 1990));
    }

    #[test]
    fn rejected_value_message_names_the_key() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("history-limit".into(), "lots".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "Invalid value for history-limit: lots");
    }

    #[test]
    fn unknown_key_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("colour".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
    }
}
