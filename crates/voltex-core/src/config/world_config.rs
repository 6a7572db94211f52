use std::path::{Path, PathBuf};

use crate::config::{env, world};
use crate::error::{Error, Result};

/// Settings that shape a generated world
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldConfig {
    pub game: String,
    pub creator: String,
    /// Dev worlds get a `_dev` game suffix and tab-indented JSON
    pub dev: bool,
    pub output_folder: Option<PathBuf>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            game: world::GAME_NAME.to_string(),
            creator: world::CREATOR.to_string(),
            dev: true,
            output_folder: None,
        }
    }
}

impl WorldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `DEV` and `APWORLD_OUTPUT_FOLDER` from the process environment
    pub fn from_env() -> Self {
        let dev = std::env::var(env::DEV).ok();
        let output = std::env::var(env::APWORLD_OUTPUT_FOLDER).ok();
        Self::from_vars(dev.as_deref(), output.as_deref())
    }

    pub fn from_vars(dev: Option<&str>, output_folder: Option<&str>) -> Self {
        Self {
            dev: parse_dev_flag(dev),
            output_folder: output_folder
                .filter(|folder| !folder.trim().is_empty())
                .map(PathBuf::from),
            ..Self::default()
        }
    }

    pub fn with_dev(mut self, dev: bool) -> Self {
        self.dev = dev;
        self
    }

    pub fn with_output_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.output_folder = Some(folder.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.game.trim().is_empty() {
            return Err(Error::InvalidConfig("game name is empty".to_string()));
        }
        if self.creator.trim().is_empty() {
            return Err(Error::InvalidConfig("creator is empty".to_string()));
        }
        Ok(())
    }

    /// Game name as written to game.json ("SDVX" or "SDVX_dev")
    pub fn game_name(&self) -> String {
        if self.dev {
            format!("{}{}", self.game, world::DEV_SUFFIX)
        } else {
            self.game.clone()
        }
    }

    /// "manual_<game>_<creator>", the apworld file and top-level folder name
    pub fn world_file_name(&self) -> String {
        format!("manual_{}_{}", self.game_name(), self.creator)
    }

    pub fn output_folder(&self) -> &Path {
        self.output_folder
            .as_deref()
            .unwrap_or(Path::new(world::DEFAULT_OUTPUT_FOLDER))
    }
}

/// Dev mode stays on unless the variable explicitly says otherwise
pub fn parse_dev_flag(value: Option<&str>) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) => !matches!(v.as_str(), "false" | "0" | "no" | "off"),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dev() {
        let config = WorldConfig::default();

        assert!(config.dev);
        assert_eq!(config.game_name(), "SDVX_dev");
        assert_eq!(config.world_file_name(), "manual_SDVX_dev_MapleLeaf");
        assert_eq!(config.output_folder(), Path::new("dist"));
    }

    #[test]
    fn test_release_names() {
        let config = WorldConfig::default().with_dev(false);

        assert_eq!(config.game_name(), "SDVX");
        assert_eq!(config.world_file_name(), "manual_SDVX_MapleLeaf");
    }

    #[test]
    fn test_parse_dev_flag() {
        assert!(parse_dev_flag(None));
        assert!(parse_dev_flag(Some("true")));
        assert!(parse_dev_flag(Some("1")));
        assert!(!parse_dev_flag(Some("false")));
        assert!(!parse_dev_flag(Some("FALSE")));
        assert!(!parse_dev_flag(Some(" 0 ")));
        assert!(!parse_dev_flag(Some("off")));
    }

    #[test]
    fn test_from_vars() {
        let config = WorldConfig::from_vars(Some("false"), Some("/tmp/worlds"));
        assert!(!config.dev);
        assert_eq!(config.output_folder(), Path::new("/tmp/worlds"));

        let config = WorldConfig::from_vars(None, Some("  "));
        assert!(config.dev);
        assert_eq!(config.output_folder, None);
    }

    #[test]
    fn test_validate_rejects_empty_creator() {
        let config = WorldConfig {
            creator: " ".to_string(),
            ..WorldConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        assert!(WorldConfig::default().validate().is_ok());
    }
}
