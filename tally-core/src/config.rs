use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::parse_entry::parse_time_entry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Preferred editor name/binary (e.g. hx for Helix). Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
    /// Minutes you aim to log per day. Written in the config as any accepted duration,
    /// e.g. `daily_target = "7:30 hr"`.
    pub daily_target: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    editor: Option<String>,
    daily_target: Option<String>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    ///
    /// A config file that cannot be read or parsed is reported and otherwise ignored.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|error| {
            tracing::warn!("ignoring config file: {error:#}");
            FileConfig::default()
        });
        Ok(Self::from_file_config(file_config))
    }

    /// Loads a specific config file. Unlike [`Config::load`], errors are returned.
    pub fn load_from(path: &Path) -> Result<Self> {
        let file_config = Self::read_path(path)?;
        Ok(Self::from_file_config(file_config))
    }

    /// Config file candidates, in the order they are tried.
    pub fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join("tally").join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("tally").join("config.toml");
            if !v.contains(&native) {
                v.push(native);
            }
        }
        v
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let daily_target = file_config
            .daily_target
            .as_deref()
            .and_then(Self::parse_daily_target);

        Self {
            editor: file_config.editor,
            daily_target,
        }
    }

    /// Parse a duration such as "8 hr" into minutes.
    fn parse_daily_target(target: &str) -> Option<u32> {
        let entry = parse_time_entry(target);
        if entry.valid {
            Some(entry.minutes)
        } else {
            tracing::warn!("daily_target {target:?} is not a duration, ignoring it");
            None
        }
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            return Self::read_path(&path);
        }
        tracing::debug!("no config file found, using defaults");
        Ok(FileConfig::default())
    }

    fn read_path(path: &Path) -> Result<FileConfig> {
        tracing::debug!("loading config from {}", path.display());
        let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()))
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b.home_dir().join(".config").join("tally").join("config.toml");
            let c = Config::config_file_paths();
            assert_eq!(c.first(), Some(&expected_xdg));
            assert!(c.iter().all(|p| p.ends_with("tally/config.toml")));
        }
    }

    #[test]
    fn parse_file_accepts_editor_and_target() {
        let toml = r#"
            editor = "hx"
            daily_target = "7:30 hr"
        "#;
        let config = Config::from_file_config(Config::parse_file(toml).unwrap());
        assert_eq!(config.editor.as_deref(), Some("hx"));
        assert_eq!(config.daily_target, Some(450));
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_file_config(Config::parse_file("").unwrap());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_target_is_ignored() {
        let toml = r#"daily_target = "all day""#;
        let config = Config::from_file_config(Config::parse_file(toml).unwrap());
        assert_eq!(config.daily_target, None);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(Config::parse_file("editor = ").is_err());
        assert!(Config::parse_file("daily_target = 8").is_err());
    }

    #[test]
    fn load_from_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "daily_target = \"45m\"").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.daily_target, Some(45));
        assert_eq!(config.editor, None);
    }

    #[test]
    fn load_from_reports_path_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let error = Config::load_from(&missing).unwrap_err();
        assert!(format!("{error:#}").contains("reading"));
    }
}
