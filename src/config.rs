use crate::charset::{CharacterSet, IDENTIFIER_CHARACTERS};
use crate::error::Error;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const LOCAL_CONFIG_FILE: &str = ".identsplit.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub characters: String,
    pub extra_characters: String,
    pub words_only: bool,
}

/// One config file. Keys it leaves out keep the value of the layer below.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    pub characters: Option<String>,
    pub extra_characters: Option<String>,
    pub words_only: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            characters: IDENTIFIER_CHARACTERS.to_string(),
            extra_characters: String::new(),
            words_only: false,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        characters: Option<String>,
        extra_characters: Option<String>,
        words_only: bool,
    ) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config = config.merge(ConfigFile::read(&global_path)?);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            config = config.merge(ConfigFile::read(&local_path)?);
        }

        // Apply CLI overrides
        if let Some(characters) = characters {
            config.characters = characters;
        }
        if let Some(extra) = extra_characters {
            config.extra_characters.push_str(&extra);
        }
        config.words_only |= words_only;

        debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Defaults overridden by a single config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::default().merge(ConfigFile::read(path)?))
    }

    fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(characters) = file.characters {
            self.characters = characters;
        }
        if let Some(extra) = file.extra_characters {
            self.extra_characters = extra;
        }
        if let Some(words_only) = file.words_only {
            self.words_only = words_only;
        }
        self
    }

    /// The admissible set: `characters` plus `extra_characters`.
    pub fn character_set(&self) -> Result<CharacterSet, Error> {
        let mut set = CharacterSet::new(&self.characters);
        set.extend(&self.extra_characters);
        if set.is_empty() {
            return Err(Error::EmptyCharacterSet);
        }
        Ok(set)
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "identsplit").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

impl ConfigFile {
    pub fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let file = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        debug!(path = %path.display(), "read config file");
        Ok(file)
    }
}
