use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Utc;

use crate::config::{ConfigError, EngineConfig};

const HOME_ENV: &str = "BALANCETE_CORE_HOME";
const APP_DIR_NAME: &str = "balancete_core";
const CONFIG_FILE: &str = "config.json";
const BACKUPS_DIR: &str = "backups";
const BACKUP_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S%3f";
const TMP_SUFFIX: &str = "tmp";

/// Loads and stores [`EngineConfig`] as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
    backups_dir: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        let backups_dir = config_path
            .parent()
            .map(|parent| parent.join(BACKUPS_DIR))
            .unwrap_or_else(|| PathBuf::from(BACKUPS_DIR));
        Self {
            config_path,
            backups_dir,
        }
    }

    /// Uses `$BALANCETE_CORE_HOME`, else the platform config directory.
    pub fn from_env() -> Self {
        let base = env::var_os(HOME_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                dirs::config_dir()
                    .or_else(dirs::home_dir)
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(APP_DIR_NAME)
            });
        Self::new(base.join(CONFIG_FILE))
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        Ok(Self::new(base.join(CONFIG_FILE)))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn backups_dir(&self) -> &Path {
        &self.backups_dir
    }

    /// Reads the stored configuration; a missing file yields the defaults.
    pub fn load(&self) -> Result<EngineConfig, ConfigError> {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "no config file; using defaults");
            return Ok(EngineConfig::default());
        }
        read_config(&self.config_path)
    }

    pub fn save(&self, config: &EngineConfig) -> Result<(), ConfigError> {
        config.validate()?;
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = to_json(config)?;
        let tmp = tmp_path(&self.config_path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.config_path)?;
        tracing::info!(path = %self.config_path.display(), "configuration saved");
        Ok(())
    }

    /// Writes a timestamped copy of `config` and returns its file name.
    pub fn backup(&self, config: &EngineConfig, note: Option<&str>) -> Result<String, ConfigError> {
        fs::create_dir_all(&self.backups_dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT);
        let mut name = format!("config_{timestamp}");
        if let Some(label) = sanitize_note(note) {
            name.push('_');
            name.push_str(&label);
        }
        name.push('.');
        name.push_str(BACKUP_EXTENSION);
        write_file(&self.backups_dir.join(&name), &to_json(config)?)?;
        tracing::info!(backup = %name, "configuration backup written");
        Ok(name)
    }

    pub fn restore(&self, backup_name: &str) -> Result<EngineConfig, ConfigError> {
        let path = self.backups_dir.join(backup_name);
        if !path.exists() {
            return Err(ConfigError::BackupNotFound(backup_name.to_string()));
        }
        read_config(&path)
    }

    /// Backup file names, newest first.
    pub fn list_backups(&self) -> Result<Vec<String>, ConfigError> {
        if !self.backups_dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.backups_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(BACKUP_EXTENSION) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                entries.push(name.to_string());
            }
        }
        entries.sort_by(|a, b| b.cmp(a));
        Ok(entries)
    }
}

fn read_config(path: &Path) -> Result<EngineConfig, ConfigError> {
    let data = fs::read_to_string(path)?;
    let config: EngineConfig =
        serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))?;
    config.validate()?;
    Ok(config)
}

fn to_json(config: &EngineConfig) -> Result<String, ConfigError> {
    serde_json::to_string_pretty(config).map_err(|err| ConfigError::Serde(err.to_string()))
}

fn sanitize_note(note: Option<&str>) -> Option<String> {
    let raw = note?.trim();
    let mut sanitized = String::new();
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            sanitized.push(ch.to_ascii_lowercase());
        } else if (ch.is_whitespace() || matches!(ch, '-' | '.')) && !sanitized.ends_with('-') {
            sanitized.push('-');
        }
    }
    let trimmed = sanitized.trim_matches('-');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
