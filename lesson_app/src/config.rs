use std::path::{Path, PathBuf};
use std::str::FromStr;
use ini::Ini;
use lesson_lib::audio::MAX_VOLUME;
use tracing::{info, warn};
use crate::error::{AppError, AppResult};

pub const DEFAULT_CONFIG: &str = "assets/config/app.ini";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Number of the lesson to run
    pub lesson: u32,
    /// Root of the per lesson asset directories
    pub assets: PathBuf,
    pub audio_enabled: bool,
    /// Mixer volume, 0 to `MAX_VOLUME`
    pub volume: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            lesson: 1,
            assets: PathBuf::from("assets"),
            audio_enabled: true,
            volume: MAX_VOLUME,
        }
    }
}

impl Config {
    /// Load `path`, falling back to the defaults if it doesn't exist
    pub fn load(path: &Path) -> AppResult<Config> {
        if !path.exists() {
            warn!("Config file {} not found, using defaults", path.display());
            return Ok(Config::default());
        }

        let ini = Ini::load_from_file(path)?;
        info!("Loaded config from {}", path.display());

        Config::from_ini(&ini)
    }

    pub fn from_ini(ini: &Ini) -> AppResult<Config> {
        let mut config = Config::default();

        for (section, props) in ini.iter() {
            for (key, value) in props.iter() {
                match (section, key) {
                    (Some("App"), "lesson") => config.lesson = parse(key, value)?,
                    (Some("App"), "assets") => config.assets = PathBuf::from(value),
                    (Some("Audio"), "enabled") => config.audio_enabled = parse(key, value)?,
                    (Some("Audio"), "volume") => {
                        config.volume = parse::<u8>(key, value)?.min(MAX_VOLUME)
                    }
                    _ => warn!(
                        "Unknown config entry [{}] {} = {}",
                        section.unwrap_or(""),
                        key,
                        value
                    ),
                }
            }
        }

        Ok(config)
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> AppResult<T> {
    value.trim().parse().map_err(|_| AppError::BadConfigValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_known_entries() {
        let ini = Ini::load_from_str(
            "[App]\nlesson = 26\nassets = /data/lessons\n\n[Audio]\nenabled = false\nvolume = 64\n",
        )
        .unwrap();

        let config = Config::from_ini(&ini).unwrap();
        assert_eq!(config.lesson, 26);
        assert_eq!(config.assets, PathBuf::from("/data/lessons"));
        assert!(!config.audio_enabled);
        assert_eq!(config.volume, 64);
    }

    #[test]
    fn missing_entries_keep_defaults() {
        let ini = Ini::load_from_str("[App]\nlesson = 3\n[Extra]\nfoo = bar\n").unwrap();

        let config = Config::from_ini(&ini).unwrap();
        assert_eq!(config.lesson, 3);
        assert_eq!(config.volume, MAX_VOLUME);
        assert!(config.audio_enabled);
    }

    #[test]
    fn volume_is_clamped() {
        let ini = Ini::load_from_str("[Audio]\nvolume = 200\n").unwrap();
        assert_eq!(Config::from_ini(&ini).unwrap().volume, MAX_VOLUME);
    }

    #[test]
    fn bad_values_are_errors() {
        let ini = Ini::load_from_str("[App]\nlesson = first\n").unwrap();
        assert!(matches!(
            Config::from_ini(&ini),
            Err(AppError::BadConfigValue { .. })
        ));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("lesson_app_no_such_config.ini");
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }
}
