use std::{
    env,
    path::{Path, PathBuf},
};

use thiserror::Error;

use super::schema::Settings;

const ENV_PREFIX: &str = "MISSING_TRACKS";
const CONFIG_PATH_VAR: &str = "MISSING_TRACKS_CONFIG_PATH";

/// Flat keys of the original `config.json` layout and where they land.
const FLAT_KEYS: [(&str, &str); 3] = [
    ("searchPath", "scan.search_path"),
    ("outFileName", "report.out_file_name"),
    ("delimiter", "scan.delimiter"),
];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Configuration file \"{}\" does not exist!", .0.display())]
    Missing(PathBuf),
    #[error("Failed to read configuration: {0}")]
    Unreadable(#[from] ::config::ConfigError),
}

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then environment variables
/// (prefix `MISSING_TRACKS__`), falling back to struct defaults.
impl Settings {
    /// Load settings, preferring `explicit` over the resolved config path.
    ///
    /// A path named explicitly (argument or `MISSING_TRACKS_CONFIG_PATH`) must
    /// exist; the XDG default may be absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, LoadError> {
        let explicit = explicit.map(Path::to_path_buf).or_else(env_config_path);
        if let Some(path) = &explicit {
            if !path.is_file() {
                return Err(LoadError::Missing(path.clone()));
            }
        }
        let config_path = explicit.or_else(default_config_path);

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let cfg = with_flat_keys(builder.build()?)?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.scan.delimiter.is_empty() {
            return Err("scan.delimiter must not be empty".to_string());
        }
        if self.scan.extension.trim().trim_start_matches('.').is_empty() {
            return Err("scan.extension must not be empty".to_string());
        }
        Ok(())
    }

    /// Effective settings rendered as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Map flat keys onto their nested counterparts.
///
/// A flat key only fills in a nested key that no source set.
fn with_flat_keys(cfg: ::config::Config) -> Result<::config::Config, ::config::ConfigError> {
    let mut builder = ::config::Config::builder().add_source(cfg.clone());
    let mut mapped = false;

    for (flat, nested) in FLAT_KEYS {
        if cfg.get::<::config::Value>(nested).is_ok() {
            continue;
        }
        let value = cfg
            .get_string(flat)
            .or_else(|_| cfg.get_string(&flat.to_ascii_lowercase()));
        if let Ok(value) = value {
            builder = builder.set_default(nested, value)?;
            mapped = true;
        }
    }

    if mapped { builder.build() } else { Ok(cfg) }
}

fn env_config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_PATH_VAR).map(PathBuf::from)
}

/// Compute the default config path under `$XDG_CONFIG_HOME/missing-tracks/config.toml`
/// or `~/.config/missing-tracks/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("missing-tracks").join("config.toml"))
}
