use chore_core::error::CoreError;
use chore_core::models::Domain;
use chore_core::timezone::validate_timezone;
use chrono_tz::Tz;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Config {
    /// SQLite database file
    #[serde(default = "default_database_path")]
    pub database_path: String,
    /// IANA timezone that decides what "today" is
    #[serde(default = "detect_system_timezone")]
    pub timezone: String,
    /// Domain shown by `list` and `all` when none is given
    #[serde(default)]
    pub default_domain: Option<Domain>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            timezone: detect_system_timezone(),
            default_domain: None,
        }
    }
}

impl Config {
    /// `chore.toml` in the working directory, overridden by `CHORE_*` variables
    pub fn new() -> Result<Self, figment::Error> {
        Self::from_figment(
            Figment::new()
                .merge(Toml::file("chore.toml"))
                .merge(Env::prefixed("CHORE_")),
        )
    }

    fn from_figment(figment: Figment) -> Result<Self, figment::Error> {
        figment.extract()
    }

    pub fn tz(&self) -> Result<Tz, CoreError> {
        validate_timezone(&self.timezone)
    }
}

fn default_database_path() -> String {
    "chore.db".to_string()
}

/// Detects the system timezone, falling back to UTC if detection fails
pub fn detect_system_timezone() -> String {
    if let Ok(tz) = std::env::var("TZ") {
        if validate_timezone(&tz).is_ok() {
            return tz;
        }
    }

    if let Ok(local_tz) = iana_time_zone::get_timezone() {
        if validate_timezone(&local_tz).is_ok() {
            return local_tz;
        }
    }

    "UTC".to_string()
}
