//! Persistent configuration for cabroster.
//!
//! The configuration stores the defaults that fill in any roster argument not
//! given on the command line, plus the optional telemetry endpoint. It lives
//! as pretty-printed JSON in the platform data directory (see
//! [`DataStorage`]); a missing file means "all defaults".
//!
//! ```rust,no_run
//! use cabroster::libs::config::Config;
//!
//! let config = Config::read()?;
//! let defaults = config.defaults.unwrap_or_default();
//! println!("Default shift: {} - {}", defaults.shift_start, defaults.shift_end);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::schedule::TrailingLogout;
use super::shift::EditType;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

const WEEKDAYS: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Values used when a roster argument is omitted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ShiftDefaults {
    pub shift_start: String,
    pub shift_end: String,
    pub next_day_logout: bool,
    /// Three-letter weekday names, e.g. `sat`.
    pub skip_weekdays: Vec<String>,
    pub edit_type: EditType,
    pub trailing_logout: TrailingLogout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl Default for ShiftDefaults {
    fn default() -> Self {
        ShiftDefaults {
            shift_start: "22:30".to_string(),
            shift_end: "08:00".to_string(),
            next_day_logout: false,
            skip_weekdays: vec![],
            edit_type: EditType::Add,
            trailing_logout: TrailingLogout::Emit,
            output: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TelemetryConfig {
    pub api_url: String,
    #[serde(default = "TelemetryConfig::default_timeout_ms")]
    pub timeout_ms: u64,
}

impl TelemetryConfig {
    fn default_timeout_ms() -> u64 {
        2000
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<ShiftDefaults>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub telemetry: Option<TelemetryConfig>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        let config: Config =
            serde_json::from_str(&config_str).with_context(|| Message::ConfigParseError(config_file_path.display().to_string()))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Interactive wizard; existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [
            ConfigModule {
                key: "defaults".to_string(),
                name: Message::ConfigModuleDefaults.to_string(),
            },
            ConfigModule {
                key: "telemetry".to_string(),
                name: Message::ConfigModuleTelemetry.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "defaults" => {
                    let default = config.defaults.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleDefaults);

                    let shift_start = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultShiftStart.to_string())
                        .default(default.shift_start.clone())
                        .interact_text()?;
                    let shift_end = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultShiftEnd.to_string())
                        .default(default.shift_end.clone())
                        .interact_text()?;
                    let next_day_logout = Confirm::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultNextDayLogout.to_string())
                        .default(default.next_day_logout)
                        .interact()?;

                    let checked: Vec<bool> = WEEKDAYS.iter().map(|day| default.skip_weekdays.iter().any(|s| s == day)).collect();
                    let skip = MultiSelect::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultSkipWeekdays.to_string())
                        .items(&WEEKDAYS)
                        .defaults(&checked)
                        .interact()?;

                    let output: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultOutput.to_string())
                        .default(default.output.as_ref().map(|p| p.display().to_string()).unwrap_or_default())
                        .allow_empty(true)
                        .interact_text()?;

                    config.defaults = Some(ShiftDefaults {
                        shift_start,
                        shift_end,
                        next_day_logout,
                        skip_weekdays: skip.into_iter().map(|i| WEEKDAYS[i].to_string()).collect(),
                        output: (!output.trim().is_empty()).then(|| PathBuf::from(output.trim())),
                        ..default
                    });
                }
                "telemetry" => {
                    let default = config.telemetry.clone();
                    msg_print!(Message::ConfigModuleTelemetry);
                    let api_url: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptTelemetryUrl.to_string())
                        .default(default.as_ref().map(|t| t.api_url.clone()).unwrap_or_default())
                        .allow_empty(true)
                        .interact_text()?;

                    config.telemetry = match api_url.trim() {
                        "" => None,
                        url => Some(TelemetryConfig {
                            api_url: url.to_string(),
                            timeout_ms: default.map(|t| t.timeout_ms).unwrap_or_else(TelemetryConfig::default_timeout_ms),
                        }),
                    };
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
