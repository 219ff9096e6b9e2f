// Fixture settings read from the environment.
//
// Purpose
// - Control how much detail the default reporter emits while tests run.
//
// Responsibilities
// - Parse ENTITY_PROJECTION_DETAIL (on, off, failure). Unset means failure.
// - Reject anything else with a SettingsError naming the value.

use std::str::FromStr;
use thiserror::Error;

pub const DETAIL_ENV_VAR: &str = "ENTITY_PROJECTION_DETAIL";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("invalid ENTITY_PROJECTION_DETAIL value `{0}`, expected on, off or failure")]
    InvalidDetailPolicy(String),
}

/// When detail lines are emitted. They are recorded in the report either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailPolicy {
    On,
    Off,
    #[default]
    Failure,
}

impl FromStr for DetailPolicy {
    type Err = SettingsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            "failure" => Ok(Self::Failure),
            _ => Err(SettingsError::InvalidDetailPolicy(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub detail: DetailPolicy,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let detail = match lookup(DETAIL_ENV_VAR) {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => DetailPolicy::default(),
        };
        Ok(Self { detail })
    }
}
