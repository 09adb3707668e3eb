//! Deserializable configuration using the conventional camelCase keys
//! (`origin`, `maxAge`, `allowMethods`, `allowHeaders`, `exposeHeaders`,
//! `allowCredentials`, `runHandlerOnPreflightRequest`). Every key is optional
//! and falls back to the [`CorsOptions`] defaults.

use crate::max_age::MaxAge;
use crate::options::CorsOptions;
use crate::origin::{Origin, OriginMatcher, PatternError};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CorsSettings {
    pub origin: Option<OriginSetting>,
    pub max_age: Option<MaxAgeSetting>,
    pub allow_methods: Option<Vec<String>>,
    pub allow_headers: Option<Vec<String>>,
    pub expose_headers: Option<Vec<String>>,
    pub allow_credentials: Option<bool>,
    pub run_handler_on_preflight_request: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OriginSetting {
    /// `true` reflects the request origin, `false` disables CORS.
    Flag(bool),
    /// `"*"` or a literal origin.
    Value(String),
    Pattern { pattern: String },
    List(Vec<OriginEntrySetting>),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OriginEntrySetting {
    Exact(String),
    Pattern { pattern: String },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MaxAgeSetting {
    Seconds(u64),
    Raw(String),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid origin pattern `{pattern}`")]
    Pattern {
        pattern: String,
        #[source]
        source: PatternError,
    },
}

fn compile(pattern: String) -> Result<OriginMatcher, SettingsError> {
    OriginMatcher::pattern_str(&pattern)
        .map_err(|source| SettingsError::Pattern { pattern, source })
}

impl TryFrom<OriginSetting> for Origin {
    type Error = SettingsError;

    fn try_from(setting: OriginSetting) -> Result<Self, Self::Error> {
        match setting {
            OriginSetting::Flag(flag) => Ok(Origin::from(flag)),
            OriginSetting::Value(value) => Ok(Origin::from(value)),
            OriginSetting::Pattern { pattern } => Origin::pattern_str(&pattern)
                .map_err(|source| SettingsError::Pattern { pattern, source }),
            OriginSetting::List(entries) => entries
                .into_iter()
                .map(|entry| match entry {
                    OriginEntrySetting::Exact(value) => Ok(OriginMatcher::Exact(value)),
                    OriginEntrySetting::Pattern { pattern } => compile(pattern),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Origin::List),
        }
    }
}

impl From<MaxAgeSetting> for MaxAge {
    fn from(setting: MaxAgeSetting) -> Self {
        match setting {
            MaxAgeSetting::Seconds(value) => MaxAge::Seconds(value),
            MaxAgeSetting::Raw(value) => MaxAge::Raw(value),
        }
    }
}

impl TryFrom<CorsSettings> for CorsOptions {
    type Error = SettingsError;

    fn try_from(settings: CorsSettings) -> Result<Self, Self::Error> {
        let defaults = CorsOptions::default();

        let origin = match settings.origin {
            Some(setting) => Origin::try_from(setting)?,
            None => defaults.origin,
        };

        Ok(CorsOptions {
            origin,
            allow_methods: settings.allow_methods.unwrap_or(defaults.allow_methods),
            allow_headers: settings.allow_headers.unwrap_or(defaults.allow_headers),
            expose_headers: settings.expose_headers.unwrap_or(defaults.expose_headers),
            max_age: settings.max_age.map(MaxAge::from).unwrap_or(defaults.max_age),
            allow_credentials: settings
                .allow_credentials
                .unwrap_or(defaults.allow_credentials),
            run_handler_on_preflight: settings
                .run_handler_on_preflight_request
                .unwrap_or(defaults.run_handler_on_preflight),
            options_success_status: defaults.options_success_status,
        })
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;
