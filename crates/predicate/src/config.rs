//! Translator defaults.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, order::OrderDirection};

pub const DEFAULT_PAGE_SIZE: u64 = 15;
pub const DEFAULT_PAGE_DELTA: i64 = 1;

pub const ENV_DEFAULT_DIRECTION: &str = "PREDICATE_DEFAULT_DIRECTION";
pub const ENV_PAGE_DELTA: &str = "PREDICATE_PAGE_DELTA";
pub const ENV_DEFAULT_PAGE_SIZE: &str = "PREDICATE_DEFAULT_PAGE_SIZE";
pub const ENV_EMIT_ZERO_OFFSET: &str = "PREDICATE_EMIT_ZERO_OFFSET";

/// Whether a computed offset of zero is still sent to the builder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetPolicy {
    /// Only call `offset` when it is non-zero.
    #[default]
    SkipZero,
    /// Always call `offset`, even with zero.
    Always,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Direction for order strings that carry none.
    pub default_direction: OrderDirection,
    /// The lowest meaningful page number. Pages at or below it start at
    /// offset zero.
    pub page_delta: i64,
    /// Page size used when the caller gives none.
    pub default_page_size: u64,
    pub offset_policy: OffsetPolicy,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            default_direction: OrderDirection::Asc,
            page_delta: DEFAULT_PAGE_DELTA,
            default_page_size: DEFAULT_PAGE_SIZE,
            offset_policy: OffsetPolicy::SkipZero,
        }
    }
}

impl TranslatorConfig {
    /// Defaults overridden by the `PREDICATE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().overridden_by(|key| std::env::var(key).ok())
    }

    /// Parses a JSON configuration document. Missing fields keep their
    /// defaults.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source).map_err(|e| ConfigError::InvalidValue {
            key: "config".to_string(),
            value: e.to_string(),
        })?;
        config.validate()
    }

    /// Applies overrides from `lookup`, keyed by the `PREDICATE_*` names.
    pub fn overridden_by<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(direction) = lookup(ENV_DEFAULT_DIRECTION) {
            self.default_direction = direction.trim().parse()?;
        }
        if let Some(delta) = lookup(ENV_PAGE_DELTA) {
            self.page_delta = parse_var(ENV_PAGE_DELTA, &delta)?;
        }
        if let Some(size) = lookup(ENV_DEFAULT_PAGE_SIZE) {
            self.default_page_size = parse_var(ENV_DEFAULT_PAGE_SIZE, &size)?;
        }
        if let Some(flag) = lookup(ENV_EMIT_ZERO_OFFSET) {
            self.offset_policy = if parse_flag(ENV_EMIT_ZERO_OFFSET, &flag)? {
                OffsetPolicy::Always
            } else {
                OffsetPolicy::SkipZero
            };
        }
        self.validate()
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.default_page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(self)
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
