//! Environment-driven configuration for the demo binary.

use serde::{Deserialize, Serialize};
use storefront_observability::LogFormat;

pub const LOG_FORMAT_VAR: &str = "STOREFRONT_LOG_FORMAT";
pub const SUMMARY_VAR: &str = "STOREFRONT_SUMMARY";

/// How the final summary is printed.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
}

impl core::str::FromStr for SummaryFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(SummaryFormat::Text),
            "json" => Ok(SummaryFormat::Json),
            other => Err(format!("unknown summary format '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoConfig {
    pub log_format: LogFormat,
    pub summary: SummaryFormat,
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unknown values fall back to
    /// the default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_format: parse_or_default(LOG_FORMAT_VAR, lookup(LOG_FORMAT_VAR)),
            summary: parse_or_default(SUMMARY_VAR, lookup(SUMMARY_VAR)),
        }
    }
}

fn parse_or_default<T>(var: &str, raw: Option<String>) -> T
where
    T: core::str::FromStr<Err = String> + Default,
{
    match raw {
        None => T::default(),
        Some(raw) => raw.parse().unwrap_or_else(|err: String| {
            tracing::warn!(var, %err, "invalid value; using default");
            T::default()
        }),
    }
}
