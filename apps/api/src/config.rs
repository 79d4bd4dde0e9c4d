use anyhow::{ensure, Context, Result};

use crate::layout::budget::{
    LayoutConfig, DEFAULT_MAX_CHARS_PER_PAGE, DEFAULT_PARAGRAPH_SPACING_CHARS,
};

/// Application configuration loaded from environment variables.
/// Every variable is optional; startup fails only on values that do not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_chars_per_page: usize,
    pub paragraph_spacing_chars: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from any variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_chars_per_page =
            parse_or(&lookup, "MAX_CHARS_PER_PAGE", DEFAULT_MAX_CHARS_PER_PAGE)?;
        ensure!(
            max_chars_per_page > 0,
            "MAX_CHARS_PER_PAGE must be greater than zero"
        );

        Ok(Config {
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_chars_per_page,
            paragraph_spacing_chars: parse_or(
                &lookup,
                "PARAGRAPH_SPACING_CHARS",
                DEFAULT_PARAGRAPH_SPACING_CHARS,
            )?,
        })
    }

    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            max_chars_per_page: self.max_chars_per_page,
            paragraph_spacing_chars: self.paragraph_spacing_chars,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.layout_config(), LayoutConfig::default());
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = config_from(&[
            ("PORT", "3000"),
            ("RUST_LOG", "debug"),
            ("MAX_CHARS_PER_PAGE", " 1800 "),
            ("PARAGRAPH_SPACING_CHARS", "0"),
        ])
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.layout_config().max_chars_per_page, 1800);
        assert_eq!(config.layout_config().paragraph_spacing_chars, 0);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));

        let err = config_from(&[("MAX_CHARS_PER_PAGE", "0")]).unwrap_err();
        assert!(err.to_string().contains("greater than zero"));

        assert!(config_from(&[("PARAGRAPH_SPACING_CHARS", "-1")]).is_err());
    }
}
