use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("config.missing_variable: {0}")]
    Missing(&'static str),
    #[error("config.invalid_value: {name}={value}")]
    Invalid { name: &'static str, value: String },
}

/// Reads an environment variable, treating blank values as unset.
pub fn read_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn require_var(name: &'static str) -> Result<String, ConfigError> {
    read_var(name).ok_or(ConfigError::Missing(name))
}

/// Parses `raw`, falling back to `default` when it is absent.
pub fn parse_or<T: FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    Ok(parse_optional(name, raw)?.unwrap_or(default))
}

pub fn parse_optional<T: FromStr>(
    name: &'static str,
    raw: Option<String>,
) -> Result<Option<T>, ConfigError> {
    raw.map(|value| {
        value
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { name, value })
    })
    .transpose()
}
