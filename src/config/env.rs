use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Read an override variable, falling back to `default` when unset.
/// A set-but-unparseable value is contained: log it and keep the default.
pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
{
    match env::var(key) {
        Ok(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                log::warn!(
                    "Ignoring unparseable override {}='{}', keeping {}",
                    key,
                    raw,
                    default
                );
                default
            }
        },
        Err(_) => default,
    }
}

/// Comma-separated list variable. Empty entries are dropped; an unset
/// variable yields `None` so the caller keeps its default.
pub(crate) fn env_list(key: &str) -> Option<Vec<String>> {
    let raw = env::var(key).ok()?;
    Some(
        raw.split(',')
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect(),
    )
}
