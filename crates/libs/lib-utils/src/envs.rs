//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get and parse an environment variable.
pub fn get_env_parse<T: FromStr>(name: &'static str) -> Result<T, Error> {
    let val = get_env(name)?;
    val.trim().parse::<T>().map_err(|_| Error::WrongFormat(name))
}

/// Parse an optional environment variable, falling back to `default` when
/// it is unset. A value that is set but malformed is still an error.
pub fn get_env_or<T: FromStr>(name: &'static str, default: T) -> Result<T, Error> {
    match get_env_parse(name) {
        Err(Error::MissingEnv(_)) => Ok(default),
        other => other,
    }
}

/// Read a `1`/`true`/`yes` style flag. Unset or anything else is `false`.
pub fn get_env_flag(name: &'static str) -> bool {
    get_env(name)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable name; the process environment is shared
    // between test threads.

    #[test]
    fn test_get_env_or_default_when_missing() {
        assert_eq!(get_env_or("LIB_UTILS_TEST_UNSET_VAR", 42u32), Ok(42));
    }

    #[test]
    fn test_get_env_or_parses_and_rejects() {
        env::set_var("LIB_UTILS_TEST_PAGE", " 25 ");
        assert_eq!(get_env_or("LIB_UTILS_TEST_PAGE", 10u32), Ok(25));

        env::set_var("LIB_UTILS_TEST_BAD", "many");
        assert_eq!(
            get_env_or("LIB_UTILS_TEST_BAD", 10u32),
            Err(Error::WrongFormat("LIB_UTILS_TEST_BAD"))
        );
    }

    #[test]
    fn test_get_env_flag() {
        env::set_var("LIB_UTILS_TEST_FLAG_ON", "TRUE");
        env::set_var("LIB_UTILS_TEST_FLAG_OFF", "0");
        assert!(get_env_flag("LIB_UTILS_TEST_FLAG_ON"));
        assert!(!get_env_flag("LIB_UTILS_TEST_FLAG_OFF"));
        assert!(!get_env_flag("LIB_UTILS_TEST_FLAG_UNSET"));
    }
}
