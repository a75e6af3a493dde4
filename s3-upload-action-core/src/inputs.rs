//! Input retrieval: reading named action inputs from the hosting runner.
//!
//! The runner hands inputs to the action as `INPUT_<NAME>` environment variables.
//! [`ConfigReader`] abstracts where raw values come from, and [`get_input`] applies
//! the required/trim rules on top of any reader so those rules behave identically
//! for the environment, CLI overrides and test mocks.

use std::collections::HashMap;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;
use tracing::{debug, error};

pub use crate::error::InputError;

/// Options for [`get_input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputOptions {
    /// Fail when the value is absent or empty.
    pub required: bool,
    /// Trim leading and trailing whitespace from the value.
    pub trim_whitespace: bool,
}

impl InputOptions {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    pub fn optional() -> Self {
        Self::default()
    }
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            required: false,
            trim_whitespace: true,
        }
    }
}

/// Source of raw input values.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
pub trait ConfigReader: Send + Sync {
    /// Raw value for `name`, or `None` if the host did not supply one.
    fn lookup(&self, name: &str) -> Option<String>;
}

/// Reads an input through `reader`, enforcing `options`.
///
/// A missing value reads as the empty string. The required check runs before
/// trimming, so a whitespace-only value satisfies `required` and comes back empty.
pub fn get_input<R>(reader: &R, name: &str, options: &InputOptions) -> Result<String, InputError>
where
    R: ConfigReader + ?Sized,
{
    let value = reader.lookup(name).unwrap_or_default();

    if options.required && value.is_empty() {
        error!(input = %name, "Required input missing");
        return Err(InputError::Required {
            name: name.to_string(),
        });
    }

    let value = if options.trim_whitespace {
        value.trim().to_string()
    } else {
        value
    };
    debug!(input = %name, value = %value, "Read input");
    Ok(value)
}

/// Environment variable carrying the input `name`: spaces become `_`, the rest is upper-cased.
pub fn input_env_key(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Shell-safe spelling of [`input_env_key`] with `-` replaced by `_`, e.g. `INPUT_MY_INPUT`.
///
/// `.env` files cannot declare hyphenated keys, so local env files use this form.
pub fn input_env_key_underscored(name: &str) -> String {
    input_env_key(name).replace('-', "_")
}

/// Reads inputs from `INPUT_*` environment variables, as set by the runner.
///
/// The runner's hyphenated key wins; the underscored key is consulted only when it is unset.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvConfigReader;

impl ConfigReader for EnvConfigReader {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(input_env_key(name))
            .or_else(|_| std::env::var(input_env_key_underscored(name)))
            .ok()
    }
}

/// Explicit overrides consulted before a fallback reader.
pub struct LayeredConfigReader<F> {
    overrides: HashMap<String, String>,
    fallback: F,
}

impl<F: ConfigReader> LayeredConfigReader<F> {
    pub fn new(overrides: impl IntoIterator<Item = (String, String)>, fallback: F) -> Self {
        Self {
            overrides: overrides.into_iter().collect(),
            fallback,
        }
    }
}

impl<F: ConfigReader> ConfigReader for LayeredConfigReader<F> {
    fn lookup(&self, name: &str) -> Option<String> {
        match self.overrides.get(name) {
            Some(value) => Some(value.clone()),
            None => self.fallback.lookup(name),
        }
    }
}
