//! Startup configuration: `.env` loading and API key resolution.
//!
//! Nothing here touches the network. Loading fails with [`LlmError::Config`]
//! and leaves it to the caller to decide whether that is fatal.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::LlmError;
use crate::provider::constants::openai;

/// Load a dotenv file into the process environment.
///
/// With `None` the `.env` file is discovered from the current directory
/// upwards. Variables already present in the environment are not overridden.
pub fn load_env_file(path: Option<&Path>) -> Result<PathBuf, LlmError> {
    let loaded = match path {
        Some(path) => dotenv::from_path(path).map(|_| path.to_path_buf()),
        None => dotenv::dotenv(),
    };

    let loaded = loaded.map_err(|e| LlmError::Config {
        message: match path {
            Some(path) => format!("Error loading env file {}", path.display()),
            None => "Error loading .env file".to_string(),
        },
        source: Some(Box::new(e)),
    })?;

    debug!(path = %loaded.display(), "Loaded env file");
    Ok(loaded)
}

/// Where the bearer token comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKey {
    /// Read `OPENAI_API_KEY`.
    Default,
    /// Read the named environment variable.
    Env(String),
    /// Use the given value.
    Custom(String),
}

impl ApiKey {
    pub fn resolve(&self) -> Result<String, LlmError> {
        let var = match self {
            ApiKey::Custom(key) => return non_empty(key.clone(), "Custom API key is empty"),
            ApiKey::Default => openai::API_KEY_ENV_VAR,
            ApiKey::Env(name) => name.as_str(),
        };

        let key = std::env::var(var).map_err(|e| LlmError::Config {
            message: format!("{var} not set"),
            source: Some(Box::new(e)),
        })?;

        non_empty(key, &format!("{var} is empty"))
    }
}

fn non_empty(key: String, message: &str) -> Result<String, LlmError> {
    if key.trim().is_empty() {
        return Err(LlmError::config(message));
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_env_file_is_a_config_error() {
        let path = std::env::temp_dir().join("completion-cli-does-not-exist.env");
        let err = load_env_file(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, LlmError::Config { .. }));
        assert!(err.to_string().contains("Error loading env file"));
    }

    #[test]
    fn env_file_values_resolve_through_api_key() {
        let var = format!("COMPLETION_CLI_TEST_KEY_{}", std::process::id());
        let path = std::env::temp_dir().join(format!("completion-cli-{}.env", std::process::id()));
        std::fs::write(&path, format!("{var}=sk-from-file\n")).unwrap();

        let loaded = load_env_file(Some(path.as_path())).unwrap();
        assert_eq!(loaded, path);
        assert_eq!(ApiKey::Env(var).resolve().unwrap(), "sk-from-file");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn unset_variable_is_a_config_error() {
        let err = ApiKey::Env("COMPLETION_CLI_SURELY_UNSET_VAR".to_string())
            .resolve()
            .unwrap_err();
        match err {
            LlmError::Config { message, source } => {
                assert_eq!(message, "COMPLETION_CLI_SURELY_UNSET_VAR not set");
                assert!(source.is_some());
            }
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn custom_key_is_used_verbatim() {
        assert_eq!(
            ApiKey::Custom("sk-test".to_string()).resolve().unwrap(),
            "sk-test"
        );
        assert!(ApiKey::Custom("  ".to_string()).resolve().is_err());
    }
}
