//! Initial level configuration
//!
//! Resolution: `verbose` forces `Trace`; otherwise a parseable `log_level`
//! wins; otherwise [`DEFAULT_LOG_LEVEL`].

use super::{
    error::{LoggerError, Result},
    log_level::{parse_log_level, LogLevel, DEFAULT_LOG_LEVEL},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_LOG_VERBOSE: &str = "LOG_VERBOSE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogConfig {
    pub verbose: bool,
    pub log_level: Option<String>,
}

impl LogConfig {
    pub fn new(verbose: bool, log_level: Option<String>) -> Self {
        Self { verbose, log_level }
    }

    /// Read `LOG_VERBOSE` and `LOG_LEVEL`
    pub fn from_env() -> Self {
        Self::from_lookup(ENV_LOG_VERBOSE, ENV_LOG_LEVEL, |name| std::env::var(name).ok())
    }

    /// Read `<PREFIX>_LOG_VERBOSE` and `<PREFIX>_LOG_LEVEL`
    pub fn from_env_prefixed(prefix: &str) -> Self {
        Self::from_lookup(
            &format!("{}_{}", prefix, ENV_LOG_VERBOSE),
            &format!("{}_{}", prefix, ENV_LOG_LEVEL),
            |name| std::env::var(name).ok(),
        )
    }

    fn from_lookup(
        verbose_var: &str,
        level_var: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let verbose = lookup(verbose_var)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let log_level = lookup(level_var).filter(|v| !v.trim().is_empty());
        Self { verbose, log_level }
    }

    /// Load from a JSON file such as `{"verbose": false, "logLevel": "debug"}`
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation("reading log config", path.display().to_string(), e)
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn resolve_level(&self) -> LogLevel {
        if self.verbose {
            return LogLevel::Trace;
        }
        self.log_level
            .as_deref()
            .and_then(parse_log_level)
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Like [`resolve_level`](Self::resolve_level) but rejects a level
    /// string that does not parse instead of falling back
    pub fn resolve_level_strict(&self) -> Result<LogLevel> {
        match (&self.log_level, self.verbose) {
            (_, true) => Ok(LogLevel::Trace),
            (Some(raw), false) => raw.parse(),
            (None, false) => Ok(DEFAULT_LOG_LEVEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_resolution_rule() {
        assert_eq!(LogConfig::new(true, Some("error".into())).resolve_level(), LogLevel::Trace);
        assert_eq!(LogConfig::new(false, Some("Critical".into())).resolve_level(), LogLevel::Error);
        assert_eq!(LogConfig::new(false, Some("loud".into())).resolve_level(), DEFAULT_LOG_LEVEL);
        assert_eq!(LogConfig::default().resolve_level(), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_strict_resolution() {
        assert!(LogConfig::new(false, Some("loud".into())).resolve_level_strict().is_err());
        assert_eq!(
            LogConfig::new(false, Some("off".into())).resolve_level_strict().unwrap(),
            LogLevel::Off
        );
    }

    #[test]
    fn test_lookup() {
        let config = LogConfig::from_lookup(
            "APP_LOG_VERBOSE",
            "APP_LOG_LEVEL",
            lookup(&[("APP_LOG_VERBOSE", "Yes"), ("APP_LOG_LEVEL", "warn")]),
        );
        assert!(config.verbose);
        assert_eq!(config.log_level.as_deref(), Some("warn"));

        let config = LogConfig::from_lookup("V", "L", lookup(&[("L", "  ")]));
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn test_json_shape() {
        let config: LogConfig = serde_json::from_str(r#"{"logLevel":"debug"}"#).unwrap();
        assert!(!config.verbose);
        assert_eq!(config.resolve_level(), LogLevel::Debug);
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logging.json");
        std::fs::write(&path, r#"{"verbose":false,"logLevel":"debug"}"#).unwrap();

        let config = LogConfig::from_json_file(&path).unwrap();
        assert_eq!(config, LogConfig::new(false, Some("debug".into())));
        assert_eq!(config.resolve_level(), LogLevel::Debug);
    }

    #[test]
    fn test_from_json_file_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = LogConfig::from_json_file(dir.path().join("absent.json"));
        assert!(matches!(missing, Err(LoggerError::IoOperation { .. })));

        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(LogConfig::from_json_file(&path), Err(LoggerError::JsonError(_))));
    }

    #[test]
    fn test_from_env_prefixed() {
        std::env::set_var("LOGREG_CONFIG_TEST_LOG_VERBOSE", "0");
        std::env::set_var("LOGREG_CONFIG_TEST_LOG_LEVEL", "Error");

        let config = LogConfig::from_env_prefixed("LOGREG_CONFIG_TEST");
        assert!(!config.verbose);
        assert_eq!(config.resolve_level(), LogLevel::Error);

        std::env::set_var("LOGREG_CONFIG_TEST_LOG_VERBOSE", "TRUE");
        assert_eq!(LogConfig::from_env_prefixed("LOGREG_CONFIG_TEST").resolve_level(), LogLevel::Trace);

        let unset = LogConfig::from_env_prefixed("LOGREG_CONFIG_UNSET");
        assert_eq!(unset, LogConfig::default());
    }
}
