//! Configuration loader for YAML files
//!
//! This module handles loading and validating configuration from YAML files.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{AppError, Result};

use super::types::ScannerConfig;

/// Load configuration from a YAML file
///
/// This function:
/// 1. Checks if the file exists
/// 2. Parses the YAML content
/// 3. Validates the configuration rules
///
/// # Returns
/// * `Ok(ScannerConfig)` - Successfully loaded and validated configuration
/// * `Err(AppError)` - File not found, parse error, or validation failure
pub fn load_config(path: &Path) -> Result<ScannerConfig> {
    if !path.exists() {
        return Err(AppError::Config(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let config: ScannerConfig = serde_yaml::from_reader(reader).map_err(|e| {
        AppError::Config(format!("YAML parse error in '{}': {}", path.display(), e))
    })?;

    config.validate()?;

    Ok(config)
}

/// Load configuration from a YAML string (useful for testing)
pub fn load_config_from_str(yaml_content: &str) -> Result<ScannerConfig> {
    let config: ScannerConfig = serde_yaml::from_str(yaml_content)
        .map_err(|e| AppError::Config(format!("YAML parse error: {}", e)))?;

    config.validate()?;

    Ok(config)
}

/// Load configuration, falling back to built-in defaults when the file is absent
///
/// A file that exists but fails to parse or validate is still an error.
pub fn load_config_or_default(path: &Path) -> Result<ScannerConfig> {
    if !path.exists() {
        warn!(
            path = %path.display(),
            "Configuration file not found, using built-in defaults"
        );
        return Ok(ScannerConfig::default());
    }

    let config = load_config(path)?;
    info!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Provider;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const VALID_CONFIG_YAML: &str = r#"
threshold_percent: 0.75
poll_interval_secs: 10
request_timeout_secs: 3
providers:
  - provider: binance
    symbol: ETHUSDT
  - provider: kraken
    symbol: ETHUSDT
    base_url: http://localhost:9000
"#;

    #[test]
    fn test_load_config_from_str_valid() {
        let config = load_config_from_str(VALID_CONFIG_YAML).unwrap();
        assert_eq!(config.threshold_percent, 0.75);
        assert_eq!(config.poll_interval_secs, 10);
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.providers.len(), 2);
        assert_eq!(config.providers[0].provider, Provider::Binance);
        assert_eq!(config.providers[0].symbol.as_deref(), Some("ETHUSDT"));
        assert_eq!(config.providers[0].base_url, None);
        assert_eq!(
            config.providers[1].base_url.as_deref(),
            Some("http://localhost:9000")
        );
    }

    #[test]
    fn test_load_config_from_str_invalid_yaml() {
        let invalid_yaml = "invalid: yaml: content: [";
        let result = load_config_from_str(invalid_yaml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("YAML parse error"));
    }

    #[test]
    fn test_load_config_from_str_unknown_provider() {
        let yaml = r#"
providers:
  - provider: bitstamp
"#;
        let result = load_config_from_str(yaml);
        assert!(result.unwrap_err().to_string().contains("YAML parse error"));
    }

    #[test]
    fn test_load_config_from_str_validation_failure() {
        let yaml = r#"
providers:
  - provider: coinbase
  - provider: coinbase
"#;
        let result = load_config_from_str(yaml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Duplicate provider"));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/path/config.yaml"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Configuration file not found"));
    }

    #[test]
    fn test_load_config_from_file_valid() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(VALID_CONFIG_YAML.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.providers.len(), 2);
        assert_eq!(config.threshold_percent, 0.75);
    }

    #[test]
    fn test_load_config_from_file_invalid_yaml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"invalid: [yaml: content").unwrap();
        temp_file.flush().unwrap();

        let result = load_config(temp_file.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("YAML parse error"));
    }

    #[test]
    fn test_load_config_or_default_missing_file() {
        let config = load_config_or_default(Path::new("/nonexistent/path/config.yaml")).unwrap();
        assert_eq!(config, ScannerConfig::default());
    }

    #[test]
    fn test_load_config_or_default_rejects_invalid_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"poll_interval_secs: 0\n").unwrap();
        temp_file.flush().unwrap();

        let result = load_config_or_default(temp_file.path());
        assert!(result.unwrap_err().to_string().contains("poll_interval_secs"));
    }
}
