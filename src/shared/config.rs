use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::shared::errors::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct ContractCfg {
    pub package_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionCfg {
    pub sender: Option<String>,
    pub gas_budget: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputCfg {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    #[serde(default)]
    pub strict_ids: bool,
}

impl Default for OutputCfg {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            strict_ids: false,
        }
    }
}

fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub contract: ContractCfg,
    #[serde(default)]
    pub transaction: TransactionCfg,
    #[serde(default)]
    pub output: OutputCfg,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            AppError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        toml::from_str(content)
            .map_err(|e| AppError::ConfigError(format!("Failed to parse config file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let cfg = Config::from_toml_str(
            r#"
            [contract]
            package_id = "0xabc"

            [transaction]
            sender = "0x1"
            gas_budget = 10000000

            [output]
            pretty = false
            strict_ids = true
            "#,
        )
        .unwrap();

        assert_eq!(cfg.contract.package_id, "0xabc");
        assert_eq!(cfg.transaction.sender.as_deref(), Some("0x1"));
        assert_eq!(cfg.transaction.gas_budget, Some(10_000_000));
        assert!(!cfg.output.pretty);
        assert!(cfg.output.strict_ids);
    }

    #[test]
    fn test_optional_sections_default() {
        let cfg = Config::from_toml_str("[contract]\npackage_id = \"0xabc\"\n").unwrap();

        assert!(cfg.transaction.sender.is_none());
        assert!(cfg.transaction.gas_budget.is_none());
        assert!(cfg.output.pretty);
        assert!(!cfg.output.strict_ids);
    }

    #[test]
    fn test_missing_contract_is_rejected() {
        let err = Config::from_toml_str("[output]\npretty = true\n").unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file("/nonexistent/arena-tx.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
