use super::env::{env_list, env_parse};
use super::traits::ConfigSection;
use crate::error::ModelforgeError;
use serde::{Deserialize, Serialize};

/// Market-data ingestion scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSourceConfig {
    pub exchange_list: Vec<String>,
    pub freshness_minutes: usize,
    pub historical_days: usize,
    pub max_symbols_per_exchange: usize,
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            exchange_list: Vec::new(),
            freshness_minutes: 5,
            historical_days: 365,
            max_symbols_per_exchange: 50,
        }
    }
}

impl DataSourceConfig {
    /// Defaults with per-field environment overrides applied.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            exchange_list: env_list("MODELFORGE_EXCHANGES").unwrap_or(defaults.exchange_list),
            freshness_minutes: env_parse(
                "MODELFORGE_DATA_FRESHNESS_MINUTES",
                defaults.freshness_minutes,
            ),
            historical_days: env_parse("MODELFORGE_HISTORICAL_DAYS", defaults.historical_days),
            max_symbols_per_exchange: env_parse(
                "MODELFORGE_MAX_SYMBOLS_PER_EXCHANGE",
                defaults.max_symbols_per_exchange,
            ),
        }
    }
}

impl ConfigSection for DataSourceConfig {
    fn section_name() -> &'static str {
        "data_source"
    }

    fn validate(&self) -> Result<(), ModelforgeError> {
        if self.freshness_minutes == 0 {
            return Err(ModelforgeError::Configuration(
                "Data freshness must be at least one minute".to_string(),
            ));
        }
        if self.historical_days == 0 {
            return Err(ModelforgeError::Configuration(
                "Historical window must be at least one day".to_string(),
            ));
        }
        if self.max_symbols_per_exchange == 0 {
            return Err(ModelforgeError::Configuration(
                "Max symbols per exchange must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DataSourceConfig::default();
        assert!(config.exchange_list.is_empty());
        assert_eq!(config.freshness_minutes, 5);
        assert_eq!(config.historical_days, 365);
        assert_eq!(config.max_symbols_per_exchange, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_freshness() {
        let config = DataSourceConfig {
            freshness_minutes: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_symbols() {
        let config = DataSourceConfig {
            max_symbols_per_exchange: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
