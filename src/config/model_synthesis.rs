use super::env::env_parse;
use super::traits::ConfigSection;
use crate::error::ModelforgeError;
use serde::{Deserialize, Serialize};

/// Acceptance thresholds for synthesized trading models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSynthesisConfig {
    pub max_complexity: usize,
    pub min_backtest_days: usize,
    pub required_sharpe_ratio: f64,
    pub max_drawdown_percent: f64,
    pub population_size: usize,
}

impl Default for ModelSynthesisConfig {
    fn default() -> Self {
        Self {
            max_complexity: 10,
            min_backtest_days: 30,
            required_sharpe_ratio: 1.0,
            max_drawdown_percent: 20.0,
            population_size: 50,
        }
    }
}

impl ModelSynthesisConfig {
    /// Defaults with per-field environment overrides applied.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_complexity: env_parse("MODELFORGE_MAX_COMPLEXITY", defaults.max_complexity),
            min_backtest_days: env_parse(
                "MODELFORGE_MIN_BACKTEST_DAYS",
                defaults.min_backtest_days,
            ),
            required_sharpe_ratio: env_parse(
                "MODELFORGE_REQUIRED_SHARPE_RATIO",
                defaults.required_sharpe_ratio,
            ),
            max_drawdown_percent: env_parse(
                "MODELFORGE_MAX_DRAWDOWN_PERCENT",
                defaults.max_drawdown_percent,
            ),
            population_size: env_parse("MODELFORGE_POPULATION_SIZE", defaults.population_size),
        }
    }
}

impl ConfigSection for ModelSynthesisConfig {
    fn section_name() -> &'static str {
        "model_synthesis"
    }

    fn validate(&self) -> Result<(), ModelforgeError> {
        if self.max_complexity == 0 {
            return Err(ModelforgeError::Configuration(
                "Max model complexity must be positive".to_string(),
            ));
        }
        if self.min_backtest_days == 0 {
            return Err(ModelforgeError::Configuration(
                "Backtest period must be at least one day".to_string(),
            ));
        }
        if self.max_drawdown_percent <= 0.0 || self.max_drawdown_percent > 100.0 {
            return Err(ModelforgeError::Configuration(
                "Max drawdown must be between 0 and 100 percent".to_string(),
            ));
        }
        if self.population_size == 0 {
            return Err(ModelforgeError::Configuration(
                "Population size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
