use super::credentials::ServiceAccountConfig;
use super::data_source::DataSourceConfig;
use super::model_synthesis::ModelSynthesisConfig;
use super::traits::ConfigSection;
use crate::error::{ModelforgeError, Result};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Environment variable holding the JSON service-account blob.
pub const SERVICE_ACCOUNT_ENV: &str = "FIREBASE_SERVICE_ACCOUNT_JSON";

/// Aggregate configuration, assembled once at startup and immutable after.
///
/// The service account is optional: the engine runs unauthenticated without
/// it, and callers that need the remote store go through
/// [`require_service_account`](AppConfig::require_service_account).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub service_account: Option<ServiceAccountConfig>,
    pub data_source: DataSourceConfig,
    pub model_synthesis: ModelSynthesisConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_account: None,
            data_source: DataSourceConfig::default(),
            model_synthesis: ModelSynthesisConfig::default(),
        }
    }
}

impl AppConfig {
    /// Assemble the configuration from the process environment.
    ///
    /// This never fails. A missing credential variable is a normal branch,
    /// a malformed blob degrades to an absent service account, and a bad
    /// tunable override falls back to its section defaults. Each contained
    /// failure is logged with its cause.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        let service_account = match std::env::var(SERVICE_ACCOUNT_ENV) {
            Ok(raw) => match ServiceAccountConfig::from_json(&raw) {
                Ok(account) => Some(account),
                Err(e) => {
                    log::error!("Failed to load service account config: {}", e);
                    None
                }
            },
            Err(_) => {
                log::warn!("{} not found in environment", SERVICE_ACCOUNT_ENV);
                None
            }
        };

        Self {
            service_account,
            data_source: checked_section(DataSourceConfig::from_env()),
            model_synthesis: checked_section(ModelSynthesisConfig::from_env()),
        }
    }

    /// Serializable view of the aggregate for diagnostics and export.
    /// An absent service account renders as `null`.
    pub fn snapshot(&self) -> serde_json::Value {
        serde_json::json!({
            "service_account": self.service_account,
            "data_source": self.data_source,
            "model_synthesis": self.model_synthesis,
        })
    }

    /// The explicit presence check for callers that need the remote store.
    pub fn require_service_account(&self) -> Result<&ServiceAccountConfig> {
        self.service_account
            .as_ref()
            .ok_or(ModelforgeError::CredentialsMissing)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(account) = &self.service_account {
            account.validate()?;
        }
        self.data_source.validate()?;
        self.model_synthesis.validate()?;
        Ok(())
    }
}

/// A section whose overrides break an invariant reverts to its defaults,
/// keeping the load path infallible.
fn checked_section<S: ConfigSection>(candidate: S) -> S {
    match candidate.validate() {
        Ok(()) => candidate,
        Err(e) => {
            log::warn!(
                "Invalid {} overrides, reverting to defaults: {}",
                S::section_name(),
                e
            );
            S::default()
        }
    }
}

/// Process-wide configuration, loaded on first access and published once.
/// Prefer passing an [`AppConfig`] handle down explicitly; this exists for
/// call sites with no injection path.
pub fn global() -> &'static AppConfig {
    static CONFIG: OnceLock<AppConfig> = OnceLock::new();
    CONFIG.get_or_init(AppConfig::load)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_aggregate_is_valid() {
        let config = AppConfig::default();
        assert!(config.service_account.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_require_service_account_absent() {
        let config = AppConfig::default();
        assert!(matches!(
            config.require_service_account(),
            Err(ModelforgeError::CredentialsMissing)
        ));
    }

    #[test]
    fn test_checked_section_reverts_invalid_overrides() {
        let broken = ModelSynthesisConfig {
            population_size: 0,
            ..Default::default()
        };
        assert_eq!(checked_section(broken), ModelSynthesisConfig::default());
    }

    #[test]
    fn test_checked_section_keeps_valid_overrides() {
        let tuned = DataSourceConfig {
            freshness_minutes: 15,
            ..Default::default()
        };
        assert_eq!(checked_section(tuned.clone()), tuned);
    }

    #[test]
    fn test_snapshot_renders_absent_credentials_as_null() {
        let snapshot = AppConfig::default().snapshot();
        assert!(snapshot["service_account"].is_null());
        assert_eq!(snapshot["data_source"]["freshness_minutes"], 5);
        assert_eq!(snapshot["model_synthesis"]["population_size"], 50);
    }
}
