pub mod memory;

pub use memory::MemoryStore;

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A synthesized trading model as persisted by the store.
/// Timestamps are stamped by the store, not the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    pub name: String,
    pub definition: serde_json::Value,
    pub performance: Option<PerformanceMetrics>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ModelRecord {
    pub fn new(name: impl Into<String>, definition: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            definition,
            performance: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Evaluation results attached to a stored model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub return_pct: f64,
    pub win_rate: f64,
    pub max_drawdown_pct: f64,
    pub sharpe_ratio: f64,
}

/// Narrow contract for the document store holding synthesized models.
///
/// Remote implementations authenticate with the service account obtained
/// from [`AppConfig::require_service_account`](crate::config::AppConfig::require_service_account)
/// and live outside this crate; [`MemoryStore`] backs unauthenticated local
/// runs and tests.
pub trait ModelStore {
    /// Persist a model and return its generated id.
    fn save_model(&self, model: ModelRecord) -> Result<String>;

    /// Attach evaluation metrics to a stored model.
    fn update_model_performance(
        &self,
        model_id: &str,
        performance: &PerformanceMetrics,
    ) -> Result<()>;
}
