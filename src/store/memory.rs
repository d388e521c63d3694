use super::{ModelRecord, ModelStore, PerformanceMetrics};
use crate::error::{ModelforgeError, Result};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;

struct Inner {
    models: HashMap<String, ModelRecord>,
    next_id: u64,
}

/// In-process model store used when no service account is configured.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                models: HashMap::new(),
                next_id: 0,
            }),
        }
    }

    pub fn get_model(&self, model_id: &str) -> Option<ModelRecord> {
        let inner = self.inner.lock().unwrap();
        inner.models.get(model_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelStore for MemoryStore {
    fn save_model(&self, mut model: ModelRecord) -> Result<String> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let model_id = format!("model-{:06}", inner.next_id);

        let now = Utc::now();
        model.created_at = Some(now);
        model.updated_at = Some(now);
        inner.models.insert(model_id.clone(), model);

        log::info!("Model saved with id {}", model_id);
        Ok(model_id)
    }

    fn update_model_performance(
        &self,
        model_id: &str,
        performance: &PerformanceMetrics,
    ) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        let model = inner
            .models
            .get_mut(model_id)
            .ok_or_else(|| ModelforgeError::Store(format!("Unknown model id: {}", model_id)))?;

        model.performance = Some(performance.clone());
        model.updated_at = Some(Utc::now());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> ModelRecord {
        ModelRecord::new(
            "momentum-crossover",
            serde_json::json!({ "entry": "sma(10) > sma(50)", "exit": "sma(10) < sma(50)" }),
        )
    }

    fn sample_metrics() -> PerformanceMetrics {
        PerformanceMetrics {
            return_pct: 12.5,
            win_rate: 0.58,
            max_drawdown_pct: 8.2,
            sharpe_ratio: 1.4,
        }
    }

    #[test]
    fn test_save_model_generates_id_and_timestamps() {
        let store = MemoryStore::new();
        let model_id = store.save_model(sample_model()).unwrap();

        let stored = store.get_model(&model_id).unwrap();
        assert_eq!(stored.name, "momentum-crossover");
        assert!(stored.created_at.is_some());
        assert_eq!(stored.created_at, stored.updated_at);
        assert!(stored.performance.is_none());
    }

    #[test]
    fn test_save_model_ids_are_distinct() {
        let store = MemoryStore::new();
        let first = store.save_model(sample_model()).unwrap();
        let second = store.save_model(sample_model()).unwrap();
        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_performance_attaches_metrics() {
        let store = MemoryStore::new();
        let model_id = store.save_model(sample_model()).unwrap();

        store
            .update_model_performance(&model_id, &sample_metrics())
            .unwrap();

        let stored = store.get_model(&model_id).unwrap();
        assert_eq!(stored.performance, Some(sample_metrics()));
        assert!(stored.updated_at >= stored.created_at);
    }

    #[test]
    fn test_update_performance_unknown_id_fails() {
        let store = MemoryStore::new();
        let result = store.update_model_performance("model-999999", &sample_metrics());
        assert!(matches!(result, Err(ModelforgeError::Store(_))));
    }
}
