pub mod config;
pub mod error;
pub mod store;

pub use config::{AppConfig, DataSourceConfig, ModelSynthesisConfig, ServiceAccountConfig};
pub use error::{ModelforgeError, Result};
pub use store::{MemoryStore, ModelRecord, ModelStore, PerformanceMetrics};
