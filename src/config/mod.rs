pub mod traits;
pub mod credentials;
pub mod data_source;
pub mod model_synthesis;
pub mod loader;

mod env;

pub use loader::{global, AppConfig, SERVICE_ACCOUNT_ENV};
pub use credentials::ServiceAccountConfig;
pub use data_source::DataSourceConfig;
pub use model_synthesis::ModelSynthesisConfig;
