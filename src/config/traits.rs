use crate::error::ModelforgeError;
use serde::{Deserialize, Serialize};

/// Trait for defaulted configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), ModelforgeError>;
}
