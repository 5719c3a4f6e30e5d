pub mod requirement_service;
pub mod work_log_service;

pub use requirement_service::RequirementService;
pub use work_log_service::WorkLogService;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::repository::KeyValueStore;

/// Reads `key`, treating an absent or unparseable value as the default.
/// Storage read failures still propagate.
fn load_or_default<T, R>(repo: &R, key: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
    R: KeyValueStore,
{
    let Some(raw) = repo.get(key)? else {
        debug!(key, "no stored value, starting empty");
        return Ok(T::default());
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            warn!(key, error = %e, "stored value is malformed, starting empty");
            Ok(T::default())
        }
    }
}

fn persist<T, R>(repo: &R, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    R: KeyValueStore,
{
    let json = serde_json::to_string(value)?;
    repo.set(key, &json)
}
