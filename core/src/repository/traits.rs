use crate::error::Result;

/// Key under which the serialized work log map is stored.
pub const WORK_LOGS_KEY: &str = "workLogs";
/// Key under which the serialized requirement list is stored.
pub const REQUIREMENTS_KEY: &str = "requirements";

/// String key-value storage that survives restarts.
///
/// Values are opaque JSON text; callers own the (de)serialization.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
