use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::Result;
use crate::repository::traits::KeyValueStore;

/// In-process store. Clones share the same map, so two stores can observe
/// each other's writes the way two handles on one storage area would.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw value, bypassing any serialization.
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Serves seeded values but fails every write, like a full disk.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub(crate) struct ReadOnlyStore {
    inner: MemoryStore,
}

#[cfg(test)]
impl ReadOnlyStore {
    pub(crate) fn with_value(self, key: &str, value: &str) -> Self {
        Self {
            inner: self.inner.with_value(key, value),
        }
    }
}

#[cfg(test)]
impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "quota exceeded").into())
    }
}
