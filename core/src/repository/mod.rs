pub mod file;
pub mod memory;
pub mod traits;

pub use file::{default_data_dir, FileStore};
pub use memory::MemoryStore;
pub use traits::{KeyValueStore, REQUIREMENTS_KEY, WORK_LOGS_KEY};
