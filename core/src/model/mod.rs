pub mod date_key;
pub mod work_log;

pub use date_key::DateKey;
pub use work_log::{WorkLog, WorkLogEntry};
