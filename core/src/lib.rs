pub mod calendar;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod matcher;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod tracker;

pub use calendar::{generate_calendar_days, CalendarMonth, Cell, DayCell, DAY_NAMES};
pub use config::Config;
pub use error::{Error, Result};
pub use input::{normalize_requirement, validate_hours};
pub use matcher::{classify, is_extra_work, is_required_work, WorkClassification};
pub use model::{DateKey, WorkLog, WorkLogEntry};
pub use repository::{FileStore, KeyValueStore, MemoryStore};
pub use service::{RequirementService, WorkLogService};
pub use time::{parse_date_key, parse_month};
pub use tracker::Tracker;
