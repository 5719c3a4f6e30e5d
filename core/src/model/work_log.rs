use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::date_key::DateKey;

/// Hours and description logged for one day.
///
/// `hours` stays the string the user typed; `extra_work` is empty when no
/// description was given.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct WorkLogEntry {
    pub hours: String,
    #[serde(rename = "extraWork", default)]
    pub extra_work: String,
}

impl WorkLogEntry {
    pub fn new(hours: impl Into<String>, extra_work: impl Into<String>) -> Self {
        Self {
            hours: hours.into(),
            extra_work: extra_work.into(),
        }
    }

    pub fn has_description(&self) -> bool {
        !self.extra_work.is_empty()
    }

    /// Numeric hours, if the stored string parses.
    pub fn hours_value(&self) -> Option<f64> {
        self.hours.trim().parse().ok()
    }
}

pub type WorkLog = BTreeMap<DateKey, WorkLogEntry>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_json_shape() {
        let entry = WorkLogEntry::new("7.5", "Wrote weekly report");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"hours":"7.5","extraWork":"Wrote weekly report"}"#);
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let entry: WorkLogEntry = serde_json::from_str(r#"{"hours":"8"}"#).unwrap();
        assert!(!entry.has_description());
        assert_eq!(entry.hours_value(), Some(8.0));
    }

    #[test]
    fn test_work_log_keys_are_date_strings() {
        let mut log = WorkLog::new();
        log.insert(
            DateKey::from_ymd(2024, 1, 5).unwrap(),
            WorkLogEntry::new("8", ""),
        );
        let json = serde_json::to_string(&log).unwrap();
        assert_eq!(json, r#"{"2024-01-05":{"hours":"8","extraWork":""}}"#);

        let back: WorkLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
    }
}
