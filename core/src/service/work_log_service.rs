use chrono::NaiveDate;
use tracing::info;

use crate::calendar::CalendarMonth;
use crate::error::Result;
use crate::model::{DateKey, WorkLog, WorkLogEntry};
use crate::repository::{KeyValueStore, WORK_LOGS_KEY};
use crate::service::{load_or_default, persist};

/// In-memory work log, written through to the store on every change.
pub struct WorkLogService<R: KeyValueStore> {
    repo: R,
    logs: WorkLog,
}

impl<R: KeyValueStore> WorkLogService<R> {
    pub fn load(repo: R) -> Result<Self> {
        let logs: WorkLog = load_or_default(&repo, WORK_LOGS_KEY)?;
        info!(entries = logs.len(), "loaded work log");
        Ok(Self { repo, logs })
    }

    pub fn get(&self, date: &DateKey) -> Option<&WorkLogEntry> {
        self.logs.get(date)
    }

    /// Replaces whatever was stored for `date`. The in-memory map keeps the
    /// new entry even if the write fails.
    pub fn upsert(
        &mut self,
        date: DateKey,
        hours: impl Into<String>,
        extra_work: impl Into<String>,
    ) -> Result<()> {
        let entry = WorkLogEntry::new(hours, extra_work);
        info!(%date, hours = %entry.hours, "upserting work log entry");
        self.logs.insert(date, entry);
        persist(&self.repo, WORK_LOGS_KEY, &self.logs)
    }

    pub fn logs(&self) -> &WorkLog {
        &self.logs
    }

    pub fn entries(&self) -> impl Iterator<Item = (&DateKey, &WorkLogEntry)> {
        self.logs.iter()
    }

    pub fn entries_in_month(
        &self,
        month: &CalendarMonth,
    ) -> impl Iterator<Item = (&DateKey, &WorkLogEntry)> {
        let start = DateKey::new(month.first_day());
        let end = month
            .date_key(month.days_in_month())
            .unwrap_or(start);
        self.logs.range(start..=end)
    }

    pub fn total_hours_between(&self, from: NaiveDate, to: NaiveDate) -> f64 {
        if from > to {
            return 0.0;
        }
        self.logs
            .range(DateKey::new(from)..=DateKey::new(to))
            .filter_map(|(_, e)| e.hours_value())
            .sum()
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }
}
