//! Application state owner.
//!
//! `Tracker` holds everything a front end needs between user actions: the
//! work log, the requirement list, the month being viewed and the date whose
//! entry form is open. Front ends call into it; it never renders anything.

use chrono::NaiveDate;
use tracing::debug;

use crate::calendar::{generate_calendar_days, CalendarMonth, Cell};
use crate::error::{Error, Result};
use crate::matcher::{classify, WorkClassification};
use crate::model::{DateKey, WorkLogEntry};
use crate::repository::KeyValueStore;
use crate::service::{RequirementService, WorkLogService};

pub struct Tracker<R: KeyValueStore + Clone> {
    work_logs: WorkLogService<R>,
    requirements: RequirementService<R>,
    current_month: CalendarMonth,
    selected_date: Option<DateKey>,
}

impl<R: KeyValueStore + Clone> Tracker<R> {
    /// Loads both persisted values and shows the month containing `today`.
    pub fn open(repo: R, today: NaiveDate) -> Result<Self> {
        Ok(Self {
            work_logs: WorkLogService::load(repo.clone())?,
            requirements: RequirementService::load(repo)?,
            current_month: CalendarMonth::new(today),
            selected_date: None,
        })
    }

    // --- calendar ---

    pub fn current_month(&self) -> &CalendarMonth {
        &self.current_month
    }

    pub fn change_month(&mut self, delta: i32) {
        self.current_month.change_month(delta);
        debug!(month = %self.current_month.title(), "changed month");
    }

    pub fn set_month(&mut self, month: CalendarMonth) {
        self.current_month = month;
    }

    pub fn calendar_days(&self) -> Vec<Cell> {
        generate_calendar_days(
            &self.current_month,
            self.work_logs.logs(),
            self.requirements.list(),
        )
    }

    // --- entry form ---

    pub fn select_date(&mut self, date: DateKey) {
        self.selected_date = Some(date);
    }

    pub fn selected_date(&self) -> Option<DateKey> {
        self.selected_date
    }

    pub fn cancel(&mut self) {
        self.selected_date = None;
    }

    /// Saved values for the open form, used to prefill it.
    pub fn form_defaults(&self) -> Option<&WorkLogEntry> {
        self.selected_date.and_then(|d| self.work_logs.get(&d))
    }

    /// Saves the open form and closes it. The selection is cleared even when
    /// the write fails, since the entry is already in memory.
    pub fn submit_entry(&mut self, hours: &str, extra_work: &str) -> Result<DateKey> {
        let date = self.selected_date.take().ok_or(Error::NoDateSelected)?;
        self.work_logs.upsert(date, hours, extra_work)?;
        Ok(date)
    }

    /// Upsert for an explicit date, leaving the form state alone.
    pub fn log_entry(&mut self, date: DateKey, hours: &str, extra_work: &str) -> Result<()> {
        self.work_logs.upsert(date, hours, extra_work)
    }

    pub fn entry(&self, date: &DateKey) -> Option<&WorkLogEntry> {
        self.work_logs.get(date)
    }

    /// Form message for the saved description of `date`, if any.
    pub fn entry_status(&self, date: &DateKey) -> Option<WorkClassification> {
        self.work_logs
            .get(date)
            .and_then(|e| classify(&e.extra_work, self.requirements.list()))
    }

    pub fn work_log(&self) -> &WorkLogService<R> {
        &self.work_logs
    }

    // --- requirements ---

    pub fn requirements(&self) -> &[String] {
        self.requirements.list()
    }

    pub fn add_requirement(&mut self, text: &str) -> Result<()> {
        self.requirements.add(text)
    }

    pub fn remove_requirement(&mut self, index: usize) -> Result<String> {
        self.requirements.remove_at(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::memory::ReadOnlyStore;
    use crate::repository::{MemoryStore, WORK_LOGS_KEY};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn key(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    fn extra_flag(tracker: &Tracker<MemoryStore>, date: &DateKey) -> Option<bool> {
        tracker.calendar_days().into_iter().find_map(|c| match c {
            Cell::Day(d) if d.date_key == *date => Some(d.is_extra),
            _ => None,
        })
    }

    #[test]
    fn test_report_scenario() {
        let mut tracker = Tracker::open(MemoryStore::new(), today()).unwrap();
        tracker.add_requirement("report").unwrap();

        tracker.select_date(key("2024-03-04"));
        tracker.submit_entry("8", "Wrote weekly report").unwrap();
        tracker.select_date(key("2024-03-05"));
        tracker.submit_entry("3", "Fixed printer").unwrap();

        assert_eq!(
            tracker.entry_status(&key("2024-03-04")),
            Some(WorkClassification::MatchesRequirement)
        );
        assert_eq!(
            tracker.entry_status(&key("2024-03-05")),
            Some(WorkClassification::ExtraWork)
        );
        assert_eq!(extra_flag(&tracker, &key("2024-03-04")), Some(false));
        assert_eq!(extra_flag(&tracker, &key("2024-03-05")), Some(true));
    }

    #[test]
    fn test_submit_closes_form() {
        let mut tracker = Tracker::open(MemoryStore::new(), today()).unwrap();
        tracker.select_date(key("2024-03-01"));
        let saved = tracker.submit_entry("7.5", "").unwrap();
        assert_eq!(saved, key("2024-03-01"));
        assert_eq!(tracker.selected_date(), None);
        assert_eq!(tracker.entry_status(&saved), None);
    }

    #[test]
    fn test_submit_without_selection_writes_nothing() {
        let store = MemoryStore::new();
        let mut tracker = Tracker::open(store.clone(), today()).unwrap();
        let err = tracker.submit_entry("8", "x").unwrap_err();
        assert!(matches!(err, Error::NoDateSelected));
        assert!(store.get(WORK_LOGS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_failed_submit_still_closes_form() {
        let mut tracker = Tracker::open(ReadOnlyStore::default(), today()).unwrap();
        tracker.select_date(key("2024-03-04"));
        let err = tracker.submit_entry("8", "Fixed printer").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(tracker.selected_date(), None);
        assert_eq!(tracker.entry(&key("2024-03-04")).unwrap().hours, "8");
        assert_eq!(
            tracker.entry_status(&key("2024-03-04")),
            Some(WorkClassification::ExtraWork)
        );
    }

    #[test]
    fn test_description_stored_as_typed() {
        let mut tracker = Tracker::open(MemoryStore::new(), today()).unwrap();
        tracker.log_entry(key("2024-03-06"), "2", "  Fixed printer ").unwrap();
        tracker.select_date(key("2024-03-07"));
        tracker.submit_entry("1", "report \n").unwrap();
        assert_eq!(tracker.entry(&key("2024-03-06")).unwrap().extra_work, "  Fixed printer ");
        assert_eq!(tracker.entry(&key("2024-03-07")).unwrap().extra_work, "report \n");
    }

    #[test]
    fn test_cancel_and_prefill() {
        let mut tracker = Tracker::open(MemoryStore::new(), today()).unwrap();
        tracker.log_entry(key("2024-03-02"), "6", "Planning").unwrap();

        tracker.select_date(key("2024-03-02"));
        assert_eq!(tracker.form_defaults(), Some(&WorkLogEntry::new("6", "Planning")));
        tracker.cancel();
        assert_eq!(tracker.selected_date(), None);
        assert_eq!(tracker.form_defaults(), None);
    }

    #[test]
    fn test_requirement_change_reclassifies() {
        let mut tracker = Tracker::open(MemoryStore::new(), today()).unwrap();
        tracker.log_entry(key("2024-03-05"), "3", "Fixed printer").unwrap();
        assert_eq!(extra_flag(&tracker, &key("2024-03-05")), Some(true));

        tracker.add_requirement("PRINTER").unwrap();
        assert_eq!(extra_flag(&tracker, &key("2024-03-05")), Some(false));

        tracker.remove_requirement(0).unwrap();
        assert_eq!(extra_flag(&tracker, &key("2024-03-05")), Some(true));
    }

    #[test]
    fn test_january_back_to_december() {
        let january = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let mut tracker = Tracker::open(MemoryStore::new(), january).unwrap();
        tracker.change_month(-1);
        assert_eq!(tracker.current_month().year(), 2024);
        assert_eq!(tracker.current_month().month(), 12);
    }

    #[test]
    fn test_state_survives_reopen() {
        let store = MemoryStore::new();
        {
            let mut tracker = Tracker::open(store.clone(), today()).unwrap();
            tracker.add_requirement("report").unwrap();
            tracker.log_entry(key("2024-03-04"), "8", "report").unwrap();
        }
        let tracker = Tracker::open(store, today()).unwrap();
        assert_eq!(tracker.requirements(), ["report"]);
        assert_eq!(tracker.entry(&key("2024-03-04")).unwrap().hours, "8");
    }
}
