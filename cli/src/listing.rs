use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use worktrack_core::{
    CalendarMonth, Cell, DateKey, KeyValueStore, Tracker, WorkClassification, DAY_NAMES,
};

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Hours")]
    hours: String,
    #[tabled(rename = "Description")]
    desc: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct RequirementRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Requirement")]
    text: String,
}

fn status_label(status: Option<WorkClassification>) -> &'static str {
    match status {
        Some(WorkClassification::MatchesRequirement) => "required",
        Some(WorkClassification::ExtraWork) => "extra",
        None => "-",
    }
}

/// Text rendering of the month grid. `*` marks extra work, `.` any other
/// logged day.
pub fn print_month<R: KeyValueStore + Clone>(tracker: &Tracker<R>) {
    let month = tracker.current_month();
    println!("{:^35}", month.title());
    println!(
        "{}",
        DAY_NAMES
            .iter()
            .map(|d| format!("{:>5}", d))
            .collect::<String>()
    );

    for week in tracker.calendar_days().chunks(7) {
        let line: String = week
            .iter()
            .map(|cell| match cell {
                Cell::Blank => "     ".to_string(),
                Cell::Day(day) => {
                    let marker = if day.is_extra {
                        '*'
                    } else if day.has_entry {
                        '.'
                    } else {
                        ' '
                    };
                    format!("{:>4}{}", day.day_number, marker)
                }
            })
            .collect();
        println!("{}", line.trim_end());
    }
}

pub fn print_entry<R: KeyValueStore + Clone>(tracker: &Tracker<R>, date: &DateKey) {
    let Some(entry) = tracker.entry(date) else {
        println!("No work logged for {}.", date);
        return;
    };
    println!("{} ({})", date, date.date().format("%a"));
    println!("  Hours: {}", entry.hours);
    if entry.has_description() {
        println!("  Description: {}", entry.extra_work);
    }
    if let Some(status) = tracker.entry_status(date) {
        println!("  {}", status.message());
    }
}

pub fn print_entries<R: KeyValueStore + Clone>(tracker: &Tracker<R>, month: &CalendarMonth) {
    let rows: Vec<EntryRow> = tracker
        .work_log()
        .entries_in_month(month)
        .map(|(date, entry)| EntryRow {
            date: date.to_string(),
            day: date.date().format("%a").to_string(),
            hours: entry.hours.clone(),
            desc: entry.extra_work.clone(),
            status: status_label(tracker.entry_status(date)).to_string(),
        })
        .collect();

    if rows.is_empty() {
        println!("No work logged in {}.", month.title());
        return;
    }

    let total = tracker.work_log().total_hours_between(
        month.first_day(),
        month
            .date_key(month.days_in_month())
            .map_or(month.first_day(), |k| k.date()),
    );
    let extra_days = rows.iter().filter(|r| r.status == "extra").count();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    println!("\x1b[1;36m{}\x1b[0m", month.title());
    println!("{}", table);
    println!("Total: {:.1}h, extra work on {} day(s)", total, extra_days);
}

pub fn print_requirements(requirements: &[String]) {
    if requirements.is_empty() {
        println!("No requirements defined.");
        return;
    }
    let rows = requirements
        .iter()
        .enumerate()
        .map(|(i, text)| RequirementRow {
            number: i + 1,
            text: text.clone(),
        });
    let mut table = Table::new(rows);
    table.with(Style::modern());
    println!("{}", table);
}
