use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Cell, List, ListItem, Paragraph, Row, Table},
    Frame,
};
use worktrack_core::{Cell as CalendarCell, DayCell, WorkClassification, DAY_NAMES};

use crate::tui::app::{App, FormField, InputMode};

const ENTRY_BG: Color = Color::Rgb(30, 45, 70);
const EXTRA_MARK: Color = Color::Green;
const MUTED: Color = Color::DarkGray;

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let form_height = if matches!(app.input_mode, InputMode::EditingEntry) { 8 } else { 0 };
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Header
            Constraint::Min(10),             // Calendar + requirements
            Constraint::Length(form_height), // Entry form
            Constraint::Length(1),           // Status
            Constraint::Length(1),           // Help
        ])
        .split(size);

    draw_header(f, app, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(main_chunks[1]);

    draw_calendar(f, app, content_chunks[0]);
    draw_requirements(f, app, content_chunks[1]);

    if matches!(app.input_mode, InputMode::EditingEntry) {
        draw_entry_form(f, app, main_chunks[2]);
    }

    let status = Paragraph::new(app.status_message.clone().unwrap_or_default())
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(status, main_chunks[3]);

    let footer = Paragraph::new(help_text(&app.input_mode))
        .style(Style::default().fg(MUTED))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[4]);
}

fn help_text(mode: &InputMode) -> &'static str {
    match mode {
        InputMode::Normal => {
            "h/j/k/l: Move | [/]: Month | t: Today | Enter: Log | r: Requirements | q: Quit"
        }
        InputMode::EditingEntry => "Tab: Switch field | Enter: Save | Esc: Cancel",
        InputMode::Requirements => "j/k: Select | a: Add | d: Remove | Esc: Back",
        InputMode::AddingRequirement => "Enter: Add | Esc: Cancel",
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let title = Line::from(vec![
        Span::styled("WORKTRACK", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw("   ←  "),
        Span::styled(
            app.tracker.current_month().title(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  →"),
    ]);
    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, area);
}

fn day_cell<'a>(app: &App, day: &DayCell) -> Cell<'a> {
    let mut lines = vec![Line::from(format!("{:>2}", day.day_number))];
    if let Some(hours) = &day.hours {
        lines.push(Line::from(Span::styled(
            format!("{} hrs", hours),
            Style::default().fg(Color::LightBlue),
        )));
    }
    if day.is_extra {
        // Left-edge marker for extra work.
        for line in &mut lines {
            line.spans
                .insert(0, Span::styled("▌", Style::default().fg(EXTRA_MARK)));
        }
    }

    let mut style = Style::default();
    if day.has_entry {
        style = style.bg(ENTRY_BG);
    }
    if day.date_key.date() == app.today {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    if day.day_number == app.cursor_day {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Cell::from(Text::from(lines)).style(style)
}

fn draw_calendar(f: &mut Frame, app: &App, area: Rect) {
    let cells = app.tracker.calendar_days();
    let rows: Vec<Row> = cells
        .chunks(7)
        .map(|week| {
            let cells: Vec<Cell> = week
                .iter()
                .map(|cell| match cell {
                    CalendarCell::Blank => Cell::from(""),
                    CalendarCell::Day(day) => day_cell(app, day),
                })
                .collect();
            Row::new(cells).height(2)
        })
        .collect();

    let header = Row::new(DAY_NAMES.iter().map(|d| Cell::from(*d)))
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let table = Table::new(rows, [Constraint::Ratio(1, 7); 7])
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .title(" Calendar ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(table, area);
}

fn draw_requirements(f: &mut Frame, app: &mut App, area: Rect) {
    let focused = matches!(
        app.input_mode,
        InputMode::Requirements | InputMode::AddingRequirement
    );
    let adding = matches!(app.input_mode, InputMode::AddingRequirement);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(if adding { 3 } else { 0 }),
        ])
        .split(area);

    let items: Vec<ListItem> = app
        .tracker
        .requirements()
        .iter()
        .map(|r| ListItem::new(r.as_str()))
        .collect();
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(MUTED)
    };
    let list = List::new(items)
        .block(
            Block::default()
                .title(" Work Requirements ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol(if focused { ">> " } else { "   " });
    f.render_stateful_widget(list, chunks[0], &mut app.requirement_state);

    if adding {
        let input = Paragraph::new(app.requirement_input.value.as_str()).block(
            Block::default()
                .title(" Add a work requirement... ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        f.render_widget(input, chunks[1]);
        f.set_cursor_position((
            chunks[1].x + 1 + app.requirement_input.cursor_column(),
            chunks[1].y + 1,
        ));
    }
}

fn draw_entry_form(f: &mut Frame, app: &App, area: Rect) {
    let Some(date) = app.tracker.selected_date() else { return };

    let block = Block::default()
        .title(format!(" Log Hours for {} ", date.date().format("%a %Y-%m-%d")))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Hours
            Constraint::Length(1), // spacer
            Constraint::Length(1), // Description
            Constraint::Length(1), // spacer
            Constraint::Length(1), // Saved classification
        ])
        .split(inner);

    const LABEL_WIDTH: u16 = 18;
    let field = |label: &'static str, value: &str, active: bool| {
        let label_style = if active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Blue)
        };
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{:<width$}", label, width = LABEL_WIDTH as usize), label_style),
            Span::raw(value.to_string()),
        ]))
    };

    let hours_active = app.focused_field == FormField::Hours;
    f.render_widget(
        field("Hours Worked:", &app.hours_input.value, hours_active),
        rows[0],
    );
    f.render_widget(
        field("Work Description:", &app.description_input.value, !hours_active),
        rows[2],
    );

    // Reflects the saved description, not the one being typed.
    if let Some(status) = app.tracker.entry_status(&date) {
        let color = match status {
            WorkClassification::MatchesRequirement => Color::LightBlue,
            WorkClassification::ExtraWork => Color::Green,
        };
        f.render_widget(
            Paragraph::new(Span::styled(status.message(), Style::default().fg(color))),
            rows[4],
        );
    }

    let (row, input) = if hours_active {
        (rows[0], &app.hours_input)
    } else {
        (rows[2], &app.description_input)
    };
    f.set_cursor_position((row.x + LABEL_WIDTH + input.cursor_column(), row.y));
}
