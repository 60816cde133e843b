use crate::calc::{
    Action, DayCell, HOUR_RANGES, SlotId, ViewState, WEEKDAY_NAMES, days_in_month, is_unavailable,
    month_grid, month_name, reduce,
};
use crate::data::AppSettings;
use crate::ui::landing;
use anyhow::Result;
use crossterm::event::{
    self, Event as CEvent, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io::Stdout;
use std::time::Duration as StdDuration;

// Decoration colors
const CHECK_COLOR: Color = Color::Green;
const ADJACENT_FG: Color = Color::DarkGray;

/// Height of one week row: cell borders around a day-number line plus the
/// eight hour rows.
const WEEK_ROW_HEIGHT: u16 = 11;

pub struct App {
    /// Calendar view state, advanced only through `reduce`.
    state: ViewState,
    pub settings: AppSettings,
    /// Keyboard focus inside the displayed month.
    cursor_day: u32,
    cursor_hour: usize,
    /// Click targets recorded during the last render; adjacent-month cells
    /// are never registered.
    hit_regions: Vec<(Rect, Action)>,
}

impl App {
    pub fn new(settings: AppSettings, state: ViewState) -> Self {
        let cursor_day = state.day;
        let cursor_hour = HOUR_RANGES
            .iter()
            .position(|h| *h == state.hour)
            .unwrap_or(0);
        App {
            state,
            settings,
            cursor_day,
            cursor_hour,
            hit_regions: Vec::new(),
        }
    }

    fn dispatch(&mut self, action: Action) {
        self.state = reduce(&self.state, &action);
        self.clamp_cursor();
    }

    /// Keeps the cursor on a real day after month length changes.
    fn clamp_cursor(&mut self) {
        let days = days_in_month(self.state.year, self.state.month);
        if self.cursor_day > days {
            self.cursor_day = days;
        }
    }

    fn cursor_slot(&self) -> SlotId {
        SlotId::new(self.cursor_day, HOUR_RANGES[self.cursor_hour])
    }

    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Left => {
                if self.cursor_day > 1 {
                    self.cursor_day -= 1;
                }
            }
            KeyCode::Right => {
                if self.cursor_day < days_in_month(self.state.year, self.state.month) {
                    self.cursor_day += 1;
                }
            }
            KeyCode::Up => {
                if self.cursor_hour > 0 {
                    self.cursor_hour -= 1;
                }
            }
            KeyCode::Down => {
                if self.cursor_hour + 1 < HOUR_RANGES.len() {
                    self.cursor_hour += 1;
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                let slot = self.cursor_slot();
                self.dispatch(Action::ToggleSlot(slot));
            }
            KeyCode::Char('n') => self.dispatch(Action::NextMonth),
            KeyCode::Char('p') => self.dispatch(Action::PrevMonth),
            KeyCode::Char('N') => self.dispatch(Action::NextYear),
            KeyCode::Char('P') => self.dispatch(Action::PrevYear),
            KeyCode::Char('q') => return true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            _ => {}
        }
        false
    }

    /// Dispatches the action under a left click, if any.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }
        let action = self
            .hit_regions
            .iter()
            .find(|(rect, _)| contains(*rect, mouse.column, mouse.row))
            .map(|(_, action)| action.clone());
        if let Some(action) = action {
            self.dispatch(action);
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        let (label_area, body) = landing::split(f.area());
        landing::render_label(f, label_area, &self.settings.landing_label);
        self.render_calendar(f, body);
    }

    fn render_calendar(&mut self, f: &mut Frame, area: Rect) {
        self.hit_regions.clear();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // year/month navigation
                Constraint::Length(1), // weekday names
                Constraint::Min(0),    // week rows
            ])
            .split(area);

        self.render_nav(f, chunks[0]);
        render_weekday_header(f, chunks[1]);
        self.render_weeks(f, chunks[2]);
    }

    fn render_nav(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(4),
                Constraint::Length(4),
            ])
            .split(area);

        let buttons = [
            (chunks[0], "«", Action::PrevYear),
            (chunks[1], "‹", Action::PrevMonth),
            (chunks[3], "›", Action::NextMonth),
            (chunks[4], "»", Action::NextYear),
        ];
        for (rect, glyph, action) in buttons {
            let p = Paragraph::new(Line::from(Span::styled(
                format!(" {glyph} "),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            f.render_widget(p, rect);
            self.hit_regions.push((rect, action));
        }

        let title = format!("{} {}", month_name(self.state.month), self.state.year);
        let p = Paragraph::new(Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        f.render_widget(p, chunks[2]);
    }

    fn render_weeks(&mut self, f: &mut Frame, area: Rect) {
        let weeks = month_grid(self.state.year, self.state.month);
        let mut constraints: Vec<Constraint> =
            vec![Constraint::Length(WEEK_ROW_HEIGHT); weeks.len()];
        constraints.push(Constraint::Min(0));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (week, row_area) in weeks.iter().zip(rows.iter()) {
            for (cell, cell_area) in week.iter().zip(day_columns(*row_area)) {
                self.render_day_cell(f, cell_area, cell);
            }
        }
    }

    fn render_day_cell(&mut self, f: &mut Frame, area: Rect, cell: &DayCell) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        if cell.is_current() {
            self.render_booking_day(f, inner, cell.day());
        } else {
            // Muted filler, no click targets.
            let p = Paragraph::new(Line::from(Span::styled(
                format!("{}", cell.day()),
                Style::default().fg(ADJACENT_FG).add_modifier(Modifier::DIM),
            )))
            .alignment(Alignment::Center);
            f.render_widget(p, inner);
        }
    }

    fn render_booking_day(&mut self, f: &mut Frame, inner: Rect, day: u32) {
        let mut lines: Vec<Line> = Vec::with_capacity(1 + HOUR_RANGES.len());
        lines.push(Line::from(Span::styled(
            format!("{day:>width$}", width = inner.width as usize),
            day_number_style(day == self.cursor_day),
        )));

        for (i, hour) in HOUR_RANGES.iter().enumerate() {
            let slot = SlotId::new(day, hour);
            let under_cursor = day == self.cursor_day && i == self.cursor_hour;
            let mut spans = vec![Span::styled(
                *hour,
                slot_style(under_cursor, is_unavailable(&slot)),
            )];
            if self.state.selected.contains(&slot) {
                spans.push(Span::styled(" ✔", Style::default().fg(CHECK_COLOR)));
            }
            lines.push(Line::from(spans));

            // Hour rows are the click targets; the day-number line is not.
            let hour_y = inner.y.saturating_add(1 + i as u16);
            if hour_y < inner.y.saturating_add(inner.height) {
                let region = Rect {
                    x: inner.x,
                    y: hour_y,
                    width: inner.width,
                    height: 1,
                };
                self.hit_regions.push((region, Action::ToggleSlot(slot)));
            }
        }

        f.render_widget(Paragraph::new(lines), inner);
    }
}

/// Splits `area` into the seven equal-width day columns.
fn day_columns(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 7); 7])
        .split(area)
        .to_vec()
}

fn render_weekday_header(f: &mut Frame, area: Rect) {
    for (rect, name) in day_columns(area).into_iter().zip(WEEKDAY_NAMES) {
        let p = Paragraph::new(Line::from(Span::styled(
            name,
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        f.render_widget(p, rect);
    }
}

/// True when (x, y) falls inside `rect`.
pub(crate) fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}

/// Style for one hour row of a bookable day. Unavailable slots keep their
/// strike-through even under the cursor.
pub(crate) fn slot_style(under_cursor: bool, unavailable: bool) -> Style {
    let mut style = Style::default();
    if unavailable {
        style = style.fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT);
    }
    if under_cursor {
        style = style
            .fg(Color::White)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD);
    }
    style
}

pub(crate) fn day_number_style(under_cursor: bool) -> Style {
    if under_cursor {
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    }
}

// ── App event loop ────────────────────────────────────────────────────────────

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;
        if event::poll(StdDuration::from_millis(16))? {
            match event::read()? {
                CEvent::Key(key) => {
                    if app.handle_key(key.code, key.modifiers) {
                        break;
                    }
                }
                CEvent::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }
    Ok(())
}
