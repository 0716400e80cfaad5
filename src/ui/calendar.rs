//! One-month calendar popover.
//!
//! ```text
//! ┌────────────────────┐
//! │<   March 2024     >│
//! │Su Mo Tu We Th Fr Sa│
//! │                1  2│
//! │ 3  4  5  6  7  8  9│
//! │ ...                │
//! └────────────────────┘
//! ```

use chrono::{Datelike, Days, Months, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Clear, Widget};

use crate::date::{DateCodec, MomentCodec};
use crate::ui::theme::{
    CALENDAR_CURSOR, CALENDAR_SELECTED, CALENDAR_TODAY, CALENDAR_WEEKDAY, INPUT_TEXT,
    POPOVER_BORDER,
};

pub const POPOVER_WIDTH: u16 = 22;
pub const POPOVER_HEIGHT: u16 = 10;

const CELL_WIDTH: u16 = 3;
const GRID_ROWS: u16 = 6;
const WEEKDAY_HEADER: &str = "Su Mo Tu We Th Fr Sa";
/// Rows above the day grid: title and weekday header.
const HEADER_ROWS: u16 = 2;

/// Result of a key press inside the popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarOutcome {
    Selected(NaiveDate),
    Dismissed,
    Moved,
    Ignored,
}

/// What a click at a position landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarHit {
    Day(NaiveDate),
    PrevMonth,
    NextMonth,
    /// Inside the popover, on nothing actionable.
    Inside,
    Outside,
}

/// Cursor and month navigation for the popover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarPopover {
    cursor: NaiveDate,
    today: NaiveDate,
}

impl CalendarPopover {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            cursor: today,
            today,
        }
    }

    /// Point the cursor at `current`, or at today when nothing is committed.
    pub fn reset(&mut self, current: Option<NaiveDate>, today: NaiveDate) {
        self.today = today;
        self.cursor = current.unwrap_or(today);
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn move_days(&mut self, days: i64) {
        let moved = if days >= 0 {
            self.cursor.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.cursor.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        if let Some(date) = moved {
            self.cursor = date;
        }
    }

    /// Move by whole months, clamping the day to the target month's length.
    pub fn shift_months(&mut self, months: i32) {
        let moved = if months >= 0 {
            self.cursor.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            self.cursor.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        if let Some(date) = moved {
            self.cursor = date;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> CalendarOutcome {
        if key.kind == KeyEventKind::Release {
            return CalendarOutcome::Ignored;
        }

        match key.code {
            KeyCode::Left => self.move_days(-1),
            KeyCode::Right => self.move_days(1),
            KeyCode::Up => self.move_days(-7),
            KeyCode::Down => self.move_days(7),
            KeyCode::PageUp => self.shift_months(-1),
            KeyCode::PageDown => self.shift_months(1),
            KeyCode::Enter => return CalendarOutcome::Selected(self.cursor),
            KeyCode::Esc => return CalendarOutcome::Dismissed,
            _ => return CalendarOutcome::Ignored,
        }
        CalendarOutcome::Moved
    }

    /// Hit-test a click against the popover drawn in `area`.
    pub fn hit(&self, area: Rect, pos: Position) -> CalendarHit {
        if !area.contains(pos) {
            return CalendarHit::Outside;
        }
        let inner = inner_rect(area);
        if !inner.contains(pos) {
            return CalendarHit::Inside;
        }

        if pos.y == inner.y {
            if pos.x == inner.x {
                return CalendarHit::PrevMonth;
            }
            if pos.x + 1 == inner.right() {
                return CalendarHit::NextMonth;
            }
            return CalendarHit::Inside;
        }

        let grid_top = inner.y + HEADER_ROWS;
        if pos.y < grid_top || pos.y >= grid_top + GRID_ROWS {
            return CalendarHit::Inside;
        }
        let col = ((pos.x - inner.x) / CELL_WIDTH).min(6);
        let row = pos.y - grid_top;
        self.date_at(row, col)
            .map(CalendarHit::Day)
            .unwrap_or(CalendarHit::Inside)
    }

    /// Apply a click; returns the day picked, if any.
    pub fn click(&mut self, area: Rect, pos: Position) -> Option<NaiveDate> {
        match self.hit(area, pos) {
            CalendarHit::Day(date) => {
                self.cursor = date;
                Some(date)
            }
            CalendarHit::PrevMonth => {
                self.shift_months(-1);
                None
            }
            CalendarHit::NextMonth => {
                self.shift_months(1);
                None
            }
            CalendarHit::Inside | CalendarHit::Outside => None,
        }
    }

    pub fn view(&self, selected: Option<NaiveDate>) -> CalendarView<'_> {
        CalendarView {
            popover: self,
            selected,
        }
    }

    fn month_start(&self) -> NaiveDate {
        self.cursor.with_day(1).unwrap_or(self.cursor)
    }

    fn grid_start(&self) -> NaiveDate {
        let start = self.month_start();
        let offset = u64::from(start.weekday().num_days_from_sunday());
        start.checked_sub_days(Days::new(offset)).unwrap_or(start)
    }

    /// Day shown in a grid cell; `None` for cells outside the month.
    fn date_at(&self, row: u16, col: u16) -> Option<NaiveDate> {
        let date = self
            .grid_start()
            .checked_add_days(Days::new(u64::from(row * 7 + col)))?;
        (date.month() == self.cursor.month() && date.year() == self.cursor.year()).then_some(date)
    }
}

/// Widget drawing a [`CalendarPopover`].
pub struct CalendarView<'a> {
    popover: &'a CalendarPopover,
    selected: Option<NaiveDate>,
}

impl Widget for CalendarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::bordered().border_style(Style::default().fg(POPOVER_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        let grid_width = CELL_WIDTH * 7 - 1;
        if inner.width < grid_width || inner.height < HEADER_ROWS + GRID_ROWS {
            return;
        }

        let title = MomentCodec.format(self.popover.cursor, "MMMM YYYY");
        let title_len = title.chars().count() as u16;
        let title_x = inner.x + inner.width.saturating_sub(title_len) / 2;
        let bold = Style::default().fg(INPUT_TEXT).add_modifier(Modifier::BOLD);
        buf.set_string(inner.x, inner.y, "<", bold);
        buf.set_string(title_x, inner.y, &title, bold);
        buf.set_string(inner.right() - 1, inner.y, ">", bold);
        buf.set_string(
            inner.x,
            inner.y + 1,
            WEEKDAY_HEADER,
            Style::default().fg(CALENDAR_WEEKDAY),
        );

        let grid_top = inner.y + HEADER_ROWS;
        for row in 0..GRID_ROWS {
            for col in 0..7 {
                let Some(date) = self.popover.date_at(row, col) else {
                    continue;
                };
                buf.set_string(
                    inner.x + col * CELL_WIDTH,
                    grid_top + row,
                    format!("{:>2}", date.day()),
                    self.day_style(date),
                );
            }
        }
    }
}

impl CalendarView<'_> {
    fn day_style(&self, date: NaiveDate) -> Style {
        if Some(date) == self.selected {
            Style::default()
                .fg(Color::White)
                .bg(CALENDAR_SELECTED)
                .add_modifier(Modifier::BOLD)
        } else if date == self.popover.cursor {
            Style::default().fg(INPUT_TEXT).bg(CALENDAR_CURSOR)
        } else if date == self.popover.today {
            Style::default()
                .fg(CALENDAR_TODAY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    }
}

fn inner_rect(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Place the popover under `anchor`, or above it when there is no room
/// below, kept inside `bounds`.
pub fn popover_rect(anchor: Rect, bounds: Rect) -> Rect {
    let width = POPOVER_WIDTH.min(bounds.width);
    let height = POPOVER_HEIGHT.min(bounds.height);

    let max_x = bounds.right().saturating_sub(width);
    let x = anchor.x.clamp(bounds.x, max_x.max(bounds.x));

    let y = if anchor.bottom() + height <= bounds.bottom() {
        anchor.bottom()
    } else if anchor.y >= bounds.y + height {
        anchor.y - height
    } else {
        bounds.bottom().saturating_sub(height).max(bounds.y)
    };

    Rect {
        x,
        y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn popover_at(date: NaiveDate) -> CalendarPopover {
        let mut popover = CalendarPopover::new(d(2024, 3, 20));
        popover.reset(Some(date), d(2024, 3, 20));
        popover
    }

    #[test]
    fn reset_without_value_starts_at_today() {
        let mut popover = CalendarPopover::new(d(2020, 1, 1));
        popover.reset(None, d(2024, 3, 20));
        assert_eq!(popover.cursor(), d(2024, 3, 20));
        assert_eq!(popover.today(), d(2024, 3, 20));
    }

    #[test]
    fn arrows_move_by_day_and_week() {
        let mut popover = popover_at(d(2024, 3, 15));
        assert_eq!(popover.handle_key(press(KeyCode::Right)), CalendarOutcome::Moved);
        assert_eq!(popover.cursor(), d(2024, 3, 16));
        popover.handle_key(press(KeyCode::Down));
        assert_eq!(popover.cursor(), d(2024, 3, 23));
        popover.handle_key(press(KeyCode::Up));
        popover.handle_key(press(KeyCode::Left));
        assert_eq!(popover.cursor(), d(2024, 3, 15));
    }

    #[test]
    fn page_keys_shift_months_and_clamp_day() {
        let mut popover = popover_at(d(2024, 1, 31));
        popover.handle_key(press(KeyCode::PageDown));
        assert_eq!(popover.cursor(), d(2024, 2, 29));
        popover.handle_key(press(KeyCode::PageUp));
        assert_eq!(popover.cursor(), d(2024, 1, 29));
    }

    #[test]
    fn enter_selects_and_esc_dismisses() {
        let mut popover = popover_at(d(2024, 3, 15));
        assert_eq!(
            popover.handle_key(press(KeyCode::Enter)),
            CalendarOutcome::Selected(d(2024, 3, 15))
        );
        assert_eq!(
            popover.handle_key(press(KeyCode::Esc)),
            CalendarOutcome::Dismissed
        );
        assert_eq!(
            popover.handle_key(press(KeyCode::Char('x'))),
            CalendarOutcome::Ignored
        );
    }

    #[test]
    fn renders_title_header_and_days() {
        // March 2024 starts on a Friday.
        let popover = popover_at(d(2024, 3, 15));
        let area = Rect::new(0, 0, POPOVER_WIDTH, POPOVER_HEIGHT);
        let mut buf = Buffer::empty(area);
        popover.view(Some(d(2024, 3, 15))).render(area, &mut buf);

        assert!(row_text(&buf, 1).contains("March 2024"));
        assert_eq!(row_text(&buf, 2), "│Su Mo Tu We Th Fr Sa│");
        assert_eq!(row_text(&buf, 3), "│                1  2│");
        assert_eq!(row_text(&buf, 4), "│ 3  4  5  6  7  8  9│");
        assert_eq!(buf[(1 + 5 * 3, 5)].bg, CALENDAR_SELECTED);
    }

    #[test]
    fn hit_maps_cells_to_days() {
        let popover = popover_at(d(2024, 3, 15));
        let area = Rect::new(10, 5, POPOVER_WIDTH, POPOVER_HEIGHT);
        // Grid starts at inner (11, 6) + 2 header rows; column 5 is Friday.
        assert_eq!(
            popover.hit(area, Position::new(11 + 5 * 3, 8)),
            CalendarHit::Day(d(2024, 3, 1))
        );
        assert_eq!(
            popover.hit(area, Position::new(11, 9)),
            CalendarHit::Day(d(2024, 3, 3))
        );
        // Leading blank cell before the 1st.
        assert_eq!(popover.hit(area, Position::new(11, 8)), CalendarHit::Inside);
        assert_eq!(popover.hit(area, Position::new(0, 0)), CalendarHit::Outside);
        assert_eq!(popover.hit(area, Position::new(10, 5)), CalendarHit::Inside);
    }

    #[test]
    fn click_on_arrows_changes_month() {
        let mut popover = popover_at(d(2024, 3, 15));
        let area = Rect::new(0, 0, POPOVER_WIDTH, POPOVER_HEIGHT);
        assert_eq!(popover.click(area, Position::new(1, 1)), None);
        assert_eq!(popover.cursor(), d(2024, 2, 15));
        assert_eq!(popover.click(area, Position::new(20, 1)), None);
        assert_eq!(popover.cursor(), d(2024, 3, 15));
    }

    #[test]
    fn popover_opens_below_or_above_anchor() {
        let bounds = Rect::new(0, 0, 80, 24);
        let below = popover_rect(Rect::new(2, 1, 30, 3), bounds);
        assert_eq!(below, Rect::new(2, 4, POPOVER_WIDTH, POPOVER_HEIGHT));

        let above = popover_rect(Rect::new(2, 20, 30, 3), bounds);
        assert_eq!(above, Rect::new(2, 10, POPOVER_WIDTH, POPOVER_HEIGHT));

        let clamped = popover_rect(Rect::new(70, 1, 10, 3), bounds);
        assert_eq!(clamped.x, 80 - POPOVER_WIDTH);
    }
}
