use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::date_field::INPUT_HEIGHT;
use crate::ui::subtitle::ListSubtitle;
use crate::ui::theme::{GREY_SUBTITLE, INPUT_BORDER};

const FOOTER_HELP: &str =
    "click/Enter: open  arrows/PgUp/PgDn: move  Enter: pick  Esc/Tab: close  Ctrl+Q: quit";

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let subtitle = ListSubtitle::new(app.subtitle().to_string());
    let field_rows = (INPUT_HEIGHT + 1) * app.fields().len() as u16;

    let [subtitle_area, fields_area, log_area, footer_area] = Layout::vertical([
        Constraint::Length(subtitle.height()),
        Constraint::Length(field_rows),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(subtitle, subtitle_area);
    render_change_log(frame, app, log_area);
    frame.render_widget(
        Paragraph::new(FOOTER_HELP).style(Style::default().fg(GREY_SUBTITLE)),
        footer_area,
    );

    // Open popovers overlap what is below them, so they draw last.
    let slots: Vec<Rect> = (0..app.fields().len())
        .map(|index| field_slot(fields_area, index))
        .collect();
    let mut order: Vec<usize> = (0..slots.len()).collect();
    order.sort_by_key(|&index| app.fields()[index].is_open());

    for index in order {
        let field = &mut app.fields_mut()[index];
        frame.render_widget(field, slots[index]);
    }

    if let Some(pos) = app.fields().iter().find_map(|field| field.cursor_position()) {
        frame.set_cursor_position(pos);
    }
}

fn field_slot(area: Rect, index: usize) -> Rect {
    let offset = (INPUT_HEIGHT + 1) * index as u16;
    let y = area.y.saturating_add(offset);
    Rect {
        x: area.x + 1,
        y,
        width: area.width.saturating_sub(2).min(40),
        height: INPUT_HEIGHT.min(area.bottom().saturating_sub(y)),
    }
}

fn render_change_log(frame: &mut Frame, app: &App, area: Rect) {
    let capacity = usize::from(area.height.saturating_sub(2));
    let changes = app.changes();
    let lines: Vec<Line> = changes
        .iter()
        .rev()
        .take(capacity)
        .map(|event| {
            Line::from(serde_json::to_string(event).unwrap_or_else(|err| err.to_string()))
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::bordered()
                .title(" onChange ")
                .border_style(Style::default().fg(INPUT_BORDER)),
        ),
        area,
    );
}
