//! Rendering glue between the controller, the text box and the popover.

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};

use crate::ui::calendar::popover_rect;
use crate::ui::theme::{INPUT_BORDER, INPUT_BORDER_ACTIVE, INPUT_DISABLED};

use super::controller::{DateField, DateFieldLayout};

/// Rows taken by the bordered text box.
pub const INPUT_HEIGHT: u16 = 3;

const CALENDAR_GLYPH: &str = "▦";

impl Widget for &mut DateField {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let input_area = Rect {
            height: INPUT_HEIGHT.min(area.height),
            ..area
        };
        let disabled = self.props().disabled;
        let border = if disabled {
            INPUT_DISABLED
        } else if self.is_open() || self.is_focused() {
            INPUT_BORDER_ACTIVE
        } else {
            INPUT_BORDER
        };

        let block = Block::bordered()
            .title(format!(" {} ", self.props().input_id()))
            .border_style(Style::default().fg(border));
        let inner = block.inner(input_area);
        block.render(input_area, buf);

        if inner.width > 3 && inner.height > 0 {
            let text_style = if disabled {
                Style::default().fg(INPUT_DISABLED)
            } else {
                Style::default()
            };
            let text_width = usize::from(inner.width - 3);
            buf.set_stringn(
                inner.x + 1,
                inner.y,
                self.displayed_text(),
                text_width,
                text_style,
            );
            buf.set_string(inner.right() - 1, inner.y, CALENDAR_GLYPH, Style::default().fg(border));
        }

        let popover = self.is_open().then(|| {
            let rect = popover_rect(input_area, buf.area);
            self.calendar()
                .view(self.committed_date())
                .render(rect, buf);
            rect
        });

        self.set_layout(DateFieldLayout {
            input: input_area,
            popover,
        });
    }
}

impl DateField {
    /// Terminal cursor position inside the text box, when focused.
    pub fn cursor_position(&self) -> Option<Position> {
        if !self.is_focused() || self.props().disabled {
            return None;
        }
        let input = self.layout().input;
        if input.width < 5 || input.height < INPUT_HEIGHT {
            return None;
        }
        let max_offset = input.width - 5;
        let offset = u16::try_from(self.input_cursor())
            .unwrap_or(u16::MAX)
            .min(max_offset);
        Some(Position::new(input.x + 2 + offset, input.y + 1))
    }
}
