use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use crate::ui::theme::GREY_SUBTITLE;

/// Rows a subtitle occupies by default; the text sits on the middle one.
pub const SUBTITLE_LINE_HEIGHT: u16 = 3;

/// Grey one-line subtitle for lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSubtitle<'a> {
    text: Line<'a>,
    line_height: u16,
    alignment: Alignment,
}

impl<'a> ListSubtitle<'a> {
    pub fn new(text: impl Into<Line<'a>>) -> Self {
        Self {
            text: text.into(),
            line_height: SUBTITLE_LINE_HEIGHT,
            alignment: Alignment::Left,
        }
    }

    pub fn line_height(mut self, rows: u16) -> Self {
        self.line_height = rows.max(1);
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Height a layout should reserve for this subtitle.
    pub fn height(&self) -> u16 {
        self.line_height
    }
}

impl Widget for ListSubtitle<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let rows = self.line_height.min(area.height);
        let line_area = Rect {
            y: area.y + (rows - 1) / 2,
            height: 1,
            ..area
        };
        Paragraph::new(self.text)
            .style(Style::default().fg(GREY_SUBTITLE))
            .alignment(self.alignment)
            .render(line_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn text_is_centred_in_line_box() {
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        ListSubtitle::new("Entries").render(area, &mut buf);

        assert_eq!(row_text(&buf, 0).trim(), "");
        assert_eq!(row_text(&buf, 1).trim(), "Entries");
        assert_eq!(row_text(&buf, 2).trim(), "");
        assert_eq!(buf[(0, 1)].fg, GREY_SUBTITLE);
    }

    #[test]
    fn short_area_uses_first_row() {
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        ListSubtitle::new("Entries").render(area, &mut buf);
        assert_eq!(row_text(&buf, 0).trim(), "Entries");
    }

    #[test]
    fn line_height_is_at_least_one() {
        assert_eq!(ListSubtitle::new("x").line_height(0).height(), 1);
        assert_eq!(ListSubtitle::new("x").height(), SUBTITLE_LINE_HEIGHT);
    }
}
