pub mod screen;

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::app::App;
use screen::current_screen;

pub(crate) const HORIZONTAL_MARGIN: u16 = 5;
pub(crate) const VERTICAL_MARGIN: u16 = 2;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        current_screen(self.state()).render(self, area, buf);
    }
}

/// Horizontally centers a column of `width` inside `area`
pub(crate) fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
