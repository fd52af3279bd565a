use crate::app::state::SuggestionState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

pub const MAX_VISIBLE_ROWS: usize = 6;

/// Index of the first candidate drawn, keeping the highlight on screen.
#[must_use]
pub fn visible_offset(highlighted: Option<usize>) -> usize {
    highlighted.map_or(0, |h| h.saturating_sub(MAX_VISIBLE_ROWS - 1))
}

/// Popup directly under `anchor`, shrunk to stay inside `bounds`.
#[must_use]
pub fn popup_rect(anchor: Rect, bounds: Rect, rows: usize) -> Rect {
    let wanted = rows.clamp(1, MAX_VISIBLE_ROWS) as u16 + 2;
    let y = anchor.y.saturating_add(anchor.height);
    let available = bounds.bottom().saturating_sub(y);
    Rect::new(anchor.x, y, anchor.width, wanted.min(available))
}

pub struct SuggestionList<'a> {
    pub theme: &'a Theme,
    pub state: &'a SuggestionState,
    pub offset: usize,
}

impl Widget for SuggestionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 3 {
            return;
        }
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus)
            .style(self.theme.list_item);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.state.candidates.is_empty() {
            if self.state.is_loading {
                buf.set_line(
                    inner.x,
                    inner.y,
                    &Line::from(Span::styled(" Searching…", self.theme.loading)),
                    inner.width,
                );
            }
            return;
        }

        let rows = self
            .state
            .candidates
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(inner.height as usize);
        for (row, (index, candidate)) in rows.enumerate() {
            let style = if self.state.highlighted == Some(index) {
                self.theme.list_selected
            } else {
                self.theme.list_item
            };
            let y = inner.y + row as u16;
            buf.set_style(Rect::new(inner.x, y, inner.width, 1), style);
            buf.set_line(
                inner.x,
                y,
                &Line::from(Span::styled(format!(" {candidate}"), style)),
                inner.width,
            );
        }
    }
}
