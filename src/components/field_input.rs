use crate::app::state::SuggestionField;
use crate::domain::models::FieldId;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub struct FieldInput<'a> {
    pub theme: &'a Theme,
    pub id: FieldId,
    pub field: &'a SuggestionField,
    pub focused: bool,
    pub placeholder: &'a str,
}

impl Widget for FieldInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let (border_style, label_style) = if self.focused {
            (self.theme.border_focus, self.theme.field_label_focus)
        } else {
            (self.theme.border, self.theme.field_label)
        };

        let mut block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(self.id.label(), label_style),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        if self.field.state.is_loading {
            block = block.title_bottom(
                Line::from(Span::styled(" searching… ", self.theme.loading)).right_aligned(),
            );
        } else if self.field.state.no_matches {
            block = block.title_bottom(
                Line::from(Span::styled(" no matches ", self.theme.dimmed)).right_aligned(),
            );
        }

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.focused {
            Widget::render(&self.field.text_area, inner, buf);
            return;
        }

        let text = self.field.text();
        let line = if text.is_empty() {
            Line::from(Span::styled(self.placeholder, self.theme.dimmed))
        } else {
            Line::from(Span::styled(text, self.theme.text))
        };
        Paragraph::new(line).render(inner, buf);
    }
}
