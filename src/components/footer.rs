use crate::app::state::AppState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
}

pub struct Footer<'a> {
    pub state: &'a AppState,
    pub theme: &'a Theme,
}

impl Footer<'_> {
    fn items(&self) -> Vec<FooterItem> {
        let mut items = vec![FooterItem {
            key: "Tab",
            desc: "next field",
        }];

        if self.state.suggestions(self.state.focused).is_open {
            items.push(FooterItem {
                key: "↑/↓",
                desc: "choose",
            });
            items.push(FooterItem {
                key: "Enter",
                desc: "pick",
            });
            items.push(FooterItem {
                key: "Esc",
                desc: "close",
            });
        } else {
            items.push(FooterItem {
                key: "Esc",
                desc: "quit",
            });
        }
        items
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let mut spans = vec![Span::raw(" ")];

        let available_width = area.width.saturating_sub(2) as usize;
        let mut current_width = 1;
        for item in self.items() {
            let key = Span::styled(format!(" {} ", item.key), theme.footer_key);
            let desc = Span::styled(format!(" {} ", item.desc), theme.footer);
            let width = key.width() + desc.width() + 1;
            if current_width + width > available_width {
                break;
            }
            current_width += width;
            spans.push(key);
            spans.push(desc);
            spans.push(Span::raw(" "));
        }

        let endpoint = format!(" {} ", self.state.api_base_url);
        if current_width + endpoint.len() < available_width {
            let padding = available_width - current_width - endpoint.len();
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(endpoint, theme.footer));
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
