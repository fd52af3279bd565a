use crate::app::state::AppState;
use crate::components::field_input::FieldInput;
use crate::components::footer::Footer;
use crate::components::suggestion_list::{popup_rect, visible_offset, SuggestionList};
use crate::domain::models::FieldId;
use crate::theme::Theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const FORM_WIDTH: u16 = 60;

pub struct AppLayout {
    pub header: Rect,
    pub search: Rect,
    pub form_title: Rect,
    pub from: Rect,
    pub to: Rect,
    pub footer: Rect,
}

impl AppLayout {
    #[must_use]
    pub fn input(&self, field: FieldId) -> Rect {
        match field {
            FieldId::Search => self.search,
            FieldId::From => self.from,
            FieldId::To => self.to,
        }
    }
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1),
            Constraint::Length(3), // Search
            Constraint::Length(1),
            Constraint::Length(1), // Booking title
            Constraint::Length(3), // From
            Constraint::Length(3), // To
            Constraint::Min(0),
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let column = |row: Rect| {
        let width = row.width.min(FORM_WIDTH);
        Rect::new(row.x + (row.width - width) / 2, row.y, width, row.height)
    };

    AppLayout {
        header: main[0],
        search: column(main[2]),
        form_title: column(main[4]),
        from: column(main[5]),
        to: column(main[6]),
        footer: main[8],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState, theme: &Theme) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let layout = get_layout(f.area());
    app_state.regions.clear();

    // --- Header ---
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" VOYAGE ", theme.header_logo),
        Span::styled(" find your next city", theme.header),
    ]))
    .style(theme.header);
    f.render_widget(header, layout.header);

    f.render_widget(
        Paragraph::new(Span::styled("Book a trip", theme.section_title)),
        layout.form_title,
    );

    // --- Inputs ---
    for field in FieldId::ALL {
        let area = layout.input(field);
        if area.width == 0 || area.height == 0 {
            continue;
        }
        f.render_widget(
            FieldInput {
                theme,
                id: field,
                field: app_state.field(field),
                focused: app_state.focused == field,
                placeholder: placeholder(field),
            },
            area,
        );
        app_state.regions.set_input(field, area);
    }

    // --- Footer ---
    f.render_widget(
        Footer {
            state: app_state,
            theme,
        },
        layout.footer,
    );

    // --- Popups (drawn last so they cover what lies below) ---
    let bounds = Rect::new(
        f.area().x,
        f.area().y,
        f.area().width,
        layout.footer.y.saturating_sub(f.area().y),
    );
    for field in FieldId::ALL {
        let state = app_state.suggestions(field);
        let loading_only = state.is_loading && state.candidates.is_empty();
        if !(state.is_open || (loading_only && app_state.focused == field)) {
            continue;
        }

        let rows = state.candidates.len().max(1);
        let area = popup_rect(layout.input(field), bounds, rows);
        if area.height < 3 {
            continue;
        }
        let offset = visible_offset(state.highlighted);
        f.render_widget(
            SuggestionList {
                theme,
                state,
                offset,
            },
            area,
        );
        app_state.regions.set_list(field, area, offset);
    }
}

fn placeholder(field: FieldId) -> &'static str {
    match field {
        FieldId::Search => "Search a city",
        FieldId::From => "Leaving from",
        FieldId::To => "Going to",
    }
}
