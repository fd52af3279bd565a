use ratatui::style::{Color, Modifier, Style};

pub struct Palette {
    pub base: Color,
    pub crust: Color,
    pub text: Color,
    pub subtext: Color,
    pub surface: Color,
    pub overlay: Color,
    pub accent: Color,
    pub green: Color,
    pub yellow: Color,
}

pub const HARBOR: Palette = Palette {
    base: Color::Rgb(30, 34, 44),
    crust: Color::Rgb(20, 23, 30),
    text: Color::Rgb(226, 232, 240),
    subtext: Color::Rgb(166, 176, 192),
    surface: Color::Rgb(62, 70, 88),
    overlay: Color::Rgb(110, 122, 146),
    accent: Color::Rgb(94, 169, 214),
    green: Color::Rgb(150, 200, 140),
    yellow: Color::Rgb(232, 200, 120),
};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,
    pub field_label: Style,
    pub field_label_focus: Style,
    pub text: Style,

    pub list_item: Style,
    pub list_selected: Style,
    pub loading: Style,
    pub dimmed: Style,

    pub header_logo: Style,
    pub header: Style,
    pub section_title: Style,

    pub footer_key: Style,
    pub footer: Style,
}

impl Theme {
    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface),
            border_focus: Style::default().fg(p.accent),
            field_label: Style::default().fg(p.subtext),
            field_label_focus: Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
            text: Style::default().fg(p.text),

            list_item: Style::default().fg(p.text).bg(p.base),
            list_selected: Style::default()
                .bg(p.accent)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            loading: Style::default().fg(p.yellow).add_modifier(Modifier::ITALIC),
            dimmed: Style::default().fg(p.overlay).add_modifier(Modifier::DIM),

            header_logo: Style::default()
                .bg(p.accent)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(p.base).fg(p.text),
            section_title: Style::default().fg(p.green).add_modifier(Modifier::BOLD),

            footer_key: Style::default()
                .bg(p.surface)
                .fg(p.accent)
                .add_modifier(Modifier::BOLD),
            footer: Style::default().bg(p.crust).fg(p.subtext),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette(&HARBOR)
    }
}
