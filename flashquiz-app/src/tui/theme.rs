use ratatui::style::{Color, Modifier, Style, Stylize};

pub fn title_style() -> Style { Style::default().fg(Color::Cyan).bold() }
pub fn hint_style() -> Style { Style::default().fg(Color::DarkGray) }
pub fn selected_style() -> Style { Style::default().fg(Color::Yellow).bold() }
pub fn footer_style() -> Style { Style::default().fg(Color::Gray) }
pub fn focus_style() -> Style { Style::default().fg(Color::Yellow) }

pub fn error_style() -> Style { Style::default().fg(Color::Red) }
pub fn saved_style() -> Style { Style::default().fg(Color::Green) }

pub fn side_style(back: bool) -> Style {
    if back {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }
}
