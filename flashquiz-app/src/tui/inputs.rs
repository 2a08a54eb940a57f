use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Up,
    Down,
    Enter,
    Back,
    Tab,
    Backspace,
    Save,
    Confirm,
    Study,
    Char(char),
    None,
}

/// Maps a terminal event to an action. Plain characters come through as
/// `Char` so each view decides whether they are text or commands.
pub fn map_event(ev: Event) -> Action {
    if let Event::Key(KeyEvent {
        code, modifiers, kind, ..
    }) = ev
    {
        if kind == KeyEventKind::Release {
            return Action::None;
        }
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);
        match (code, ctrl) {
            (KeyCode::Char('c'), true) => Action::Quit,
            (KeyCode::Char('s'), true) => Action::Save,
            (KeyCode::Char('o'), true) => Action::Confirm,
            (KeyCode::Char('t'), true) => Action::Study,
            (KeyCode::Char(c), false) => Action::Char(c),
            (KeyCode::Up, _) => Action::Up,
            (KeyCode::Down, _) => Action::Down,
            (KeyCode::Enter, _) => Action::Enter,
            (KeyCode::Esc, _) => Action::Back,
            (KeyCode::Tab, _) => Action::Tab,
            (KeyCode::Backspace, _) => Action::Backspace,
            _ => Action::None,
        }
    } else {
        Action::None
    }
}
