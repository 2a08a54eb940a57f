use crate::tui::theme::*;
use flashquiz_core::{Editor, EditorState, ResultForm, Session, Side, View, Viewer};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Name,
    Cards,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Name => Focus::Cards,
            Focus::Cards => Focus::Name,
        }
    }
}

pub enum Status {
    Info(String),
    Error(String),
}

pub fn draw_ui(
    f: &mut Frame,
    area: Rect,
    session: &Session,
    sel: usize,
    focus: Focus,
    status: Option<&Status>,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1), Constraint::Length(2)])
        .split(area);

    let keys = match session.view() {
        View::Home => {
            draw_home(f, rows[0], session, sel);
            " ↑/k ↓/j select   Enter open   n new   r refresh   q quit "
        }
        View::Editor(ed) => {
            draw_editor(f, rows[0], ed, focus);
            " Tab field   Ctrl-S save   Ctrl-O overwrite   Ctrl-T study   Esc back "
        }
        View::Viewer(v) => {
            draw_viewer(f, rows[0], v);
            " space flip   s shuffle   c correct   x incorrect   Esc home "
        }
        View::Result(r) => {
            draw_result(f, rows[0], r);
            " type your name   Enter save   Esc home "
        }
    };

    let line = match status {
        Some(Status::Info(m)) => Line::from(Span::styled(m.as_str(), saved_style())),
        Some(Status::Error(m)) => Line::from(Span::styled(m.as_str(), error_style())),
        None => Line::from(""),
    };
    f.render_widget(Paragraph::new(line), rows[1]);

    let foot = Paragraph::new(Line::from(Span::raw(keys)))
        .style(footer_style())
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(foot, rows[2]);
}

fn draw_home(f: &mut Frame, area: Rect, session: &Session, sel: usize) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let decks: Vec<ListItem> = if session.decks().is_empty() {
        vec![ListItem::new(Line::from("No flashcards saved").style(hint_style()))]
    } else {
        session
            .decks()
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let line = Line::from(name.clone());
                ListItem::new(if i == sel { line.style(selected_style()) } else { line })
            })
            .collect()
    };
    let list = List::new(decks).block(titled("Saved Flashcards"));
    f.render_widget(list, chunks[0]);

    let scores: Vec<ListItem> = if session.scores().is_empty() {
        vec![ListItem::new(Line::from("No Scores Saved").style(hint_style()))]
    } else {
        session.scores().iter().map(|s| ListItem::new(s.clone())).collect()
    };
    let list = List::new(scores).block(titled("Saved Scores"));
    f.render_widget(list, chunks[1]);
}

fn draw_editor(f: &mut Frame, area: Rect, ed: &Editor, focus: Focus) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let mut name_block = titled("Deck Name");
    let mut cards_block = titled("One card per line, formatted as front|back");
    match focus {
        Focus::Name => name_block = name_block.border_style(focus_style()),
        Focus::Cards => cards_block = cards_block.border_style(focus_style()),
    }

    f.render_widget(Paragraph::new(ed.name()).block(name_block), rows[0]);
    f.render_widget(
        Paragraph::new(ed.raw()).wrap(Wrap { trim: false }).block(cards_block),
        rows[1],
    );

    let state = match ed.state() {
        EditorState::Saved => Span::styled("Saved", saved_style()),
        EditorState::Editing => Span::styled("Not Saved", error_style()),
        EditorState::PendingOverwrite => Span::styled("Overwrite?", selected_style()),
    };
    f.render_widget(Paragraph::new(Line::from(state)), rows[2]);
}

fn draw_viewer(f: &mut Frame, area: Rect, v: &Viewer) {
    let block = titled(v.deck_name());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let back = v.side() == Side::Back;
    let text = vec![
        Line::from(Span::styled(
            format!("Card {}/{}", v.position() + 1, v.len()),
            hint_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{}: ", v.side().label()), side_style(back)),
            Span::raw(v.current_text()),
        ]),
        Line::from(""),
        Line::from(Span::styled(format!("Correct so far: {}", v.correct()), hint_style())),
    ];
    f.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), inner);
}

fn draw_result(f: &mut Frame, area: Rect, r: &ResultForm) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let t = r.tally();
    let stats = Paragraph::new(Line::from(format!(
        "Correct: {} | Incorrect: {}",
        t.correct, t.incorrect
    )))
    .block(titled(r.deck_name()));
    f.render_widget(stats, rows[0]);

    let input = Paragraph::new(r.studier()).block(titled("Your name").border_style(focus_style()));
    f.render_widget(input, rows[1]);
}

fn titled(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(title, title_style()))
        .borders(Borders::ALL)
}
