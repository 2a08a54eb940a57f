use crate::tui::{
    inputs::{map_event, Action},
    views::{self, Focus, Status},
};
use crossterm::{
    event::{self},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use flashquiz_core::{DeckApi, EditorState, Grade, Progress, SaveStatus, Session, StudyError, View};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use std::sync::Arc;
use tokio::runtime::Runtime;

pub struct TuiApp {
    pub session: Session,
    pub rt: Arc<Runtime>,
    sel: usize,
    focus: Focus,
    status: Option<Status>,
}

impl TuiApp {
    pub fn new(api: Arc<dyn DeckApi>, rt: Arc<Runtime>) -> Self {
        Self { session: Session::new(api), rt, sel: 0, focus: Focus::Name, status: None }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        let refreshed = self.rt.block_on(self.session.refresh());
        self.report(refreshed);

        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.mainloop(&mut terminal);

        disable_raw_mode().ok();
        let mut out: Stdout = std::io::stdout();
        execute!(out, LeaveAlternateScreen).ok();
        terminal.show_cursor().ok();

        res
    }

    fn mainloop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| {
                let area = f.size();
                views::draw_ui(f, area, &self.session, self.sel, self.focus, self.status.as_ref());
            })?;

            if event::poll(std::time::Duration::from_millis(100))? {
                let action = map_event(event::read()?);
                if action == Action::Quit || !self.handle(action) {
                    break;
                }
            }
        }
        Ok(())
    }

    /// Applies one action to the current view. Returns false to quit.
    fn handle(&mut self, action: Action) -> bool {
        if action == Action::None {
            return true;
        }
        match self.session.view() {
            View::Home => return self.on_home(action),
            View::Editor(_) => self.on_editor(action),
            View::Viewer(_) => self.on_viewer(action),
            View::Result(_) => self.on_result(action),
        }
        true
    }

    fn on_home(&mut self, action: Action) -> bool {
        match action {
            Action::Back | Action::Char('q') => return false,
            Action::Up | Action::Char('k') => self.sel = self.sel.saturating_sub(1),
            Action::Down | Action::Char('j') => {
                if self.sel + 1 < self.session.decks().len() { self.sel += 1; }
            }
            Action::Char('r') => {
                let res = self.rt.block_on(self.session.refresh());
                self.report(res);
            }
            Action::Char('n') => {
                let res = self.session.new_deck();
                self.focus = Focus::Name;
                self.report(res);
            }
            Action::Enter => {
                if let Some(name) = self.session.decks().get(self.sel).cloned() {
                    let res = self.rt.block_on(self.session.open_deck(&name));
                    self.focus = Focus::Cards;
                    self.report(res);
                }
            }
            _ => {}
        }
        true
    }

    fn on_editor(&mut self, action: Action) {
        match action {
            Action::Tab => self.focus = self.focus.toggle(),
            Action::Char(c) => self.edit_field(|s| s.push(c)),
            Action::Backspace => self.edit_field(|s| { s.pop(); }),
            Action::Enter => match self.focus {
                Focus::Name => self.focus = Focus::Cards,
                Focus::Cards => self.edit_field(|s| s.push('\n')),
            },
            Action::Save => match self.rt.block_on(self.session.save()) {
                Ok(SaveStatus::Saved(_)) => self.info("Saved"),
                Ok(SaveStatus::NeedsConfirmation) => self.error(
                    "Deck already exists. Ctrl-O to overwrite, Esc to cancel.".into(),
                ),
                Err(e) => self.fail(e),
            },
            Action::Confirm => match self.rt.block_on(self.session.confirm_overwrite()) {
                Ok(Some(_)) => self.info("Saved"),
                Ok(None) => {}
                Err(e) => self.fail(e),
            },
            Action::Study => {
                let res = self.session.start_study();
                self.report(res);
            }
            Action::Back => {
                let pending = self
                    .session
                    .editor_mut()
                    .map(|ed| ed.state() == EditorState::PendingOverwrite)
                    .unwrap_or(false);
                if pending {
                    let res = self.session.cancel_overwrite();
                    self.report(res);
                } else {
                    self.go_home();
                }
            }
            _ => {}
        }
    }

    fn on_viewer(&mut self, action: Action) {
        let res = match action {
            Action::Char(' ') | Action::Enter => self.session.flip(),
            Action::Char('s') => self.session.shuffle(),
            Action::Char('c') | Action::Char('y') => self.grade(Grade::Correct),
            Action::Char('x') | Action::Char('n') => self.grade(Grade::Incorrect),
            Action::Back => {
                self.go_home();
                Ok(())
            }
            _ => Ok(()),
        };
        self.report(res);
    }

    fn on_result(&mut self, action: Action) {
        match action {
            Action::Char(c) => self.edit_studier(|s| s.push(c)),
            Action::Backspace => self.edit_studier(|s| { s.pop(); }),
            Action::Enter => match self.rt.block_on(self.session.submit_score()) {
                Ok(rec) => {
                    self.sel = 0;
                    self.info(&format!("Saved score {rec}"));
                }
                Err(e) => self.fail(e),
            },
            Action::Back => self.go_home(),
            _ => {}
        }
    }

    fn grade(&mut self, grade: Grade) -> Result<(), StudyError> {
        if let Progress::Finished(_) = self.session.grade(grade)? {
            self.status = None;
        }
        Ok(())
    }

    fn go_home(&mut self) {
        let res = self.rt.block_on(self.session.go_home());
        self.sel = 0;
        self.report(res);
    }

    fn edit_field(&mut self, f: impl FnOnce(&mut String)) {
        let focus = self.focus;
        if let Ok(ed) = self.session.editor_mut() {
            match focus {
                Focus::Name => {
                    let mut name = ed.name().to_string();
                    f(&mut name);
                    ed.set_name(name);
                }
                Focus::Cards => {
                    let mut raw = ed.raw().to_string();
                    f(&mut raw);
                    ed.set_raw(raw);
                }
            }
            self.status = None;
        }
    }

    fn edit_studier(&mut self, f: impl FnOnce(&mut String)) {
        if let Ok(form) = self.session.result_mut() {
            let mut name = form.studier().to_string();
            f(&mut name);
            form.set_studier(name);
            self.status = None;
        }
    }

    fn report(&mut self, res: Result<(), StudyError>) {
        match res {
            Ok(()) => self.status = None,
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, e: StudyError) {
        if e.is_network() {
            self.error("Could not connect to server".into());
        } else {
            self.error(e.to_string());
        }
    }

    fn info(&mut self, msg: &str) { self.status = Some(Status::Info(msg.to_string())); }
    fn error(&mut self, msg: String) { self.status = Some(Status::Error(msg)); }
}
