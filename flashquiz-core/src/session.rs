//! Client-side controller cycling through the four study views.
//!
//! Every user action is one method call. Calls that talk to the backend are
//! async; when the backend fails the error is logged and returned and the
//! session stays where it was.

use crate::{
    CoreError, Deck, DeckApi, Editor, Grade, Progress, ResultForm, SaveReceipt, SaveRequest,
    ScoreRecord, StudyError, Viewer,
};
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Clone, Debug)]
pub enum View {
    Home,
    Editor(Editor),
    Viewer(Viewer),
    Result(ResultForm),
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Editor(_) => "editor",
            View::Viewer(_) => "viewer",
            View::Result(_) => "result",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveStatus {
    Saved(SaveReceipt),
    NeedsConfirmation,
}

pub struct Session {
    api: Arc<dyn DeckApi>,
    view: View,
    decks: Vec<String>,
    scores: Vec<String>,
    active: Option<Deck>,
}

impl Session {
    pub fn new(api: Arc<dyn DeckApi>) -> Self {
        Self {
            api,
            view: View::Home,
            decks: Vec::new(),
            scores: Vec::new(),
            active: None,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Deck names as last fetched from the backend.
    pub fn decks(&self) -> &[String] {
        &self.decks
    }

    pub fn scores(&self) -> &[String] {
        &self.scores
    }

    /// The deck last loaded or saved; this is what gets studied.
    pub fn active(&self) -> Option<&Deck> {
        self.active.as_ref()
    }

    pub fn editor_mut(&mut self) -> Result<&mut Editor, StudyError> {
        match &mut self.view {
            View::Editor(ed) => Ok(ed),
            other => Err(StudyError::WrongView(other.name())),
        }
    }

    pub fn viewer_mut(&mut self) -> Result<&mut Viewer, StudyError> {
        match &mut self.view {
            View::Viewer(v) => Ok(v),
            other => Err(StudyError::WrongView(other.name())),
        }
    }

    pub fn result_mut(&mut self) -> Result<&mut ResultForm, StudyError> {
        match &mut self.view {
            View::Result(r) => Ok(r),
            other => Err(StudyError::WrongView(other.name())),
        }
    }

    /// Re-fetches the deck and score lists. Each list is only replaced when
    /// its own request succeeds.
    pub async fn refresh(&mut self) -> Result<(), StudyError> {
        let decks = logged("list decks", self.api.list_decks().await);
        if let Ok(d) = &decks {
            self.decks = d.clone();
        }
        let scores = logged("list scores", self.api.list_scores().await);
        if let Ok(s) = &scores {
            self.scores = s.clone();
        }
        decks?;
        scores?;
        Ok(())
    }

    pub fn new_deck(&mut self) -> Result<(), StudyError> {
        self.require_home()?;
        self.active = None;
        self.view = View::Editor(Editor::new());
        Ok(())
    }

    pub async fn open_deck(&mut self, name: &str) -> Result<(), StudyError> {
        self.require_home()?;
        let value = logged("load deck", self.api.load_deck(name).await)?;
        let deck = Deck::new(name, value);
        debug!(deck = name, cards = deck.cards.len(), "opened deck");
        self.view = View::Editor(Editor::open(&deck));
        self.active = Some(deck);
        Ok(())
    }

    /// Returns to the home view from anywhere, then refreshes the lists.
    /// The view changes even if the refresh fails.
    pub async fn go_home(&mut self) -> Result<(), StudyError> {
        self.view = View::Home;
        self.active = None;
        self.refresh().await
    }

    pub async fn save(&mut self) -> Result<SaveStatus, StudyError> {
        let known = self.decks.clone();
        match self.editor_mut()?.request_save(&known)? {
            SaveRequest::Write(deck) => Ok(SaveStatus::Saved(self.write_deck(deck).await?)),
            SaveRequest::ConfirmOverwrite => Ok(SaveStatus::NeedsConfirmation),
        }
    }

    /// Writes the deck waiting on overwrite confirmation. `None` when there
    /// was nothing to confirm.
    pub async fn confirm_overwrite(&mut self) -> Result<Option<SaveReceipt>, StudyError> {
        let Some(deck) = self.editor_mut()?.confirm_overwrite() else {
            return Ok(None);
        };
        self.write_deck(deck).await.map(Some)
    }

    pub fn cancel_overwrite(&mut self) -> Result<(), StudyError> {
        self.editor_mut()?.cancel_overwrite();
        Ok(())
    }

    async fn write_deck(&mut self, deck: Deck) -> Result<SaveReceipt, StudyError> {
        let receipt = logged("save deck", self.api.save_deck(&deck.name, deck.value()).await)?;
        self.editor_mut()?.mark_saved();
        if !self.decks.contains(&deck.name) {
            self.decks.push(deck.name.clone());
        }
        self.active = Some(deck);
        if let Ok(decks) = logged("list decks", self.api.list_decks().await) {
            self.decks = decks;
        }
        Ok(receipt)
    }

    pub fn start_study(&mut self) -> Result<(), StudyError> {
        self.editor_mut()?.check_viewable()?;
        let deck = self.active.as_ref().ok_or(StudyError::Unsaved)?;
        let viewer = Viewer::new(deck.name.clone(), deck.cards.clone())?;
        self.view = View::Viewer(viewer);
        Ok(())
    }

    pub fn flip(&mut self) -> Result<(), StudyError> {
        self.viewer_mut()?.flip();
        Ok(())
    }

    pub fn shuffle(&mut self) -> Result<(), StudyError> {
        self.shuffle_with(&mut rand::thread_rng())
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), StudyError> {
        self.viewer_mut()?.shuffle(rng);
        Ok(())
    }

    pub fn grade(&mut self, grade: Grade) -> Result<Progress, StudyError> {
        let viewer = self.viewer_mut()?;
        let progress = viewer.grade(grade);
        if let Progress::Finished(tally) = progress {
            let form = ResultForm::new(viewer.deck_name(), tally);
            debug!(deck = form.deck_name(), correct = tally.correct, "study pass finished");
            self.view = View::Result(form);
        }
        Ok(progress)
    }

    /// Stores the score and goes home.
    pub async fn submit_score(&mut self) -> Result<ScoreRecord, StudyError> {
        let record = self.result_mut()?.record()?;
        logged("save score", self.api.save_score(&record.to_string()).await)?;
        // the score is stored; a failed refresh only leaves stale lists
        let _ = self.go_home().await;
        Ok(record)
    }

    fn require_home(&self) -> Result<(), StudyError> {
        match self.view {
            View::Home => Ok(()),
            ref other => Err(StudyError::WrongView(other.name())),
        }
    }
}

fn logged<T>(op: &'static str, res: Result<T, CoreError>) -> Result<T, StudyError> {
    res.map_err(|e| {
        warn!(op, error = %e, "request failed");
        StudyError::from(e)
    })
}
