use crate::{Card, Deck, StudyError, MAX_DECK_NAME_LEN};

/// Parses deck text, one `front|back` card per line.
///
/// Blank lines are skipped and do not count toward the line number reported
/// in a format error; that number is the position the bad card would have
/// taken in the deck.
pub fn parse_cards(raw: &str) -> Result<Vec<Card>, StudyError> {
    let mut cards = Vec::new();
    for line in raw.split('\n') {
        if line.trim().is_empty() {
            continue;
        }
        let sides: Vec<&str> = line.split('|').collect();
        match sides.as_slice() {
            [front, back] if !front.trim().is_empty() && !back.trim().is_empty() => {
                cards.push(Card::new(front.trim(), back.trim()));
            }
            _ => {
                return Err(StudyError::Format {
                    line: cards.len() + 1,
                })
            }
        }
    }
    if cards.is_empty() {
        return Err(StudyError::EmptyDeck);
    }
    Ok(cards)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorState {
    Editing,
    PendingOverwrite,
    Saved,
}

/// What the caller should do after asking the editor to save.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveRequest {
    /// Nothing named like this exists yet; write it.
    Write(Deck),
    /// The name is taken; wait for `confirm_overwrite` or `cancel_overwrite`.
    ConfirmOverwrite,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Snapshot {
    name: String,
    raw: String,
}

/// Form state for authoring one deck.
#[derive(Clone, Debug, Default)]
pub struct Editor {
    name: String,
    raw: String,
    saved: Snapshot,
    pending: Option<Deck>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens an already stored deck; its current text counts as saved.
    pub fn open(deck: &Deck) -> Self {
        let name = truncate_name(&deck.name);
        let saved = Snapshot {
            name: name.clone(),
            raw: deck.raw.clone(),
        };
        Self {
            name,
            raw: deck.raw.clone(),
            saved,
            pending: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn set_name(&mut self, name: impl AsRef<str>) {
        self.name = truncate_name(name.as_ref());
        self.pending = None;
    }

    pub fn set_raw(&mut self, raw: impl Into<String>) {
        self.raw = raw.into();
        self.pending = None;
    }

    pub fn state(&self) -> EditorState {
        if self.pending.is_some() {
            EditorState::PendingOverwrite
        } else if self.is_saved() {
            EditorState::Saved
        } else {
            EditorState::Editing
        }
    }

    /// True when the form matches what was last written to the store.
    pub fn is_saved(&self) -> bool {
        self.name == self.saved.name && self.raw == self.saved.raw
    }

    /// Validates the form. `known` is the list of deck names already stored.
    pub fn request_save(&mut self, known: &[String]) -> Result<SaveRequest, StudyError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(StudyError::Naming);
        }
        let cards = parse_cards(&self.raw)?;
        let deck = Deck {
            name: name.to_string(),
            cards,
            raw: self.raw.clone(),
        };
        if known.iter().any(|k| k == name) {
            self.pending = Some(deck);
            Ok(SaveRequest::ConfirmOverwrite)
        } else {
            Ok(SaveRequest::Write(deck))
        }
    }

    /// The deck waiting on overwrite confirmation. It stays pending until
    /// `mark_saved` so a failed write can be confirmed again.
    pub fn confirm_overwrite(&self) -> Option<Deck> {
        self.pending.clone()
    }

    pub fn cancel_overwrite(&mut self) {
        self.pending = None;
    }

    pub fn mark_saved(&mut self) {
        self.saved = Snapshot {
            name: self.name.clone(),
            raw: self.raw.clone(),
        };
        self.pending = None;
    }

    /// Guard for moving on to study: nothing unsaved and a name present.
    pub fn check_viewable(&self) -> Result<(), StudyError> {
        if !self.is_saved() || self.name.trim().is_empty() {
            return Err(StudyError::Unsaved);
        }
        Ok(())
    }
}

fn truncate_name(name: &str) -> String {
    name.chars().take(MAX_DECK_NAME_LEN).collect()
}
