use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("not found: {0}")]
    NotFound(&'static str),
    #[error("{0}")]
    Validation(&'static str),
    #[error("storage error: {0}")]
    Storage(&'static str),
    #[error("network error: {0}")]
    Network(String),
}

/// Client-side failures raised while authoring or studying a deck.
///
/// The `Display` text is what a front-end shows inline next to the form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StudyError {
    #[error("Error: Deck not named")]
    Naming,
    #[error("Error: Enter at least 1 card")]
    EmptyDeck,
    #[error("Error: Cards not in correct format, check line {line}.")]
    Format { line: usize },
    #[error("Save your cards first!")]
    Unsaved,
    #[error("Invalid Name")]
    InvalidName,
    #[error("deck has no cards to study")]
    NoCards,
    #[error("not available from the {0} view")]
    WrongView(&'static str),
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StudyError {
    pub fn is_network(&self) -> bool {
        matches!(self, StudyError::Core(CoreError::Network(_)))
    }
}
