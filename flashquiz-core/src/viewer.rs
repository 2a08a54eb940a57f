use crate::{Card, Grade, Side, StudyError};
use rand::seq::SliceRandom;
use rand::Rng;

/// Final counts of a study pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tally {
    pub correct: usize,
    pub incorrect: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.correct + self.incorrect
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    Next,
    Finished(Tally),
}

/// One pass through a deck, a card at a time.
#[derive(Clone, Debug)]
pub struct Viewer {
    deck_name: String,
    cards: Vec<Card>,
    order: Vec<usize>,
    pos: usize,
    side: Side,
    correct: usize,
    done: Option<Tally>,
}

impl Viewer {
    pub fn new(deck_name: impl Into<String>, cards: Vec<Card>) -> Result<Self, StudyError> {
        if cards.is_empty() {
            return Err(StudyError::NoCards);
        }
        let order = (0..cards.len()).collect();
        Ok(Self {
            deck_name: deck_name.into(),
            cards,
            order,
            pos: 0,
            side: Side::Front,
            correct: 0,
            done: None,
        })
    }

    pub fn deck_name(&self) -> &str {
        &self.deck_name
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Zero-based position in the presentation order.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn current(&self) -> &Card {
        &self.cards[self.order[self.pos]]
    }

    pub fn current_text(&self) -> &str {
        self.current().side(self.side)
    }

    pub fn flip(&mut self) {
        self.side = self.side.flip();
    }

    /// Reorders the cards that have not been graded yet, the current one
    /// included. Graded cards keep their slots so nothing is repeated or
    /// skipped. The side only resets when a different card comes up.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.done.is_some() {
            return;
        }
        let shown = self.order[self.pos];
        self.order[self.pos..].shuffle(rng);
        if self.order[self.pos] != shown {
            self.side = Side::Front;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.done.is_some()
    }

    /// Grades the current card. Once the last card is graded the tally is
    /// fixed and further grades return it unchanged.
    pub fn grade(&mut self, grade: Grade) -> Progress {
        if let Some(tally) = self.done {
            return Progress::Finished(tally);
        }
        if grade == Grade::Correct {
            self.correct += 1;
        }
        if self.pos + 1 == self.order.len() {
            let tally = Tally {
                correct: self.correct,
                incorrect: self.order.len() - self.correct,
            };
            self.done = Some(tally);
            return Progress::Finished(tally);
        }
        self.pos += 1;
        self.side = Side::Front;
        Progress::Next
    }
}
