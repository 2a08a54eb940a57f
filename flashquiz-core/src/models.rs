use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_DECK_NAME_LEN: usize = 30;

/// One front/back pair. Serialized as a two-element array `[front, back]`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Card {
    pub front: String,
    pub back: String,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }

    pub fn side(&self, side: Side) -> &str {
        match side {
            Side::Front => &self.front,
            Side::Back => &self.back,
        }
    }
}

impl From<(String, String)> for Card {
    fn from((front, back): (String, String)) -> Self {
        Self { front, back }
    }
}

impl From<Card> for (String, String) {
    fn from(c: Card) -> Self {
        (c.front, c.back)
    }
}

/// What the store keeps for a deck: the parsed cards and the raw text they
/// came from. Serialized as `[cards, raw]`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "(Vec<Card>, String)", into = "(Vec<Card>, String)")]
pub struct DeckValue {
    pub cards: Vec<Card>,
    pub raw: String,
}

impl DeckValue {
    pub fn new(cards: Vec<Card>, raw: impl Into<String>) -> Self {
        Self {
            cards,
            raw: raw.into(),
        }
    }
}

impl From<(Vec<Card>, String)> for DeckValue {
    fn from((cards, raw): (Vec<Card>, String)) -> Self {
        Self { cards, raw }
    }
}

impl From<DeckValue> for (Vec<Card>, String) {
    fn from(v: DeckValue) -> Self {
        (v.cards, v.raw)
    }
}

/// A named deck as the client holds it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    pub name: String,
    pub cards: Vec<Card>,
    pub raw: String,
}

impl Deck {
    pub fn new(name: impl Into<String>, value: DeckValue) -> Self {
        Self {
            name: name.into(),
            cards: value.cards,
            raw: value.raw,
        }
    }

    pub fn value(&self) -> DeckValue {
        DeckValue::new(self.cards.clone(), self.raw.clone())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Front,
    Back,
}

impl Side {
    pub fn flip(self) -> Self {
        match self {
            Side::Front => Side::Back,
            Side::Back => Side::Front,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Front => "Front",
            Side::Back => "Back",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grade {
    Correct,
    Incorrect,
}

/// A finished study result. Only its formatted string reaches the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreRecord {
    pub studier: String,
    pub deck: String,
    pub percent: u32,
}

impl ScoreRecord {
    pub fn new(studier: impl Into<String>, deck: impl Into<String>, percent: u32) -> Self {
        Self {
            studier: studier.into(),
            deck: deck.into(),
            percent,
        }
    }
}

impl fmt::Display for ScoreRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}: {}", self.studier, self.deck, self.percent)
    }
}
