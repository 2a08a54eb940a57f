use crate::{ScoreRecord, StudyError, Tally};

/// Percentage of correct answers, rounded to the nearest integer with ties
/// away from zero. `None` when nothing was graded.
pub fn score_percent(correct: usize, incorrect: usize) -> Option<u32> {
    let total = correct + incorrect;
    if total == 0 {
        return None;
    }
    Some((correct as f64 / total as f64 * 100.0).round() as u32)
}

/// The form shown after a study pass: collects the studier's name.
#[derive(Clone, Debug)]
pub struct ResultForm {
    deck_name: String,
    tally: Tally,
    studier: String,
}

impl ResultForm {
    pub fn new(deck_name: impl Into<String>, tally: Tally) -> Self {
        Self {
            deck_name: deck_name.into(),
            tally,
            studier: String::new(),
        }
    }

    pub fn deck_name(&self) -> &str {
        &self.deck_name
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn studier(&self) -> &str {
        &self.studier
    }

    pub fn set_studier(&mut self, name: impl Into<String>) {
        self.studier = name.into();
    }

    pub fn record(&self) -> Result<ScoreRecord, StudyError> {
        let studier = self.studier.trim();
        if studier.is_empty() {
            return Err(StudyError::InvalidName);
        }
        let percent =
            score_percent(self.tally.correct, self.tally.incorrect).ok_or(StudyError::NoCards)?;
        Ok(ScoreRecord::new(studier, self.deck_name.clone(), percent))
    }
}
