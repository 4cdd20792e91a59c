//! Round bookkeeping for the host
//!
//! Tracks the secret word, guessed letters and wrong-guess count, and tells the
//! host which gallows state to show next. Failure stages `1..=max_stage` are each
//! shown once; the miss after the last stage loses the round.

/// What a guess did to the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Letter already guessed, or the round is over; nothing changes
    Ignored,
    /// Letter is in the word, word not complete yet
    Hit,
    /// Letter is not in the word; show this failure stage
    Miss(u32),
    Won,
    Lost,
}

#[derive(Debug, Clone)]
pub struct Round {
    secret: String,
    guessed: Vec<char>,
    wrong: u32,
    max_stage: u32,
    finished: bool,
}

impl Round {
    pub fn new(secret: impl Into<String>, max_stage: u32) -> Self {
        Self {
            secret: secret.into(),
            guessed: Vec::new(),
            wrong: 0,
            max_stage,
            finished: false,
        }
    }

    /// Apply one guessed letter
    pub fn guess(&mut self, letter: char) -> Outcome {
        if self.finished || self.guessed.contains(&letter) {
            return Outcome::Ignored;
        }
        self.guessed.push(letter);

        if self.secret.contains(letter) {
            if self.secret.chars().all(|c| self.guessed.contains(&c)) {
                self.finished = true;
                return Outcome::Won;
            }
            return Outcome::Hit;
        }

        self.wrong += 1;
        if self.wrong > self.max_stage {
            self.finished = true;
            Outcome::Lost
        } else {
            Outcome::Miss(self.wrong)
        }
    }

    /// The secret word with unguessed letters hidden, letters space-separated
    pub fn masked(&self) -> String {
        self.secret
            .chars()
            .map(|c| if self.guessed.contains(&c) { c } else { '_' })
            .flat_map(|c| [c, ' '])
            .collect()
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn wrong(&self) -> u32 {
        self.wrong
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
