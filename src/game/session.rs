//! Guess-processing state machine for one game.
//!
//! A `Session` is created per game and replaced wholesale on restart. Once it
//! reaches [`GameState::Won`] or [`GameState::Lost`] every further guess is
//! discarded before it can touch the guessed-set or the miss counter.

use std::collections::BTreeSet;

use super::gallows::{BodyPart, MAX_INCORRECT};
use super::keyboard::{self, KeyMark};
use crate::options::RevealCase;
use crate::phrases::Selection;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::Playing)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameState::Playing => "playing",
            GameState::Won => "won",
            GameState::Lost => "lost",
        }
    }
}

/// Result of feeding one character to [`Session::guess`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Game already over, or the character has no key.
    Ignored,
    /// Key was guessed earlier in this session.
    Repeated { key: char },
    Hit { key: char, won: bool },
    Miss { key: char, part: BodyPart, lost: bool },
}

#[derive(Clone, Debug)]
pub struct Session {
    category: String,
    phrase: String,
    /// Uppercased non-whitespace characters that must be guessed to win.
    required: BTreeSet<char>,
    guessed: BTreeSet<char>,
    incorrect: u8,
    state: GameState,
}

impl Session {
    /// Start a game on `selection`.
    ///
    /// Winnability is only guaranteed for selections drawn from a
    /// [`Catalog`](crate::Catalog), which rejects blank phrases and characters
    /// without a key. Any other phrase is accepted as is: a character with no
    /// key can never be revealed, so such a session can only end in a loss.
    pub fn new(selection: Selection) -> Self {
        let required = selection
            .phrase
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        Self {
            category: selection.category,
            phrase: selection.phrase,
            required,
            guessed: BTreeSet::new(),
            incorrect: 0,
            state: GameState::Playing,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn incorrect(&self) -> u8 {
        self.incorrect
    }

    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    pub fn guess(&mut self, c: char) -> GuessOutcome {
        if self.state.is_terminal() {
            return GuessOutcome::Ignored;
        }
        let Some(key) = keyboard::normalize(c) else {
            return GuessOutcome::Ignored;
        };
        if !self.guessed.insert(key) {
            return GuessOutcome::Repeated { key };
        }

        if self.required.contains(&key) {
            let won = self.required.is_subset(&self.guessed);
            if won {
                self.state = GameState::Won;
            }
            GuessOutcome::Hit { key, won }
        } else {
            self.incorrect += 1;
            let lost = self.incorrect >= MAX_INCORRECT;
            if lost {
                self.state = GameState::Lost;
            }
            // `incorrect` is in 1..=MAX_INCORRECT here, which always names a part.
            let part = BodyPart::for_miss(self.incorrect).unwrap_or(BodyPart::RightLeg);
            GuessOutcome::Miss { key, part, lost }
        }
    }

    pub fn is_revealed(&self, c: char) -> bool {
        self.guessed.contains(&c.to_ascii_uppercase())
    }

    /// Word groups of letter slots; `None` for a slot not yet guessed.
    pub fn words(&self, case: RevealCase) -> Vec<Vec<Option<char>>> {
        self.phrase
            .split_whitespace()
            .map(|word| {
                word.chars()
                    .map(|c| self.is_revealed(c).then(|| case.apply(c)))
                    .collect()
            })
            .collect()
    }

    /// Compact text form of the board, e.g. `C_T BA_`.
    pub fn masked(&self, case: RevealCase) -> String {
        self.words(case)
            .iter()
            .map(|word| word.iter().map(|slot| slot.unwrap_or('_')).collect::<String>())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn mark(&self, key: char) -> KeyMark {
        let key = key.to_ascii_uppercase();
        if !self.guessed.contains(&key) {
            KeyMark::Available
        } else if self.required.contains(&key) {
            KeyMark::Correct
        } else {
            KeyMark::Wrong
        }
    }

    /// Message for the status surface; `None` while playing.
    pub fn outcome_message(&self) -> Option<String> {
        match self.state {
            GameState::Playing => None,
            GameState::Won => Some("Congratulations! You won!".to_string()),
            GameState::Lost => Some(format!(
                "Game Over! The phrase was: {}",
                self.phrase.to_uppercase()
            )),
        }
    }
}
