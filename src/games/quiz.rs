//! Quiz Mini-Game
//!
//! "Guess the letter / number / person". A question is drawn at random from
//! the pool and announced; a wrong answer announces the target and keeps the
//! same question pending, a right answer congratulates and moves straight on
//! to a new one. The game never ends.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::sync::Arc;

use crate::audio::{Speaker, SpeechOptions};
use crate::domain::{alphabet_cards, number_cards, Card};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizKind {
    Letters,
    Numbers,
    People,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    Idle,
    QuestionPosed,
    /// Last answer was wrong; the same question is still pending
    Retrying,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u64,
    pub target: Card,
}

pub struct QuizGame {
    kind: QuizKind,
    pool: Vec<Card>,
    child_name: String,
    speaker: Arc<dyn Speaker>,
    options: SpeechOptions,
    rng: StdRng,
    pending: Option<Question>,
    next_id: u64,
    last_verdict: Option<Verdict>,
}

impl QuizGame {
    fn new(kind: QuizKind, pool: Vec<Card>, speaker: Arc<dyn Speaker>, options: SpeechOptions) -> Self {
        Self {
            kind,
            pool,
            child_name: String::new(),
            speaker,
            options,
            rng: StdRng::from_entropy(),
            pending: None,
            next_id: 1,
            last_verdict: None,
        }
    }

    /// Letters A–Z
    pub fn letters(speaker: Arc<dyn Speaker>, options: SpeechOptions) -> Self {
        Self::new(QuizKind::Letters, alphabet_cards(), speaker, options)
    }

    /// Numbers 1–20
    pub fn numbers(speaker: Arc<dyn Speaker>, options: SpeechOptions) -> Self {
        Self::new(QuizKind::Numbers, number_cards(), speaker, options)
    }

    /// The people collection, addressed to `child_name`
    pub fn people(
        people: Vec<Card>,
        child_name: impl Into<String>,
        speaker: Arc<dyn Speaker>,
        options: SpeechOptions,
    ) -> Self {
        let mut game = Self::new(QuizKind::People, people, speaker, options);
        game.child_name = child_name.into();
        game
    }

    /// Deterministic draws
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn kind(&self) -> QuizKind {
        self.kind
    }

    pub fn pool(&self) -> &[Card] {
        &self.pool
    }

    pub fn question(&self) -> Option<&Question> {
        self.pending.as_ref()
    }

    pub fn last_verdict(&self) -> Option<Verdict> {
        self.last_verdict
    }

    pub fn phase(&self) -> QuizPhase {
        match (&self.pending, self.last_verdict) {
            (None, _) => QuizPhase::Idle,
            (Some(_), Some(Verdict::Incorrect)) => QuizPhase::Retrying,
            (Some(_), _) => QuizPhase::QuestionPosed,
        }
    }

    /// Pose the first question; no-op with an empty pool
    pub fn start(&mut self) -> Option<&Question> {
        if self.pending.is_none() {
            self.pose();
        }
        self.pending.as_ref()
    }

    /// Judge an answer against the pending question
    ///
    /// Returns `None` when nothing is pending.
    pub fn answer(&mut self, label: &str) -> Option<Verdict> {
        let target = self.pending.as_ref()?.target.label.clone();

        let verdict = if label == target {
            self.say(&self.success_line(label));
            self.pending = None;
            self.last_verdict = Some(Verdict::Correct);
            self.pose();
            Verdict::Correct
        } else {
            self.say(&self.retry_line(label, &target));
            self.last_verdict = Some(Verdict::Incorrect);
            Verdict::Incorrect
        };
        Some(verdict)
    }

    fn pose(&mut self) {
        if self.pool.is_empty() {
            log::warn!("Quiz pool is empty, nothing to ask");
            return;
        }
        let target = self.pool[self.rng.gen_range(0..self.pool.len())].clone();
        let question = Question {
            id: self.next_id,
            target,
        };
        self.next_id += 1;
        self.say(&self.prompt_line(&question.target.label));
        self.pending = Some(question);
    }

    fn say(&self, text: &str) {
        self.speaker.speak(text, &self.options);
    }

    fn child(&self) -> &str {
        let name = self.child_name.trim();
        if name.is_empty() {
            crate::domain::DEFAULT_CHILD_NAME
        } else {
            name
        }
    }

    fn prompt_line(&self, target: &str) -> String {
        match self.kind {
            QuizKind::Letters => format!("Can you guess the letter {}", target),
            QuizKind::Numbers => format!("Can you guess the number {}", target),
            QuizKind::People if target.to_lowercase() == self.child().to_lowercase() => {
                format!("Can you find yourself, {}?", self.child())
            }
            QuizKind::People => format!("Can you find {}, {}?", target, self.child()),
        }
    }

    fn success_line(&self, answer: &str) -> String {
        match self.kind {
            QuizKind::Letters => format!("Well done! You guessed the letter {} correctly!", answer),
            QuizKind::Numbers => format!("Well done! You guessed the number {} correctly!", answer),
            QuizKind::People => format!("Well done! You found {}, {}!", answer, self.child()),
        }
    }

    fn retry_line(&self, answer: &str, target: &str) -> String {
        match self.kind {
            QuizKind::Letters => format!("Oops! The correct letter was {}. Let's try again!", target),
            QuizKind::Numbers => format!("Oops! The correct number was {}. Let's try again!", target),
            QuizKind::People => format!("Oops! That was {}. Try again. Can you find {}?", answer, target),
        }
    }
}
