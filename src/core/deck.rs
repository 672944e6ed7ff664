//! # Question Deck
//!
//! Flashcard storage: an ordered collection of questions, each with a set of
//! accepted answers. Loaded from a plain row format:
//!
//! ```text
//! What is the capital of the United States?, Washington;Washington D.C.;DC
//! ```
//!
//! Answers are normalized (trim + lowercase) on ingestion, and submitted
//! answers are normalized the same way before comparison. Malformed rows are
//! skipped with a diagnostic; a bad row never aborts the whole load.
//!
//! An optional trailing `,N` column records the fail count, so a saved deck
//! round-trips through [`Deck::save`] / [`Deck::load`].

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, warn};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Canonical answer form: whitespace-trimmed and case-folded.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// One flashcard: a prompt and its accepted answers (normalized, at least one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    answers: Vec<String>,
    fails: u32,
}

impl Question {
    /// Build a question, normalizing every answer and dropping empty ones.
    /// Returns `None` if no usable answer remains.
    pub fn new(prompt: &str, answers: &[&str]) -> Option<Self> {
        let prompt = prompt.trim();
        let answers: Vec<String> = answers
            .iter()
            .map(|a| normalize(a))
            .filter(|a| !a.is_empty())
            .collect();
        if prompt.is_empty() || answers.is_empty() {
            return None;
        }
        Some(Self {
            prompt: prompt.to_string(),
            answers,
            fails: 0,
        })
    }

    /// Whether the submitted text matches any accepted answer
    /// (after normalization).
    pub fn accepts(&self, submitted: &str) -> bool {
        self.answers.iter().any(|a| *a == normalize(submitted))
    }

    /// The first accepted answer — shown to the user as "the" correct answer.
    pub fn canonical_answer(&self) -> &str {
        &self.answers[0]
    }

    /// Times this question has been missed (maintained by the review flow,
    /// never by the arcade loop).
    pub fn fails(&self) -> u32 {
        self.fails
    }

    pub fn record_fail(&mut self) {
        self.fails += 1;
    }

    /// Parse one `prompt, a;b;c[,fails]` row. `None` means malformed.
    /// A trailing column that is not a fail count is discarded, never folded
    /// into the last answer.
    fn parse_row(line: &str) -> Option<Self> {
        let (prompt, rest) = line.split_once(',')?;

        // A trailing numeric column is the fail count from a saved deck;
        // any other trailing column is ignored.
        let (answer_list, fails) = match rest.rsplit_once(',') {
            Some((answers, tail)) => match tail.trim().parse::<u32>() {
                Ok(n) => (answers, n),
                Err(_) => (answers, 0),
            },
            None => (rest, 0),
        };

        let answers: Vec<&str> = answer_list.split(';').collect();
        let mut question = Question::new(prompt, &answers)?;
        question.fails = fails;
        Some(question)
    }

    fn to_row(&self) -> String {
        format!("{}, {},{}", self.prompt, self.answers.join(";"), self.fails)
    }
}

/// Ordered question collection. Insertion order is preserved for indexed
/// access; the empty state is ordinary (retrieval just yields `None`).
#[derive(Debug, Default)]
pub struct Deck {
    questions: Vec<Question>,
}

impl Deck {
    /// Load a deck from a row file. I/O failure is fatal; malformed rows are
    /// logged and skipped.
    pub fn load(path: &Path) -> io::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let mut deck = Deck::default();
        for (lineno, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match Question::parse_row(line) {
                Some(q) => deck.questions.push(q),
                None => warn!(
                    "{}:{}: skipping malformed row: {:?}",
                    path.display(),
                    lineno + 1,
                    line
                ),
            }
        }
        debug!(
            "loaded {} questions from {}",
            deck.questions.len(),
            path.display()
        );
        Ok(deck)
    }

    /// Write the deck back out in the same row format, fail counts included.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let mut out = String::new();
        for q in &self.questions {
            out.push_str(&q.to_row());
            out.push('\n');
        }
        fs::write(path, out)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn add(&mut self, question: Question) {
        self.questions.push(question);
    }

    /// Remove the question at `index`. Out-of-range is a no-op returning
    /// `false`.
    pub fn remove(&mut self, index: usize) -> bool {
        if index < self.questions.len() {
            self.questions.remove(index);
            true
        } else {
            false
        }
    }

    /// Uniform random pick. `None` on an empty deck — a normal steady state,
    /// not an error.
    pub fn random_question<R: Rng>(&self, rng: &mut R) -> Option<&Question> {
        self.questions.choose(rng)
    }

    /// Indexed lookup; `None` when out of range.
    pub fn question_at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn question_at_mut(&mut self, index: usize) -> Option<&mut Question> {
        self.questions.get_mut(index)
    }
}
