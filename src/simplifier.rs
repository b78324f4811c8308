
use crate::resolver::nearest;
use crate::similarity::Metric;
use crate::store::{EmbeddingStore, ReferenceVocabulary, Vocabulary};

use std::ops::AddAssign;
use serde::Serialize;
use tracing::{debug, warn};

/// How a single token is treated during simplification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lexeme {
    /// already a reference word, kept as is
    Reference,
    /// has a vector but is not a reference word, replaced by its nearest neighbor
    Resolvable,
    /// no vector at all, passed through
    Unknown,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub words_simplified: usize,
    pub words_in_reference_vocabulary: usize,
    pub words_not_in_vocabulary: usize,
}

impl AddAssign for Stats {
    fn add_assign(&mut self, other: Self) {
        self.words_simplified += other.words_simplified;
        self.words_in_reference_vocabulary += other.words_in_reference_vocabulary;
        self.words_not_in_vocabulary += other.words_not_in_vocabulary;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Simplification {
    pub lines: Vec<String>,
    pub stats: Stats,
}


pub struct Simplifier<'a> {
    vocabulary: &'a Vocabulary,
    reference: &'a ReferenceVocabulary,
    metric: Metric,
}

impl<'a> Simplifier<'a> {

    pub fn new(vocabulary: &'a Vocabulary, reference: &'a ReferenceVocabulary, metric: Metric) -> Self {
        Self { vocabulary, reference, metric }
    }

    pub fn from_store(store: &'a EmbeddingStore, metric: Metric) -> Self {
        Self::new(store.full_vocabulary(), store.reference_vocabulary(), metric)
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn classify(&self, token: &str) -> Lexeme {
        if self.reference.contains(token) {
            Lexeme::Reference
        } else if self.vocabulary.contains_key(token) {
            Lexeme::Resolvable
        } else {
            Lexeme::Unknown
        }
    }

    /// Simplifies one line, returning it with the counts for that line alone.
    pub fn simplify_line(&self, line: &str) -> (String, Stats) {

        let mut stats = Stats::default();
        let mut simplified: Vec<&str> = Vec::new();

        for token in Self::tokenize(line) {
            match self.classify(token) {
                Lexeme::Reference => {
                    stats.words_in_reference_vocabulary += 1;
                    simplified.push(token);
                },
                Lexeme::Resolvable => {
                    stats.words_simplified += 1;
                    let neighbor = self.vocabulary
                        .get(token)
                        .and_then(|vector| nearest(vector.view(), self.reference, self.metric));
                    match neighbor {
                        Some(neighbor) => {
                            debug!("{} -> {} ({} = {})", token, neighbor.word, self.metric, neighbor.score);
                            simplified.push(neighbor.word);
                        },
                        None => {
                            warn!("no reference words loaded, keeping '{}'", token);
                            simplified.push(token);
                        }
                    }
                },
                Lexeme::Unknown => {
                    stats.words_not_in_vocabulary += 1;
                    simplified.push(token);
                }
            }
        }

        (simplified.join(" "), stats)
    }

    /// Simplifies every line. The returned counts cover this call only.
    pub fn simplify(&self, lines: &[String]) -> Simplification {

        let mut stats = Stats::default();
        let lines = lines
            .iter()
            .map(|line| {
                let (simplified, line_stats) = self.simplify_line(line);
                stats += line_stats;
                simplified
            })
            .collect();

        Simplification { lines, stats }
    }

}


// defines the behavior needed for tokenizing a line of text
trait Tokenizer {
    fn tokenize(sequence: &str) -> Vec<&str>;
}

impl Tokenizer for Simplifier<'_> {
    // split on any run of whitespace, never yields empty tokens
    fn tokenize(sequence: &str) -> Vec<&str> {
        sequence.split_whitespace().collect()
    }
}
