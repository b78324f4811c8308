
// imports
use crate::config::files_handling;
use crate::error::{Result, SimplifierError};

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use dashmap::DashMap;
use ndarray::{Array1, Array2, ArrayView1, Axis};
use rayon::{prelude::*, ThreadPoolBuilder};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Embedding length of the reference GloVe datasets.
pub const VECTOR_DIM: usize = 50;

/// The full vocabulary, frozen once ingestion has finished.
pub type Vocabulary = HashMap<String, Array1<f32>>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub lines_processed: usize,
    pub vocabulary_size: usize,
    pub duplicates: usize,
    pub malformed_lines: usize,
}


/// The words eligible as replacements, with their vectors.
///
/// Rows keep the order in which words first appeared in the word list, so a
/// scan over `iter` is deterministic and ties always resolve the same way.
#[derive(Clone, Debug)]
pub struct ReferenceVocabulary {
    words: Vec<String>,
    w: Array2<f32>,
    w2i: HashMap<String, usize>,
}

impl ReferenceVocabulary {

    pub fn empty(vector_dim: usize) -> Self {
        Self {
            words: Vec::new(),
            w: Array2::zeros((0, vector_dim)),
            w2i: HashMap::new(),
        }
    }

    fn build(vocabulary: &Vocabulary, candidates: &[String], vector_dim: usize) -> Self {

        // keep candidates that have a vector, first occurrence wins the position
        let mut words: Vec<String> = Vec::new();
        let mut w2i: HashMap<String, usize> = HashMap::new();
        for word in candidates {
            if vocabulary.contains_key(word) && !w2i.contains_key(word) {
                w2i.insert(word.to_owned(), words.len());
                words.push(word.to_owned());
            }
        }

        let mut w: Array2<f32> = Array2::zeros((words.len(), vector_dim));
        for (mut row, word) in w.axis_iter_mut(Axis(0)).zip(&words) {
            if let Some(vector) = vocabulary.get(word) {
                row.assign(vector);
            }
        }

        Self { words, w, w2i }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.w2i.contains_key(word)
    }

    pub fn get(&self, word: &str) -> Option<ArrayView1<f32>> {
        self.w2i.get(word).map(|i| self.w.row(*i))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterates (word, vector) pairs in word-list order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ArrayView1<f32>)> + '_ {
        self.words.iter().map(String::as_str).zip(self.w.axis_iter(Axis(0)))
    }

}


pub struct EmbeddingStore {
    vector_dim: usize,
    num_threads: usize,
    vocabulary: Vocabulary,
    reference: ReferenceVocabulary,
    reference_words: Vec<String>,
}

impl Default for EmbeddingStore {
    fn default() -> Self {
        Self::new(VECTOR_DIM, 0)
    }
}

impl EmbeddingStore {

    /// `num_threads` of 0 lets rayon pick the pool size.
    pub fn new(vector_dim: usize, num_threads: usize) -> Self {
        Self {
            vector_dim,
            num_threads,
            vocabulary: HashMap::new(),
            reference: ReferenceVocabulary::empty(vector_dim),
            reference_words: Vec::new(),
        }
    }

    pub fn vector_dim(&self) -> usize {
        self.vector_dim
    }

    pub fn full_vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn reference_vocabulary(&self) -> &ReferenceVocabulary {
        &self.reference
    }

    fn parse_record(line: &str, vector_dim: usize) -> Result<(String, Array1<f32>)> {

        // a record is `word,f1,...,fN`, anything else is rejected as a whole
        let malformed = |reason: String| SimplifierError::MalformedRecord { line: line.to_string(), reason };

        let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
        if fields.len() != vector_dim + 1 {
            return Err(malformed(format!("expected {} fields, found {}", vector_dim + 1, fields.len())));
        }

        let word = fields[0];
        if word.is_empty() {
            return Err(malformed("empty word".to_string()));
        }

        let vector = fields[1..]
            .iter()
            .map(|field| field.parse::<f32>().map_err(|e| malformed(format!("component '{}': {}", field, e))))
            .collect::<Result<Vec<f32>>>()?;

        Ok((word.to_string(), Array1::from(vector)))
    }

    /// Parses every line concurrently into a fresh vocabulary which then replaces
    /// the current one. Malformed lines are skipped and counted, blank lines ignored.
    /// Blocks until all lines are done.
    pub fn ingest(&mut self, lines: &[String]) -> Result<IngestReport> {

        let vector_dim = self.vector_dim;
        let pool = ThreadPoolBuilder::new().num_threads(self.num_threads).build()?;
        debug!("ingesting {} lines on {} threads", lines.len(), pool.current_num_threads());

        let entries: DashMap<String, Array1<f32>> = DashMap::new();
        let lines_processed = AtomicUsize::new(0);
        let duplicates = AtomicUsize::new(0);
        let malformed_lines = AtomicUsize::new(0);

        // install returns once every line task has completed
        pool.install(|| {
            lines.par_iter().for_each(|line| {

                if line.trim().is_empty() {
                    return;
                }
                lines_processed.fetch_add(1, Ordering::Relaxed);

                match Self::parse_record(line, vector_dim) {
                    Ok((word, vector)) => {
                        if entries.insert(word, vector).is_some() {
                            duplicates.fetch_add(1, Ordering::Relaxed);
                        }
                    },
                    Err(e) => {
                        warn!("{}", e);
                        malformed_lines.fetch_add(1, Ordering::Relaxed);
                    }
                }
            });
        });

        self.vocabulary = entries.into_iter().collect();

        let report = IngestReport {
            lines_processed: lines_processed.into_inner(),
            vocabulary_size: self.vocabulary.len(),
            duplicates: duplicates.into_inner(),
            malformed_lines: malformed_lines.into_inner(),
        };
        info!(
            "processed {} lines, vocabulary size: {}, duplicates: {}, malformed: {}",
            report.lines_processed, report.vocabulary_size, report.duplicates, report.malformed_lines
        );

        // the old reference rows belong to the previous dataset
        self.reference = ReferenceVocabulary::build(&self.vocabulary, &self.reference_words, vector_dim);
        if !self.reference_words.is_empty() {
            info!("rebuilt reference vocabulary, {} words", self.reference.len());
        }

        Ok(report)
    }

    pub fn ingest_file<P: AsRef<Path>>(&mut self, path: P) -> Result<IngestReport> {
        let lines = files_handling::read_lines(path)?;
        self.ingest(&lines)
    }

    /// Intersects `words` with the full vocabulary, returns the size of the result.
    pub fn build_reference_vocabulary(&mut self, words: &[String]) -> usize {

        self.reference_words = words
            .iter()
            .map(|word| word.trim())
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect();

        self.reference = ReferenceVocabulary::build(&self.vocabulary, &self.reference_words, self.vector_dim);
        info!("loaded {} reference words out of {} listed", self.reference.len(), self.reference_words.len());

        self.reference.len()
    }

    pub fn load_reference_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let words = files_handling::read_lines(path)?;
        Ok(self.build_reference_vocabulary(&words))
    }

}
