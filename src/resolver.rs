
use crate::error::{Result, SimplifierError};
use crate::similarity::Metric;
use crate::store::{ReferenceVocabulary, Vocabulary};
use ndarray::ArrayView1;

#[derive(Clone, Debug, PartialEq)]
pub struct Neighbor<'a> {
    pub word: &'a str,
    pub score: f64,
}

/// Exhaustive scan of `reference` for the best scoring word against `query`.
///
/// Candidates are visited in reference order and only a strictly greater score
/// replaces the current best, so the first of several equal scores wins. A NaN
/// score never wins; if every candidate is NaN the first one is returned.
/// `None` means the reference vocabulary is empty.
pub fn nearest<'a>(query: ArrayView1<f32>, reference: &'a ReferenceVocabulary, metric: Metric) -> Option<Neighbor<'a>> {

    let mut first: Option<Neighbor<'a>> = None;
    let mut best: Option<Neighbor<'a>> = None;

    for (word, candidate) in reference.iter() {

        let score = metric.score(query, candidate);
        if first.is_none() {
            first = Some(Neighbor { word, score });
        }
        if score.is_nan() {
            continue;
        }

        let better = match &best {
            Some(current) => score > current.score,
            None => true
        };
        if better {
            best = Some(Neighbor { word, score });
        }
    }

    best.or(first)
}

/// Replacement word for `word`, which must have a vector in `vocabulary`.
pub fn resolve<'a>(word: &str,
    vocabulary: &Vocabulary,
    reference: &'a ReferenceVocabulary,
    metric: Metric) -> Result<Option<&'a str>> {

        let query = vocabulary
            .get(word)
            .ok_or_else(|| SimplifierError::NotInVocabulary(word.to_string()))?;

        Ok(nearest(query.view(), reference, metric).map(|neighbor| neighbor.word))
}
