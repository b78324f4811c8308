
use std::fmt::Display;
use std::str::FromStr;
use ndarray::ArrayView1;
use serde::Serialize;
use crate::error::SimplifierError;

// vector math, every routine accumulates in f64 and never mutates its inputs.
// callers guarantee equal lengths, a mismatch is a programming error.

pub fn dot_product(a: ArrayView1<f32>, b: ArrayView1<f32>) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "vector length mismatch");
    a.iter().zip(b.iter()).map(|(x, y)| *x as f64 * *y as f64).sum()
}

pub fn cosine(a: ArrayView1<f32>, b: ArrayView1<f32>) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "vector length mismatch");

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        norm_a += x.powi(2);
        norm_b += y.powi(2);
    }

    // a zero vector gives 0 / 0, NaN is returned as is
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

pub fn euclidean(a: ArrayView1<f32>, b: ArrayView1<f32>) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "vector length mismatch");
    let sum: f64 = a.iter().zip(b.iter()).map(|(x, y)| (*x as f64 - *y as f64).powi(2)).sum();
    -sum.sqrt()
}

pub fn manhattan(a: ArrayView1<f32>, b: ArrayView1<f32>) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "vector length mismatch");
    let sum: f64 = a.iter().zip(b.iter()).map(|(x, y)| (*x as f64 - *y as f64).abs()).sum();
    -sum
}


/// The similarity measure used to pick a replacement word.
///
/// Every variant is oriented so that a larger score means "more similar",
/// the distances are negated for that reason.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Metric {
    #[default]
    Cosine,
    DotProduct,
    Euclidean,
    Manhattan,
}

impl Metric {

    pub const ALL: [Metric; 4] = [Metric::Cosine, Metric::DotProduct, Metric::Euclidean, Metric::Manhattan];

    pub fn score(&self, a: ArrayView1<f32>, b: ArrayView1<f32>) -> f64 {
        match self {
            Metric::Cosine => cosine(a, b),
            Metric::DotProduct => dot_product(a, b),
            Metric::Euclidean => euclidean(a, b),
            Metric::Manhattan => manhattan(a, b),
        }
    }

    /// Human readable name, used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Cosine => "Cosine Similarity",
            Metric::DotProduct => "Dot Product Similarity",
            Metric::Euclidean => "Euclidean Distance",
            Metric::Manhattan => "Manhattan Distance",
        }
    }

}

impl Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Metric {
    type Err = SimplifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cosine" => Ok(Metric::Cosine),
            "dot_product" | "dotproduct" | "dot" => Ok(Metric::DotProduct),
            "euclidean" => Ok(Metric::Euclidean),
            "manhattan" => Ok(Metric::Manhattan),
            other => Err(SimplifierError::Config(format!("unrecognized similarity metric {}", other))),
        }
    }
}


#[cfg(test)]
mod tests {

    use ndarray::{array, Array1};
    use approx::assert_relative_eq;
    use super::*;

    fn pair() -> (Array1<f32>, Array1<f32>) {
        (array![0.5, -1.25, 3.0, 0.0], array![2.0, 0.75, -1.5, 4.0])
    }

    #[test]
    fn symmetric_metrics_test() {
        let (a, b) = pair();
        assert_eq!(cosine(a.view(), b.view()), cosine(b.view(), a.view()));
        assert_eq!(dot_product(a.view(), b.view()), dot_product(b.view(), a.view()));
        assert_eq!(euclidean(a.view(), b.view()), euclidean(b.view(), a.view()));
        assert_eq!(manhattan(a.view(), b.view()), manhattan(b.view(), a.view()));
    }

    #[test]
    fn self_distance_is_zero_test() {
        let (a, _) = pair();
        assert_eq!(euclidean(a.view(), a.view()), 0.0);
        assert_eq!(manhattan(a.view(), a.view()), 0.0);
        assert_relative_eq!(cosine(a.view(), a.view()), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn known_values_test() {
        // values computed by hand
        let a = array![1.0f32, 2.0, 2.0];
        let b = array![3.0f32, 0.0, 4.0];
        assert_relative_eq!(dot_product(a.view(), b.view()), 11.0);
        assert_relative_eq!(cosine(a.view(), b.view()), 11.0 / 15.0, epsilon = 1e-12);
        assert_relative_eq!(euclidean(a.view(), b.view()), -(4.0f64 + 4.0 + 4.0).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(manhattan(a.view(), b.view()), -6.0);
    }

    #[test]
    fn higher_is_better_test() {
        // for every metric, the closer vector must score above the farther one
        let query = array![1.0f32, 0.1];
        let near = array![0.9f32, 0.1];
        let far = array![-1.0f32, 0.5];
        for metric in Metric::ALL {
            assert!(metric.score(query.view(), near.view()) > metric.score(query.view(), far.view()), "{}", metric);
        }
    }

    #[test]
    fn zero_vector_cosine_is_nan_test() {
        let zero = array![0.0f32, 0.0];
        let other = array![1.0f32, 0.0];
        assert!(Metric::Cosine.score(zero.view(), other.view()).is_nan());
        assert_eq!(Metric::DotProduct.score(zero.view(), other.view()), 0.0);
    }

    #[test]
    fn parse_and_label_test() {
        assert_eq!("Cosine".parse::<Metric>().unwrap(), Metric::Cosine);
        assert_eq!("dot_product".parse::<Metric>().unwrap(), Metric::DotProduct);
        assert_eq!(" euclidean ".parse::<Metric>().unwrap(), Metric::Euclidean);
        assert_eq!("MANHATTAN".parse::<Metric>().unwrap(), Metric::Manhattan);
        assert!("jaccard".parse::<Metric>().is_err());
        assert_eq!(Metric::Euclidean.to_string(), "Euclidean Distance");
        assert_eq!(Metric::default(), Metric::Cosine);
    }

}
