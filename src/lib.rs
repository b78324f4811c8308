
mod error;
mod config;
mod similarity;
mod store;
mod resolver;
mod simplifier;
mod report;
mod pipeline;

pub use error::{Result, SimplifierError};
pub use config::{files_handling, Config, OutputFormat, Params};
pub use similarity::{cosine, dot_product, euclidean, manhattan, Metric};
pub use store::{EmbeddingStore, IngestReport, ReferenceVocabulary, Vocabulary, VECTOR_DIM};
pub use resolver::{nearest, resolve, Neighbor};
pub use simplifier::{Lexeme, Simplification, Simplifier, Stats};
pub use report::Report;
pub use pipeline::Pipeline;
