
// imports
use crate::config::{files_handling, Params};
use crate::error::Result;
use crate::report::Report;
use crate::simplifier::Simplifier;
use crate::store::EmbeddingStore;

use std::time::Instant;
use tracing::info;

pub struct Pipeline {}

impl Pipeline {

    // runs the main procedure of 2 steps, given the configured parameters -
    // -> embeddings and reference words loading
    // -> simplification and report

    pub fn run(params: &Params) -> Result<Report> {

        let timer = Instant::now();
        info!("loading embeddings from {}...", params.embeddings_file);
        let mut store = EmbeddingStore::new(params.vector_dim, params.num_threads);
        store.ingest_file(&params.embeddings_file)?;
        store.load_reference_file(&params.reference_file)?;
        info!("finished loading, took {} ms", timer.elapsed().as_millis());

        // simplify the text with the loaded (now read only) vocabularies
        let timer = Instant::now();
        let text = files_handling::read_lines(&params.text_file)?;
        info!("loaded {} lines of text to simplify", text.len());

        let simplifier = Simplifier::from_store(&store, params.metric);
        let simplification = simplifier.simplify(&text);
        info!("finished simplification, took {} ms", timer.elapsed().as_millis());

        // write the report and hand it back for console output
        let report = Report::new(&text, &simplification, params.metric);
        files_handling::save_output(&params.output_file, &report.render(params.output_format)?)?;
        info!("result written to {}", params.output_file);

        Ok(report)
    }

}
