use std::{env, process::ExitCode};
use text_simplifier::{files_handling, nearest, EmbeddingStore, Metric, Result, VECTOR_DIM};
use tracing::error;
use tracing_subscriber::EnvFilter;


// this executable checks loaded vectors against the reference words:
// for every query word it prints the nearest reference word and its score
// under each of the similarity metrics.
// treated as binary executable so it can be ran independently from main

fn main() -> ExitCode {

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    // arguments to this executable should be:
    // path to embeddings (txt or txt.gz)
    // path to reference words, one per line
    // path to query words, one per line
    // example: ... Input/glove.6B.50d.txt Input/google-1000.txt Input/queries.txt
    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        error!("expected 3 arguments: embeddings file, reference words file, query words file");
        return ExitCode::FAILURE;
    }

    match run_neighbors(&args[1], &args[2], &args[3]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_neighbors(embeddings_file: &str, reference_file: &str, queries_file: &str) -> Result<()> {

    let mut store = EmbeddingStore::new(VECTOR_DIM, 0);
    let report = store.ingest_file(embeddings_file)?;
    let n_reference = store.load_reference_file(reference_file)?;
    println!("vocabulary size: {}, reference words: {}\n", report.vocabulary_size, n_reference);

    for query in files_handling::read_lines(queries_file)? {

        let query = query.trim();
        if query.is_empty() {
            continue;
        }

        let vector = match store.full_vocabulary().get(query) {
            Some(vector) => vector,
            None => {
                println!("{} : not in vocabulary\n", query);
                continue;
            }
        };

        println!("nearest reference words to {}", query);
        for metric in Metric::ALL {
            match nearest(vector.view(), store.reference_vocabulary(), metric) {
                Some(neighbor) => println!("{} : {} ? {} = {}", metric, query, neighbor.word, neighbor.score),
                None => println!("{} : no reference words loaded", metric),
            }
        }
        println!();
    }

    Ok(())
}
