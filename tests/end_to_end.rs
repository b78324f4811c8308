use std::fs::{self, File};
use std::io::Write;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde_json::{json, Value};
use text_simplifier::{Config, EmbeddingStore, Metric, OutputFormat, Pipeline, SimplifierError, Simplifier, Stats};

// small 3-dimensional vocabulary, the reference words are cat, dog and big
const EMBEDDINGS: &str = "cat,1.0,0.0,0.0
kitten,0.95,0.05,0.0
dog,0.0,1.0,0.0
puppy,0.05,0.9,0.1
big,0.0,0.0,1.0
enormous,0.1,0.0,0.95
broken,0.1,0.2
";

const REFERENCE: &str = "cat\ndog\nbig\nsmall\n";

const TEXT: &str = "the enormous kitten\nchased a  puppy\n";

#[test]
fn pipeline_json_test() {

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("embeddings.txt"), EMBEDDINGS).unwrap();
    fs::write(dir.path().join("reference.txt"), REFERENCE).unwrap();
    fs::write(dir.path().join("text.txt"), TEXT).unwrap();
    let output = dir.path().join("out").join("result.json");

    let json = json!({
        "embeddings_file": dir.path().join("embeddings.txt"),
        "reference_file": dir.path().join("reference.txt"),
        "text_file": dir.path().join("text.txt"),
        "output_file": output,
        "metric": "euclidean",
        "output_format": "json",
        "vector_dim": 3,
        "num_threads": 2
    });
    let params = Config::from_json(&json).unwrap().get_params();
    assert_eq!(params.output_format, OutputFormat::Json);

    let report = Pipeline::run(&params).unwrap();
    assert_eq!(report.simplified_text, "the big cat\nchased a dog");
    assert_eq!(report.summary, Stats { words_simplified: 3, words_in_reference_vocabulary: 0, words_not_in_vocabulary: 3 });

    let written: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written["similarityMethod"], "Euclidean Distance");
    assert_eq!(written["simplifiedText"], "the big cat\nchased a dog");
    assert_eq!(written["summary"]["wordsSimplified"], 3);
}

#[test]
fn gzip_dataset_test() {

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("embeddings.txt.gz");
    let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
    encoder.write_all(EMBEDDINGS.as_bytes()).unwrap();
    encoder.finish().unwrap();

    let mut store = EmbeddingStore::new(3, 0);
    let report = store.ingest_file(&path).unwrap();
    assert_eq!(report.lines_processed, 7);
    assert_eq!(report.vocabulary_size, 6);
    assert_eq!(report.malformed_lines, 1);
    assert_eq!(report.duplicates, 0);
}

#[test]
fn unreadable_dataset_test() {

    let dir = tempfile::tempdir().unwrap();
    let mut store = EmbeddingStore::new(3, 0);
    store.ingest(&["cat,1,0,0".to_string()]).unwrap();

    let result = store.ingest_file(dir.path().join("missing.txt"));
    assert!(matches!(result, Err(SimplifierError::DatasetUnreadable { .. })));

    // a failed load leaves the previous vocabulary in place
    assert_eq!(store.full_vocabulary().len(), 1);
}

#[test]
fn reference_drop_count_test() {

    let mut store = EmbeddingStore::new(3, 0);
    let lines: Vec<String> = EMBEDDINGS.lines().map(str::to_string).collect();
    store.ingest(&lines).unwrap();

    let words: Vec<String> = REFERENCE.lines().map(str::to_string).collect();
    let size = store.build_reference_vocabulary(&words);
    // only "small" is missing from the embeddings
    assert_eq!(size, words.len() - 1);
}

#[test]
fn metrics_agree_on_clear_cases_test() {

    let mut store = EmbeddingStore::new(3, 4);
    let lines: Vec<String> = EMBEDDINGS.lines().map(str::to_string).collect();
    store.ingest(&lines).unwrap();
    store.build_reference_vocabulary(&REFERENCE.lines().map(str::to_string).collect::<Vec<String>>());

    for metric in Metric::ALL {
        let simplifier = Simplifier::from_store(&store, metric);
        let result = simplifier.simplify(&["kitten puppy".to_string()]);
        assert_eq!(result.lines, vec!["cat dog"], "{}", metric);
    }
}
