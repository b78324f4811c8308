
use crate::error::{Result, SimplifierError};
use crate::similarity::Metric;
use crate::store::VECTOR_DIM;

use serde_json::Value;
use std::{fs, fmt::Display, str::FromStr};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = SimplifierError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(SimplifierError::Config(format!("unrecognized output format {}", other))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Params {
    pub embeddings_file: String,
    pub reference_file: String,
    pub text_file: String,
    pub output_file: String,
    pub metric: Metric,
    pub output_format: OutputFormat,
    pub vector_dim: usize,
    pub num_threads: usize,
}

impl Display for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "using parameters:
        embeddings_file: {}
        reference_file: {}
        text_file: {}
        output_file: {}
        metric: {}
        output_format: {:?}
        vector_dim: {}
        num_threads: {}",
        self.embeddings_file, self.reference_file, self.text_file, self.output_file,
        self.metric, self.output_format, self.vector_dim, self.num_threads
        )
    }
}

pub struct Config {
    params: Params
}

impl Config {

    pub fn get_params(&self) -> Params {
        self.params.clone()
    }

    pub fn new(args: &[String]) -> Result<Config> {

        if args.len() != 2 {
            return Err(SimplifierError::Config("input should be a path to json file only".to_string()));
        }

        // parse input json
        let contents = fs::read_to_string(&args[1])?;
        let json: Value = serde_json::from_str(&contents)?;
        Config::from_json(&json)
    }

    pub fn from_json(json: &Value) -> Result<Config> {

        // validate the three input files
        let embeddings_file = required_str(json, "embeddings_file")?;
        let reference_file = required_str(json, "reference_file")?;
        let text_file = required_str(json, "text_file")?;

        // handle default vs input parameters
        let output_file = optional_str(json, "output_file")?.unwrap_or_else(|| "./out.txt".to_string());
        let metric = match optional_str(json, "metric")? {
            Some(metric) => metric.parse::<Metric>()?,
            None => Metric::Cosine
        };
        let output_format = match optional_str(json, "output_format")? {
            Some(output_format) => output_format.parse::<OutputFormat>()?,
            None => OutputFormat::Text
        };
        let vector_dim = optional_usize(json, "vector_dim")?.unwrap_or(VECTOR_DIM);
        let num_threads = optional_usize(json, "num_threads")?.unwrap_or(0);

        if vector_dim == 0 {
            return Err(SimplifierError::Config("vector_dim must be positive".to_string()));
        }

        let params = Params {
            embeddings_file,
            reference_file,
            text_file,
            output_file,
            metric,
            output_format,
            vector_dim,
            num_threads,
        };

        Ok(Self { params })
    }

}

fn required_str(json: &Value, key: &str) -> Result<String> {
    optional_str(json, key)?.ok_or_else(|| SimplifierError::Config(format!("{} was not supplied through json", key)))
}

fn optional_str(json: &Value, key: &str) -> Result<Option<String>> {
    match json.get(key) {
        Some(value) => match value.as_str() {
            Some(s) => Ok(Some(s.to_owned())),
            None => Err(SimplifierError::Config(format!("given {} is not a string", key)))
        },
        None => Ok(None)
    }
}

fn optional_usize(json: &Value, key: &str) -> Result<Option<usize>> {
    match json.get(key) {
        Some(value) => match value.as_u64() {
            Some(n) => Ok(Some(n as usize)),
            None => Err(SimplifierError::Config(format!("given {} is not a non-negative integer", key)))
        },
        None => Ok(None)
    }
}


pub mod files_handling {

    use crate::error::{Result, SimplifierError};

    use std::fs::{self, File};
    use std::io::{BufRead, BufReader, Read};
    use std::path::Path;
    use flate2::read::GzDecoder;

    /// Reads every line of a file, decompressing it first when the name ends in `.gz`.
    /// Any read failure aborts the whole read.
    pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {

        let path = path.as_ref();
        let unreadable = |source| SimplifierError::DatasetUnreadable { path: path.to_path_buf(), source };

        let f = File::open(path).map_err(unreadable)?;
        let reader: Box<dyn Read> = match path.extension() {
            Some(ext) if ext == "gz" => Box::new(GzDecoder::new(f)),
            _ => Box::new(f)
        };

        BufReader::new(reader)
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .map_err(unreadable)
    }

    pub fn save_output<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {

        // create output folder
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        fs::write(path, contents)?;
        Ok(())
    }

}
