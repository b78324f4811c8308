use std::env;
use std::process::ExitCode;
use text_simplifier::{Config, Pipeline};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    let result = Config::new(&args).and_then(|config| {
        let params = config.get_params();
        info!("{}", params);
        let report = Pipeline::run(&params)?;
        report.render(params.output_format)
    });

    match result {
        Ok(rendered) => {
            println!("{}", rendered);
            ExitCode::SUCCESS
        },
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
