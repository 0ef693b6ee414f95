use std::env;
use std::process::ExitCode;

use dotenvy::dotenv;
use image_poster_lib::{exit_status, run, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let result = run(&config).await;
    match &result {
        Ok(report) => {
            info!(post_id = %report.post, bytes = report.image_size, "Run complete");
        }
        Err(err) => {
            error!(stage = %err.stage, error = %err.source, "Error");
        }
    }

    ExitCode::from(exit_status(&result, &config))
}
