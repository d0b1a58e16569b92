use std::io::Write;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::error;

use check_graphite::{
    api::MetricsClient,
    config::{argument_error, CliArgs, RunConfig},
    logging, run_probe, RunResult,
};

fn finish(result: &RunResult) -> ExitCode {
    let mut stdout = std::io::stdout().lock();
    let _ = stdout.write_all(result.output_line().as_bytes());
    let _ = stdout.flush();
    ExitCode::from(result.exit_code() as u8)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            return finish(&argument_error(&e));
        }
    };

    logging::init_logger(args.verbose);

    let config = match RunConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return finish(&RunResult::internal_error(&e));
        }
    };

    let client = match MetricsClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("{}", e);
            return finish(&RunResult::internal_error(&e));
        }
    };

    let result = run_probe(&client, &config).await;
    finish(&result)
}
