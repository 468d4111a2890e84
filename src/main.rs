mod intake;
mod setup;

use setup::{init_tracing, Config};
use std::io::{self, Read, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("formcheck: {}", err);
            return ExitCode::from(2);
        }
    };
    init_tracing(config.log_format);

    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            tracing::error!(error = %err, "failed to process submission");
            ExitCode::from(2)
        }
    }
}

/// Reads one urlencoded body from stdin and prints the validation report.
fn run(config: &Config) -> io::Result<bool> {
    let mut body = Vec::new();
    io::stdin().lock().read_to_end(&mut body)?;

    let submission = intake::decode(&body);
    let rules = intake::rules_from(config);
    let report = intake::check(&submission, &rules);

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report)?;
    writeln!(stdout)?;

    Ok(report.valid)
}
