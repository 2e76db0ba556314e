use std::process::ExitCode;

use spa_server::{logger, Config, StartupError};

fn main() -> ExitCode {
    let result = Config::load()
        .map_err(StartupError::from)
        .and_then(|cfg| spa_server::run(&cfg));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::log_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
