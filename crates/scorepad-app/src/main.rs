//! Main application entry point.

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting ScorePad");

    let result = scorepad_app::Options::parse(std::env::args().skip(1))
        .and_then(|options| scorepad_app::run(&options).map(|_| ()));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("scorepad: {e}");
            ExitCode::FAILURE
        }
    }
}
