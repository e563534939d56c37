use std::process::ExitCode;

use env_logger::Env;
use log::error;

fn main() -> ExitCode {
    // logs go to stderr so they never mix with protocol output
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    match chess_core::uci::run_uci_loop() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("uci loop failed: {e}");
            ExitCode::FAILURE
        }
    }
}
