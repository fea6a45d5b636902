use clap::Parser;
use std::process::ExitCode;

use pawadopt::config::{AppConfig, Cli};
use pawadopt::{logging, PawAdopt};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    let config = match AppConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "could not load configuration");
            eprintln!("pawadopt: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = iced::application(PawAdopt::title, PawAdopt::update, PawAdopt::view)
        .theme(PawAdopt::theme)
        .centered()
        .window_size((1280.0, 860.0))
        .run_with(move || PawAdopt::new(config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
