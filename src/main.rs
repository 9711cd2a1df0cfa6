use std::process::ExitCode;

use blit_lessons::{app, cli::Cli};
use clap::Parser;

/// Status reported when start-up fails, -1 as an exit byte
const EXIT_STARTUP_FAILURE: u8 = 255;

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{:#}", err);
            ExitCode::from(EXIT_STARTUP_FAILURE)
        }
    }
}

fn try_main(cli: &Cli) -> anyhow::Result<()> {
    log::info!("Starting {:?} lesson", cli.lesson);

    app::run_lesson(cli.lesson, cli.session_config()).map_err(|err| {
        let headline = if err.is_media() {
            "Failed to load media!"
        } else {
            "Failed to initialize!"
        };
        anyhow::Error::new(err).context(headline)
    })
}
