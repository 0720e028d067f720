use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use ws281x_matrix_cli::{exit_status, Cli};
use ws281x_matrix_core::{
    errors::CONFIG_ERROR_STATUS,
    shutdown::{ShutdownNotifier, UnixSignals},
    AppConfig, Configuration, Driver, Scene, ShutdownToken, SleepTimer,
};

#[cfg(feature = "rpi")]
fn driver() -> impl Driver {
    ws281x_matrix_drivers::Ws281xDriver::new()
}

#[cfg(not(feature = "rpi"))]
fn driver() -> impl Driver {
    log::warn!("Built without the `rpi` feature, rendering into the terminal");
    ws281x_matrix_drivers::ConsoleDriver::stderr()
}

fn run(config: Configuration, scene: Box<dyn Scene>) -> anyhow::Result<i32> {
    let shutdown = ShutdownToken::new();
    UnixSignals
        .register(&shutdown)
        .context("Unable to register signal handlers")?;

    let status = AppConfig {
        config,
        driver: driver(),
        timer: SleepTimer,
        scene,
        shutdown,
    }
    .into_app()
    .run();
    println!();

    Ok(match status {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            err.status_code()
        }
    })
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            eprint!("{err}");
            return ExitCode::from(exit_status(CONFIG_ERROR_STATUS));
        }
    };

    if let Some(shell) = cli.completions {
        shell.generate(&mut Cli::command(), &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    let config = match cli.configuration() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(exit_status(err.status_code()));
        }
    };
    let scene = cli.scene(&config);

    match run(config, scene) {
        Ok(code) => ExitCode::from(exit_status(code)),
        Err(err) => {
            eprintln!("{err:?}");
            ExitCode::FAILURE
        }
    }
}
