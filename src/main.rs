//! Folio - personal developer portfolio for the terminal.

use anyhow::Result;
use clap::Parser;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use folio::cli::{load_content, Cli, Command};
use folio::config::Config;
use folio::logging::{self, LogSink};
use folio::tui;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // init-config must work even when the existing file is broken.
    let config = match &cli.command {
        Some(Command::InitConfig(_)) => Config::new(),
        _ => cli.load_config()?,
    };

    let interactive = cli.command.is_none();
    let log_file = cli.log_file(&config);
    logging::init(
        &LogSink::select(log_file.as_deref(), interactive),
        &logging::filter_directive(&config.logging.level, cli.verbose),
    )?;

    let content = cli.content_path(&config);

    match &cli.command {
        Some(Command::Render(args)) => {
            let catalog = Arc::new(load_content(content.as_deref())?);
            args.execute(catalog)
        }
        Some(Command::Check(args)) => args.execute(content.as_deref()),
        Some(Command::InitConfig(args)) => args.execute(&cli.config_path()?),
        None => {
            // Content errors abort before the terminal is touched.
            let catalog = Arc::new(load_content(content.as_deref())?);
            let mut app = tui::App::new(catalog, config.ui.show_help_on_startup);

            let mut terminal = tui::setup_terminal()?;
            let result = tui::run_tui(
                &mut app,
                &mut terminal,
                Duration::from_millis(config.ui.poll_interval_ms),
            );
            tui::restore_terminal(terminal)?;
            result
        }
    }
}
