use clap::Parser;
use quasiseed::{
    cli::{init_verbose, Cli, Command, FULL_VERSION},
    commands::{report, seed},
    utils::{handle_error_and_exit, Result},
};

fn runner() -> Result<()> {
    let cli = Cli::parse();
    init_verbose(&cli);
    let subcommand_name = match cli.command {
        Command::Seed(_) => "seed",
        Command::Report(_) => "report",
    };

    log::info!(
        "Running {}-{} [{}]",
        env!("CARGO_PKG_NAME"),
        *FULL_VERSION,
        subcommand_name
    );
    match cli.command {
        Command::Seed(args) => seed::seed(args)?,
        Command::Report(args) => report::report(args)?,
    }
    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        handle_error_and_exit(e);
    }
}
