use clap::Parser;
use pedscreen::{
    cli::{init_verbose, Cli, Command, FULL_VERSION},
    commands::{complement, screen},
    utils::{handle_error_and_exit, Result},
};

fn runner() -> Result<()> {
    let cli = Cli::parse();
    init_verbose(&cli);
    let subcommand_name = match cli.command {
        Command::Screen(_) => "screen",
        Command::Complement(_) => "complement",
    };

    log::info!(
        "Running {}-{} [{}]",
        env!("CARGO_PKG_NAME"),
        *FULL_VERSION,
        subcommand_name
    );
    match cli.command {
        Command::Screen(args) => screen::screen(args)?,
        Command::Complement(args) => complement::complement(args)?,
    }
    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        handle_error_and_exit(e);
    }
}
