mod cli;
mod commands;

use clap::Parser;

use cli::{Cli, Command};
use hwvecgen_emit::Config;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            out_dir,
            no_inlining,
        } => commands::generate::run(commands::generate::GenerateArgs {
            out_dir,
            config: Config::new().inlining(!no_inlining),
        }),
        Command::Check {
            out_dir,
            no_inlining,
        } => commands::check::run(commands::check::CheckArgs {
            out_dir,
            config: Config::new().inlining(!no_inlining),
        }),
        Command::Print { width, no_inlining } => commands::print::run(commands::print::PrintArgs {
            width: width.map(Into::into),
            config: Config::new().inlining(!no_inlining),
        }),
        Command::Dump => commands::dump::run(),
    }
}
