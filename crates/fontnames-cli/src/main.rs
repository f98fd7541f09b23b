mod cli;
mod file_cmd;
mod name_cmd;
mod shared;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    shared::init_logging(cli.verbose);

    let result = match cli.command {
        cli::Commands::Name {
            ref specifiers,
            ref format,
        } => name_cmd::run(specifiers, format),
        cli::Commands::File {
            ref file,
            ref format,
        } => file_cmd::run(file, format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
