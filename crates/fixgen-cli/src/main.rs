use clap::Parser;

mod cli;

use crate::cli::Cli;

fn main() {
    // Parse first so --help/--version and usage errors are handled by clap.
    let cli = Cli::parse();
    fixgen_core::logging::init_logging(cli.verbose);

    if let Err(err) = cli.run() {
        eprintln!("fixgen error: {:#}", err);
        std::process::exit(1);
    }
}
