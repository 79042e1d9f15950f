use clap::Parser;
use pwvault::cli::Cli;

fn main() {
    let cli = Cli::parse();

    pwvault::logging::init(cli.verbose);

    // Unlock failures land here too: without a key there is nothing to do.
    if let Err(e) = pwvault::cli::run(&cli) {
        pwvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
