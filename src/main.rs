use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fasta_taxon_filter::cli;

fn main() {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage problems (including a bare invocation) exit 1, not clap's 2
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("fasta_taxon_filter=debug,info")
    } else {
        EnvFilter::new("fasta_taxon_filter=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = cli::extract::run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
