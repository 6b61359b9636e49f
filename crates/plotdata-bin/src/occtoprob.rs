use clap::Parser;

#[allow(dead_code)]
mod common;

fn main() {
    let cli = Cli::parse();
    common::init_logging(cli.verbose);
    if let Err(err) = cli.run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

/// Convert occurrence counts in a document into probabilities.
///
/// Every line of the form `<sample> <count> \\` in the document
///     is replaced by the line `<sample>\t<count / total> \\`.
/// All other text is dropped.
/// For the other conversions, consider using the plottools binary.
#[derive(Debug, clap::Parser)]
#[command(
    name = "From occurrences to probability",
    version = "0.1",
    about,
    long_about,
    max_term_width(100)
)]
struct Cli {
    #[command(flatten)]
    document: common::DocumentArgs,

    /// Total number of occurrences.
    ///
    /// If this is not provided, it is asked for on the terminal.
    occurrences: Option<common::Divisor>,

    /// Log more information to standard error. Can be repeated.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn run(self) -> Result<(), String> {
        let mut host = self.document.host(self.occurrences)?;
        let rows = plotdata::algorithms::occurrences_to_probability(&mut host)?;
        log::info!("converted {} occurrence lines", rows);
        Ok(())
    }
}
