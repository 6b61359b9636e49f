use clap::Parser;

mod common;
use common::*;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(err) = cli.run() {
        if !err.is_empty() {
            eprintln!("{err}");
        }
        std::process::exit(1);
    }
}

/// Tools for turning measurement data in LaTeX documents into plot tables.
#[derive(Debug, Parser)]
#[command(
    name = "plottools",
    version = "0.1",
    about,
    long_about,
    max_term_width(100)
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log more information to standard error. Can be repeated.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

impl Cli {
    fn run(self) -> Result<(), String> {
        match self.command {
            Command::Probability(probability) => probability.run(),
            Command::Measurements(measurements) => measurements.run(),
        }
    }
}

#[derive(Clone, Debug, clap::Subcommand)]
enum Command {
    /// Convert occurrence counts into probabilities.
    ///
    /// Every line of the form `<sample> <count> \\` in the document
    ///     is replaced by the line `<sample>\t<count / total> \\`,
    ///     with the probability printed to three decimal places.
    /// All other text in the document is dropped.
    ///
    /// The total number of occurrences is given with --occurrences.
    /// If it is not given, it is asked for on the terminal.
    Probability(Probability),

    /// Collect a series of named parameters into a measurement block.
    ///
    /// Every definition `\@namedef{<name>@<index>}{<value>}` in the document
    ///     is replaced by the line `<index>\t<value> \\`.
    /// All other `\@namedef` definitions are deleted,
    ///     and the result is wrapped in `\measurement{<name>}{...}`.
    Measurements(Measurements),
}

#[derive(Clone, Debug, Parser)]
struct Probability {
    #[command(flatten)]
    document: DocumentArgs,

    /// Total number of occurrences.
    #[arg(short = 'n', long)]
    occurrences: Option<Divisor>,
}

impl Probability {
    fn run(self) -> Result<(), String> {
        let mut host = self.document.host(self.occurrences)?;
        let rows = plotdata::algorithms::occurrences_to_probability(&mut host)?;
        log::info!("converted {} occurrence lines", rows);
        Ok(())
    }
}

#[derive(Clone, Debug, Parser)]
struct Measurements {
    #[command(flatten)]
    document: DocumentArgs,

    /// Name of the series.
    #[arg(long, default_value = "wifispeed")]
    name: MacroName,
}

impl Measurements {
    fn run(self) -> Result<(), String> {
        let mut host = self.document.host(Some(self.name))?;
        let rows = plotdata::algorithms::measurements_from_params(&mut host)?;
        log::info!("extracted {} measurements", rows);
        Ok(())
    }
}
