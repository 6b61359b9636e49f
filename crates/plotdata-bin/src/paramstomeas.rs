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

/// Extract measurements stored in named parameters.
///
/// Every definition `\@namedef{<name>@<index>}{<value>}` in the document
///     is replaced by the line `<index>\t<value> \\`.
/// All other `\@namedef` definitions are deleted,
///     and the result is wrapped in `\measurement{<name>}{...}`.
/// For the other conversions, consider using the plottools binary.
#[derive(Debug, clap::Parser)]
#[command(
    name = "Extract measurements from params",
    version = "0.1",
    about,
    long_about,
    max_term_width(100)
)]
struct Cli {
    #[command(flatten)]
    document: common::DocumentArgs,

    /// Name of the series.
    #[arg(long, default_value = "wifispeed")]
    name: common::MacroName,

    /// Log more information to standard error. Can be repeated.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn run(self) -> Result<(), String> {
        let mut host = self.document.host(Some(self.name))?;
        let rows = plotdata::algorithms::measurements_from_params(&mut host)?;
        log::info!("extracted {} measurements", rows);
        Ok(())
    }
}
