use std::io::{BufRead, Read, Write};

/// Initialize logging.
///
/// The `RUST_LOG` environment variable takes precedence over the verbosity flag.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Arguments describing where the document comes from and where the result goes.
#[derive(Clone, Debug, clap::Args)]
pub struct DocumentArgs {
    /// Path to the document to convert.
    ///
    /// If the path is -, the document is read from standard in.
    pub path: InputPath,

    /// Write the converted document to this path.
    ///
    /// If neither this nor --in-place is provided,
    ///     the converted document is printed to standard out.
    #[arg(short, long, conflicts_with = "in_place")]
    pub output: Option<std::path::PathBuf>,

    /// Overwrite the document with the converted document.
    #[arg(short, long)]
    pub in_place: bool,
}

impl DocumentArgs {
    /// Build a host for these arguments.
    ///
    /// If the parameter is not provided, the host asks for it on the terminal.
    pub fn host<P: Parameter>(self, parameter: Option<P>) -> Result<FileHost<P>, String> {
        let sink = match (self.output, self.in_place, &self.path) {
            (Some(output), _, _) => Sink::File(output),
            (None, true, InputPath::File(path)) => Sink::File(path.clone()),
            (None, true, InputPath::Stdin) => {
                return Err("a document read from standard in can't be converted in place".into())
            }
            (None, false, _) => Sink::Stdout,
        };
        if parameter.is_none() && matches!(self.path, InputPath::Stdin) {
            return Err(format!(
                "the {} must be provided as an argument when the document is read from standard in",
                P::DESCRIPTION
            ));
        }
        Ok(FileHost {
            input: self.path,
            sink,
            parameter,
        })
    }
}

/// A parameter of a converter that can be provided on the command line.
pub trait Parameter: Sized {
    /// What the parameter is, for use in error messages.
    const DESCRIPTION: &'static str;

    /// The question asked when the parameter needs to be entered on the terminal.
    const PROMPT: &'static str;

    type Value;

    fn parse_prompt(input: &str) -> Result<Self, String>;

    fn into_value(self) -> Self::Value;
}

/// A host that reads the document from a file and writes the result to a file or standard out.
#[derive(Debug)]
pub struct FileHost<P> {
    input: InputPath,
    sink: Sink,
    parameter: Option<P>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Sink {
    Stdout,
    File(std::path::PathBuf),
}

impl<P: Parameter + Clone> plotdata::Host<P::Value> for FileHost<P> {
    type Error = String;

    fn parameter(&mut self) -> Result<P::Value, String> {
        if let Some(parameter) = &self.parameter {
            return Ok(parameter.clone().into_value());
        }
        let parameter = prompt::<P>()?;
        self.parameter = Some(parameter.clone());
        Ok(parameter.into_value())
    }

    fn text(&mut self) -> Result<String, String> {
        match &self.input {
            InputPath::Stdin => {
                log::debug!("reading document from standard in");
                let mut text = String::new();
                match std::io::stdin().read_to_string(&mut text) {
                    Ok(_) => Ok(text),
                    Err(err) => Err(format!("Failed to read standard in: {}", err)),
                }
            }
            InputPath::File(path) => {
                log::debug!("reading document from `{}`", path.display());
                match std::fs::read_to_string(path) {
                    Ok(text) => Ok(text),
                    Err(err) => Err(format!("Failed to read `{}`: {}", path.display(), err)),
                }
            }
        }
    }

    fn set_text(&mut self, text: String) -> Result<(), String> {
        match &self.sink {
            Sink::Stdout => {
                log::debug!("writing converted document to standard out");
                let mut stdout = std::io::stdout().lock();
                match stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush()) {
                    Ok(_) => Ok(()),
                    Err(err) => Err(format!("Failed to write standard out: {}", err)),
                }
            }
            Sink::File(path) => {
                log::debug!("writing converted document to `{}`", path.display());
                match std::fs::write(path, text) {
                    Ok(_) => Ok(()),
                    Err(err) => Err(format!("Failed to write `{}`: {}", path.display(), err)),
                }
            }
        }
    }
}

fn prompt<P: Parameter>() -> Result<P, String> {
    eprint!("{} ", P::PROMPT);
    if let Err(err) = std::io::stderr().flush() {
        return Err(format!("Failed to write standard error: {}", err));
    }
    let mut line = String::new();
    match std::io::stdin().lock().read_line(&mut line) {
        Ok(0) => Err(format!("No {} was entered", P::DESCRIPTION)),
        Ok(_) => P::parse_prompt(&line),
        Err(err) => Err(format!("Failed to read standard in: {}", err)),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputPath {
    Stdin,
    File(std::path::PathBuf),
}

impl InputPath {
    fn parse(input: &str) -> Result<Self, std::convert::Infallible> {
        Ok(match input {
            "-" => InputPath::Stdin,
            _ => InputPath::File(input.into()),
        })
    }
}

impl clap::builder::ValueParserFactory for InputPath {
    type Parser = clap::builder::ValueParser;

    fn value_parser() -> Self::Parser {
        clap::builder::ValueParser::new(InputPath::parse)
    }
}

/// Total number of occurrences, used as the divisor when computing probabilities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Divisor(pub f64);

impl Divisor {
    pub fn parse(input: &str) -> Result<Self, InvalidDivisor> {
        match input.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Divisor(v)),
            _ => Err(InvalidDivisor {
                provided: input.trim().to_string(),
            }),
        }
    }
}

impl Parameter for Divisor {
    const DESCRIPTION: &'static str = "number of occurrences";
    const PROMPT: &'static str = "Number of occurrences:";
    type Value = f64;

    fn parse_prompt(input: &str) -> Result<Self, String> {
        Divisor::parse(input).map_err(|err| err.to_string())
    }

    fn into_value(self) -> f64 {
        self.0
    }
}

impl clap::builder::ValueParserFactory for Divisor {
    type Parser = clap::builder::ValueParser;

    fn value_parser() -> Self::Parser {
        clap::builder::ValueParser::new(Divisor::parse)
    }
}

#[derive(Debug)]
pub struct InvalidDivisor {
    pub provided: String,
}

impl std::fmt::Display for InvalidDivisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "the number of occurrences must be a finite number but it is `{}`",
            self.provided
        )
    }
}

impl std::error::Error for InvalidDivisor {}

/// Name of a series of `\@namedef` definitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MacroName(pub String);

impl MacroName {
    pub fn parse(input: &str) -> Result<Self, InvalidMacroName> {
        let input = input.trim();
        if input.is_empty() {
            return Err(InvalidMacroName::Empty);
        }
        if let Some(c) = input
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && *c != '@')
        {
            return Err(InvalidMacroName::InvalidCharacter {
                name: input.to_string(),
                character: c,
            });
        }
        Ok(MacroName(input.to_string()))
    }
}

impl Parameter for MacroName {
    const DESCRIPTION: &'static str = "series name";
    const PROMPT: &'static str = "Series name:";
    type Value = String;

    fn parse_prompt(input: &str) -> Result<Self, String> {
        MacroName::parse(input).map_err(|err| err.to_string())
    }

    fn into_value(self) -> String {
        self.0
    }
}

impl clap::builder::ValueParserFactory for MacroName {
    type Parser = clap::builder::ValueParser;

    fn value_parser() -> Self::Parser {
        clap::builder::ValueParser::new(MacroName::parse)
    }
}

#[derive(Debug)]
pub enum InvalidMacroName {
    Empty,
    InvalidCharacter { name: String, character: char },
}

impl std::fmt::Display for InvalidMacroName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMacroName::Empty => write!(f, "the series name must not be empty"),
            InvalidMacroName::InvalidCharacter { name, character } => write!(
                f,
                "the series name may only contain letters, digits and @ but `{}` contains `{}`",
                name, character
            ),
        }
    }
}

impl std::error::Error for InvalidMacroName {}
