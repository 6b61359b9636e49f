//! Extraction of measurements stored in named parameters.
//!
//! LaTeX documents can store an indexed series of values by defining one
//!     macro per value with `\@namedef`:
//!
//! ```tex
//! \@namedef{wifispeed@1}{54}
//! \@namedef{wifispeed@2}{48}
//! ```
//!
//! The [`extract`] function turns such a series into a measurement block:
//!
//! ```tex
//! \measurement{wifispeed}{
//!  1	54 \\
//!  2	48 \\
//! }
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// Any `\@namedef` definition, together with the line breaks that follow it.
static NAMED_DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\@namedef\{[a-zA-Z0-9@]+\}\{.+\}\n*")
        .expect("the named definition pattern is valid")
});

fn series_pattern(name: &str) -> Regex {
    let pattern = format!(
        r"\\@namedef\{{{}@([0-9]+)\}}\{{([0-9]+)\}}",
        regex::escape(name)
    );
    Regex::new(&pattern).expect("the name is escaped so the pattern is valid")
}

/// A single value of a named series.
///
/// Both fields borrow the digits exactly as they appear in the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Measurement<'a> {
    pub index: &'a str,
    pub value: &'a str,
}

/// Displays the measurement as a table row ` <index>\t<value> \\`.
///
/// No newline is written after the row.
impl<'a> std::fmt::Display for Measurement<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, " {}\t{} \\\\", self.index, self.value)
    }
}

/// Returns all measurements of the series with the given name, in document order.
///
/// Repeated indices are not merged; each definition yields its own measurement.
pub fn measurements<'a>(text: &'a str, name: &str) -> Vec<Measurement<'a>> {
    series_pattern(name)
        .captures_iter(text)
        .map(|captures| {
            let (_, [index, value]) = captures.extract();
            Measurement { index, value }
        })
        .collect()
}

/// Convert the series with the given name into a measurement block.
///
/// Each `\@namedef{<name>@<index>}{<value>}` definition is replaced in place
///     by the row for its [`Measurement`].
/// Then every remaining `\@namedef` definition is deleted,
///     along with the line breaks that follow it.
/// Other text is kept as is.
/// Finally the result is wrapped in `\measurement{<name>}{` and `}`.
///
/// The name is matched literally.
pub fn extract(text: &str, name: &str) -> String {
    let rows = series_pattern(name).replace_all(text, |captures: &regex::Captures| {
        let (_, [index, value]) = captures.extract();
        Measurement { index, value }.to_string()
    });
    let body = NAMED_DEFINITION.replace_all(&rows, "");
    format!("\\measurement{{{name}}}{{\n{body}}}\n")
}
