//! Conversion of occurrence counts into probabilities.
//!
//! An occurrence line is a table row holding two integers followed by
//!     the `\\` row terminator, for example `5 200 \\`.
//! The first integer identifies the sample and the second integer is
//!     the number of times the sample occurred.
//! Dividing the second integer by the total number of occurrences gives
//!     the probability of the sample.

use regex::Regex;
use std::sync::LazyLock;

static OCCURRENCE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*([0-9]+)\s+([0-9]+)\s*\\\\").expect("the occurrence line pattern is valid")
});

/// A single occurrence line found in some text.
///
/// Both fields borrow the digits exactly as they appear in the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Occurrence<'a> {
    /// The first column. This is copied to the output verbatim.
    pub sample: &'a str,
    /// The second column.
    pub count: &'a str,
}

impl<'a> Occurrence<'a> {
    /// Returns the count divided by the divisor.
    ///
    /// The divisor is not validated.
    /// Dividing by zero gives an infinite value, or NaN if the count is also zero.
    pub fn probability(&self, divisor: f64) -> f64 {
        // The pattern only admits ASCII digits, and overly long numbers parse to infinity.
        let count: f64 = self.count.parse().unwrap_or(f64::NAN);
        count / divisor
    }

    /// Returns the output row for this occurrence.
    pub fn row(&self, divisor: f64) -> Row<'a> {
        Row {
            sample: self.sample,
            probability: self.probability(divisor),
        }
    }
}

/// A row of the probability table.
///
/// When displayed, the row has the form ` <sample>\t<probability> \\`
///     followed by a newline.
/// The probability is printed with exactly three decimal places.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Row<'a> {
    pub sample: &'a str,
    pub probability: f64,
}

impl<'a> std::fmt::Display for Row<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            " {}\t{} \\\\",
            self.sample,
            ThreeDecimals(self.probability)
        )
    }
}

struct ThreeDecimals(f64);

impl std::fmt::Display for ThreeDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return write!(f, "NaN");
        }
        if v.is_infinite() {
            return write!(f, "{}Infinity", if v < 0.0 { "-" } else { "" });
        }
        // Adding zero turns negative zero into positive zero.
        write!(f, "{:.3}", v + 0.0)
    }
}

/// Returns an iterator over all occurrence lines in the text, in order.
///
/// Matches never overlap.
/// Text between matches is skipped.
pub fn occurrences(text: &str) -> impl Iterator<Item = Occurrence<'_>> {
    OCCURRENCE_LINE.captures_iter(text).map(|captures| {
        let (_, [sample, count]) = captures.extract();
        Occurrence { sample, count }
    })
}

/// Convert the occurrence lines in the text into a table of probabilities.
///
/// Each occurrence line produces one row; see [`Row`] for the format.
/// All other text is discarded,
///     so the result is empty if the text contains no occurrence lines.
pub fn convert(text: &str, divisor: f64) -> String {
    occurrences(text)
        .map(|occurrence| occurrence.row(divisor).to_string())
        .collect()
}
