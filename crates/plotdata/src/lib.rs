//! # Plotdata
//!
//! Converters that turn measurement data embedded in LaTeX documents
//!     into tables that can be fed to a plotting package like pgfplots.
//!
//! There are two converters:
//!
//! - [`occurrences`] turns rows of occurrence counts like `5 200 \\`
//!     into rows of probabilities.
//!
//! - [`params`] collects values stored with `\@namedef{<name>@<index>}{<value>}`
//!     and wraps them in a `\measurement{<name>}{...}` block.
//!
//! Both converters are pure functions from text to text.
//! Text that doesn't match the converter's input format is silently dropped.
//!
//! ```
//! let table = plotdata::occurrences::convert("1 50 \\\\\n2 150 \\\\\n", 200.0);
//! assert_eq!(table, " 1\t0.250 \\\\\n 2\t0.750 \\\\\n");
//!
//! let source = "\\@namedef{speed@1}{42}\n\\@namedef{other@1}{99}\n";
//! let block = plotdata::params::extract(source, "speed");
//! assert_eq!(block, "\\measurement{speed}{\n 1\t42 \\\\\n}\n");
//! ```
//!
//! The [`host`] module abstracts over the environment the converters run in:
//!     where the document comes from, where the result goes,
//!     and how the converter's parameter is obtained.
//! The functions in [`algorithms`] run a converter against a host.

pub mod algorithms;
pub mod host;
pub mod occurrences;
pub mod params;

pub use host::Host;
pub use host::MemoryHost;
