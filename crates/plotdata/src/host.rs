//! The environment a converter runs in.
//!
//! A converter needs three things from its environment:
//!     a parameter (the divisor or the series name),
//!     the text of the document being converted,
//!     and somewhere to put the converted text.
//! The [`Host`] trait provides these.
//! Command line tools implement it using files and the terminal,
//!     while [`MemoryHost`] keeps everything in memory.

/// Capabilities a converter requires from its environment.
///
/// The type parameter `P` is the type of the converter's parameter.
pub trait Host<P> {
    type Error;

    /// Obtain the converter's parameter.
    fn parameter(&mut self) -> Result<P, Self::Error>;

    /// Return the full text of the document.
    fn text(&mut self) -> Result<String, Self::Error>;

    /// Replace the full text of the document.
    fn set_text(&mut self, text: String) -> Result<(), Self::Error>;
}

/// A host that holds the document and the parameter in memory.
///
/// ```
/// use plotdata::MemoryHost;
/// let mut host = MemoryHost::new(2.0, "10 50 \\\\");
/// plotdata::algorithms::occurrences_to_probability(&mut host).unwrap();
/// assert_eq!(host.text, " 10\t25.000 \\\\\n");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryHost<P> {
    pub parameter: P,
    pub text: String,
}

impl<P> MemoryHost<P> {
    pub fn new<S: Into<String>>(parameter: P, text: S) -> Self {
        MemoryHost {
            parameter,
            text: text.into(),
        }
    }
}

impl<P: Clone> Host<P> for MemoryHost<P> {
    type Error = std::convert::Infallible;

    fn parameter(&mut self) -> Result<P, Self::Error> {
        Ok(self.parameter.clone())
    }

    fn text(&mut self) -> Result<String, Self::Error> {
        Ok(self.text.clone())
    }

    fn set_text(&mut self, text: String) -> Result<(), Self::Error> {
        self.text = text;
        Ok(())
    }
}
