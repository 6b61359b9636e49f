//! Running the converters against a [`Host`].
//!
//! Each function obtains the parameter from the host, then the document text,
//!     converts the text and replaces the document with the result.
//! If the host fails at any step the document is left untouched.
//! On success the number of rows written is returned.

use crate::host::Host;
use crate::occurrences;
use crate::params;

/// Replace the occurrence lines in the host's document by probabilities.
///
/// The host's parameter is the total number of occurrences.
pub fn occurrences_to_probability<H: Host<f64>>(host: &mut H) -> Result<usize, H::Error> {
    let divisor = host.parameter()?;
    let text = host.text()?;
    let rows = occurrences::occurrences(&text).count();
    host.set_text(occurrences::convert(&text, divisor))?;
    Ok(rows)
}

/// Replace the host's document by the measurement block of a named series.
///
/// The host's parameter is the name of the series.
pub fn measurements_from_params<H: Host<String>>(host: &mut H) -> Result<usize, H::Error> {
    let name = host.parameter()?;
    let text = host.text()?;
    let rows = params::measurements(&text, &name).len();
    host.set_text(params::extract(&text, &name))?;
    Ok(rows)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::host::MemoryHost;

    #[test]
    fn occurrences_to_probability_replaces_document() {
        let mut host = MemoryHost::new(4.0, "x 1 1 \\\\\n2 3 \\\\ y");
        let rows = occurrences_to_probability(&mut host).unwrap();
        assert_eq!(rows, 2);
        assert_eq!(host.text, " 1\t0.250 \\\\\n 2\t0.750 \\\\\n");
    }

    #[test]
    fn measurements_from_params_replaces_document() {
        let mut host = MemoryHost::new(
            "wifispeed".to_string(),
            "\\@namedef{wifispeed@1}{54}\n\\@namedef{other@1}{1}\n",
        );
        let rows = measurements_from_params(&mut host).unwrap();
        assert_eq!(rows, 1);
        assert_eq!(host.text, "\\measurement{wifispeed}{\n 1\t54 \\\\\n}\n");
    }

    /// A host whose capabilities fail once they have been used a given number of times.
    struct FailingHost {
        calls_before_failure: usize,
        written: Option<String>,
    }

    impl FailingHost {
        fn call(&mut self) -> Result<(), &'static str> {
            if self.calls_before_failure == 0 {
                return Err("host failure");
            }
            self.calls_before_failure -= 1;
            Ok(())
        }
    }

    impl Host<f64> for FailingHost {
        type Error = &'static str;

        fn parameter(&mut self) -> Result<f64, Self::Error> {
            self.call()?;
            Ok(1.0)
        }

        fn text(&mut self) -> Result<String, Self::Error> {
            self.call()?;
            Ok("1 2 \\\\".into())
        }

        fn set_text(&mut self, text: String) -> Result<(), Self::Error> {
            self.call()?;
            self.written = Some(text);
            Ok(())
        }
    }

    #[test]
    fn host_failures_propagate() {
        for calls_before_failure in 0..3 {
            let mut host = FailingHost {
                calls_before_failure,
                written: None,
            };
            assert_eq!(occurrences_to_probability(&mut host), Err("host failure"));
            assert_eq!(host.written, None);
        }
        let mut host = FailingHost {
            calls_before_failure: 3,
            written: None,
        };
        assert_eq!(occurrences_to_probability(&mut host), Ok(1));
        assert_eq!(host.written, Some(" 1\t2.000 \\\\\n".to_string()));
    }
}
