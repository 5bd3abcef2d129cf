use crate::{InvalidPartsError, MalformedUriError, UrlBuilder};
use core::fmt::{self, Write};

impl fmt::Display for UrlBuilder {
    /// Assembles the URL from the current state.
    ///
    /// Segments are joined with `/`; the query parameters follow as
    /// `?key=value` pairs joined with `&` in insertion order; the
    /// fragment, if any, follows verbatim after `#`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut segments = self.segments.iter();
        if let Some(first) = segments.next() {
            f.write_str(first)?;
        }
        for segment in segments {
            write!(f, "/{segment}")?;
        }
        for (i, (key, value)) in self.params.iter().enumerate() {
            f.write_char(if i == 0 { '?' } else { '&' })?;
            write!(f, "{key}={value}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for UrlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlBuilder")
            .field("segments", &self.segments)
            .field("params", &self.params)
            .field("fragment", &self.fragment)
            .finish()
    }
}

impl fmt::Display for InvalidPartsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no usable segment in the initial URL parts")
    }
}

impl fmt::Display for MalformedUriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "assembled URL is not a valid URI: {}", self.source)
    }
}
