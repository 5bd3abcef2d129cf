use fluent_uri::error::ParseError;

/// An error occurred when initializing a [`UrlBuilder`] without a usable
/// part.
///
/// Returned by [`UrlBuilder::initialize`] when the input sequence is
/// empty or every part normalizes to empty.
///
/// [`UrlBuilder`]: crate::UrlBuilder
/// [`UrlBuilder::initialize`]: crate::UrlBuilder::initialize
#[derive(Clone, Copy, Debug)]
pub struct InvalidPartsError(pub(crate) ());

impl std::error::Error for InvalidPartsError {}

/// An error occurred when converting an assembled URL into a structured
/// URI.
///
/// Returned by [`UrlBuilder::to_uri`]. The assembled string that failed
/// to parse is carried along and can be recovered with [`into_input`].
///
/// [`UrlBuilder::to_uri`]: crate::UrlBuilder::to_uri
/// [`into_input`]: Self::into_input
#[derive(Clone, Debug)]
pub struct MalformedUriError {
    pub(crate) input: String,
    pub(crate) source: ParseError<String>,
}

impl MalformedUriError {
    pub(crate) fn new(e: ParseError<String>) -> MalformedUriError {
        MalformedUriError {
            input: e.clone().into_input(),
            source: e,
        }
    }

    /// Returns the assembled URL string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Consumes the error and yields the assembled URL string that failed
    /// to parse.
    #[must_use]
    pub fn into_input(self) -> String {
        self.input
    }

    /// Returns the underlying parse error.
    pub fn parse_error(&self) -> ParseError {
        self.source.strip_input()
    }
}

impl std::error::Error for MalformedUriError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
