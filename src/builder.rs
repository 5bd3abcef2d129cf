use crate::error::{InvalidPartsError, MalformedUriError};
use fluent_uri::Uri;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// A fluent URL builder.
///
/// A `UrlBuilder` is created once via [`initialize`] from one or more raw
/// URL parts and then threaded through a chain of mutating calls, each of
/// which consumes the builder and returns it back. The current state is
/// serialized on demand with [`Display`], or parsed into a structured
/// [`Uri`] with [`to_uri`].
///
/// Malformed inputs to the mutating operations (blank path parts, blank
/// query keys, blank fragments) degrade to silent no-ops rather than
/// errors, which keeps conditional chains flowing; the only fallible
/// operations are [`initialize`] and [`to_uri`].
///
/// [`initialize`]: Self::initialize
/// [`Display`]: core::fmt::Display
/// [`to_uri`]: Self::to_uri
///
/// # Examples
///
/// ```
/// use fluent_url::UrlBuilder;
///
/// let url = UrlBuilder::initialize(["https://example.com"])?
///     .add_path_part("blog")
///     .add_path_part_if("drafts", false)
///     .upsert_query_param("page", "2")
///     .to_string();
///
/// assert_eq!(url, "https://example.com/blog?page=2");
/// # Ok::<_, fluent_url::InvalidPartsError>(())
/// ```
#[must_use]
#[derive(Clone)]
pub struct UrlBuilder {
    pub(crate) segments: Vec<String>,
    pub(crate) params: Vec<(String, String)>,
    pub(crate) fragment: Option<String>,
}

/// Normalizes a raw path part: strips surrounding whitespace, then
/// surrounding `/` characters, then any whitespace the slash strip
/// exposed. May return an empty string. Interior slashes survive.
fn trim_part(part: &str) -> &str {
    part.trim().trim_matches('/').trim()
}

impl UrlBuilder {
    /// Creates a builder from one or more raw URL parts.
    ///
    /// Each part is normalized the same way [`add_path_part`] normalizes
    /// its input; parts that end up empty are discarded. The parts that
    /// remain become the initial path segments, in the order supplied.
    /// The first part is typically a scheme-and-host string.
    ///
    /// [`add_path_part`]: Self::add_path_part
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPartsError`] when `parts` is empty or every part
    /// normalizes to empty, i.e., when no usable segment survives.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_url::UrlBuilder;
    ///
    /// let builder = UrlBuilder::initialize(["https://example.com/", "/blog/"])?;
    /// assert_eq!(builder.to_string(), "https://example.com/blog");
    ///
    /// assert!(UrlBuilder::initialize(["", "  ", " / "]).is_err());
    /// # Ok::<_, fluent_url::InvalidPartsError>(())
    /// ```
    pub fn initialize<I, S>(parts: I) -> Result<UrlBuilder, InvalidPartsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments: Vec<String> = parts
            .into_iter()
            .filter_map(|part| {
                let part = trim_part(part.as_ref());
                (!part.is_empty()).then(|| part.to_owned())
            })
            .collect();

        if segments.is_empty() {
            return Err(InvalidPartsError(()));
        }
        Ok(UrlBuilder {
            segments,
            params: Vec::new(),
            fragment: None,
        })
    }

    /// Appends one path segment.
    ///
    /// The part is trimmed of surrounding whitespace and slashes; if
    /// nothing remains, the call is a no-op, not an error.
    pub fn add_path_part(mut self, part: impl AsRef<str>) -> UrlBuilder {
        let part = trim_part(part.as_ref());
        if !part.is_empty() {
            self.segments.push(part.to_owned());
        }
        self
    }

    /// Appends one path segment only when `add` is true.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_url::UrlBuilder;
    ///
    /// let part = "my-page";
    /// let url = UrlBuilder::initialize(["https://example.com"])?
    ///     .add_path_part_if(part, part.len() > 5)
    ///     .to_string();
    ///
    /// assert_eq!(url, "https://example.com/my-page");
    /// # Ok::<_, fluent_url::InvalidPartsError>(())
    /// ```
    pub fn add_path_part_if(self, part: impl AsRef<str>, add: bool) -> UrlBuilder {
        if add {
            self.add_path_part(part)
        } else {
            self
        }
    }

    /// Sets or clears the fragment.
    ///
    /// A fragment that is non-empty after whitespace trimming replaces
    /// any previously set one and is emitted verbatim after `#`. An empty
    /// or whitespace-only fragment *clears* the current one: the
    /// serialized URL then carries no `#` at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_url::UrlBuilder;
    ///
    /// let builder = UrlBuilder::initialize(["https://example.com"])?.set_fragment("frag");
    /// assert_eq!(builder.to_string(), "https://example.com#frag");
    ///
    /// let builder = builder.set_fragment("");
    /// assert_eq!(builder.to_string(), "https://example.com");
    /// # Ok::<_, fluent_url::InvalidPartsError>(())
    /// ```
    pub fn set_fragment(mut self, fragment: impl Into<String>) -> UrlBuilder {
        let fragment = fragment.into();
        self.fragment = if fragment.trim().is_empty() {
            None
        } else {
            Some(fragment)
        };
        self
    }

    /// Sets or clears the fragment only when `set` is true.
    pub fn set_fragment_if(self, fragment: impl Into<String>, set: bool) -> UrlBuilder {
        if set {
            self.set_fragment(fragment)
        } else {
            self
        }
    }

    /// Clears the fragment.
    pub fn remove_fragment(mut self) -> UrlBuilder {
        self.fragment = None;
        self
    }

    /// Inserts or overwrites one query parameter.
    ///
    /// Pairs serialize in insertion order and overwriting a key keeps its
    /// original position. A key that is empty after whitespace trimming
    /// makes the call a no-op. Keys and values are stored verbatim; an
    /// empty value serializes as `key=`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_url::UrlBuilder;
    ///
    /// let url = UrlBuilder::initialize(["https://example.com"])?
    ///     .upsert_query_param("lang", "it")
    ///     .upsert_query_param("page", "1")
    ///     .upsert_query_param("lang", "en")
    ///     .to_string();
    ///
    /// assert_eq!(url, "https://example.com?lang=en&page=1");
    /// # Ok::<_, fluent_url::InvalidPartsError>(())
    /// ```
    pub fn upsert_query_param(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> UrlBuilder {
        let key = key.into();
        if key.trim().is_empty() {
            return self;
        }
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.params.push((key, value)),
        }
        self
    }

    /// Inserts or overwrites one query parameter only when `upsert` is true.
    pub fn upsert_query_param_if(
        self,
        key: impl Into<String>,
        value: impl Into<String>,
        upsert: bool,
    ) -> UrlBuilder {
        if upsert {
            self.upsert_query_param(key, value)
        } else {
            self
        }
    }

    /// Removes one query parameter.
    ///
    /// The key is looked up verbatim. Removing an absent or
    /// whitespace-only key is a no-op, never an error.
    pub fn remove_query_param(mut self, key: impl AsRef<str>) -> UrlBuilder {
        let key = key.as_ref();
        if !key.trim().is_empty() {
            self.params.retain(|(k, _)| k != key);
        }
        self
    }

    /// Returns the path segments in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Returns the query parameters in insertion order.
    pub fn query_params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the fragment, if one is set.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Assembles the URL and parses it into a structured [`Uri`].
    ///
    /// The assembled string is handed to [`Uri::parse`] unchanged: this
    /// crate applies no percent-encoding or normalization of its own, so
    /// on success the URI's string representation equals
    /// [`to_string`](ToString::to_string) exactly.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedUriError`] when the assembled string is not a
    /// syntactically valid URI, e.g., when the first segment carries no
    /// scheme. The assembled string can be recovered from the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_url::UrlBuilder;
    ///
    /// let builder = UrlBuilder::initialize(["https://example.com"])?.add_path_part("blog");
    /// let uri = builder.to_uri()?;
    /// assert_eq!(uri.path().as_str(), "/blog");
    ///
    /// assert!(UrlBuilder::initialize(["example.com"])?.to_uri().is_err());
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_uri(&self) -> Result<Uri<String>, MalformedUriError> {
        Uri::parse(self.to_string()).map_err(MalformedUriError::new)
    }
}

#[cfg(feature = "serde")]
impl Serialize for UrlBuilder {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::trim_part;

    #[test]
    fn trims_whitespace_then_slashes_then_whitespace() {
        assert_eq!(trim_part(""), "");
        assert_eq!(trim_part("/"), "");
        assert_eq!(trim_part(" /  /"), "");
        assert_eq!(trim_part(" /hello/"), "hello");
        assert_eq!(trim_part(" hi/hello/"), "hi/hello");
        assert_eq!(trim_part("///blog///"), "blog");
        assert_eq!(trim_part("  / a / b / "), "a / b");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::UrlBuilder;

    #[test]
    fn serializes_as_the_assembled_url() {
        let builder = UrlBuilder::initialize(["https://example.com"])
            .unwrap()
            .add_path_part("blog")
            .upsert_query_param("page", "2");

        assert_eq!(
            serde_json::to_string(&builder).unwrap(),
            "\"https://example.com/blog?page=2\""
        );
    }
}
