#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![forbid(unsafe_code)]

//! A fluent builder for assembling URLs from path segments, query
//! key/value pairs and an optional fragment.
//!
//! [`UrlBuilder`] composes a URL incrementally: path segments may be
//! appended (conditionally, if desired), query parameters upserted or
//! removed, and a fragment set or cleared, all through a chained sequence
//! of calls. Serialization never mutates the builder, so a URL can be
//! rendered, mutated further and rendered again.
//!
//! The builder is a string-assembly convenience, not a URL parser: no
//! percent-encoding is applied to any component and callers are
//! responsible for supplying already-safe strings. The one place syntax
//! is checked is [`UrlBuilder::to_uri`], which hands the assembled string
//! to [`fluent_uri`] for strict RFC 3986 validation.
//!
//! # Examples
//!
//! ```
//! use fluent_url::UrlBuilder;
//!
//! let url = UrlBuilder::initialize(["https://example.com", "blog"])?
//!     .add_path_part("an-article")
//!     .upsert_query_param("page", "2")
//!     .set_fragment("comments")
//!     .to_string();
//!
//! assert_eq!(url, "https://example.com/blog/an-article?page=2#comments");
//! # Ok::<_, fluent_url::InvalidPartsError>(())
//! ```
//!
//! Segments are trimmed of surrounding whitespace and slashes on the way
//! in, so callers never have to track separators themselves:
//!
//! ```
//! use fluent_url::UrlBuilder;
//!
//! let a = UrlBuilder::initialize(["https://example.com"])?.add_path_part("blog");
//! let b = UrlBuilder::initialize(["https://example.com/"])?.add_path_part("/blog/");
//!
//! assert_eq!(a.to_string(), b.to_string());
//! # Ok::<_, fluent_url::InvalidPartsError>(())
//! ```
//!
//! Conditional composition:
//!
//! ```
//! use fluent_url::UrlBuilder;
//!
//! let per_page = Some(50);
//!
//! let url = UrlBuilder::initialize(["https://example.com/search"])?
//!     .upsert_query_param("q", "ferris")
//!     .upsert_query_param_if("per_page", "50", per_page.is_some())
//!     .to_string();
//!
//! assert_eq!(url, "https://example.com/search?q=ferris&per_page=50");
//! # Ok::<_, fluent_url::InvalidPartsError>(())
//! ```
//!
//! # Feature flags
//!
//! - `serde`: Enables serialization of a [`UrlBuilder`] as its assembled
//!   URL string.

mod builder;
mod error;
mod fmt;

pub use builder::UrlBuilder;
pub use error::{InvalidPartsError, MalformedUriError};

#[doc(no_inline)]
pub use fluent_uri::Uri;
